//! Game set scraping from the lobby snapshot.

use crate::dk::LobbySnapshot;
use crate::models::GameSet;

use super::{ParseOutcome, ValidationFailure};

/// Parse the snapshot's game sets, optionally keeping only the given tags
/// (e.g. `Featured`). Untagged sets are dropped when a tag filter is active.
pub fn parse_game_sets(lobby: &LobbySnapshot, tags: Option<&[String]>) -> ParseOutcome<GameSet> {
    let mut outcome = ParseOutcome::new();

    for raw in lobby.game_sets() {
        if let Some(tags) = tags {
            let tag = raw.tag.as_deref().unwrap_or("");
            if !tags.iter().any(|t| t == tag) {
                continue;
            }
        }

        match GameSet::from_raw(raw) {
            Ok(game_set) => outcome.records.push(game_set),
            Err(err) => outcome
                .failures
                .push(ValidationFailure::from_error(&raw.game_set_key, &err)),
        }
    }

    outcome
}

/// Keys of parsed game sets, in lobby order.
pub fn game_set_keys(game_sets: &[GameSet]) -> Vec<String> {
    game_sets.iter().map(|g| g.game_set_key.clone()).collect()
}
