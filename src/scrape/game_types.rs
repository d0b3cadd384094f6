//! Game type scraping from the lobby snapshot.

use crate::dk::LobbySnapshot;
use crate::models::GameType;

use super::{ParseOutcome, ValidationFailure};

pub fn parse_game_types(lobby: &LobbySnapshot) -> ParseOutcome<GameType> {
    let mut outcome = ParseOutcome::new();

    for raw in lobby.game_types() {
        match GameType::from_raw(raw) {
            Ok(game_type) => outcome.records.push(game_type),
            Err(err) => outcome
                .failures
                .push(ValidationFailure::from_error(raw.game_type_id, &err)),
        }
    }

    outcome
}
