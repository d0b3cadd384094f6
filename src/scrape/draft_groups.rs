//! Draft group scraping from the lobby snapshot.

use crate::cli::types::{DraftGroupId, GameTypeId};
use crate::dk::LobbySnapshot;
use crate::models::DraftGroup;

use super::{ParseOutcome, ValidationFailure};

#[derive(Debug, Clone, Default)]
pub struct DraftGroupFilter {
    pub game_type_ids: Option<Vec<GameTypeId>>,
    /// Slate labels to keep, matched against the trimmed start time suffix
    /// (e.g. `(Early)`, `(Night)`).
    pub slate_types: Option<Vec<String>>,
}

/// Parse and filter the snapshot's draft groups.
pub fn parse_draft_groups(
    lobby: &LobbySnapshot,
    filter: &DraftGroupFilter,
) -> ParseOutcome<DraftGroup> {
    let mut outcome = ParseOutcome::new();

    for raw in lobby.draft_groups() {
        if let Some(ids) = &filter.game_type_ids {
            if !ids.contains(&GameTypeId::new(raw.game_type_id)) {
                continue;
            }
        }

        if let Some(slates) = &filter.slate_types {
            let suffix = raw
                .contest_start_time_suffix
                .as_deref()
                .map(str::trim)
                .unwrap_or("");
            if !slates.iter().any(|s| s == suffix) {
                continue;
            }
        }

        match DraftGroup::from_raw(raw) {
            Ok(group) => outcome.records.push(group),
            Err(err) => outcome
                .failures
                .push(ValidationFailure::from_error(raw.draft_group_id, &err)),
        }
    }

    outcome
}

/// IDs of parsed draft groups, in lobby order.
pub fn draft_group_ids(groups: &[DraftGroup]) -> Vec<DraftGroupId> {
    groups.iter().map(|g| g.draft_group_id).collect()
}
