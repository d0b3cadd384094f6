//! Validated player salary records from draftable CSV exports.

use serde::{Deserialize, Serialize};

use crate::cli::types::{DraftGroupId, PlayerId};

/// One draftable player in a draft group.
///
/// Keyed by (draft_group_id, player_id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSalary {
    pub draft_group_id: DraftGroupId,
    pub player_id: PlayerId,
    pub name: String,
    /// The CSV's combined `Name + ID` column.
    pub name_and_id: String,
    pub position: String,
    pub roster_position: String,
    pub salary: f64,
    pub game_info: String,
    pub team_abbrev: String,
    pub avg_points_per_game: f64,
}
