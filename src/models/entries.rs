//! Validated records parsed from authenticated CSV exports.

use serde::{Deserialize, Serialize};

use crate::cli::types::{ContestId, EntryId};

/// One lineup entry from a contest standings export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestEntry {
    pub contest_id: ContestId,
    pub entry_id: EntryId,
    /// Account name, with any `(k/n)` multi-entry suffix stripped.
    pub entry_name: String,
    /// Which of the user's entries this is (1-based).
    pub entry_number: u32,
    /// How many entries the user submitted in total.
    pub total_entries: u32,
    pub lineup_rank: u32,
    pub points: f64,
    pub lineup: Option<String>,
}

/// Aggregate ownership row from a contest standings export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerResult {
    pub contest_id: ContestId,
    pub player: String,
    pub roster_position: String,
    pub percent_drafted: f64,
    pub fpts: f64,
}

/// One row of the account-level contest entry history export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryHistoryRecord {
    pub entry_id: EntryId,
    pub contest_id: ContestId,
    pub sport: String,
    pub game_type: String,
    pub entry: String,
    /// Head-to-head opponent, when one can be derived from the entry text.
    pub opponent: Option<String>,
    pub contest_date_est: String,
    pub lineup_rank: u32,
    pub points: f64,
    pub winnings_non_ticket: f64,
    pub winnings_ticket: f64,
    pub contest_entries: u32,
    pub entry_fee: f64,
    pub prize_pool: f64,
    pub places_paid: u32,
}
