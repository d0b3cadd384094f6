//! Per-entity scrapers and the pipeline that sequences them.
//!
//! Lobby-derived scrapers (contests, draft groups, game types, game sets)
//! are pure functions over a [`crate::dk::LobbySnapshot`]. The rest fetch
//! per-ID resources (payouts, player salaries, contest status) or drive the
//! authenticated browser download flow (entries, entry history).

pub mod contests;
pub mod draft_groups;
pub mod entries;
pub mod entry_history;
pub mod game_sets;
pub mod game_types;
pub mod payouts;
pub mod pipeline;
pub mod player_salaries;
pub mod sports;

use serde::Serialize;

use crate::error::DkError;

/// One record dropped during parsing/validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationFailure {
    /// Whatever identifies the dropped record (contest id, row number, ...).
    pub id: String,
    pub message: String,
}

impl ValidationFailure {
    pub fn new(id: impl ToString, message: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            message: message.into(),
        }
    }

    pub fn from_error(id: impl ToString, err: &DkError) -> Self {
        Self::new(id, err.to_string())
    }
}

/// Valid records plus the failures that were dropped along the way.
///
/// Scrapers never abort a whole run for one bad record; they drop it, keep
/// the reason, and let the caller decide how loudly to report.
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutcome<T> {
    pub records: Vec<T>,
    pub failures: Vec<ValidationFailure>,
}

impl<T> ParseOutcome<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn skipped(&self) -> usize {
        self.failures.len()
    }
}

impl<T> Default for ParseOutcome<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether an error is a plain 404 (expired contest or draft group).
pub(crate) fn is_not_found(err: &DkError) -> bool {
    match err {
        DkError::Http(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
        _ => false,
    }
}
