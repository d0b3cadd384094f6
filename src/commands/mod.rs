//! Command implementations for the DraftKings scraper CLI

pub mod contests;
pub mod draft_groups;
pub mod entries;
pub mod entry_history;
pub mod game_sets;
pub mod game_types;
pub mod payouts;
pub mod player_salaries;
pub mod run;
pub mod sports;

use serde::Serialize;

use crate::error::Result;
use crate::scrape::ValidationFailure;

/// Dump any serializable value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Report dropped records: a one-line count, plus per-record reasons when
/// verbose.
pub(crate) fn report_skipped(entity: &str, failures: &[ValidationFailure], verbose: bool) {
    if failures.is_empty() {
        return;
    }

    println!(
        "⚠ Skipped {} {} due to validation errors",
        failures.len(),
        entity
    );
    if verbose {
        for failure in failures {
            println!("  {}: {}", failure.id, failure.message);
        }
    }
}
