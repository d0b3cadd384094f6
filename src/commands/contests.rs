//! Contest scraping commands.

use crate::cli::types::{ContestId, DraftGroupId, Sport};
use crate::core::http::RetryClient;
use crate::dk::LobbySnapshot;
use crate::error::Result;
use crate::scrape::contests::{fetch_contest_statuses, parse_contests, ContestFilter};

use super::{print_json, report_skipped};

/// Scrape the lobby's contests for one sport.
pub async fn handle_contests(
    sport: Sport,
    draft_group_ids: Option<Vec<DraftGroupId>>,
    as_json: bool,
    verbose: bool,
) -> Result<()> {
    let client = RetryClient::new()?;

    if verbose {
        println!("Fetching lobby data for {sport}...");
    }
    let lobby = LobbySnapshot::fetch(&client, &sport).await?;

    if lobby.is_empty() {
        println!("No contests found in lobby; {sport} may be in offseason.");
        return Ok(());
    }

    let outcome = parse_contests(&lobby, &ContestFilter { draft_group_ids });
    report_skipped("contests", &outcome.failures, verbose);

    if as_json {
        print_json(&outcome.records)?;
    } else {
        println!("Scraped {} contests for {}", outcome.records.len(), sport);
    }

    Ok(())
}

/// Refresh status (final/cancelled/start time) for specific contests.
pub async fn handle_contest_status(
    contest_ids: Vec<ContestId>,
    as_json: bool,
    verbose: bool,
) -> Result<()> {
    if contest_ids.is_empty() {
        println!("No contest IDs provided.");
        return Ok(());
    }

    let client = RetryClient::new()?;

    if verbose {
        println!("Fetching status for {} contests...", contest_ids.len());
    }
    let outcome = fetch_contest_statuses(&client, &contest_ids).await;
    report_skipped("contests", &outcome.failures, verbose);

    if as_json {
        print_json(&outcome.records)?;
    } else {
        println!("Fetched status for {} contests", outcome.records.len());
        for status in &outcome.records {
            println!(
                "  {}: final={} cancelled={}",
                status.contest_id, status.is_final, status.is_cancelled
            );
        }
    }

    Ok(())
}
