//! Player salary scraping command.

use crate::cli::types::DraftGroupId;
use crate::core::http::RetryClient;
use crate::error::Result;
use crate::scrape::player_salaries::scrape_player_salaries;

use super::{print_json, report_skipped};

pub async fn handle_player_salaries(
    draft_group_ids: Vec<DraftGroupId>,
    as_json: bool,
    verbose: bool,
) -> Result<()> {
    if draft_group_ids.is_empty() {
        println!("No draft group IDs provided.");
        return Ok(());
    }

    let client = RetryClient::new()?;

    if verbose {
        println!(
            "Scraping player salaries for {} draft groups...",
            draft_group_ids.len()
        );
    }
    let outcome = scrape_player_salaries(&client, &draft_group_ids).await;
    report_skipped("players", &outcome.failures, verbose);

    if as_json {
        print_json(&outcome.records)?;
    } else {
        println!("Scraped {} player salaries", outcome.records.len());
    }

    Ok(())
}
