//! Payout scraping command.

use crate::cli::types::ContestId;
use crate::core::http::RetryClient;
use crate::error::Result;
use crate::scrape::payouts::scrape_payouts;

use super::{print_json, report_skipped};

pub async fn handle_payouts(contest_ids: Vec<ContestId>, as_json: bool, verbose: bool) -> Result<()> {
    if contest_ids.is_empty() {
        println!("No contest IDs provided.");
        return Ok(());
    }

    let client = RetryClient::new()?;

    if verbose {
        println!("Scraping payouts for {} contests...", contest_ids.len());
    }
    let outcome = scrape_payouts(&client, &contest_ids).await;
    report_skipped("payouts", &outcome.failures, verbose);

    if as_json {
        print_json(&outcome.records)?;
    } else {
        println!("Scraped {} payouts", outcome.records.len());
    }

    Ok(())
}
