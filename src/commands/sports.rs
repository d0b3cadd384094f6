//! Sports catalog command.

use crate::core::http::RetryClient;
use crate::error::Result;
use crate::scrape::sports::scrape_sports;

use super::{print_json, report_skipped};

pub async fn handle_sports(as_json: bool, verbose: bool) -> Result<()> {
    let client = RetryClient::new()?;

    let outcome = scrape_sports(&client).await?;
    report_skipped("sports", &outcome.failures, verbose);

    if as_json {
        print_json(&outcome.records)?;
    } else {
        println!("Scraped {} sports", outcome.records.len());
        for sport in &outcome.records {
            let name = sport
                .region_abbreviated_sport_name
                .as_deref()
                .or(sport.full_name.as_deref())
                .unwrap_or("?");
            println!("  {}: {}", sport.sport_id, name);
        }
    }

    Ok(())
}
