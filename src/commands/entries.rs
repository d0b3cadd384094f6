//! Contest entries command: authenticated standings downloads.

use std::collections::BTreeMap;

use crate::browser::{BrowserConfig, DownloadSession};
use crate::cli::types::ContestId;
use crate::core::config::{webdriver_url, Credentials, DownloadDirs};
use crate::error::Result;
use crate::scrape::entries::{self, EntriesOutcome};

use super::print_json;

pub struct EntriesParams {
    pub contest_ids: Vec<ContestId>,
    /// Parse files already staged instead of driving the browser.
    pub reuse_downloads: bool,
    pub as_json: bool,
    pub verbose: bool,
}

pub async fn handle_entries(params: EntriesParams) -> Result<()> {
    let dirs = DownloadDirs::from_env()?;
    dirs.validate()?;

    let outcome = if params.reuse_downloads {
        entries::process_staged(&dirs, params.verbose)?
    } else {
        if params.contest_ids.is_empty() {
            println!("No contests provided; ending run.");
            return Ok(());
        }

        let credentials = Credentials::from_env()?;
        let config = BrowserConfig::new(webdriver_url(), dirs.browser.clone());
        let mut session = DownloadSession::connect(&config).await?;

        let result = match session.login(&credentials).await {
            Ok(()) => {
                entries::scrape_entries(&mut session, &dirs, &params.contest_ids, params.verbose)
                    .await
            }
            Err(err) => Err(err),
        };
        let close_result = session.close().await;
        let outcome = result?;
        close_result?;
        outcome
    };

    if params.as_json {
        return print_json(&outcome);
    }

    print_summary(&outcome);
    Ok(())
}

fn print_summary(outcome: &EntriesOutcome) {
    if !outcome.successful.is_empty() {
        println!("✓ Successfully processed {} contests", outcome.successful.len());
    }

    let entries: usize = outcome.contests.values().map(|c| c.entries.len()).sum();
    let results: usize = outcome
        .contests
        .values()
        .map(|c| c.player_results.len())
        .sum();
    println!("Parsed {entries} entries and {results} player results");

    if !outcome.failed.is_empty() {
        println!("⚠ {} contests had failures", outcome.failed.len());

        let mut reasons: BTreeMap<&str, usize> = BTreeMap::new();
        for failed in &outcome.failed {
            *reasons.entry(failed.reason.as_str()).or_default() += 1;
        }
        for (reason, count) in reasons {
            println!("  {reason}: {count}");
        }
    }
}
