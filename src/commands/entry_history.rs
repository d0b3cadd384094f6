//! Contest entry history command: authenticated account-level download.

use std::env;
use std::time::Duration;

use crate::browser::{BrowserConfig, DownloadSession};
use crate::core::config::{webdriver_url, Credentials, DownloadDirs};
use crate::error::Result;
use crate::scrape::entry_history::{parse_history_csv, scrape_entry_history, HISTORY_FILE_NAME};
use crate::USERNAME_ENV_VAR;

use super::{print_json, report_skipped};

pub struct EntryHistoryParams {
    pub wait_secs: u64,
    /// Parse the existing CSV instead of downloading a fresh one.
    pub skip_download: bool,
    pub as_json: bool,
    pub verbose: bool,
}

pub async fn handle_entry_history(params: EntryHistoryParams) -> Result<()> {
    let dirs = DownloadDirs::from_env()?;
    dirs.validate_base()?;

    let username = env::var(USERNAME_ENV_VAR).ok().filter(|s| !s.is_empty());

    let outcome = if params.skip_download {
        parse_history_csv(&dirs.root.join(HISTORY_FILE_NAME), username.as_deref())?
    } else {
        let credentials = Credentials::from_env()?;
        let config = BrowserConfig::new(webdriver_url(), dirs.browser.clone());
        let mut session = DownloadSession::connect(&config).await?;

        if params.verbose {
            println!(
                "Downloading contest history (waiting {}s for the export)...",
                params.wait_secs
            );
        }

        let result = match session.login(&credentials).await {
            Ok(()) => {
                scrape_entry_history(
                    &mut session,
                    &dirs,
                    Duration::from_secs(params.wait_secs),
                    username.as_deref(),
                )
                .await
            }
            Err(err) => Err(err),
        };
        let close_result = session.close().await;
        let outcome = result?;
        close_result?;
        outcome
    };

    report_skipped("entries", &outcome.failures, params.verbose);

    if params.as_json {
        print_json(&outcome.records)?;
    } else {
        println!("Parsed {} contest history entries", outcome.records.len());
    }

    Ok(())
}
