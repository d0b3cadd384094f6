//! Authenticated browser session for CSV downloads.
//!
//! DraftKings only exposes standings and history exports behind a logged-in
//! session, so these flows drive a real browser through WebDriver
//! (`fantoccini`). The session is a small state machine:
//!
//! ```text
//! NotLoggedIn -> LoggedIn -> DownloadTriggered -> FileMoved -> Parsed
//! ```
//!
//! Transitions are one-way; an error at any point is terminal for the run
//! and the login step is never retried automatically.

use std::path::{Path, PathBuf};
use std::time::Duration;

use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;

use crate::core::config::Credentials;
use crate::core::fs::wait_for_download;
use crate::dk::urls::LOGIN_URL;
use crate::error::{DkError, Result};

/// The login page renders slowly behind a JS bundle.
const PAGE_SETTLE: Duration = Duration::from_secs(10);
const FORM_SETTLE: Duration = Duration::from_secs(2);
const POST_LOGIN_SETTLE: Duration = Duration::from_secs(10);

const DOWNLOAD_POLL_INTERVAL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadState {
    NotLoggedIn,
    LoggedIn,
    DownloadTriggered,
    FileMoved,
    Parsed,
}

impl DownloadState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadState::NotLoggedIn => "NotLoggedIn",
            DownloadState::LoggedIn => "LoggedIn",
            DownloadState::DownloadTriggered => "DownloadTriggered",
            DownloadState::FileMoved => "FileMoved",
            DownloadState::Parsed => "Parsed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// WebDriver endpoint (chromedriver, selenium, ...).
    pub webdriver_url: String,
    /// Where the browser drops completed downloads.
    pub download_dir: PathBuf,
    pub headless: bool,
}

impl BrowserConfig {
    pub fn new(webdriver_url: impl Into<String>, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            webdriver_url: webdriver_url.into(),
            download_dir: download_dir.into(),
            headless: true,
        }
    }

    fn capabilities(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut args = vec!["--disable-gpu".to_string(), "--no-sandbox".to_string()];
        if self.headless {
            args.push("--headless=new".to_string());
        }

        let options = json!({
            "args": args,
            "prefs": {
                "download.default_directory": self.download_dir.display().to_string(),
                "download.prompt_for_download": false,
                "safebrowsing.enabled": true,
            }
        });

        let mut capabilities = serde_json::Map::new();
        capabilities.insert("goog:chromeOptions".to_string(), options);
        capabilities
    }
}

/// Reject out-of-order state machine operations.
fn ensure_state(
    current: DownloadState,
    expected: &'static [DownloadState],
    operation: &'static str,
    expected_label: &'static str,
) -> Result<()> {
    if expected.contains(&current) {
        Ok(())
    } else {
        Err(DkError::DownloadState {
            state: current.as_str(),
            operation,
            expected: expected_label,
        })
    }
}

/// A logged-in browser session that downloads CSV exports.
pub struct DownloadSession {
    client: Client,
    state: DownloadState,
    download_dir: PathBuf,
}

impl DownloadSession {
    /// Connect to the WebDriver endpoint. The session starts `NotLoggedIn`.
    pub async fn connect(config: &BrowserConfig) -> Result<Self> {
        let client = ClientBuilder::rustls()
            .map_err(|e| DkError::Tls(e.to_string()))?
            .capabilities(config.capabilities())
            .connect(&config.webdriver_url)
            .await?;

        Ok(Self {
            client,
            state: DownloadState::NotLoggedIn,
            download_dir: config.download_dir.clone(),
        })
    }

    pub fn state(&self) -> DownloadState {
        self.state
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    fn expect_state(
        &self,
        expected: &'static [DownloadState],
        operation: &'static str,
        expected_label: &'static str,
    ) -> Result<()> {
        ensure_state(self.state, expected, operation, expected_label)
    }

    /// Submit credentials on the login page.
    ///
    /// A second submit click is tolerated because some account states
    /// re-render the form once before accepting it. Any failure here is
    /// terminal; the caller gets the error, not a retry.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<()> {
        self.expect_state(&[DownloadState::NotLoggedIn], "login", "NotLoggedIn")?;

        self.client.goto(LOGIN_URL).await?;
        tokio::time::sleep(PAGE_SETTLE).await;

        self.client
            .find(Locator::Id("login-username-input"))
            .await?
            .send_keys(&credentials.email)
            .await?;
        self.client
            .find(Locator::Id("login-password-input"))
            .await?
            .send_keys(&credentials.password)
            .await?;
        tokio::time::sleep(FORM_SETTLE).await;

        self.client
            .find(Locator::Id("login-submit"))
            .await?
            .click()
            .await?;
        tokio::time::sleep(FORM_SETTLE).await;

        if let Ok(button) = self.client.find(Locator::Id("login-submit")).await {
            let _ = button.click().await;
        }
        tokio::time::sleep(POST_LOGIN_SETTLE).await;

        self.state = DownloadState::LoggedIn;
        Ok(())
    }

    /// Navigate to a CSV export URL; the browser saves it into the
    /// download directory.
    pub async fn trigger_download(&mut self, url: &str) -> Result<()> {
        self.expect_state(
            &[DownloadState::LoggedIn, DownloadState::DownloadTriggered],
            "trigger_download",
            "LoggedIn",
        )?;

        self.client.goto(url).await?;
        self.state = DownloadState::DownloadTriggered;
        Ok(())
    }

    /// Wait for a completed download whose name contains `fragment`.
    pub async fn wait_for_download(&self, fragment: &str, timeout: Duration) -> Result<String> {
        self.expect_state(
            &[DownloadState::DownloadTriggered],
            "wait_for_download",
            "DownloadTriggered",
        )?;
        wait_for_download(&self.download_dir, fragment, timeout, DOWNLOAD_POLL_INTERVAL).await
    }

    /// Record that downloaded files were moved out of the download
    /// directory. Allowed straight from `LoggedIn` for runs where every
    /// file was already staged and nothing needed downloading.
    pub fn complete_move(&mut self) -> Result<()> {
        self.expect_state(
            &[DownloadState::LoggedIn, DownloadState::DownloadTriggered],
            "complete_move",
            "LoggedIn or DownloadTriggered",
        )?;
        self.state = DownloadState::FileMoved;
        Ok(())
    }

    /// Record that the moved files were parsed.
    pub fn complete_parse(&mut self) -> Result<()> {
        self.expect_state(&[DownloadState::FileMoved], "complete_parse", "FileMoved")?;
        self.state = DownloadState::Parsed;
        Ok(())
    }

    /// Close the browser session.
    pub async fn close(self) -> Result<()> {
        self.client.close().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_labels() {
        assert_eq!(DownloadState::NotLoggedIn.as_str(), "NotLoggedIn");
        assert_eq!(DownloadState::Parsed.as_str(), "Parsed");
    }

    #[test]
    fn test_out_of_order_operations_are_rejected() {
        // Downloads require a login first
        let err = ensure_state(
            DownloadState::NotLoggedIn,
            &[DownloadState::LoggedIn, DownloadState::DownloadTriggered],
            "trigger_download",
            "LoggedIn",
        )
        .unwrap_err();
        match err {
            DkError::DownloadState {
                state, operation, ..
            } => {
                assert_eq!(state, "NotLoggedIn");
                assert_eq!(operation, "trigger_download");
            }
            other => panic!("unexpected error: {other}"),
        }

        // A second login is not a valid transition
        assert!(ensure_state(
            DownloadState::LoggedIn,
            &[DownloadState::NotLoggedIn],
            "login",
            "NotLoggedIn",
        )
        .is_err());

        // Parsing before the file move is rejected
        assert!(ensure_state(
            DownloadState::DownloadTriggered,
            &[DownloadState::FileMoved],
            "complete_parse",
            "FileMoved",
        )
        .is_err());

        // The happy path in order
        assert!(ensure_state(
            DownloadState::NotLoggedIn,
            &[DownloadState::NotLoggedIn],
            "login",
            "NotLoggedIn",
        )
        .is_ok());
        assert!(ensure_state(
            DownloadState::LoggedIn,
            &[DownloadState::LoggedIn, DownloadState::DownloadTriggered],
            "trigger_download",
            "LoggedIn",
        )
        .is_ok());
    }

    #[test]
    fn test_capabilities_carry_download_dir() {
        let config = BrowserConfig::new("http://localhost:9515", "/tmp/downloads");
        let capabilities = config.capabilities();
        let options = &capabilities["goog:chromeOptions"];

        assert_eq!(
            options["prefs"]["download.default_directory"],
            "/tmp/downloads"
        );
        let args = options["args"].as_array().unwrap();
        assert!(args.iter().any(|a| a == "--headless=new"));
    }

    #[test]
    fn test_headed_mode_drops_headless_arg() {
        let mut config = BrowserConfig::new("http://localhost:9515", "/tmp/downloads");
        config.headless = false;
        let capabilities = config.capabilities();
        let args = capabilities["goog:chromeOptions"]["args"].as_array().unwrap();
        assert!(!args.iter().any(|a| a == "--headless=new"));
    }
}
