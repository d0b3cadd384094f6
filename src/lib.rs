//! DraftKings Scraper CLI Library
//!
//! A Rust library for fetching and validating DraftKings contest data,
//! turning the site's public and authenticated endpoints into normalized
//! typed records.
//!
//! ## Features
//!
//! - **Lobby Scraping**: Contests, draft groups, game types, and game sets
//!   from one shared lobby snapshot per run
//! - **Pipeline Orchestration**: Dependent stages share ID lists and a
//!   single lobby fetch; per-stage skip flags
//! - **Retry-aware HTTP**: Bounded retries with exponential backoff on
//!   transient failures
//! - **Payouts & Salaries**: Per-contest payout tables and per-draft-group
//!   player salary CSVs
//! - **Authenticated Exports**: Browser-driven standings and entry history
//!   CSV downloads
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dk_scrape::core::http::RetryClient;
//! use dk_scrape::scrape::pipeline::{self, PipelineConfig};
//!
//! # async fn example() -> dk_scrape::Result<()> {
//! let client = RetryClient::new()?;
//! let config = PipelineConfig::new("NFL".parse()?);
//!
//! let outcome = pipeline::run(&client, &config).await?;
//! println!("{}", outcome.summary());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! The authenticated flows read credentials and directories from the
//! environment:
//! ```bash
//! export DK_EMAIL=you@example.com
//! export DK_PASSWORD=...
//! export DOWNLOAD_DIRECTORY=/home/you/Downloads
//! export CSV_DIRECTORY=/home/you/dk-csv
//! ```

pub mod browser;
pub mod cli;
pub mod commands;
pub mod core;
pub mod dk;
pub mod error;
pub mod models;
pub mod scrape;

// Re-export commonly used types
pub use cli::types::{ContestId, DraftGroupId, EntryId, GameTypeId, PlayerId, Sport};
pub use dk::LobbySnapshot;
pub use error::{DkError, Result};

pub const EMAIL_ENV_VAR: &str = "DK_EMAIL";
pub const PASSWORD_ENV_VAR: &str = "DK_PASSWORD";
pub const USERNAME_ENV_VAR: &str = "DK_USERNAME";
pub const DOWNLOAD_DIR_ENV_VAR: &str = "DOWNLOAD_DIRECTORY";
pub const CSV_DIR_ENV_VAR: &str = "CSV_DIRECTORY";
pub const WEBDRIVER_ENV_VAR: &str = "DK_WEBDRIVER_URL";
