//! Error types for the DraftKings scraper CLI

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DkError>;

#[derive(Error, Debug)]
pub enum DkError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{url} still failing with status {status} after {attempts} attempts")]
    RetriesExhausted {
        url: String,
        status: reqwest::StatusCode,
        attempts: u32,
    },

    #[error("browser session could not be started: {0}")]
    Session(#[from] fantoccini::error::NewSessionError),

    #[error("TLS setup for browser session failed: {0}")]
    Tls(String),

    #[error("browser automation failed: {0}")]
    Browser(#[from] fantoccini::error::CmdError),

    #[error("download session is {state} but {operation} requires {expected}")]
    DownloadState {
        state: &'static str,
        operation: &'static str,
        expected: &'static str,
    },

    #[error("no file matching {pattern:?} appeared in {} within {timeout:?}", dir.display())]
    DownloadTimeout {
        pattern: String,
        dir: PathBuf,
        timeout: Duration,
    },

    #[error("{env_var} environment variable not set")]
    MissingEnvVar { env_var: &'static str },

    #[error("required directories do not exist: {}", missing.join(", "))]
    MissingDirectories { missing: Vec<String> },

    #[error("invalid sport code: {0:?}")]
    InvalidSport(String),

    #[error("failed to parse ID: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("validation failed for {entity} {id}: {message}")]
    Validation {
        entity: &'static str,
        id: String,
        message: String,
    },

    #[error("{stage} produced no records but a later stage depends on it")]
    EmptyDependency { stage: String },
}

impl DkError {
    /// Validation failure for one record, keyed by whatever identifies it.
    pub fn validation(entity: &'static str, id: impl ToString, message: impl Into<String>) -> Self {
        DkError::Validation {
            entity,
            id: id.to_string(),
            message: message.into(),
        }
    }
}
