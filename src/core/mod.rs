//! Core utilities for the DraftKings scraper CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `http`: retry-aware HTTP client
//! - `config`: environment-driven credentials and directory layout
//! - `fs`: download-directory file helpers

pub mod config;
pub mod fs;
pub mod http;

// Re-export commonly used items for convenience
pub use config::{webdriver_url, Credentials, DownloadDirs};
pub use http::{RetryClient, RetryPolicy};
