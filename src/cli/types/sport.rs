//! Sport code type used to scope lobby requests.

use crate::error::{DkError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A DraftKings sport code such as `NFL`, `MLB`, or `MMA`.
///
/// Codes are normalized to uppercase so CLI input, lobby URLs, and record
/// fields always agree. The site adds sports over time, so any short
/// alphanumeric code is accepted rather than a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sport(String);

impl Sport {
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.is_empty()
            || trimmed.len() > 8
            || !trimmed.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(DkError::InvalidSport(code));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Sport {
    type Err = DkError;

    fn from_str(s: &str) -> Result<Self> {
        Sport::new(s)
    }
}
