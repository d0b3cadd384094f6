//! ID types for DraftKings entities.

use crate::error::{DkError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for DraftKings contest IDs.
///
/// Ensures contest IDs are handled consistently throughout the application
/// and provides type safety to prevent mixing them up with draft group or
/// player IDs.
///
/// # Examples
///
/// ```rust
/// use dk_scrape::ContestId;
///
/// let contest_id = ContestId::new(170212345);
/// assert_eq!(contest_id.as_u64(), 170212345);
/// assert_eq!(contest_id.to_string(), "170212345");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContestId(pub u64);

impl ContestId {
    /// Create a new ContestId from a u64 value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying u64 value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContestId {
    type Err = DkError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for draft group IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftGroupId(pub u64);

impl DraftGroupId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DraftGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DraftGroupId {
    type Err = DkError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for game type IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameTypeId(pub u32);

impl GameTypeId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for GameTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameTypeId {
    type Err = DkError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for draftable player IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = DkError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for contest entry IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl EntryId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = DkError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contest_id_roundtrip() {
        let id: ContestId = "170212345".parse().unwrap();
        assert_eq!(id, ContestId::new(170212345));
        assert_eq!(id.to_string(), "170212345");
    }

    #[test]
    fn test_id_parse_trims_whitespace() {
        // Comma-separated CLI lists arrive with stray spaces
        let id: DraftGroupId = " 98765 ".parse().unwrap();
        assert_eq!(id.as_u64(), 98765);
    }

    #[test]
    fn test_id_parse_rejects_garbage() {
        assert!("abc".parse::<ContestId>().is_err());
        assert!("12.5".parse::<GameTypeId>().is_err());
        assert!("".parse::<EntryId>().is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let id = DraftGroupId::new(111);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "111");
        let back: DraftGroupId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
