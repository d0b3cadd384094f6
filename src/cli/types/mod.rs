//! Type-safe wrappers for DraftKings identifiers and CLI values.

pub mod ids;
pub mod sport;

pub use ids::{ContestId, DraftGroupId, EntryId, GameTypeId, PlayerId};
pub use sport::Sport;
