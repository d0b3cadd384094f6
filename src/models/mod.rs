//! Validated records returned by the scrapers.
//!
//! Raw wire types live in [`crate::dk::types`]; everything here has passed
//! an explicit fallible constructor or row parser and is safe to hand
//! downstream.

pub mod entries;
pub mod lobby;
pub mod payout;
pub mod salary;
pub mod sport;

pub use entries::{ContestEntry, EntryHistoryRecord, PlayerResult};
pub use lobby::{
    Competition, Contest, ContestStatus, DraftGroup, GameSet, GameStyle, GameType,
};
pub use payout::{Payout, PayoutTier};
pub use salary::PlayerSalary;
pub use sport::SportInfo;
