//! DraftKings site layer: endpoint URLs, raw wire types, and the shared
//! lobby snapshot.

pub mod lobby;
pub mod types;
pub mod urls;

pub use lobby::LobbySnapshot;
