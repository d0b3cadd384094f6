//! The shared lobby snapshot.
//!
//! The lobby endpoint returns everything the per-entity scrapers need for
//! one sport (contests, draft groups, game types, game sets) in a single
//! response. The orchestrator fetches it once per run and hands the
//! immutable snapshot to each stage by reference, so a full pipeline run
//! costs exactly one lobby request.

use crate::cli::types::Sport;
use crate::core::http::RetryClient;
use crate::dk::types::{RawContest, RawDraftGroup, RawGameSet, RawGameType, RawLobby};
use crate::dk::urls::lobby_url;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct LobbySnapshot {
    sport: Sport,
    raw: RawLobby,
}

impl LobbySnapshot {
    /// Fetch the lobby for one sport.
    pub async fn fetch(client: &RetryClient, sport: &Sport) -> Result<Self> {
        let raw: RawLobby = client.get_json(&lobby_url(sport)).await?;
        Ok(Self {
            sport: sport.clone(),
            raw,
        })
    }

    /// Build a snapshot from an already-parsed payload (fixtures, tests).
    pub fn from_raw(sport: Sport, raw: RawLobby) -> Self {
        Self { sport, raw }
    }

    /// Build a snapshot from lobby JSON text.
    pub fn from_json(sport: Sport, json: &str) -> Result<Self> {
        let raw: RawLobby = serde_json::from_str(json)?;
        Ok(Self::from_raw(sport, raw))
    }

    pub fn sport(&self) -> &Sport {
        &self.sport
    }

    /// An empty lobby means the sport is likely in its offseason.
    pub fn is_empty(&self) -> bool {
        self.raw.contests.is_empty()
    }

    pub fn contests(&self) -> &[RawContest] {
        &self.raw.contests
    }

    pub fn draft_groups(&self) -> &[RawDraftGroup] {
        &self.raw.draft_groups
    }

    pub fn game_types(&self) -> &[RawGameType] {
        &self.raw.game_types
    }

    pub fn game_sets(&self) -> &[RawGameSet] {
        &self.raw.game_sets
    }
}
