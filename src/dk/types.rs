//! Raw wire types for DraftKings responses.
//!
//! These mirror the site's field names exactly (the lobby uses terse
//! abbreviations for contests and PascalCase everywhere else) and stay as
//! close to the payload as possible. Normalization into validated records
//! happens in [`crate::models`].

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// Lobby envelope returned by `lobby/getcontests`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLobby {
    #[serde(rename = "Contests", default)]
    pub contests: Vec<RawContest>,
    #[serde(rename = "DraftGroups", default)]
    pub draft_groups: Vec<RawDraftGroup>,
    #[serde(rename = "GameTypes", default)]
    pub game_types: Vec<RawGameType>,
    #[serde(rename = "GameSets", default)]
    pub game_sets: Vec<RawGameSet>,
}

/// One contest row from the lobby. Field names are the site's abbreviations.
#[derive(Debug, Clone, Deserialize)]
pub struct RawContest {
    pub id: u64,
    #[serde(rename = "n")]
    pub name: String,
    /// Entry fee in dollars.
    #[serde(rename = "a", default)]
    pub entry_fee: f64,
    /// Advertised prize pool in dollars.
    #[serde(rename = "po", default)]
    pub prize_pool: f64,
    #[serde(rename = "m", default)]
    pub max_entries: u32,
    /// Max entries per user.
    #[serde(rename = "mec", default)]
    pub entries_per_user: u32,
    #[serde(rename = "dg")]
    pub draft_group_id: u64,
    #[serde(rename = "crownAmount", default)]
    pub crown_amount: i64,
    /// Prize description blob; shape varies by contest type.
    #[serde(rename = "pd", default)]
    pub prize_descriptions: Option<Value>,
    /// Attribute flags; a key's presence is what matters, not its value.
    #[serde(rename = "attr", default)]
    pub attributes: BTreeMap<String, Value>,
    #[serde(rename = "sdstring", default)]
    pub start_date_string: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDraftGroup {
    #[serde(rename = "DraftGroupId")]
    pub draft_group_id: u64,
    #[serde(rename = "AllowUGC", default)]
    pub allow_ugc: Option<bool>,
    #[serde(rename = "ContestStartTimeSuffix", default)]
    pub contest_start_time_suffix: Option<String>,
    #[serde(rename = "ContestStartTimeType", default)]
    pub contest_start_time_type: Option<i32>,
    #[serde(rename = "ContestTypeId", default)]
    pub contest_type_id: Option<u32>,
    #[serde(rename = "DraftGroupSeriesId", default)]
    pub draft_group_series_id: Option<u32>,
    #[serde(rename = "DraftGroupTag", default)]
    pub draft_group_tag: Option<String>,
    #[serde(rename = "GameCount", default)]
    pub game_count: Option<u32>,
    #[serde(rename = "GameSetKey", default)]
    pub game_set_key: Option<String>,
    #[serde(rename = "GameType", default)]
    pub game_type: Option<String>,
    #[serde(rename = "GameTypeId")]
    pub game_type_id: u32,
    #[serde(rename = "Games", default)]
    pub games: Option<Value>,
    #[serde(rename = "SortOrder", default)]
    pub sort_order: Option<i32>,
    #[serde(rename = "Sport", default)]
    pub sport: Option<String>,
    #[serde(rename = "StartDate", default)]
    pub start_date: Option<String>,
    #[serde(rename = "StartDateEst", default)]
    pub start_date_est: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawGameType {
    #[serde(rename = "GameTypeId")]
    pub game_type_id: u32,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Tag", default)]
    pub tag: Option<String>,
    #[serde(rename = "SportId", default)]
    pub sport_id: Option<u32>,
    #[serde(rename = "DraftType", default)]
    pub draft_type: Option<String>,
    /// Game style object; carried as JSON text in the validated record.
    #[serde(rename = "GameStyle", default)]
    pub game_style: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawGameSet {
    #[serde(rename = "GameSetKey")]
    pub game_set_key: String,
    #[serde(rename = "ContestStartTimeSuffix", default)]
    pub contest_start_time_suffix: Option<String>,
    #[serde(rename = "Tag", default)]
    pub tag: Option<String>,
    #[serde(rename = "Competitions", default)]
    pub competitions: Vec<RawCompetition>,
    #[serde(rename = "GameStyles", default)]
    pub game_styles: Vec<RawGameStyle>,
    #[serde(rename = "SortOrder", default)]
    pub sort_order: Option<i32>,
    #[serde(rename = "MinStartTime", default)]
    pub min_start_time: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCompetition {
    #[serde(rename = "GameId")]
    pub game_id: u64,
    #[serde(rename = "AwayTeamId", default)]
    pub away_team_id: Option<i64>,
    #[serde(rename = "HomeTeamId", default)]
    pub home_team_id: Option<i64>,
    #[serde(rename = "AwayTeamScore", default)]
    pub away_team_score: Option<i32>,
    #[serde(rename = "HomeTeamScore", default)]
    pub home_team_score: Option<i32>,
    #[serde(rename = "AwayTeamCity", default)]
    pub away_team_city: Option<String>,
    #[serde(rename = "HomeTeamCity", default)]
    pub home_team_city: Option<String>,
    #[serde(rename = "AwayTeamName", default)]
    pub away_team_name: Option<String>,
    #[serde(rename = "HomeTeamName", default)]
    pub home_team_name: Option<String>,
    #[serde(rename = "StartDate", default)]
    pub start_date: Option<String>,
    #[serde(rename = "Location", default)]
    pub location: Option<String>,
    #[serde(rename = "Sport", default)]
    pub sport: Option<String>,
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "FullDescription", default)]
    pub full_description: Option<String>,
    #[serde(rename = "LastPlay", default)]
    pub last_play: Option<String>,
    #[serde(rename = "TimeRemainingStatus", default)]
    pub time_remaining_status: Option<String>,
    #[serde(rename = "SeriesType", default)]
    pub series_type: Option<i32>,
    #[serde(rename = "NumberOfGamesInSeries", default)]
    pub number_of_games_in_series: Option<i32>,
    #[serde(rename = "ExceptionalMessages", default)]
    pub exceptional_messages: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawGameStyle {
    #[serde(rename = "GameStyleId")]
    pub game_style_id: u32,
    #[serde(rename = "SportId", default)]
    pub sport_id: Option<u32>,
    #[serde(rename = "SortOrder", default)]
    pub sort_order: Option<i32>,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Abbreviation", default)]
    pub abbreviation: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "IsEnabled", default)]
    pub is_enabled: Option<bool>,
    #[serde(rename = "Attributes", default)]
    pub attributes: Option<Value>,
}

/// Envelope for the contest detail endpoint and the draft-page embedded blob.
#[derive(Debug, Clone, Deserialize)]
pub struct ContestDetailEnvelope {
    #[serde(rename = "contestDetail")]
    pub contest_detail: Option<RawContestDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawContestDetail {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "contestStateDetail", default)]
    pub contest_state_detail: Option<String>,
    #[serde(rename = "contestStartTime", default)]
    pub contest_start_time: Option<String>,
    #[serde(rename = "maximumEntries", default)]
    pub maximum_entries: Option<u32>,
    #[serde(rename = "payoutSummary", default)]
    pub payout_summary: Vec<RawPayoutStep>,
}

/// One step of a contest's payout table.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPayoutStep {
    #[serde(rename = "minPosition")]
    pub min_position: u32,
    #[serde(rename = "maxPosition")]
    pub max_position: u32,
    /// Payout tier descriptions keyed by tier type (`Cash`, `Ticket`, ...).
    #[serde(rename = "tierPayoutDescriptions", default)]
    pub tier_payout_descriptions: BTreeMap<String, String>,
}

/// Envelope for the sports catalog endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SportsEnvelope {
    #[serde(default)]
    pub sports: Vec<RawSport>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSport {
    #[serde(rename = "sportId")]
    pub sport_id: u32,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "sortOrder", default)]
    pub sort_order: Option<i32>,
    #[serde(rename = "hasPublicContests", default)]
    pub has_public_contests: Option<bool>,
    #[serde(rename = "isEnabled", default)]
    pub is_enabled: Option<bool>,
    #[serde(rename = "regionFullSportName", default)]
    pub region_full_sport_name: Option<String>,
    #[serde(rename = "regionAbbreviatedSportName", default)]
    pub region_abbreviated_sport_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_contest_deserializes_lobby_abbreviations() {
        let raw: RawContest = serde_json::from_value(json!({
            "id": 170000001,
            "n": "NFL $100K Play-Action [$20K to 1st]",
            "a": 5.0,
            "po": 100000.0,
            "m": 23500,
            "mec": 150,
            "dg": 90001,
            "crownAmount": 5,
            "attr": {"IsGuaranteed": "true", "IsStarred": "true"},
            "sdstring": "Sun 1:00PM"
        }))
        .unwrap();

        assert_eq!(raw.id, 170000001);
        assert_eq!(raw.draft_group_id, 90001);
        assert!(raw.attributes.contains_key("IsGuaranteed"));
        assert_eq!(raw.start_date_string.as_deref(), Some("Sun 1:00PM"));
    }

    #[test]
    fn test_raw_lobby_defaults_missing_sections() {
        let lobby: RawLobby = serde_json::from_value(json!({
            "Contests": []
        }))
        .unwrap();
        assert!(lobby.contests.is_empty());
        assert!(lobby.draft_groups.is_empty());
        assert!(lobby.game_types.is_empty());
        assert!(lobby.game_sets.is_empty());
    }

    #[test]
    fn test_contest_detail_envelope_tolerates_missing_detail() {
        let envelope: ContestDetailEnvelope = serde_json::from_value(json!({})).unwrap();
        assert!(envelope.contest_detail.is_none());
    }

    #[test]
    fn test_payout_step_tiers() {
        let step: RawPayoutStep = serde_json::from_value(json!({
            "minPosition": 1,
            "maxPosition": 1,
            "tierPayoutDescriptions": {"Cash": "$20,000.00"}
        }))
        .unwrap();
        assert_eq!(step.tier_payout_descriptions["Cash"], "$20,000.00");
    }
}
