//! Validated records for lobby-derived entities.
//!
//! Each record is built from its raw wire type by an explicit fallible
//! constructor. Constructors normalize (trim suffixes, blank-to-`None` tags,
//! JSON blobs to text) and validate; a failed constructor drops the record.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cli::types::{ContestId, DraftGroupId, GameTypeId, Sport};
use crate::dk::types::{
    RawCompetition, RawContest, RawContestDetail, RawDraftGroup, RawGameSet, RawGameStyle,
    RawGameType,
};
use crate::dk::urls::draft_page_url;
use crate::error::{DkError, Result};

/// Attribute keys in the lobby payload mapped to contest flags.
const ATTRIBUTE_FLAGS: [(&str, ContestFlag); 7] = [
    ("IsGuaranteed", ContestFlag::Guaranteed),
    ("IsStarred", ContestFlag::Starred),
    ("IsDoubleUp", ContestFlag::DoubleUp),
    ("IsFiftyfifty", ContestFlag::FiftyFifty),
    ("League", ContestFlag::League),
    ("IsSteps", ContestFlag::Multiplier),
    ("IsQualifier", ContestFlag::Qualifier),
];

#[derive(Debug, Clone, Copy)]
enum ContestFlag {
    Guaranteed,
    Starred,
    DoubleUp,
    FiftyFifty,
    League,
    Multiplier,
    Qualifier,
}

/// Serialize a JSON blob field as text, dropping nulls.
pub(crate) fn json_text(value: &Value) -> Option<String> {
    if value.is_null() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Normalize an optional string field: trim, blank becomes `None`.
pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parse a DraftKings timestamp (`2025-09-07T17:00:00.0000000Z` style) as UTC,
/// ignoring the subsecond tail.
pub(crate) fn parse_site_datetime(s: &str) -> Option<DateTime<Utc>> {
    let head = s.split('.').next().unwrap_or(s);
    NaiveDateTime::parse_from_str(head, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// A guaranteed lobby contest that passed the inclusion rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contest {
    pub contest_id: ContestId,
    pub contest_name: String,
    pub sport: Sport,
    pub entry_fee: f64,
    pub prize_pool: f64,
    pub crown_amount: i64,
    pub max_entries: u32,
    pub entries_per_user: u32,
    pub draft_group_id: DraftGroupId,
    /// Prize description blob as JSON text.
    pub prize_descriptions: Option<String>,
    /// Raw attribute map as JSON text.
    pub attributes: Option<String>,
    pub contest_date: Option<String>,
    pub contest_url: String,
    pub guaranteed: bool,
    pub starred: bool,
    pub double_up: bool,
    pub fifty_fifty: bool,
    pub league: bool,
    pub multiplier: bool,
    pub qualifier: bool,
}

impl Contest {
    pub fn from_raw(sport: &Sport, raw: &RawContest) -> Result<Self> {
        if raw.id == 0 {
            return Err(DkError::validation("contest", raw.id, "missing contest id"));
        }
        if raw.draft_group_id == 0 {
            return Err(DkError::validation(
                "contest",
                raw.id,
                "missing draft group id",
            ));
        }
        if raw.entry_fee < 0.0 {
            return Err(DkError::validation(
                "contest",
                raw.id,
                format!("negative entry fee {}", raw.entry_fee),
            ));
        }
        if raw.prize_pool < 0.0 {
            return Err(DkError::validation(
                "contest",
                raw.id,
                format!("negative prize pool {}", raw.prize_pool),
            ));
        }

        let mut contest = Self {
            contest_id: ContestId::new(raw.id),
            contest_name: raw.name.clone(),
            sport: sport.clone(),
            entry_fee: raw.entry_fee,
            prize_pool: raw.prize_pool,
            crown_amount: raw.crown_amount,
            max_entries: raw.max_entries,
            entries_per_user: raw.entries_per_user,
            draft_group_id: DraftGroupId::new(raw.draft_group_id),
            prize_descriptions: raw.prize_descriptions.as_ref().and_then(json_text),
            attributes: if raw.attributes.is_empty() {
                None
            } else {
                serde_json::to_string(&raw.attributes).ok()
            },
            contest_date: raw.start_date_string.clone(),
            contest_url: draft_page_url(ContestId::new(raw.id)),
            guaranteed: false,
            starred: false,
            double_up: false,
            fifty_fifty: false,
            league: false,
            multiplier: false,
            qualifier: false,
        };

        for (key, flag) in ATTRIBUTE_FLAGS {
            if raw.attributes.contains_key(key) {
                match flag {
                    ContestFlag::Guaranteed => contest.guaranteed = true,
                    ContestFlag::Starred => contest.starred = true,
                    ContestFlag::DoubleUp => contest.double_up = true,
                    ContestFlag::FiftyFifty => contest.fifty_fifty = true,
                    ContestFlag::League => contest.league = true,
                    ContestFlag::Multiplier => contest.multiplier = true,
                    ContestFlag::Qualifier => contest.qualifier = true,
                }
            }
        }

        Ok(contest)
    }
}

/// Status refresh for one contest from the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestStatus {
    pub contest_id: ContestId,
    pub is_final: bool,
    pub is_cancelled: bool,
    pub start_time: Option<DateTime<Utc>>,
    pub contest_name: Option<String>,
    pub max_entries: Option<u32>,
}

impl ContestStatus {
    pub fn from_detail(contest_id: ContestId, detail: &RawContestDetail) -> Self {
        let state = detail
            .contest_state_detail
            .as_deref()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();

        Self {
            contest_id,
            is_final: state == "completed" || state == "cancelled",
            is_cancelled: state == "cancelled",
            start_time: detail
                .contest_start_time
                .as_deref()
                .and_then(parse_site_datetime),
            contest_name: detail.name.clone(),
            max_entries: detail.maximum_entries,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftGroup {
    pub draft_group_id: DraftGroupId,
    pub allow_ugc: Option<bool>,
    /// Slate label such as `(Early)`, trimmed.
    pub contest_start_time_suffix: Option<String>,
    pub contest_start_time_type: Option<i32>,
    pub contest_type_id: Option<u32>,
    pub draft_group_series_id: Option<u32>,
    pub draft_group_tag: Option<String>,
    pub game_count: Option<u32>,
    pub game_set_key: Option<String>,
    pub game_type: Option<String>,
    pub game_type_id: GameTypeId,
    /// Game list blob as JSON text.
    pub games: Option<String>,
    pub sort_order: Option<i32>,
    pub sport: Option<String>,
    pub start_date: Option<String>,
    pub start_date_est: Option<String>,
}

impl DraftGroup {
    pub fn from_raw(raw: &RawDraftGroup) -> Result<Self> {
        if raw.draft_group_id == 0 {
            return Err(DkError::validation(
                "draft_group",
                raw.draft_group_id,
                "missing draft group id",
            ));
        }

        Ok(Self {
            draft_group_id: DraftGroupId::new(raw.draft_group_id),
            allow_ugc: raw.allow_ugc,
            contest_start_time_suffix: non_blank(raw.contest_start_time_suffix.as_deref()),
            contest_start_time_type: raw.contest_start_time_type,
            contest_type_id: raw.contest_type_id,
            draft_group_series_id: raw.draft_group_series_id,
            draft_group_tag: non_blank(raw.draft_group_tag.as_deref()),
            game_count: raw.game_count,
            game_set_key: raw.game_set_key.clone(),
            game_type: raw.game_type.clone(),
            game_type_id: GameTypeId::new(raw.game_type_id),
            games: raw.games.as_ref().and_then(json_text),
            sort_order: raw.sort_order,
            sport: raw.sport.clone(),
            start_date: raw.start_date.clone(),
            start_date_est: raw.start_date_est.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameType {
    pub game_type_id: GameTypeId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub tag: Option<String>,
    pub sport_id: Option<u32>,
    pub draft_type: Option<String>,
    /// Game style object as JSON text.
    pub game_style: Option<String>,
}

impl GameType {
    pub fn from_raw(raw: &RawGameType) -> Result<Self> {
        if raw.game_type_id == 0 {
            return Err(DkError::validation(
                "game_type",
                raw.game_type_id,
                "missing game type id",
            ));
        }

        Ok(Self {
            game_type_id: GameTypeId::new(raw.game_type_id),
            name: raw.name.clone(),
            description: raw.description.clone(),
            tag: non_blank(raw.tag.as_deref()),
            sport_id: raw.sport_id,
            draft_type: raw.draft_type.clone(),
            game_style: raw.game_style.as_ref().and_then(json_text),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSet {
    pub game_set_key: String,
    pub contest_start_time_suffix: Option<String>,
    pub tag: Option<String>,
    pub competitions: Vec<Competition>,
    pub game_styles: Vec<GameStyle>,
    pub sort_order: Option<i32>,
    pub min_start_time: Option<String>,
}

impl GameSet {
    pub fn from_raw(raw: &RawGameSet) -> Result<Self> {
        if raw.game_set_key.trim().is_empty() {
            return Err(DkError::validation(
                "game_set",
                &raw.game_set_key,
                "missing game set key",
            ));
        }

        let competitions = raw
            .competitions
            .iter()
            .map(Competition::from_raw)
            .collect::<Result<Vec<_>>>()?;
        let game_styles = raw
            .game_styles
            .iter()
            .map(GameStyle::from_raw)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            game_set_key: raw.game_set_key.clone(),
            contest_start_time_suffix: non_blank(raw.contest_start_time_suffix.as_deref()),
            tag: non_blank(raw.tag.as_deref()),
            competitions,
            game_styles,
            sort_order: raw.sort_order,
            min_start_time: raw.min_start_time.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    pub game_id: u64,
    pub away_team_id: Option<i64>,
    pub home_team_id: Option<i64>,
    pub away_team_score: Option<i32>,
    pub home_team_score: Option<i32>,
    pub away_team_city: Option<String>,
    pub home_team_city: Option<String>,
    pub away_team_name: Option<String>,
    pub home_team_name: Option<String>,
    pub start_date: Option<String>,
    pub location: Option<String>,
    pub sport: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub full_description: Option<String>,
    pub last_play: Option<String>,
    pub time_remaining_status: Option<String>,
    pub series_type: Option<i32>,
    pub number_of_games_in_series: Option<i32>,
    pub exceptional_messages: Vec<String>,
}

impl Competition {
    pub fn from_raw(raw: &RawCompetition) -> Result<Self> {
        if raw.game_id == 0 {
            return Err(DkError::validation(
                "competition",
                raw.game_id,
                "missing game id",
            ));
        }

        Ok(Self {
            game_id: raw.game_id,
            away_team_id: raw.away_team_id,
            home_team_id: raw.home_team_id,
            away_team_score: raw.away_team_score,
            home_team_score: raw.home_team_score,
            away_team_city: raw.away_team_city.clone(),
            home_team_city: raw.home_team_city.clone(),
            away_team_name: raw.away_team_name.clone(),
            home_team_name: raw.home_team_name.clone(),
            start_date: raw.start_date.clone(),
            location: raw.location.clone(),
            sport: raw.sport.clone(),
            status: raw.status.clone(),
            description: raw.description.clone(),
            full_description: raw.full_description.clone(),
            last_play: raw.last_play.clone(),
            time_remaining_status: raw.time_remaining_status.clone(),
            series_type: raw.series_type,
            number_of_games_in_series: raw.number_of_games_in_series,
            exceptional_messages: raw.exceptional_messages.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStyle {
    pub game_style_id: u32,
    pub sport_id: Option<u32>,
    pub sort_order: Option<i32>,
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    pub description: Option<String>,
    pub is_enabled: Option<bool>,
    /// Attribute blob as JSON text.
    pub attributes: Option<String>,
}

impl GameStyle {
    pub fn from_raw(raw: &RawGameStyle) -> Result<Self> {
        if raw.game_style_id == 0 {
            return Err(DkError::validation(
                "game_style",
                raw.game_style_id,
                "missing game style id",
            ));
        }

        Ok(Self {
            game_style_id: raw.game_style_id,
            sport_id: raw.sport_id,
            sort_order: raw.sort_order,
            name: raw.name.clone(),
            abbreviation: raw.abbreviation.clone(),
            description: raw.description.clone(),
            is_enabled: raw.is_enabled,
            attributes: raw.attributes.as_ref().and_then(json_text),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_contest() -> RawContest {
        serde_json::from_value(json!({
            "id": 170000001,
            "n": "NFL $100K Play-Action",
            "a": 5.0,
            "po": 100000.0,
            "m": 23500,
            "mec": 150,
            "dg": 90001,
            "attr": {"IsGuaranteed": "true", "IsDoubleUp": "true"},
            "sdstring": "Sun 1:00PM"
        }))
        .unwrap()
    }

    #[test]
    fn test_contest_from_raw_sets_flags_by_key_presence() {
        let sport: Sport = "NFL".parse().unwrap();
        let contest = Contest::from_raw(&sport, &raw_contest()).unwrap();

        assert!(contest.guaranteed);
        assert!(contest.double_up);
        assert!(!contest.fifty_fifty);
        assert!(!contest.qualifier);
        assert_eq!(
            contest.contest_url,
            "https://www.draftkings.com/draft/contest/170000001"
        );
    }

    #[test]
    fn test_contest_from_raw_rejects_negative_fee() {
        let sport: Sport = "NFL".parse().unwrap();
        let mut raw = raw_contest();
        raw.entry_fee = -1.0;
        assert!(Contest::from_raw(&sport, &raw).is_err());
    }

    #[test]
    fn test_contest_from_raw_requires_draft_group() {
        let sport: Sport = "NFL".parse().unwrap();
        let mut raw = raw_contest();
        raw.draft_group_id = 0;
        assert!(Contest::from_raw(&sport, &raw).is_err());
    }

    #[test]
    fn test_contest_status_states() {
        let detail: RawContestDetail = serde_json::from_value(json!({
            "contestStateDetail": " Completed ",
            "contestStartTime": "2025-09-07T17:00:00.0000000Z"
        }))
        .unwrap();

        let status = ContestStatus::from_detail(ContestId::new(1), &detail);
        assert!(status.is_final);
        assert!(!status.is_cancelled);
        let start = status.start_time.unwrap();
        assert_eq!(start.to_rfc3339(), "2025-09-07T17:00:00+00:00");
    }

    #[test]
    fn test_contest_status_cancelled_is_final() {
        let detail: RawContestDetail =
            serde_json::from_value(json!({"contestStateDetail": "cancelled"})).unwrap();
        let status = ContestStatus::from_detail(ContestId::new(1), &detail);
        assert!(status.is_final);
        assert!(status.is_cancelled);
    }

    #[test]
    fn test_draft_group_normalizes_blank_fields() {
        let raw: RawDraftGroup = serde_json::from_value(json!({
            "DraftGroupId": 90001,
            "GameTypeId": 1,
            "ContestStartTimeSuffix": " (Early) ",
            "DraftGroupTag": ""
        }))
        .unwrap();

        let group = DraftGroup::from_raw(&raw).unwrap();
        assert_eq!(group.contest_start_time_suffix.as_deref(), Some("(Early)"));
        assert_eq!(group.draft_group_tag, None);
    }

    #[test]
    fn test_game_type_carries_style_as_json_text() {
        let raw: RawGameType = serde_json::from_value(json!({
            "GameTypeId": 1,
            "Name": "Classic",
            "Tag": "",
            "GameStyle": {"GameStyleId": 1, "Name": "Classic"}
        }))
        .unwrap();

        let game_type = GameType::from_raw(&raw).unwrap();
        assert_eq!(game_type.tag, None);
        let style = game_type.game_style.unwrap();
        assert!(style.contains("\"GameStyleId\":1"));
    }

    #[test]
    fn test_game_set_validates_nested_records() {
        let raw: RawGameSet = serde_json::from_value(json!({
            "GameSetKey": "abc123",
            "Competitions": [{"GameId": 555, "HomeTeamName": "Chiefs", "AwayTeamName": "Bills"}],
            "GameStyles": [{"GameStyleId": 1, "Name": "Classic"}]
        }))
        .unwrap();

        let game_set = GameSet::from_raw(&raw).unwrap();
        assert_eq!(game_set.competitions.len(), 1);
        assert_eq!(game_set.game_styles.len(), 1);

        let bad: RawGameSet = serde_json::from_value(json!({
            "GameSetKey": "abc123",
            "Competitions": [{"GameId": 0}]
        }))
        .unwrap();
        assert!(GameSet::from_raw(&bad).is_err());
    }

    #[test]
    fn test_parse_site_datetime_variants() {
        assert!(parse_site_datetime("2025-09-07T17:00:00").is_some());
        assert!(parse_site_datetime("2025-09-07T17:00:00.123").is_some());
        assert!(parse_site_datetime("not a date").is_none());
    }
}
