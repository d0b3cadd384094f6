//! The scraping pipeline for one sport.
//!
//! Pipeline order:
//! 1. Fetch lobby data once (shared across all lobby-derived stages)
//! 2. Draft groups (filtered by game type IDs and slate types)
//! 3. Contests (filtered by the draft group IDs from step 2)
//! 4. Game types
//! 5. Game sets (filtered by tags)
//! 6. Payouts, for the contest IDs from step 3
//! 7. Player salaries, for the draft group IDs from step 2
//!
//! Dependent stages are suppressed when their input ID list is empty, or
//! fail fast in strict mode. Retrying lives in the HTTP client, never here.

use std::fmt;

use serde::Serialize;

use crate::cli::types::{ContestId, DraftGroupId, GameTypeId, Sport};
use crate::core::http::RetryClient;
use crate::dk::LobbySnapshot;
use crate::error::{DkError, Result};
use crate::models::{Contest, DraftGroup, GameSet, GameType, Payout, PlayerSalary};

use super::contests::{contest_ids, parse_contests, ContestFilter};
use super::draft_groups::{draft_group_ids, parse_draft_groups, DraftGroupFilter};
use super::game_sets::parse_game_sets;
use super::game_types::parse_game_types;
use super::payouts::scrape_payouts;
use super::player_salaries::scrape_player_salaries;
use super::ParseOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stage {
    DraftGroups,
    Contests,
    GameTypes,
    GameSets,
    Payouts,
    PlayerSalaries,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::DraftGroups => "draft groups",
            Stage::Contests => "contests",
            Stage::GameTypes => "game types",
            Stage::GameSets => "game sets",
            Stage::Payouts => "payouts",
            Stage::PlayerSalaries => "player salaries",
        };
        write!(f, "{}", s)
    }
}

/// Per-stage skip flags. A set flag suppresses exactly that stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipStages {
    pub contests: bool,
    pub draft_groups: bool,
    pub game_types: bool,
    pub game_sets: bool,
    pub payouts: bool,
    pub player_salaries: bool,
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub sport: Sport,
    /// Restrict draft groups (and everything downstream) to these game types.
    pub game_type_ids: Option<Vec<GameTypeId>>,
    /// Restrict draft groups to these slate labels.
    pub slate_types: Option<Vec<String>>,
    /// Restrict game sets to these tags.
    pub game_set_tags: Option<Vec<String>>,
    pub skip: SkipStages,
    /// Fail fast when a dependent stage's input is empty instead of
    /// suppressing the stage.
    pub strict: bool,
    pub verbose: bool,
}

impl PipelineConfig {
    pub fn new(sport: Sport) -> Self {
        Self {
            sport,
            game_type_ids: None,
            slate_types: None,
            game_set_tags: None,
            skip: SkipStages::default(),
            strict: false,
            verbose: false,
        }
    }
}

/// One record dropped somewhere in the pipeline, with the stage it came from.
#[derive(Debug, Clone, Serialize)]
pub struct StageFailure {
    pub stage: Stage,
    pub id: String,
    pub message: String,
}

/// Everything one pipeline run produced.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutcome {
    pub sport: Sport,
    pub contests: Vec<Contest>,
    pub draft_groups: Vec<DraftGroup>,
    pub game_types: Vec<GameType>,
    pub game_sets: Vec<GameSet>,
    pub payouts: Vec<Payout>,
    pub player_salaries: Vec<PlayerSalary>,
    /// Records dropped by validation, with reasons.
    pub failures: Vec<StageFailure>,
    /// Dependent stages that ran empty-handed and were suppressed.
    pub suppressed: Vec<Stage>,
}

impl PipelineOutcome {
    fn empty(sport: Sport) -> Self {
        Self {
            sport,
            contests: Vec::new(),
            draft_groups: Vec::new(),
            game_types: Vec::new(),
            game_sets: Vec::new(),
            payouts: Vec::new(),
            player_salaries: Vec::new(),
            failures: Vec::new(),
            suppressed: Vec::new(),
        }
    }

    fn absorb_failures<T>(&mut self, stage: Stage, outcome: &ParseOutcome<T>) {
        for failure in &outcome.failures {
            self.failures.push(StageFailure {
                stage,
                id: failure.id.clone(),
                message: failure.message.clone(),
            });
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{}: Contests={}, Game Types={}, Draft Groups={}, Game Sets={}, Payouts={}, Player Salaries={}",
            self.sport,
            self.contests.len(),
            self.game_types.len(),
            self.draft_groups.len(),
            self.game_sets.len(),
            self.payouts.len(),
            self.player_salaries.len(),
        )
    }
}

/// Run the full pipeline for one sport: fetch the lobby once, then run the
/// stages against the shared snapshot.
pub async fn run(client: &RetryClient, config: &PipelineConfig) -> Result<PipelineOutcome> {
    if config.verbose {
        println!("Fetching lobby data for {}...", config.sport);
    }

    let lobby = LobbySnapshot::fetch(client, &config.sport).await?;

    if lobby.is_empty() {
        if config.verbose {
            println!(
                "No lobby data found for {}. Sport may be in offseason.",
                config.sport
            );
        }
        return Ok(PipelineOutcome::empty(config.sport.clone()));
    }

    if config.verbose {
        println!(
            "Lobby data fetched: {} contests, {} draft groups",
            lobby.contests().len(),
            lobby.draft_groups().len()
        );
    }

    run_with_lobby(client, config, &lobby).await
}

/// Run the pipeline stages against an already-fetched lobby snapshot.
pub async fn run_with_lobby(
    client: &RetryClient,
    config: &PipelineConfig,
    lobby: &LobbySnapshot,
) -> Result<PipelineOutcome> {
    let mut outcome = PipelineOutcome::empty(config.sport.clone());

    let mut group_ids: Vec<DraftGroupId> = Vec::new();
    if !config.skip.draft_groups {
        if config.verbose {
            println!("Scraping draft groups...");
        }
        let filter = DraftGroupFilter {
            game_type_ids: config.game_type_ids.clone(),
            slate_types: config.slate_types.clone(),
        };
        let parsed = parse_draft_groups(lobby, &filter);
        outcome.absorb_failures(Stage::DraftGroups, &parsed);
        group_ids = draft_group_ids(&parsed.records);
        outcome.draft_groups = parsed.records;
        if config.verbose {
            println!("Scraped {} draft groups", outcome.draft_groups.len());
        }
    }

    let mut ids: Vec<ContestId> = Vec::new();
    if !config.skip.contests {
        if config.verbose {
            println!("Scraping contests...");
        }
        let filter = ContestFilter {
            draft_group_ids: if group_ids.is_empty() {
                None
            } else {
                Some(group_ids.clone())
            },
        };
        let parsed = parse_contests(lobby, &filter);
        outcome.absorb_failures(Stage::Contests, &parsed);
        ids = contest_ids(&parsed.records);
        outcome.contests = parsed.records;
        if config.verbose {
            println!("Scraped {} contests", outcome.contests.len());
        }
    }

    if !config.skip.game_types {
        if config.verbose {
            println!("Scraping game types...");
        }
        let parsed = parse_game_types(lobby);
        outcome.absorb_failures(Stage::GameTypes, &parsed);
        outcome.game_types = parsed.records;
        if config.verbose {
            println!("Scraped {} game types", outcome.game_types.len());
        }
    }

    if !config.skip.game_sets {
        if config.verbose {
            println!("Scraping game sets...");
        }
        let parsed = parse_game_sets(lobby, config.game_set_tags.as_deref());
        outcome.absorb_failures(Stage::GameSets, &parsed);
        outcome.game_sets = parsed.records;
        if config.verbose {
            println!("Scraped {} game sets", outcome.game_sets.len());
        }
    }

    if !config.skip.payouts {
        if ids.is_empty() {
            if config.strict {
                return Err(DkError::EmptyDependency {
                    stage: Stage::Contests.to_string(),
                });
            }
            outcome.suppressed.push(Stage::Payouts);
        } else {
            if config.verbose {
                println!("Scraping payouts for {} contests...", ids.len());
            }
            let parsed = scrape_payouts(client, &ids).await;
            outcome.absorb_failures(Stage::Payouts, &parsed);
            outcome.payouts = parsed.records;
            if config.verbose {
                println!("Scraped {} payouts", outcome.payouts.len());
            }
        }
    }

    if !config.skip.player_salaries {
        if group_ids.is_empty() {
            if config.strict {
                return Err(DkError::EmptyDependency {
                    stage: Stage::DraftGroups.to_string(),
                });
            }
            outcome.suppressed.push(Stage::PlayerSalaries);
        } else {
            if config.verbose {
                println!(
                    "Scraping player salaries for {} draft groups...",
                    group_ids.len()
                );
            }
            let parsed = scrape_player_salaries(client, &group_ids).await;
            outcome.absorb_failures(Stage::PlayerSalaries, &parsed);
            outcome.player_salaries = parsed.records;
            if config.verbose {
                println!("Scraped {} player salaries", outcome.player_salaries.len());
            }
        }
    }

    Ok(outcome)
}

/// Run the pipeline for several sports back to back.
pub async fn run_all(
    client: &RetryClient,
    sports: &[Sport],
    base_config: &PipelineConfig,
) -> Result<Vec<PipelineOutcome>> {
    let mut outcomes = Vec::with_capacity(sports.len());

    for sport in sports {
        let config = PipelineConfig {
            sport: sport.clone(),
            ..base_config.clone()
        };
        outcomes.push(run(client, &config).await?);
    }

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE_LOBBY: &str = r#"{
        "Contests": [
            {"id": 1, "n": "NFL $100K Play-Action", "a": 5.0, "po": 100000.0, "m": 23500,
             "mec": 150, "dg": 10, "attr": {"IsGuaranteed": "true"}},
            {"id": 2, "n": "NFL Satellite Qualifier", "a": 5.0, "po": 500.0, "m": 1000,
             "mec": 10, "dg": 10, "attr": {"IsGuaranteed": "true"}},
            {"id": 3, "n": "NFL Night Owl", "a": 33.0, "po": 5000.0, "m": 2000,
             "mec": 20, "dg": 11, "attr": {"IsGuaranteed": "true"}}
        ],
        "DraftGroups": [
            {"DraftGroupId": 10, "GameTypeId": 1, "ContestStartTimeSuffix": "(Early)"},
            {"DraftGroupId": 11, "GameTypeId": 1, "ContestStartTimeSuffix": "(Night)"},
            {"DraftGroupId": 12, "GameTypeId": 96}
        ],
        "GameTypes": [
            {"GameTypeId": 1, "Name": "Classic"},
            {"GameTypeId": 96, "Name": "Showdown Captain Mode"}
        ],
        "GameSets": [
            {"GameSetKey": "main", "Tag": "Featured",
             "Competitions": [{"GameId": 77}], "GameStyles": [{"GameStyleId": 1}]}
        ]
    }"#;

    fn fixture_lobby() -> LobbySnapshot {
        let sport: Sport = "NFL".parse().unwrap();
        LobbySnapshot::from_json(sport, FIXTURE_LOBBY).unwrap()
    }

    fn quiet_config() -> PipelineConfig {
        let sport: Sport = "NFL".parse().unwrap();
        let mut config = PipelineConfig::new(sport);
        // Keep fixture runs offline
        config.skip.payouts = true;
        config.skip.player_salaries = true;
        config
    }

    fn client() -> RetryClient {
        RetryClient::new().unwrap()
    }

    #[tokio::test]
    async fn test_lobby_stages_share_one_snapshot() {
        let lobby = fixture_lobby();
        let outcome = run_with_lobby(&client(), &quiet_config(), &lobby)
            .await
            .unwrap();

        // Satellite contest filtered out, the other two kept
        assert_eq!(outcome.contests.len(), 2);
        assert_eq!(outcome.draft_groups.len(), 3);
        assert_eq!(outcome.game_types.len(), 2);
        assert_eq!(outcome.game_sets.len(), 1);
        assert!(outcome.failures.is_empty());
    }

    #[tokio::test]
    async fn test_skip_flags_suppress_exactly_their_stage() {
        let lobby = fixture_lobby();
        let mut config = quiet_config();
        config.skip.game_types = true;

        let outcome = run_with_lobby(&client(), &config, &lobby).await.unwrap();

        assert!(outcome.game_types.is_empty());
        assert_eq!(outcome.contests.len(), 2);
        assert_eq!(outcome.draft_groups.len(), 3);
        assert_eq!(outcome.game_sets.len(), 1);
    }

    #[tokio::test]
    async fn test_draft_group_ids_feed_contest_filter() {
        let lobby = fixture_lobby();
        let mut config = quiet_config();
        // Showdown-only draft groups leave no contests behind
        config.game_type_ids = Some(vec![GameTypeId::new(96)]);

        let outcome = run_with_lobby(&client(), &config, &lobby).await.unwrap();

        assert_eq!(outcome.draft_groups.len(), 1);
        assert_eq!(
            outcome.draft_groups[0].draft_group_id,
            DraftGroupId::new(12)
        );
        // No lobby contest drafts from group 12
        assert!(outcome.contests.is_empty());
    }

    #[tokio::test]
    async fn test_empty_dependency_suppresses_payouts() {
        let lobby = fixture_lobby();
        let mut config = quiet_config();
        config.skip.contests = true;
        config.skip.payouts = false;

        let outcome = run_with_lobby(&client(), &config, &lobby).await.unwrap();

        assert!(outcome.payouts.is_empty());
        assert!(outcome.suppressed.contains(&Stage::Payouts));
    }

    #[tokio::test]
    async fn test_strict_mode_fails_fast_on_empty_dependency() {
        let lobby = fixture_lobby();
        let mut config = quiet_config();
        config.skip.contests = true;
        config.skip.payouts = false;
        config.strict = true;

        let err = run_with_lobby(&client(), &config, &lobby)
            .await
            .unwrap_err();
        match err {
            DkError::EmptyDependency { stage } => assert_eq!(stage, "contests"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_slate_filter_threads_through_to_contests() {
        let lobby = fixture_lobby();
        let mut config = quiet_config();
        config.slate_types = Some(vec!["(Night)".to_string()]);

        let outcome = run_with_lobby(&client(), &config, &lobby).await.unwrap();

        assert_eq!(outcome.draft_groups.len(), 1);
        assert_eq!(outcome.contests.len(), 1);
        assert_eq!(outcome.contests[0].contest_id, ContestId::new(3));
    }

    #[tokio::test]
    async fn test_rerun_is_idempotent() {
        let lobby = fixture_lobby();
        let config = quiet_config();

        let first = run_with_lobby(&client(), &config, &lobby).await.unwrap();
        let second = run_with_lobby(&client(), &config, &lobby).await.unwrap();

        assert_eq!(first.contests, second.contests);
        assert_eq!(first.draft_groups, second.draft_groups);
        assert_eq!(first.game_types, second.game_types);
    }

    #[test]
    fn test_summary_line() {
        let sport: Sport = "NFL".parse().unwrap();
        let outcome = PipelineOutcome::empty(sport);
        assert_eq!(
            outcome.summary(),
            "NFL: Contests=0, Game Types=0, Draft Groups=0, Game Sets=0, Payouts=0, Player Salaries=0"
        );
    }
}
