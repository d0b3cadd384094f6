//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::{ContestId, DraftGroupId, GameTypeId, Sport};

#[derive(Debug, Parser)]
#[clap(name = "dk-scrape", about = "DraftKings lobby and contest scraper CLI")]
pub struct DkScrape {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the full scraping pipeline for one or more sports.
    ///
    /// Fetches lobby data once per sport and feeds it to every stage:
    /// draft groups, contests, game types, game sets, then payouts and
    /// player salaries for the IDs the earlier stages produced.
    Run {
        /// Sport codes (repeatable or comma-separated): `NFL`, `MLB,MMA`.
        #[clap(required = true, value_delimiter = ',')]
        sports: Vec<Sport>,

        /// Keep only draft groups with these game type IDs.
        #[clap(long, value_delimiter = ',')]
        game_type_ids: Option<Vec<GameTypeId>>,

        /// Keep only draft groups with these slate labels, e.g. `(Early)`.
        #[clap(long, value_delimiter = ',')]
        slate_types: Option<Vec<String>>,

        /// Keep only game sets with these tags, e.g. `Featured`.
        #[clap(long, value_delimiter = ',')]
        game_set_tags: Option<Vec<String>>,

        /// Skip contests scraping.
        #[clap(long)]
        skip_contests: bool,

        /// Skip game types scraping.
        #[clap(long)]
        skip_game_types: bool,

        /// Skip draft groups scraping.
        #[clap(long)]
        skip_draft_groups: bool,

        /// Skip game sets scraping.
        #[clap(long)]
        skip_game_sets: bool,

        /// Skip payouts scraping.
        #[clap(long)]
        skip_payouts: bool,

        /// Skip player salaries scraping.
        #[clap(long)]
        skip_player_salaries: bool,

        /// Fail fast when a dependent stage has no input IDs instead of
        /// suppressing it.
        #[clap(long)]
        strict: bool,

        /// Output results as JSON instead of summary lines.
        #[clap(long)]
        json: bool,

        /// Print per-stage progress.
        #[clap(long, short)]
        verbose: bool,
    },

    /// Scrape lobby contests for a sport.
    Contests {
        /// Sport code, e.g. `NFL`.
        sport: Sport,

        /// Keep only contests drafting from these draft groups.
        #[clap(long, value_delimiter = ',')]
        draft_group_ids: Option<Vec<DraftGroupId>>,

        /// Output results as JSON instead of summary lines.
        #[clap(long)]
        json: bool,

        /// Print per-record validation failures.
        #[clap(long, short)]
        verbose: bool,
    },

    /// Refresh contest status (final/cancelled/start time) by contest ID.
    ContestStatus {
        /// Contest IDs (comma-separated).
        #[clap(long, value_delimiter = ',', required = true)]
        contest_ids: Vec<ContestId>,

        /// Output results as JSON instead of summary lines.
        #[clap(long)]
        json: bool,

        /// Print per-record validation failures.
        #[clap(long, short)]
        verbose: bool,
    },

    /// Scrape lobby draft groups for a sport.
    DraftGroups {
        /// Sport code, e.g. `NFL`.
        sport: Sport,

        /// Keep only draft groups with these game type IDs.
        #[clap(long, value_delimiter = ',')]
        game_type_ids: Option<Vec<GameTypeId>>,

        /// Keep only draft groups with these slate labels, e.g. `(Early)`.
        #[clap(long, value_delimiter = ',')]
        slate_types: Option<Vec<String>>,

        /// Output results as JSON instead of summary lines.
        #[clap(long)]
        json: bool,

        /// Print per-record validation failures.
        #[clap(long, short)]
        verbose: bool,
    },

    /// Scrape lobby game types for a sport.
    GameTypes {
        /// Sport code, e.g. `NFL`.
        sport: Sport,

        /// Output results as JSON instead of summary lines.
        #[clap(long)]
        json: bool,

        /// Print per-record validation failures.
        #[clap(long, short)]
        verbose: bool,
    },

    /// Scrape lobby game sets for a sport.
    GameSets {
        /// Sport code, e.g. `NFL`.
        sport: Sport,

        /// Keep only game sets with these tags, e.g. `Featured`.
        #[clap(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,

        /// Output results as JSON instead of summary lines.
        #[clap(long)]
        json: bool,

        /// Print per-record validation failures.
        #[clap(long, short)]
        verbose: bool,
    },

    /// Scrape payout tables for specific contests.
    Payouts {
        /// Contest IDs (comma-separated).
        #[clap(long, value_delimiter = ',', required = true)]
        contest_ids: Vec<ContestId>,

        /// Output results as JSON instead of summary lines.
        #[clap(long)]
        json: bool,

        /// Print per-record validation failures.
        #[clap(long, short)]
        verbose: bool,
    },

    /// Scrape draftable player salaries for specific draft groups.
    PlayerSalaries {
        /// Draft group IDs (comma-separated).
        #[clap(long, value_delimiter = ',', required = true)]
        draft_group_ids: Vec<DraftGroupId>,

        /// Output results as JSON instead of summary lines.
        #[clap(long)]
        json: bool,

        /// Print per-record validation failures.
        #[clap(long, short)]
        verbose: bool,
    },

    /// Scrape the sports catalog.
    Sports {
        /// Output results as JSON instead of summary lines.
        #[clap(long)]
        json: bool,

        /// Print per-record validation failures.
        #[clap(long, short)]
        verbose: bool,
    },

    /// Download and parse contest standings exports (requires login).
    ///
    /// Needs `DK_EMAIL`/`DK_PASSWORD`, a WebDriver endpoint
    /// (`DK_WEBDRIVER_URL`), and the `DOWNLOAD_DIRECTORY`/`CSV_DIRECTORY`
    /// directory tree.
    Entries {
        /// Contest IDs to download (comma-separated).
        #[clap(long, value_delimiter = ',')]
        contest_ids: Option<Vec<ContestId>>,

        /// Parse files already in the staging directory instead of driving
        /// the browser (recovery after an interrupted run).
        #[clap(long)]
        reuse_downloads: bool,

        /// Output results as JSON instead of summary lines.
        #[clap(long)]
        json: bool,

        /// Print per-contest progress.
        #[clap(long, short)]
        verbose: bool,
    },

    /// Download and parse the account's contest entry history (requires
    /// login).
    EntryHistory {
        /// Seconds to wait for the export before moving it.
        #[clap(long, default_value_t = 120)]
        wait_secs: u64,

        /// Parse the existing CSV instead of downloading a fresh one.
        #[clap(long)]
        skip_download: bool,

        /// Output results as JSON instead of summary lines.
        #[clap(long)]
        json: bool,

        /// Print per-record validation failures.
        #[clap(long, short)]
        verbose: bool,
    },
}
