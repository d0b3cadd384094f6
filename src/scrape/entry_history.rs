//! Account-level contest entry history download and parsing.

use std::path::Path;
use std::time::Duration;

use crate::browser::DownloadSession;
use crate::cli::types::{ContestId, EntryId};
use crate::core::config::DownloadDirs;
use crate::core::fs::move_file;
use crate::dk::urls::CONTEST_HISTORY_CSV_URL;
use crate::error::{DkError, Result};
use crate::models::EntryHistoryRecord;

use super::{ParseOutcome, ValidationFailure};

/// DraftKings always names the export the same way.
pub const HISTORY_FILE_NAME: &str = "draftkings-contest-entry-history.csv";

/// The history export is generated server-side and can take a while; the
/// original flow waited a fixed two minutes.
pub const DEFAULT_HISTORY_WAIT: Duration = Duration::from_secs(120);

const REQUIRED_COLUMNS: [&str; 14] = [
    "Sport",
    "Game_Type",
    "Entry_Key",
    "Entry",
    "Contest_Key",
    "Contest_Date_EST",
    "Place",
    "Points",
    "Winnings_Non_Ticket",
    "Winnings_Ticket",
    "Contest_Entries",
    "Entry_Fee",
    "Prize_Pool",
    "Places_Paid",
];

/// Download the history CSV through the session, wait the fixed interval,
/// move the file out of the browser directory, and parse it.
pub async fn scrape_entry_history(
    session: &mut DownloadSession,
    dirs: &DownloadDirs,
    wait: Duration,
    username: Option<&str>,
) -> Result<ParseOutcome<EntryHistoryRecord>> {
    session.trigger_download(CONTEST_HISTORY_CSV_URL).await?;
    tokio::time::sleep(wait).await;

    if !dirs.browser.join(HISTORY_FILE_NAME).exists() {
        return Err(DkError::DownloadTimeout {
            pattern: HISTORY_FILE_NAME.to_string(),
            dir: dirs.browser.clone(),
            timeout: wait,
        });
    }

    move_file(HISTORY_FILE_NAME, &dirs.browser, &dirs.root)?;
    session.complete_move()?;

    let outcome = parse_history_csv(&dirs.root.join(HISTORY_FILE_NAME), username)?;
    session.complete_parse()?;
    Ok(outcome)
}

/// Parse a contest entry history CSV.
///
/// `League` entries are skipped outright; rows that fail to parse are
/// recorded as failures keyed by their entry key.
pub fn parse_history_csv(
    path: &Path,
    username: Option<&str>,
) -> Result<ParseOutcome<EntryHistoryRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let column = |name: &str| headers.iter().position(|h| h == name);
    let mut indexes = std::collections::HashMap::new();
    for name in REQUIRED_COLUMNS {
        match column(name) {
            Some(i) => {
                indexes.insert(name, i);
            }
            None => {
                return Err(DkError::validation(
                    "entry_history",
                    path.display(),
                    format!("history CSV is missing the {name:?} column"),
                ))
            }
        }
    }

    let mut outcome = ParseOutcome::new();

    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                outcome
                    .failures
                    .push(ValidationFailure::new("row", err.to_string()));
                continue;
            }
        };

        let entry_text = record.get(indexes["Entry"]).unwrap_or("").trim();
        if entry_text.contains("League") {
            continue;
        }

        match parse_history_row(&record, &indexes, entry_text, username) {
            Ok(entry) => outcome.records.push(entry),
            Err(message) => {
                let entry_key = record.get(indexes["Entry_Key"]).unwrap_or("").to_string();
                outcome
                    .failures
                    .push(ValidationFailure::new(entry_key, message));
            }
        }
    }

    Ok(outcome)
}

fn parse_history_row(
    record: &csv::StringRecord,
    indexes: &std::collections::HashMap<&'static str, usize>,
    entry_text: &str,
    username: Option<&str>,
) -> std::result::Result<EntryHistoryRecord, String> {
    let field = |name: &str| record.get(indexes[name]).unwrap_or("").trim();
    let parse_u32 = |name: &str| {
        field(name)
            .parse::<u32>()
            .map_err(|_| format!("unparseable {name} {:?}", field(name)))
    };
    let parse_f64 = |name: &str| {
        field(name)
            .parse::<f64>()
            .map_err(|_| format!("unparseable {name} {:?}", field(name)))
    };
    let parse_u64 = |name: &str| {
        field(name)
            .parse::<u64>()
            .map_err(|_| format!("unparseable {name} {:?}", field(name)))
    };
    let money = |name: &str| {
        parse_money(field(name)).ok_or_else(|| format!("unparseable {name} {:?}", field(name)))
    };

    Ok(EntryHistoryRecord {
        entry_id: EntryId::new(parse_u64("Entry_Key")?),
        contest_id: ContestId::new(parse_u64("Contest_Key")?),
        sport: field("Sport").to_string(),
        game_type: field("Game_Type").to_string(),
        entry: entry_text.to_string(),
        opponent: parse_opponent(entry_text, username),
        contest_date_est: field("Contest_Date_EST").to_string(),
        lineup_rank: parse_u32("Place")?,
        points: parse_f64("Points")?,
        winnings_non_ticket: money("Winnings_Non_Ticket")?,
        winnings_ticket: money("Winnings_Ticket")?,
        contest_entries: parse_u32("Contest_Entries")?,
        entry_fee: money("Entry_Fee")?,
        prize_pool: money("Prize_Pool")?,
        places_paid: parse_u32("Places_Paid")?,
    })
}

/// Strip `$` and thousands separators from a money field.
pub fn parse_money(raw: &str) -> Option<f64> {
    raw.replace(['$', ','], "").trim().parse().ok()
}

/// Derive the head-to-head opponent from an entry description such as
/// `"alice vs. bob ($5)"`. Only works when the account's own username is
/// known and present in the text.
pub fn parse_opponent(entry_text: &str, username: Option<&str>) -> Option<String> {
    let username = username?;
    if username.is_empty() || !entry_text.contains(username) || entry_text.contains("League") {
        return None;
    }

    let matchup = entry_text.split('(').next().unwrap_or(entry_text);
    let mut sides = matchup.split(" vs.");
    let first = sides.next().unwrap_or("");
    let second = sides.next().unwrap_or("");

    let opponent = if first.contains(username) {
        second.replace(' ', "")
    } else {
        first.split_whitespace().last().unwrap_or("").to_string()
    };

    if opponent.is_empty() {
        None
    } else {
        Some(opponent)
    }
}
