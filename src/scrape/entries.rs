//! Contest standings downloads: entries and player ownership per contest.
//!
//! Standings CSVs only exist behind a logged-in session. The flow drives a
//! [`DownloadSession`] per contest ID, stages each export, then parses every
//! staged file: parsed files move to the imported directory, empty or
//! unreadable ones to the failed directory with a recorded reason.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::browser::DownloadSession;
use crate::cli::types::{ContestId, EntryId};
use crate::core::config::DownloadDirs;
use crate::core::fs::{clear_csv_files, csv_files_matching, move_file, remove_partial_downloads};
use crate::dk::urls::standings_csv_url;
use crate::error::{DkError, Result};
use crate::models::{ContestEntry, PlayerResult};

pub const STANDINGS_FILE_FRAGMENT: &str = "contest-standings";

/// Per-contest download wait; standings exports are small but the site can
/// queue them for a while on busy slates.
pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

// Standings CSV column layout (the export carries no usable header names).
const COL_RANK: usize = 0;
const COL_ENTRY_ID: usize = 1;
const COL_ENTRY_NAME: usize = 2;
const COL_POINTS: usize = 4;
const COL_LINEUP: usize = 5;
const COL_EMPTY: usize = 6;
const COL_PLAYER: usize = 7;
const COL_ROSTER_POSITION: usize = 8;
const COL_PERCENT_DRAFTED: usize = 9;
const COL_FPTS: usize = 10;

/// Parsed rows for one contest.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContestResults {
    pub entries: Vec<ContestEntry>,
    pub player_results: Vec<PlayerResult>,
    /// Reasons for rows that could not be parsed.
    pub row_failures: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FailedContest {
    pub contest_id: ContestId,
    pub reason: String,
}

/// Aggregate result of an entries run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EntriesOutcome {
    pub contests: BTreeMap<ContestId, ContestResults>,
    pub successful: Vec<ContestId>,
    pub failed: Vec<FailedContest>,
}

/// Full authenticated flow: download each contest's standings export, stage
/// it, parse everything staged, and sort files into imported/failed.
pub async fn scrape_entries(
    session: &mut DownloadSession,
    dirs: &DownloadDirs,
    contest_ids: &[ContestId],
    verbose: bool,
) -> Result<EntriesOutcome> {
    dirs.validate()?;

    let download_failures = download_standings(session, dirs, contest_ids, verbose).await?;
    session.complete_move()?;

    let mut outcome = process_staged(dirs, verbose)?;
    outcome.failed.extend(download_failures);
    session.complete_parse()?;

    Ok(outcome)
}

/// Download standings exports into the staging directory.
///
/// Contests already staged are skipped. A per-contest download timeout is
/// recorded and the loop continues; browser command failures are terminal.
pub async fn download_standings(
    session: &mut DownloadSession,
    dirs: &DownloadDirs,
    contest_ids: &[ContestId],
    verbose: bool,
) -> Result<Vec<FailedContest>> {
    clear_csv_files(&dirs.imported())?;
    clear_csv_files(&dirs.failed())?;

    let mut pending: Vec<ContestId> = contest_ids.to_vec();
    for path in csv_files_matching(&dirs.staging(), STANDINGS_FILE_FRAGMENT)? {
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if let Some(staged_id) = contest_id_from_filename(name) {
                pending.retain(|id| *id != staged_id);
            }
        }
    }

    if pending.is_empty() {
        if verbose {
            println!("No new contests to download.");
        }
        return Ok(Vec::new());
    }

    let mut failed = Vec::new();
    let total = pending.len();
    for (i, contest_id) in pending.into_iter().enumerate() {
        if verbose {
            println!("Downloading contest {}/{}: {}", i + 1, total, contest_id);
        }

        session
            .trigger_download(&standings_csv_url(contest_id))
            .await?;

        let fragment = format!("{STANDINGS_FILE_FRAGMENT}-{contest_id}");
        match session.wait_for_download(&fragment, DOWNLOAD_TIMEOUT).await {
            Ok(name) => {
                move_file(&name, &dirs.browser, &dirs.staging())?;
            }
            Err(DkError::DownloadTimeout { .. }) => {
                if verbose {
                    println!("⚠ Contest {contest_id} download timed out");
                }
                failed.push(FailedContest {
                    contest_id,
                    reason: "download did not complete before timeout".to_string(),
                });
            }
            Err(err) => return Err(err),
        }
    }

    let removed = remove_partial_downloads(&dirs.browser)?;
    if verbose && !removed.is_empty() {
        println!("Removed {} incomplete downloads", removed.len());
    }

    Ok(failed)
}

/// Parse every standings export in the staging directory.
///
/// Used both after a download run and standalone to reprocess files left
/// behind by an interrupted run.
pub fn process_staged(dirs: &DownloadDirs, verbose: bool) -> Result<EntriesOutcome> {
    let mut outcome = EntriesOutcome::default();

    for path in csv_files_matching(&dirs.staging(), STANDINGS_FILE_FRAGMENT)? {
        let Some(name) = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
        else {
            continue;
        };
        let Some(contest_id) = contest_id_from_filename(&name) else {
            if verbose {
                println!("⚠ Could not parse a contest ID from {name}; leaving file in place");
            }
            continue;
        };

        let text = std::fs::read_to_string(&path)?;
        match parse_standings_csv(contest_id, &text) {
            Ok(results) => {
                for reason in &results.row_failures {
                    outcome.failed.push(FailedContest {
                        contest_id,
                        reason: reason.clone(),
                    });
                }
                outcome.contests.insert(contest_id, results);
                move_file(&name, &dirs.staging(), &dirs.imported())?;
                outcome.successful.push(contest_id);
            }
            Err(reason) => {
                move_file(&name, &dirs.staging(), &dirs.failed())?;
                outcome.failed.push(FailedContest { contest_id, reason });
            }
        }
    }

    Ok(outcome)
}

/// Parse one standings CSV. Errors mean the whole file is unusable (empty
/// export); individual bad rows are kept as `row_failures`.
pub fn parse_standings_csv(
    contest_id: ContestId,
    text: &str,
) -> std::result::Result<ContestResults, String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = reader.records();
    if rows.next().is_none() {
        return Err("contest csv is empty".to_string());
    }

    let mut results = ContestResults::default();
    let mut saw_data = false;

    for record in rows {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                results.row_failures.push(err.to_string());
                continue;
            }
        };
        saw_data = true;
        parse_standings_row(contest_id, &record, &mut results);
    }

    if !saw_data {
        return Err("contest csv has no data rows".to_string());
    }

    Ok(results)
}

fn parse_standings_row(contest_id: ContestId, record: &csv::StringRecord, out: &mut ContestResults) {
    let field = |i: usize| record.get(i).unwrap_or("");

    let entry_id_raw = field(COL_ENTRY_ID).trim();
    if !entry_id_raw.is_empty() {
        match parse_entry(contest_id, record) {
            Ok(entry) => out.entries.push(entry),
            Err(message) => out
                .row_failures
                .push(format!("entry {entry_id_raw}: {message}")),
        }
    }

    let player = field(COL_PLAYER).trim();
    if !player.is_empty() {
        match parse_player_result(contest_id, record) {
            Ok(result) => out.player_results.push(result),
            Err(message) => out.row_failures.push(format!("player {player}: {message}")),
        }
    }

    let stray = field(COL_EMPTY).trim();
    if !stray.is_empty() {
        out.row_failures
            .push(format!("reserved column unexpectedly holds {stray:?}"));
    }
}

fn parse_entry(
    contest_id: ContestId,
    record: &csv::StringRecord,
) -> std::result::Result<ContestEntry, String> {
    let field = |i: usize| record.get(i).unwrap_or("");

    // Entry IDs and ranks arrive in scientific notation for large contests,
    // so parse through f64 first.
    let entry_id = field(COL_ENTRY_ID)
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("unparseable entry id {:?}", field(COL_ENTRY_ID)))? as u64;
    let lineup_rank = field(COL_RANK)
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("unparseable rank {:?}", field(COL_RANK)))? as u32;
    let points = field(COL_POINTS)
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("unparseable points {:?}", field(COL_POINTS)))?;

    let (entry_name, entry_number, total_entries) = split_entry_name(field(COL_ENTRY_NAME));
    let lineup = field(COL_LINEUP);

    Ok(ContestEntry {
        contest_id,
        entry_id: EntryId::new(entry_id),
        entry_name,
        entry_number,
        total_entries,
        lineup_rank,
        points,
        lineup: if lineup.is_empty() {
            None
        } else {
            Some(lineup.to_string())
        },
    })
}

fn parse_player_result(
    contest_id: ContestId,
    record: &csv::StringRecord,
) -> std::result::Result<PlayerResult, String> {
    let field = |i: usize| record.get(i).unwrap_or("");

    let percent_raw = field(COL_PERCENT_DRAFTED).trim();
    let percent_drafted = percent_raw
        .trim_end_matches('%')
        .parse::<f64>()
        .map_err(|_| format!("unparseable percent drafted {percent_raw:?}"))?;
    let fpts = field(COL_FPTS)
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("unparseable fpts {:?}", field(COL_FPTS)))?;

    Ok(PlayerResult {
        contest_id,
        player: field(COL_PLAYER).trim().to_string(),
        roster_position: field(COL_ROSTER_POSITION).trim().to_string(),
        percent_drafted,
        fpts,
    })
}

/// Split a standings entry name: `"user (2/5)"` means entry 2 of the user's
/// 5; a bare name is their only entry.
pub fn split_entry_name(raw: &str) -> (String, u32, u32) {
    if let Some((user, rest)) = raw.split_once('(') {
        let rest = rest.trim_end().trim_end_matches(')');
        if let Some((entry, total)) = rest.split_once('/') {
            if let (Ok(entry), Ok(total)) = (entry.trim().parse(), total.trim().parse()) {
                return (user.trim().to_string(), entry, total);
            }
        }
    }
    (raw.trim().to_string(), 1, 1)
}

/// Contest ID from an export file name such as
/// `contest-standings-170212345.csv` (duplicate-download suffixes like
/// ` (1)` are tolerated).
pub fn contest_id_from_filename(name: &str) -> Option<ContestId> {
    let tail = name.rsplit('-').next()?;
    let tail = tail.split('.').next()?;
    let tail = tail.split(' ').next()?;
    tail.trim().parse::<u64>().ok().map(ContestId::new)
}
