//! End-to-end tests for the CSV export flows: standings staging/sorting and
//! the entry history parser, with real files on disk.

use std::fs;

use tempfile::tempdir;

use dk_scrape::core::config::DownloadDirs;
use dk_scrape::core::fs::move_file;
use dk_scrape::scrape::entries::process_staged;
use dk_scrape::scrape::entry_history::{parse_history_csv, HISTORY_FILE_NAME};
use dk_scrape::scrape::player_salaries::parse_salary_csv;
use dk_scrape::{ContestId, DraftGroupId, EntryId};

const STANDINGS_CSV: &str = "\
Rank,EntryId,EntryName,TimeRemaining,Points,Lineup,,Player,Roster Position,%Drafted,FPTS
1,4444444444,dfsking (1/3),0,198.5,QB Josh Allen FLEX Saquon Barkley,,Josh Allen,QB,35.2%,24.3
2,5555555555,casual,0,150.1,QB Dak Prescott FLEX CeeDee Lamb,,Saquon Barkley,RB,22.1%,21.1
3,6666666666,dfsking (2/3),0,141.0,QB Josh Allen FLEX CeeDee Lamb,,CeeDee Lamb,WR,18.4%,17.9
";

fn make_dirs(root: &std::path::Path) -> DownloadDirs {
    let dirs = DownloadDirs {
        browser: root.join("browser"),
        root: root.join("csv"),
    };
    fs::create_dir_all(&dirs.browser).unwrap();
    fs::create_dir_all(dirs.staging()).unwrap();
    fs::create_dir_all(dirs.imported()).unwrap();
    fs::create_dir_all(dirs.failed()).unwrap();
    dirs
}

#[test]
fn standings_files_flow_from_staging_to_imported_or_failed() {
    let tmp = tempdir().unwrap();
    let dirs = make_dirs(tmp.path());

    fs::write(
        dirs.staging().join("contest-standings-170000001.csv"),
        STANDINGS_CSV,
    )
    .unwrap();
    fs::write(dirs.staging().join("contest-standings-170000002.csv"), "").unwrap();

    let outcome = process_staged(&dirs, false).unwrap();

    // Parsed file moved to imported, empty one to failed
    assert!(dirs
        .imported()
        .join("contest-standings-170000001.csv")
        .exists());
    assert!(dirs
        .failed()
        .join("contest-standings-170000002.csv")
        .exists());
    assert!(!dirs
        .staging()
        .join("contest-standings-170000001.csv")
        .exists());

    assert_eq!(outcome.successful, vec![ContestId::new(170000001)]);
    assert_eq!(outcome.failed.len(), 1);

    let results = &outcome.contests[&ContestId::new(170000001)];
    assert_eq!(results.entries.len(), 3);
    assert_eq!(results.player_results.len(), 3);

    // Multi-entry notation parsed out of the entry names
    let multi = &results.entries[2];
    assert_eq!(multi.entry_name, "dfsking");
    assert_eq!(multi.entry_number, 2);
    assert_eq!(multi.total_entries, 3);
    assert_eq!(multi.entry_id, EntryId::new(6666666666));
}

#[test]
fn reprocessing_moved_files_yields_identical_records() {
    let tmp = tempdir().unwrap();
    let dirs = make_dirs(tmp.path());
    let name = "contest-standings-170000001.csv";

    fs::write(dirs.staging().join(name), STANDINGS_CSV).unwrap();
    let first = process_staged(&dirs, false).unwrap();

    move_file(name, &dirs.imported(), &dirs.staging()).unwrap();
    let second = process_staged(&dirs, false).unwrap();

    let a = &first.contests[&ContestId::new(170000001)];
    let b = &second.contests[&ContestId::new(170000001)];
    assert_eq!(a.entries, b.entries);
    assert_eq!(a.player_results, b.player_results);
}

#[test]
fn unrelated_files_stay_in_staging() {
    let tmp = tempdir().unwrap();
    let dirs = make_dirs(tmp.path());

    fs::write(dirs.staging().join("notes.csv"), "a,b\n1,2\n").unwrap();
    let outcome = process_staged(&dirs, false).unwrap();

    assert!(outcome.contests.is_empty());
    assert!(dirs.staging().join("notes.csv").exists());
}

#[test]
fn history_csv_parses_and_skips_league_rows() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join(HISTORY_FILE_NAME);
    fs::write(
        &path,
        "\
Sport,Game_Type,Entry_Key,Entry,Contest_Key,Contest_Date_EST,Place,Points,Winnings_Non_Ticket,Winnings_Ticket,Contest_Entries,Entry_Fee,Prize_Pool,Places_Paid
NFL,Classic,4444444444,$200K Flea Flicker,170000001,2025-09-07 13:00:00,12,198.5,\"$1,000.00\",$0.00,11750,$20.00,\"$200,000.00\",2400
NFL,Showdown,5555555555,alice vs. bob ($5),170000002,2025-09-08 20:15:00,1,151.2,$9.00,$0.00,2,$5.00,$9.00,1
NFL,Classic,6666666666,Tuesday League Night,170000003,2025-09-09 19:00:00,4,100.0,$0.00,$0.00,12,$1.00,$10.00,3
NFL,Classic,bad-key,Broken Row,170000004,2025-09-09 19:00:00,4,100.0,$0.00,$0.00,12,$1.00,$10.00,3
",
    )
    .unwrap();

    let outcome = parse_history_csv(&path, Some("alice")).unwrap();

    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.failures.len(), 1);

    let gpp = &outcome.records[0];
    assert_eq!(gpp.contest_id, ContestId::new(170000001));
    assert_eq!(gpp.winnings_non_ticket, 1000.0);
    assert_eq!(gpp.prize_pool, 200_000.0);
    assert_eq!(gpp.places_paid, 2400);
    assert!(gpp.opponent.is_none());

    let h2h = &outcome.records[1];
    assert_eq!(h2h.opponent.as_deref(), Some("bob"));
    assert_eq!(h2h.entry_fee, 5.0);
}

#[test]
fn salary_csv_round_trips_through_the_same_ids() {
    let csv = "\
Position,Name + ID,Name,ID,Roster Position,Salary,Game Info,TeamAbbrev,AvgPointsPerGame
QB,Josh Allen (11111111),Josh Allen,11111111,QB,8200,BUF@MIA 09/07/2025 01:00PM ET,BUF,24.3
RB,Saquon Barkley (22222222),Saquon Barkley,22222222,RB/FLEX,7800,PHI@DAL 09/07/2025 04:25PM ET,PHI,21.1
WR,CeeDee Lamb (33333333),CeeDee Lamb,33333333,WR/FLEX,7600,PHI@DAL 09/07/2025 04:25PM ET,DAL,19.8
";
    let outcome = parse_salary_csv(DraftGroupId::new(501), csv);

    assert_eq!(outcome.records.len(), 3);
    assert!(outcome.failures.is_empty());
    assert!(outcome
        .records
        .iter()
        .all(|p| p.draft_group_id == DraftGroupId::new(501)));

    let again = parse_salary_csv(DraftGroupId::new(501), csv);
    assert_eq!(outcome.records, again.records);
}
