//! DraftKings endpoint URLs.

use crate::cli::types::{ContestId, DraftGroupId, Sport};

pub const SPORTS_URL: &str = "https://api.draftkings.com/sites/US-DK/sports/v1/sports?format=json";

pub const LOGIN_URL: &str = "https://myaccount.draftkings.com/login?returnPath=%2flobby";

pub const CONTEST_HISTORY_CSV_URL: &str =
    "https://www.draftkings.com/mycontests/historycsv?sortField=ContestEndDate&sortOrder=Desc&searchTerm=";

/// Lobby envelope for one sport: contests, draft groups, game types, game sets.
pub fn lobby_url(sport: &Sport) -> String {
    format!("https://www.draftkings.com/lobby/getcontests?sport={sport}")
}

/// Contest detail JSON (state, start time, max entries).
pub fn contest_detail_url(contest_id: ContestId) -> String {
    format!("https://api.draftkings.com/contests/v1/contests/{contest_id}?format=json")
}

/// Contest draft page; the payout table is embedded in a script tag.
pub fn draft_page_url(contest_id: ContestId) -> String {
    format!("https://www.draftkings.com/draft/contest/{contest_id}")
}

/// Draftable-players CSV for a draft group.
pub fn draftable_csv_url(draft_group_id: DraftGroupId) -> String {
    format!("https://www.draftkings.com/bulklineup/getdraftablecsv?draftGroupId={draft_group_id}")
}

/// Full-standings CSV export for a contest (authenticated).
pub fn standings_csv_url(contest_id: ContestId) -> String {
    format!("https://www.draftkings.com/contest/exportfullstandingscsv/{contest_id}")
}
