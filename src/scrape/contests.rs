//! Contest scraping: lobby parsing plus the per-contest status refresh.

use crate::cli::types::{ContestId, DraftGroupId};
use crate::core::http::RetryClient;
use crate::dk::types::ContestDetailEnvelope;
use crate::dk::urls::contest_detail_url;
use crate::dk::LobbySnapshot;
use crate::models::{Contest, ContestStatus};

use super::{is_not_found, ParseOutcome, ValidationFailure};

/// Contest name fragments that are never worth tracking.
const EXCLUDED_NAME_TOKENS: [&str; 3] = ["satellite", "supersat", "reignmakers"];

/// Small-field cutoff: contests at or under this size need a real entry fee.
const SMALL_FIELD_MAX_ENTRIES: u32 = 100;
const SMALL_FIELD_MAX_FEE: f64 = 25.0;

#[derive(Debug, Clone, Default)]
pub struct ContestFilter {
    /// Restrict to contests drafting from these groups.
    pub draft_group_ids: Option<Vec<DraftGroupId>>,
}

/// Parse and filter the snapshot's contests.
///
/// Inclusion rules: guaranteed contests only; excluded name tokens skipped;
/// small fields need an entry fee above the cutoff; double-ups and
/// fifty-fifties must be bigger than the small-field cutoff.
pub fn parse_contests(lobby: &LobbySnapshot, filter: &ContestFilter) -> ParseOutcome<Contest> {
    let mut outcome = ParseOutcome::new();

    for raw in lobby.contests() {
        if let Some(ids) = &filter.draft_group_ids {
            if !ids.contains(&DraftGroupId::new(raw.draft_group_id)) {
                continue;
            }
        }

        let name = raw.name.to_lowercase();
        if EXCLUDED_NAME_TOKENS.iter().any(|t| name.contains(t)) {
            continue;
        }

        let contest = match Contest::from_raw(lobby.sport(), raw) {
            Ok(contest) => contest,
            Err(err) => {
                outcome.failures.push(ValidationFailure::from_error(raw.id, &err));
                continue;
            }
        };

        if !contest.guaranteed {
            continue;
        }
        if contest.max_entries <= SMALL_FIELD_MAX_ENTRIES && contest.entry_fee <= SMALL_FIELD_MAX_FEE
        {
            continue;
        }
        if (contest.double_up || contest.fifty_fifty)
            && contest.max_entries <= SMALL_FIELD_MAX_ENTRIES
        {
            continue;
        }

        outcome.records.push(contest);
    }

    outcome
}

/// IDs of parsed contests, in lobby order.
pub fn contest_ids(contests: &[Contest]) -> Vec<ContestId> {
    contests.iter().map(|c| c.contest_id).collect()
}

/// Refresh status (final/cancelled/start time) for the given contests.
///
/// Requests run sequentially; 404s (expired contests) and malformed replies
/// are recorded as failures and the loop continues.
pub async fn fetch_contest_statuses(
    client: &RetryClient,
    contest_ids: &[ContestId],
) -> ParseOutcome<ContestStatus> {
    let mut outcome = ParseOutcome::new();

    for &contest_id in contest_ids {
        let envelope: ContestDetailEnvelope =
            match client.get_json(&contest_detail_url(contest_id)).await {
                Ok(envelope) => envelope,
                Err(err) if is_not_found(&err) => {
                    outcome
                        .failures
                        .push(ValidationFailure::new(contest_id, "contest not found (404)"));
                    continue;
                }
                Err(err) => {
                    outcome
                        .failures
                        .push(ValidationFailure::from_error(contest_id, &err));
                    continue;
                }
            };

        match envelope.contest_detail {
            Some(detail) => {
                outcome
                    .records
                    .push(ContestStatus::from_detail(contest_id, &detail));
            }
            None => {
                outcome.failures.push(ValidationFailure::new(
                    contest_id,
                    "response has no contestDetail",
                ));
            }
        }
    }

    outcome
}
