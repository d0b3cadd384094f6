//! Payout scraping from contest draft pages.
//!
//! The payout table is not served by a JSON endpoint; it ships embedded in a
//! script tag on the contest draft page as part of `window.mvcVars.contests`.
//! We locate the script with an HTML parser and cut the `contestDetail`
//! object out with a regex, the same way the page's own JS reads it.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::cli::types::ContestId;
use crate::core::http::RetryClient;
use crate::dk::types::{ContestDetailEnvelope, RawContestDetail};
use crate::dk::urls::draft_page_url;
use crate::models::Payout;

use super::{is_not_found, ParseOutcome, ValidationFailure};

const MVC_VARS_MARKER: &str = "window.mvcVars.contests";

static CONTEST_DETAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)"contestDetail":(.*?),"errorStatus":"#).expect("contest detail regex")
});

/// Scrape payout tables for the given contests, sequentially.
///
/// Per-contest problems (404 for expired contests, missing payout blob,
/// malformed tiers) are recorded as failures and the loop continues.
pub async fn scrape_payouts(
    client: &RetryClient,
    contest_ids: &[ContestId],
) -> ParseOutcome<Payout> {
    let mut outcome = ParseOutcome::new();

    for &contest_id in contest_ids {
        let html = match client.get_text(&draft_page_url(contest_id)).await {
            Ok(html) => html,
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

        match extract_contest_detail(&html) {
            Some(detail) => {
                let parsed = parse_payout_steps(contest_id, &detail);
                outcome.records.extend(parsed.records);
                outcome.failures.extend(parsed.failures);
            }
            None => {
                outcome.failures.push(ValidationFailure::new(
                    contest_id,
                    "draft page has no embedded contest detail",
                ));
            }
        }
    }

    outcome
}

/// Pull the embedded `contestDetail` object out of a draft page.
pub fn extract_contest_detail(html: &str) -> Option<RawContestDetail> {
    let document = Html::parse_document(html);
    let scripts = Selector::parse("script").ok()?;

    for script in document.select(&scripts) {
        let text: String = script.text().collect();
        if !text.contains(MVC_VARS_MARKER) {
            continue;
        }

        let captures = CONTEST_DETAIL_RE.captures(&text)?;
        let json = format!("{{\"contestDetail\":{}}}", &captures[1]);
        let envelope: ContestDetailEnvelope = serde_json::from_str(&json).ok()?;
        return envelope.contest_detail;
    }

    None
}

/// Expand a contest detail's payout summary into validated payout records.
pub fn parse_payout_steps(
    contest_id: ContestId,
    detail: &RawContestDetail,
) -> ParseOutcome<Payout> {
    let mut outcome = ParseOutcome::new();

    for step in &detail.payout_summary {
        match Payout::from_step(contest_id, step) {
            Ok(payout) => outcome.records.push(payout),
            Err(err) => outcome
                .failures
                .push(ValidationFailure::from_error(contest_id, &err)),
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRAFT_PAGE: &str = r#"<html><head>
        <script>var unrelated = 1;</script>
        <script>
            window.mvcVars = window.mvcVars || {};
            window.mvcVars.contests = {"contestDetail":{"name":"NFL $100K Play-Action",
                "payoutSummary":[
                    {"minPosition":1,"maxPosition":1,"tierPayoutDescriptions":{"Cash":"$20,000.00"}},
                    {"minPosition":2,"maxPosition":2,"tierPayoutDescriptions":{"Cash":"$10,000.00"}},
                    {"minPosition":3,"maxPosition":10,"tierPayoutDescriptions":{"Cash":"$1,000.00"}}
                ]},"errorStatus":{}};
        </script>
    </head><body></body></html>"#;

    #[test]
    fn test_extract_contest_detail_from_draft_page() {
        let detail = extract_contest_detail(DRAFT_PAGE).unwrap();
        assert_eq!(detail.name.as_deref(), Some("NFL $100K Play-Action"));
        assert_eq!(detail.payout_summary.len(), 3);
    }

    #[test]
    fn test_extract_returns_none_without_marker() {
        assert!(extract_contest_detail("<html><script>var x = 1;</script></html>").is_none());
    }

    #[test]
    fn test_parse_payout_steps() {
        let detail = extract_contest_detail(DRAFT_PAGE).unwrap();
        let outcome = parse_payout_steps(ContestId::new(42), &detail);

        assert_eq!(outcome.records.len(), 3);
        assert!(outcome.failures.is_empty());
        assert_eq!(outcome.records[0].first_tier.as_ref().unwrap().value, 20000.0);
        assert_eq!(outcome.records[2].min_position, 3);
        assert_eq!(outcome.records[2].max_position, 10);
    }

    #[test]
    fn test_payout_totals_stay_within_prize_pool() {
        // 20k + 10k + 8 * 1k = 38k on a 100k advertised pool
        let detail = extract_contest_detail(DRAFT_PAGE).unwrap();
        let outcome = parse_payout_steps(ContestId::new(42), &detail);

        let total: f64 = outcome.records.iter().map(|p| p.cash_total()).sum();
        assert_eq!(total, 38000.0);
        assert!(total <= 100_000.0);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let detail = extract_contest_detail(DRAFT_PAGE).unwrap();
        let first = parse_payout_steps(ContestId::new(42), &detail);
        let second = parse_payout_steps(ContestId::new(42), &detail);
        assert_eq!(first.records, second.records);
    }
}
