//! Sports catalog scraping.

use crate::core::http::RetryClient;
use crate::dk::types::SportsEnvelope;
use crate::dk::urls::SPORTS_URL;
use crate::error::Result;
use crate::models::SportInfo;

use super::{ParseOutcome, ValidationFailure};

/// Fetch the sports catalog and return validated entries.
pub async fn scrape_sports(client: &RetryClient) -> Result<ParseOutcome<SportInfo>> {
    let envelope: SportsEnvelope = client.get_json(SPORTS_URL).await?;
    Ok(parse_sports(&envelope))
}

pub fn parse_sports(envelope: &SportsEnvelope) -> ParseOutcome<SportInfo> {
    let mut outcome = ParseOutcome::new();

    for raw in &envelope.sports {
        match SportInfo::from_raw(raw) {
            Ok(sport) => outcome.records.push(sport),
            Err(err) => outcome
                .failures
                .push(ValidationFailure::from_error(raw.sport_id, &err)),
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sports() {
        let envelope: SportsEnvelope = serde_json::from_str(
            r#"{"sports": [
                {"sportId": 1, "fullName": "Football", "regionAbbreviatedSportName": "NFL",
                 "hasPublicContests": true, "isEnabled": true},
                {"sportId": 2, "fullName": "Baseball", "regionAbbreviatedSportName": "MLB",
                 "hasPublicContests": true, "isEnabled": true},
                {"sportId": 0}
            ]}"#,
        )
        .unwrap();

        let outcome = parse_sports(&envelope);
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.skipped(), 1);
        assert_eq!(outcome.records[0].full_name.as_deref(), Some("Football"));
    }
}
