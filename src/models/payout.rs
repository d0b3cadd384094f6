//! Validated payout records.

use serde::{Deserialize, Serialize};

use crate::cli::types::ContestId;
use crate::dk::types::RawPayoutStep;
use crate::error::{DkError, Result};

/// One tier of a payout step (`Cash`, `Ticket`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutTier {
    pub kind: String,
    /// Dollar value; ticket tiers are carried as 0.
    pub value: f64,
}

/// Prize for one finishing-position range of a contest.
///
/// Keyed by (contest_id, min_position, max_position).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub contest_id: ContestId,
    pub min_position: u32,
    pub max_position: u32,
    /// Raw tier description map as JSON text.
    pub original_tier: Option<String>,
    pub first_tier: Option<PayoutTier>,
    pub second_tier: Option<PayoutTier>,
}

impl Payout {
    pub fn from_step(contest_id: ContestId, step: &RawPayoutStep) -> Result<Self> {
        if step.min_position == 0 {
            return Err(DkError::validation(
                "payout",
                contest_id,
                "positions are 1-based",
            ));
        }
        if step.max_position < step.min_position {
            return Err(DkError::validation(
                "payout",
                contest_id,
                format!(
                    "max position {} below min position {}",
                    step.max_position, step.min_position
                ),
            ));
        }

        let mut tiers = step.tier_payout_descriptions.iter();
        let first_tier = tiers
            .next()
            .map(|(kind, value)| PayoutTier::parse(contest_id, kind, value))
            .transpose()?;
        let second_tier = tiers
            .next()
            .map(|(kind, value)| PayoutTier::parse(contest_id, kind, value))
            .transpose()?;

        Ok(Self {
            contest_id,
            min_position: step.min_position,
            max_position: step.max_position,
            original_tier: if step.tier_payout_descriptions.is_empty() {
                None
            } else {
                serde_json::to_string(&step.tier_payout_descriptions).ok()
            },
            first_tier,
            second_tier,
        })
    }

    /// Number of finishing positions this step covers.
    pub fn positions(&self) -> u32 {
        self.max_position - self.min_position + 1
    }

    /// Total cash paid across the covered positions.
    pub fn cash_total(&self) -> f64 {
        let per_position = self.first_tier.as_ref().map(|t| t.value).unwrap_or(0.0)
            + self.second_tier.as_ref().map(|t| t.value).unwrap_or(0.0);
        per_position * f64::from(self.positions())
    }
}

impl PayoutTier {
    fn parse(contest_id: ContestId, kind: &str, value: &str) -> Result<Self> {
        Ok(Self {
            kind: kind.to_string(),
            value: payout_value(kind, value)
                .ok_or_else(|| {
                    DkError::validation(
                        "payout",
                        contest_id,
                        format!("unparseable {kind} payout value {value:?}"),
                    )
                })?,
        })
    }
}

/// Dollar value of a tier description. Ticket tiers have no cash value;
/// dollar strings drop `$` and thousands separators.
fn payout_value(kind: &str, value: &str) -> Option<f64> {
    if kind.to_ascii_lowercase().contains("ticket") {
        return Some(0.0);
    }
    if value.contains('$') {
        return value.replace(['$', ','], "").trim().parse().ok();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn step(json: serde_json::Value) -> RawPayoutStep {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_cash_tier_parses_dollar_string() {
        let payout = Payout::from_step(
            ContestId::new(1),
            &step(json!({
                "minPosition": 1,
                "maxPosition": 1,
                "tierPayoutDescriptions": {"Cash": "$20,000.00"}
            })),
        )
        .unwrap();

        let tier = payout.first_tier.unwrap();
        assert_eq!(tier.kind, "Cash");
        assert_eq!(tier.value, 20000.0);
        assert!(payout.second_tier.is_none());
    }

    #[test]
    fn test_ticket_tier_is_zero_value() {
        let payout = Payout::from_step(
            ContestId::new(1),
            &step(json!({
                "minPosition": 2,
                "maxPosition": 5,
                "tierPayoutDescriptions": {"Cash": "$100", "Ticket": "1 x $3 Ticket"}
            })),
        )
        .unwrap();

        assert_eq!(payout.first_tier.unwrap().value, 100.0);
        let second = payout.second_tier.unwrap();
        assert_eq!(second.kind, "Ticket");
        assert_eq!(second.value, 0.0);
    }

    #[test]
    fn test_positions_and_cash_total() {
        let payout = Payout::from_step(
            ContestId::new(1),
            &step(json!({
                "minPosition": 2,
                "maxPosition": 5,
                "tierPayoutDescriptions": {"Cash": "$25"}
            })),
        )
        .unwrap();

        assert_eq!(payout.positions(), 4);
        assert_eq!(payout.cash_total(), 100.0);
    }

    #[test]
    fn test_rejects_inverted_positions() {
        let result = Payout::from_step(
            ContestId::new(1),
            &step(json!({
                "minPosition": 5,
                "maxPosition": 2,
                "tierPayoutDescriptions": {"Cash": "$25"}
            })),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_zero_position() {
        let result = Payout::from_step(
            ContestId::new(1),
            &step(json!({
                "minPosition": 0,
                "maxPosition": 1,
                "tierPayoutDescriptions": {}
            })),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_non_cash_non_ticket_value() {
        let result = Payout::from_step(
            ContestId::new(1),
            &step(json!({
                "minPosition": 1,
                "maxPosition": 1,
                "tierPayoutDescriptions": {"Cash": "Entry to Finals"}
            })),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_tier_map_keeps_step() {
        let payout = Payout::from_step(
            ContestId::new(1),
            &step(json!({
                "minPosition": 1,
                "maxPosition": 3,
                "tierPayoutDescriptions": {}
            })),
        )
        .unwrap();
        assert!(payout.first_tier.is_none());
        assert!(payout.original_tier.is_none());
        assert_eq!(payout.cash_total(), 0.0);
    }
}
