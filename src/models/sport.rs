//! Validated records from the sports catalog endpoint.

use serde::{Deserialize, Serialize};

use crate::dk::types::RawSport;
use crate::error::{DkError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportInfo {
    pub sport_id: u32,
    pub full_name: Option<String>,
    pub sort_order: Option<i32>,
    pub has_public_contests: Option<bool>,
    pub is_enabled: Option<bool>,
    pub region_full_sport_name: Option<String>,
    pub region_abbreviated_sport_name: Option<String>,
}

impl SportInfo {
    pub fn from_raw(raw: &RawSport) -> Result<Self> {
        if raw.sport_id == 0 {
            return Err(DkError::validation("sport", raw.sport_id, "missing sport id"));
        }

        Ok(Self {
            sport_id: raw.sport_id,
            full_name: raw.full_name.clone(),
            sort_order: raw.sort_order,
            has_public_contests: raw.has_public_contests,
            is_enabled: raw.is_enabled,
            region_full_sport_name: raw.region_full_sport_name.clone(),
            region_abbreviated_sport_name: raw.region_abbreviated_sport_name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sport_info_from_raw() {
        let raw: RawSport = serde_json::from_value(json!({
            "sportId": 1,
            "fullName": "Football",
            "hasPublicContests": true,
            "isEnabled": true,
            "regionAbbreviatedSportName": "NFL"
        }))
        .unwrap();

        let info = SportInfo::from_raw(&raw).unwrap();
        assert_eq!(info.sport_id, 1);
        assert_eq!(info.region_abbreviated_sport_name.as_deref(), Some("NFL"));
    }

    #[test]
    fn test_sport_info_requires_id() {
        let raw: RawSport = serde_json::from_value(json!({"sportId": 0})).unwrap();
        assert!(SportInfo::from_raw(&raw).is_err());
    }
}
