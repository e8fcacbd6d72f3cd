//! Search filter criteria
//!
//! `RawFilterCriteria` is the query-string form (every field an optional
//! string, named exactly as it arrives on the wire). `parse` validates
//! each present field into the typed `FilterCriteria`, failing with a
//! `CriteriaError` that names the offending field. Validation happens
//! here, once, so the filter pipeline only ever sees well-typed bounds.

use crate::errors::CriteriaError;
use crate::load::RunType;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Typed, validated search criteria. All fields optional; present
/// predicates are ANDed together by the filter pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterCriteria {
    pub origin_state: Option<String>,
    pub destination_state: Option<String>,
    pub equipment_type: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_rpm: Option<Decimal>,
    pub max_rpm: Option<Decimal>,
    pub min_miles: Option<u32>,
    pub max_miles: Option<u32>,
    pub pickup_after: Option<DateTime<Utc>>,
    pub pickup_before: Option<DateTime<Utc>>,
    pub commodity_type: Option<String>,
    pub run_type: Option<RunType>,
    pub min_weight: Option<u32>,
    pub max_weight: Option<u32>,
}

/// Unvalidated criteria as they arrive in a query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFilterCriteria {
    pub origin_state: Option<String>,
    pub destination_state: Option<String>,
    pub equipment_type: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_rpm: Option<String>,
    pub max_rpm: Option<String>,
    pub min_miles: Option<String>,
    pub max_miles: Option<String>,
    pub pickup_after: Option<String>,
    pub pickup_before: Option<String>,
    pub commodity_type: Option<String>,
    pub run_type: Option<String>,
    pub min_weight: Option<String>,
    pub max_weight: Option<String>,
}

impl RawFilterCriteria {
    /// Validate every present field into its typed form.
    pub fn parse(self) -> Result<FilterCriteria, CriteriaError> {
        Ok(FilterCriteria {
            origin_state: self.origin_state,
            destination_state: self.destination_state,
            equipment_type: self.equipment_type,
            min_price: parse_decimal("min_price", self.min_price)?,
            max_price: parse_decimal("max_price", self.max_price)?,
            min_rpm: parse_decimal("min_rpm", self.min_rpm)?,
            max_rpm: parse_decimal("max_rpm", self.max_rpm)?,
            min_miles: parse_u32("min_miles", self.min_miles)?,
            max_miles: parse_u32("max_miles", self.max_miles)?,
            pickup_after: parse_timestamp("pickup_after", self.pickup_after)?,
            pickup_before: parse_timestamp("pickup_before", self.pickup_before)?,
            commodity_type: self.commodity_type,
            run_type: parse_run_type(self.run_type)?,
            min_weight: parse_u32("min_weight", self.min_weight)?,
            max_weight: parse_u32("max_weight", self.max_weight)?,
        })
    }
}

fn parse_decimal(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<Decimal>, CriteriaError> {
    value
        .map(|v| {
            Decimal::from_str_exact(v.trim())
                .map_err(|_| CriteriaError::InvalidNumber { field, value: v })
        })
        .transpose()
}

fn parse_u32(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<u32>, CriteriaError> {
    value
        .map(|v| {
            v.trim()
                .parse::<u32>()
                .map_err(|_| CriteriaError::InvalidNumber { field, value: v })
        })
        .transpose()
}

fn parse_timestamp(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<DateTime<Utc>>, CriteriaError> {
    value
        .map(|v| {
            DateTime::parse_from_rfc3339(v.trim())
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|_| CriteriaError::InvalidTimestamp { field, value: v })
        })
        .transpose()
}

fn parse_run_type(value: Option<String>) -> Result<Option<RunType>, CriteriaError> {
    value
        .map(|v| {
            v.parse::<RunType>()
                .map_err(|value| CriteriaError::InvalidRunType { value })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_raw_parses_to_default() {
        let criteria = RawFilterCriteria::default().parse().unwrap();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_parses_all_field_kinds() {
        let raw = RawFilterCriteria {
            origin_state: Some("TX".to_string()),
            min_price: Some("1500.50".to_string()),
            max_miles: Some("1200".to_string()),
            pickup_after: Some("2026-09-01T00:00:00Z".to_string()),
            run_type: Some("interstate".to_string()),
            ..Default::default()
        };
        let criteria = raw.parse().unwrap();
        assert_eq!(criteria.origin_state.as_deref(), Some("TX"));
        assert_eq!(
            criteria.min_price,
            Some(Decimal::from_str_exact("1500.50").unwrap())
        );
        assert_eq!(criteria.max_miles, Some(1200));
        assert!(criteria.pickup_after.is_some());
        assert_eq!(criteria.run_type, Some(RunType::Interstate));
    }

    #[test]
    fn test_garbage_price_is_rejected_not_coerced() {
        let raw = RawFilterCriteria {
            min_price: Some("not-a-number".to_string()),
            ..Default::default()
        };
        let err = raw.parse().unwrap_err();
        assert_eq!(err.field(), "min_price");
    }

    #[test]
    fn test_negative_miles_rejected() {
        let raw = RawFilterCriteria {
            min_miles: Some("-50".to_string()),
            ..Default::default()
        };
        let err = raw.parse().unwrap_err();
        assert_eq!(err.field(), "min_miles");
    }

    #[test]
    fn test_bad_timestamp_rejected() {
        let raw = RawFilterCriteria {
            pickup_before: Some("tomorrow".to_string()),
            ..Default::default()
        };
        let err = raw.parse().unwrap_err();
        assert_eq!(err.field(), "pickup_before");
    }

    #[test]
    fn test_unknown_run_type_rejected() {
        let raw = RawFilterCriteria {
            run_type: Some("regional".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            raw.parse().unwrap_err(),
            CriteriaError::InvalidRunType { .. }
        ));
    }
}
