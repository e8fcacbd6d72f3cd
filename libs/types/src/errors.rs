//! Criteria validation errors
//!
//! A malformed criterion is rejected up front with the offending field
//! named; nothing is ever silently coerced to a default.

use thiserror::Error;

/// Validation failure for a single filter criterion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("invalid numeric value for `{field}`: `{value}`")]
    InvalidNumber { field: &'static str, value: String },

    #[error("invalid timestamp for `{field}`: `{value}` (expected RFC 3339)")]
    InvalidTimestamp { field: &'static str, value: String },

    #[error("invalid run_type `{value}` (expected interstate, intrastate, or either)")]
    InvalidRunType { value: String },
}

impl CriteriaError {
    /// Name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            CriteriaError::InvalidNumber { field, .. } => field,
            CriteriaError::InvalidTimestamp { field, .. } => field,
            CriteriaError::InvalidRunType { .. } => "run_type",
        }
    }
}
