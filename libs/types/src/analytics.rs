//! Analytics record types
//!
//! An `AnalyticsEntry` is an immutable, append-only record of one search
//! or booking attempt. The schema is a fixed core of known fields plus an
//! explicit overflow mapping for caller-supplied extras, so the known
//! fields stay typed while arbitrary context is still accepted.

use crate::ids::EntryId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default action type when the caller does not supply one
pub const ACTION_UNKNOWN: &str = "unknown";

/// One recorded search/booking attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEntry {
    /// Unique identifier for this entry
    pub id: EntryId,
    /// When this entry was logged
    pub timestamp: DateTime<Utc>,
    /// "search", "booking", or "unknown"
    pub action_type: String,
    /// Call classification: "Successful", "Failed Load Matching", etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    /// Carrier MC number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mc_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_state: Option<String>,
    /// The load that was found or booked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub miles: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rpm: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rpm: Option<Decimal>,
    /// Caller-supplied fields outside the fixed schema
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Inbound analytics payload
///
/// Same shape as the stored entry minus id/timestamp, plus the aliases
/// some callers use (`dest_state`, `booked_load`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsPayload {
    pub action_type: Option<String>,
    pub classification: Option<String>,
    pub mc_number: Option<String>,
    pub origin_state: Option<String>,
    pub destination_state: Option<String>,
    /// Alias for destination_state
    pub dest_state: Option<String>,
    pub load_id: Option<String>,
    /// Alias for load_id
    pub booked_load: Option<String>,
    pub price: Option<Decimal>,
    pub miles: Option<u32>,
    pub weight: Option<u32>,
    pub equipment_type: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_rpm: Option<Decimal>,
    pub max_rpm: Option<Decimal>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl AnalyticsEntry {
    /// Build an entry from an inbound payload, normalizing aliases and
    /// assigning a fresh id and timestamp. The canonical field wins when
    /// both it and its alias are present.
    pub fn from_payload(payload: AnalyticsPayload) -> Self {
        Self {
            id: EntryId::new(),
            timestamp: Utc::now(),
            action_type: payload
                .action_type
                .unwrap_or_else(|| ACTION_UNKNOWN.to_string()),
            classification: payload.classification,
            mc_number: payload.mc_number,
            origin_state: payload.origin_state,
            destination_state: payload.destination_state.or(payload.dest_state),
            load_id: payload.load_id.or(payload.booked_load),
            price: payload.price,
            miles: payload.miles,
            weight: payload.weight,
            equipment_type: payload.equipment_type,
            min_price: payload.min_price,
            max_price: payload.max_price,
            min_rpm: payload.min_rpm,
            max_rpm: payload.max_rpm,
            extra: payload.extra,
        }
    }
}
