//! Tally statistics over the analytics log

use serde::Serialize;
use std::collections::BTreeMap;
use types::analytics::AnalyticsEntry;

/// Counts of entries grouped by the common reporting dimensions
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalyticsStats {
    pub total_entries: usize,
    pub by_action_type: BTreeMap<String, u64>,
    pub by_mc_number: BTreeMap<String, u64>,
    pub by_origin_state: BTreeMap<String, u64>,
    pub by_destination_state: BTreeMap<String, u64>,
    pub by_classification: BTreeMap<String, u64>,
}

impl AnalyticsStats {
    /// Count entries per dimension. Absent optional fields simply do not
    /// contribute to their tally.
    pub fn tally(entries: &[AnalyticsEntry]) -> Self {
        let mut stats = Self {
            total_entries: entries.len(),
            ..Self::default()
        };
        for entry in entries {
            bump(&mut stats.by_action_type, Some(&entry.action_type));
            bump(&mut stats.by_mc_number, entry.mc_number.as_deref());
            bump(&mut stats.by_origin_state, entry.origin_state.as_deref());
            bump(
                &mut stats.by_destination_state,
                entry.destination_state.as_deref(),
            );
            bump(&mut stats.by_classification, entry.classification.as_deref());
        }
        stats
    }
}

fn bump(counts: &mut BTreeMap<String, u64>, key: Option<&str>) {
    if let Some(key) = key {
        *counts.entry(key.to_string()).or_insert(0) += 1;
    }
}
