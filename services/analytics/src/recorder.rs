//! Append-only analytics log

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};
use types::analytics::{AnalyticsEntry, AnalyticsPayload};

use crate::stats::AnalyticsStats;

/// In-memory analytics store
///
/// Fire-and-forget from the caller's perspective: recording never fails
/// and never blocks longer than the lock it takes.
#[derive(Default)]
pub struct AnalyticsLog {
    entries: RwLock<Vec<AnalyticsEntry>>,
}

impl AnalyticsLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a payload into an entry and append it.
    pub fn record(&self, payload: AnalyticsPayload) -> AnalyticsEntry {
        let entry = AnalyticsEntry::from_payload(payload);
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        entries.push(entry.clone());
        entry
    }

    /// All entries in insertion order
    pub fn all(&self) -> Vec<AnalyticsEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Entries whose serialized fields equal every given key/value pair
    pub fn filtered(&self, query: &BTreeMap<String, String>) -> Vec<AnalyticsEntry> {
        self.all()
            .into_iter()
            .filter(|entry| {
                let fields = match serde_json::to_value(entry) {
                    Ok(v) => v,
                    Err(_) => return false,
                };
                query.iter().all(|(key, want)| {
                    match fields.get(key) {
                        Some(serde_json::Value::String(s)) => s == want,
                        Some(other) => &other.to_string() == want,
                        None => false,
                    }
                })
            })
            .collect()
    }

    /// Tally statistics over the whole log
    pub fn stats(&self) -> AnalyticsStats {
        AnalyticsStats::tally(&self.all())
    }

    /// Remove every entry
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
