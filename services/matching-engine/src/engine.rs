//! Match-and-book engine
//!
//! Stateless façade over the load store plus the two pure functions.
//! Every call re-reads the store, so a booking is immediately visible to
//! the next search without any cache invalidation.

use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;
use types::criteria::FilterCriteria;
use types::errors::CriteriaError;
use types::load::Load;

use crate::filter;
use crate::ranking;
use crate::store::{LoadPatch, LoadStore, StoreError};

/// Engine error taxonomy
///
/// Each variant carries a distinct, stable message so callers can branch
/// on kind rather than text.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Criteria(#[from] CriteriaError),

    #[error("no available loads match the specified criteria")]
    NoMatch,

    #[error("no load found with id: {load_id}")]
    LoadNotFound { load_id: String },

    #[error("load {load_id} has already been booked")]
    AlreadyBooked { load_id: String },

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// The match-and-book engine
pub struct MatchEngine {
    store: Arc<dyn LoadStore>,
    /// Serializes the read-check-write section of booking. Searches never
    /// take this lock.
    booking_gate: Mutex<()>,
}

impl MatchEngine {
    pub fn new(store: Arc<dyn LoadStore>) -> Self {
        Self {
            store,
            booking_gate: Mutex::new(()),
        }
    }

    /// Find the single best available load under `criteria`.
    ///
    /// Reads the current catalog, filters, and ranks. Fails with
    /// `NoMatch` when nothing survives filtering.
    pub fn find_best_load(&self, criteria: &FilterCriteria) -> Result<Load, EngineError> {
        let loads = self.store.get_all()?;
        let survivors = filter::apply(&loads, criteria);
        ranking::pick_best(survivors).ok_or(EngineError::NoMatch)
    }

    /// Irreversibly book a load.
    ///
    /// Not idempotent: a second attempt on the same id fails with
    /// `AlreadyBooked`. The first successful booking is never rolled back
    /// by a later conflicting attempt, and a store failure is never
    /// retried (a blind retry on an ambiguous write could double-book).
    pub fn book_load(&self, load_id: &str) -> Result<Load, EngineError> {
        // Guard gives exactly one winner per id; poisoning is harmless
        // for a unit guard, so recover rather than propagate.
        let _gate = self
            .booking_gate
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let loads = self.store.get_all()?;
        let load = loads
            .iter()
            .find(|l| l.load_id.as_str() == load_id)
            .ok_or_else(|| EngineError::LoadNotFound {
                load_id: load_id.to_string(),
            })?;

        if load.booked {
            return Err(EngineError::AlreadyBooked {
                load_id: load_id.to_string(),
            });
        }

        Ok(self.store.update(load_id, LoadPatch::booked())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use std::sync::RwLock;
    use std::thread;
    use types::ids::LoadId;
    use types::load::{LoadParams, RunType};

    /// Minimal in-memory store for engine tests
    struct MemStore {
        loads: RwLock<Vec<Load>>,
    }

    impl MemStore {
        fn with(loads: Vec<Load>) -> Arc<Self> {
            Arc::new(Self {
                loads: RwLock::new(loads),
            })
        }
    }

    impl LoadStore for MemStore {
        fn get_all(&self) -> Result<Vec<Load>, StoreError> {
            Ok(self.loads.read().unwrap().clone())
        }

        fn update(&self, load_id: &str, patch: LoadPatch) -> Result<Load, StoreError> {
            let mut loads = self.loads.write().unwrap();
            let load = loads
                .iter_mut()
                .find(|l| l.load_id.as_str() == load_id)
                .ok_or_else(|| StoreError::LoadNotFound {
                    load_id: load_id.to_string(),
                })?;
            patch.apply(load);
            Ok(load.clone())
        }

        fn initialize_if_empty(&self, seed: Vec<Load>) -> Result<Vec<Load>, StoreError> {
            let mut loads = self.loads.write().unwrap();
            if loads.is_empty() {
                *loads = seed;
            }
            Ok(loads.clone())
        }
    }

    fn load(id: &str, state: &str, rate: u32, miles: u32) -> Load {
        let pickup = Utc::now();
        Load::create(LoadParams {
            load_id: LoadId::new(id),
            origin: format!("Somewhere, {state}"),
            destination: "Atlanta, GA".to_string(),
            origin_state: state.to_string(),
            destination_state: "GA".to_string(),
            pickup_datetime: pickup,
            delivery_datetime: pickup + chrono::Duration::days(2),
            equipment_type: "Dry Van".to_string(),
            loadboard_rate: Decimal::from(rate),
            notes: String::new(),
            weight: 24_000,
            commodity_type: "Electronics".to_string(),
            num_of_pieces: 10,
            miles,
            dimensions: String::new(),
            run_type: RunType::Interstate,
        })
    }

    fn tx_criteria() -> FilterCriteria {
        FilterCriteria {
            origin_state: Some("TX".to_string()),
            ..FilterCriteria::default()
        }
    }

    #[test]
    fn test_find_best_returns_highest_scorer() {
        // Scores: 10.0, 14.0, 12.0 — all TX.
        let store = MemStore::with(vec![
            load("L-1001", "TX", 600, 300),
            load("L-1002", "TX", 1000, 500),
            load("L-1003", "TX", 800, 350),
        ]);
        let engine = MatchEngine::new(store);

        let best = engine.find_best_load(&tx_criteria()).unwrap();
        assert_eq!(best.load_id.as_str(), "L-1002");
    }

    #[test]
    fn test_find_best_no_match_on_absurd_price_floor() {
        let store = MemStore::with(vec![load("L-1001", "TX", 1000, 500)]);
        let engine = MatchEngine::new(store);

        let criteria = FilterCriteria {
            min_price: Some(Decimal::from(999_999)),
            ..FilterCriteria::default()
        };
        assert!(matches!(
            engine.find_best_load(&criteria),
            Err(EngineError::NoMatch)
        ));
    }

    #[test]
    fn test_booking_is_exactly_once() {
        let store = MemStore::with(vec![load("L-1001", "TX", 1000, 500)]);
        let engine = MatchEngine::new(store);

        let before = engine.find_best_load(&tx_criteria()).unwrap();
        let booked = engine.book_load("L-1001").unwrap();
        assert!(booked.booked);

        // Only the flag changed.
        let mut expected = before;
        expected.booked = true;
        assert_eq!(booked, expected);

        assert!(matches!(
            engine.book_load("L-1001"),
            Err(EngineError::AlreadyBooked { .. })
        ));
    }

    #[test]
    fn test_booking_unknown_id_not_found() {
        let store = MemStore::with(vec![load("L-1001", "TX", 1000, 500)]);
        let engine = MatchEngine::new(store);

        assert!(matches!(
            engine.book_load("L-9999"),
            Err(EngineError::LoadNotFound { .. })
        ));
    }

    #[test]
    fn test_booked_load_invisible_to_next_search() {
        let store = MemStore::with(vec![
            load("L-1001", "TX", 1000, 500),
            load("L-1002", "TX", 600, 300),
        ]);
        let engine = MatchEngine::new(store);

        engine.book_load("L-1001").unwrap();
        let best = engine.find_best_load(&tx_criteria()).unwrap();
        assert_eq!(best.load_id.as_str(), "L-1002");
    }

    #[test]
    fn test_concurrent_booking_single_winner() {
        let store = MemStore::with(vec![load("L-1001", "TX", 1000, 500)]);
        let engine = Arc::new(MatchEngine::new(store));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let engine = Arc::clone(&engine);
                thread::spawn(move || engine.book_load("L-1001").is_ok())
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&won| won)
            .count();
        assert_eq!(wins, 1);
    }

    #[test]
    fn test_derived_fields_stable_across_reads() {
        let store = MemStore::with(vec![
            load("L-1001", "TX", 1000, 500),
            load("L-1002", "GA", 600, 300),
        ]);
        let engine = MatchEngine::new(Arc::clone(&store) as Arc<dyn LoadStore>);

        let first = engine.find_best_load(&tx_criteria()).unwrap();
        // Mutate an unrelated load.
        store.update("L-1002", LoadPatch::booked()).unwrap();
        let second = engine.find_best_load(&tx_criteria()).unwrap();

        assert_eq!(first.rpm, second.rpm);
        assert_eq!(first.best_load_score, second.best_load_score);
    }
}
