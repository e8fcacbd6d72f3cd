//! Load Matching & Booking Engine
//!
//! Composes the filter pipeline, the ranking function, and the booking
//! transition into the two public operations: `find_best_load` and
//! `book_load`.
//!
//! **Key Invariants:**
//! - Booked loads are never match candidates
//! - Ranking is total and deterministic (ties break on lowest load_id)
//! - Booking is exactly-once: concurrent attempts on one id resolve to a
//!   single winner, the rest fail with `AlreadyBooked`
//! - The engine holds no catalog state of its own; every call re-reads
//!   the store

pub mod engine;
pub mod filter;
pub mod ranking;
pub mod store;

pub use engine::{EngineError, MatchEngine};
pub use store::{LoadPatch, LoadStore, StoreError};
