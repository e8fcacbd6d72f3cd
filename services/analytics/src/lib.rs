//! Analytics Service
//!
//! Independent tally store for search and booking attempts. The
//! transport layer records one entry around each engine call; entries
//! are append-only and immutable once written.

pub mod recorder;
pub mod stats;

pub use recorder::AnalyticsLog;
pub use stats::AnalyticsStats;
