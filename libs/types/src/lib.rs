//! Types library for the freight loadboard
//!
//! This library provides all core type definitions shared across the
//! loadboard services: the load catalog schema, the filter criteria a
//! caller may search with, and the analytics record schema.
//!
//! # Modules
//! - `ids`: Unique identifiers (LoadId, EntryId)
//! - `load`: Load catalog types and derived commercial fields
//! - `criteria`: Search filter criteria and query-string parsing
//! - `analytics`: Analytics entry and inbound payload types
//! - `errors`: Criteria validation errors

// Public modules
pub mod analytics;
pub mod criteria;
pub mod errors;
pub mod ids;
pub mod load;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::analytics::*;
    pub use crate::criteria::*;
    pub use crate::errors::*;
    pub use crate::ids::*;
    pub use crate::load::*;
}
