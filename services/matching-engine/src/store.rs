//! Store contract required by the engine
//!
//! The engine owns no catalog; it consumes this interface and re-reads
//! current state on every operation. Implementations must make `update`
//! an atomic commit: a concurrent reader sees the record either before
//! or after the patch, never mid-write.

use thiserror::Error;
use types::load::Load;

/// Errors surfaced by a load store implementation
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("load not found: {load_id}")]
    LoadNotFound { load_id: String },
}

/// Partial update to a single load
///
/// Only the booked flag is patchable today; booking mutates nothing else.
#[derive(Debug, Clone, Default)]
pub struct LoadPatch {
    pub booked: Option<bool>,
}

impl LoadPatch {
    /// Patch that marks a load booked
    pub fn booked() -> Self {
        Self { booked: Some(true) }
    }

    /// Apply this patch to a load in place
    pub fn apply(&self, load: &mut Load) {
        if let Some(booked) = self.booked {
            load.booked = booked;
        }
    }
}

/// Authoritative store of the load catalog
pub trait LoadStore: Send + Sync {
    /// Current snapshot of every load; no ordering guaranteed.
    fn get_all(&self) -> Result<Vec<Load>, StoreError>;

    /// Apply a patch to one load and persist it atomically.
    fn update(&self, load_id: &str, patch: LoadPatch) -> Result<Load, StoreError>;

    /// Seed the catalog if it is empty; a non-empty store returns its
    /// existing contents untouched. Idempotent.
    fn initialize_if_empty(&self, seed: Vec<Load>) -> Result<Vec<Load>, StoreError>;
}
