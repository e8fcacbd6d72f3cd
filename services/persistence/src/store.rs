//! File-backed load store
//!
//! Readers take the read lock and see a momentary consistent snapshot;
//! `update` holds the write lock across patch-and-persist, which is the
//! atomic instant of a booking commit.

use matching_engine::store::{LoadPatch, LoadStore, StoreError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use types::load::Load;

/// JSON-snapshot load store
pub struct FileStore {
    path: PathBuf,
    loads: RwLock<Vec<Load>>,
}

impl FileStore {
    /// Open a store backed by `path`, loading the snapshot if one
    /// exists. A missing file is an empty store, not an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let loads = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| StoreError::Serialization(e.to_string()))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            loads: RwLock::new(loads),
        })
    }

    /// Path of the backing snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the full catalog to a temp file and rename it over the
    /// snapshot, so a crash mid-write never leaves a torn file.
    fn persist(&self, loads: &[Load]) -> Result<(), StoreError> {
        let tmp = self.path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(loads)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl LoadStore for FileStore {
    fn get_all(&self) -> Result<Vec<Load>, StoreError> {
        let loads = self.loads.read().unwrap_or_else(PoisonError::into_inner);
        Ok(loads.clone())
    }

    fn update(&self, load_id: &str, patch: LoadPatch) -> Result<Load, StoreError> {
        let mut loads = self.loads.write().unwrap_or_else(PoisonError::into_inner);
        let index = loads
            .iter()
            .position(|l| l.load_id.as_str() == load_id)
            .ok_or_else(|| StoreError::LoadNotFound {
                load_id: load_id.to_string(),
            })?;

        // Commit to disk before touching the working set: a failed write
        // must leave both views on the old record, never just one.
        let mut updated = loads[index].clone();
        patch.apply(&mut updated);
        let mut next = loads.clone();
        next[index] = updated.clone();
        self.persist(&next)?;

        *loads = next;
        Ok(updated)
    }

    fn initialize_if_empty(&self, seed: Vec<Load>) -> Result<Vec<Load>, StoreError> {
        let mut loads = self.loads.write().unwrap_or_else(PoisonError::into_inner);
        if loads.is_empty() && !seed.is_empty() {
            *loads = seed;
            self.persist(&loads)?;
        }
        Ok(loads.clone())
    }
}
