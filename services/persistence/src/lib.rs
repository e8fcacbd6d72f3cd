//! Load catalog persistence
//!
//! File-backed implementation of the engine's `LoadStore` contract:
//! an in-memory working set guarded by a RwLock, with every mutation
//! committed to a JSON snapshot via write-temp-then-rename so the file
//! on disk is always a complete catalog. Survives process restart; no
//! stronger durability is promised.

pub mod store;

pub use store::FileStore;
