//! Cache stores for fetched launch lists.
//!
//! The client talks to a `CacheStore`: a key-value store of launch lists
//! with per-entry expiry. Two backends are provided:
//!
//! - `MemoryCache`: in-process, the default
//! - `FileCache`: one JSON file per key, survives restarts

pub mod file;
pub mod memory;
pub mod store;

pub use file::FileCache;
pub use memory::MemoryCache;
pub use store::{CacheEntry, CacheStore};
