//! The cache store abstraction the launch client runs against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Launch;

/// One cached launch list with its expiry timestamp.
///
/// The stored list is never mutated after the write; readers clone and
/// truncate on their side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub data: Vec<Launch>,
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(data: Vec<Launch>, expires_at: DateTime<Utc>) -> Self {
        Self { data, expires_at }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Key-value store for launch lists with per-entry expiry.
///
/// The store owns eviction: `get` reports an expired entry as a miss.
/// Implementations perform no cross-call locking; concurrent writers to the
/// same key are last-write-wins.
pub trait CacheStore: Send + Sync {
    /// Returns the entry for `key`, or `None` on miss or expiry.
    fn get(&self, key: &str) -> Option<CacheEntry>;

    /// Stores `data` under `key` until `expires_at`.
    fn set(&self, key: &str, data: Vec<Launch>, expires_at: DateTime<Utc>);

    /// Drops the entry for `key`, backing the explicit refresh action.
    fn remove(&self, key: &str);
}
