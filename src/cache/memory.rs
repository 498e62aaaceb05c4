//! In-process cache store, the default backend.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::debug;

use super::{CacheEntry, CacheStore};
use crate::models::Launch;

/// Thread-safe in-memory store with per-entry expiry.
///
/// Expired entries are dropped lazily when read; there is no background
/// sweeper, so an abandoned key lives until the process exits.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: DashMap<String, CacheEntry>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl CacheStore for MemoryCache {
    fn get(&self, key: &str) -> Option<CacheEntry> {
        if let Some(entry) = self.entries.get(key) {
            if !entry.is_expired() {
                return Some(entry.clone());
            }
            drop(entry);
            self.entries.remove(key);
            debug!(key, "dropped expired cache entry");
        }
        None
    }

    fn set(&self, key: &str, data: Vec<Launch>, expires_at: DateTime<Utc>) {
        self.entries
            .insert(key.to_string(), CacheEntry::new(data, expires_at));
    }

    fn remove(&self, key: &str) {
        self.entries.remove(key);
    }
}
