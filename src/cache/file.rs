//! File-backed cache store for persistence across runs.
//!
//! Each key maps to one pretty-printed JSON file in the cache directory.
//! A file that fails to read or parse is treated as a miss rather than an
//! error; the next successful fetch overwrites it.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::debug;

use super::{CacheEntry, CacheStore};
use crate::models::Launch;

pub struct FileCache {
    cache_dir: PathBuf,
}

impl FileCache {
    /// Creates the store, creating `cache_dir` if needed.
    pub fn new(cache_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&cache_dir)?;
        Ok(Self { cache_dir })
    }

    /// Store rooted at the platform cache directory, e.g.
    /// `~/.cache/launchfeed/` on Linux.
    pub fn in_user_cache_dir() -> Result<Self> {
        let base = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Self::new(base.join("launchfeed"))
    }

    fn cache_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }
}

impl CacheStore for FileCache {
    fn get(&self, key: &str) -> Option<CacheEntry> {
        let path = self.cache_path(key);
        let contents = std::fs::read_to_string(&path).ok()?;
        let entry: CacheEntry = match serde_json::from_str(&contents) {
            Ok(entry) => entry,
            Err(e) => {
                debug!(key, error = %e, "unreadable cache file treated as miss");
                return None;
            }
        };

        if entry.is_expired() {
            return None;
        }
        Some(entry)
    }

    fn set(&self, key: &str, data: Vec<Launch>, expires_at: DateTime<Utc>) {
        let entry = CacheEntry::new(data, expires_at);
        let path = self.cache_path(key);
        match serde_json::to_string_pretty(&entry) {
            Ok(contents) => {
                if let Err(e) = std::fs::write(&path, contents) {
                    debug!(key, error = %e, "failed to write cache file");
                }
            }
            Err(e) => debug!(key, error = %e, "failed to serialize cache entry"),
        }
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.cache_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_cache() -> (FileCache, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let cache = FileCache::new(temp_dir.path().to_path_buf()).expect("Failed to create cache");
        (cache, temp_dir)
    }

    fn launches(n: usize) -> Vec<Launch> {
        (1..=n)
            .map(|i| Launch::new(json!({"id": i.to_string()})))
            .collect()
    }

    #[test]
    fn test_set_creates_json_file() {
        let (cache, temp_dir) = create_test_cache();
        cache.set("launches", launches(2), Utc::now() + Duration::minutes(15));

        assert!(temp_dir.path().join("launches.json").exists());
    }

    #[test]
    fn test_get_round_trips_entry() {
        let (cache, _temp_dir) = create_test_cache();
        let data = launches(3);
        cache.set("launches", data.clone(), Utc::now() + Duration::minutes(15));

        let entry = cache.get("launches").expect("entry should be readable");
        assert_eq!(entry.data, data);
    }

    #[test]
    fn test_missing_key_is_a_miss() {
        let (cache, _temp_dir) = create_test_cache();
        assert!(cache.get("nope").is_none());
    }

    #[test]
    fn test_expired_entry_is_a_miss() {
        let (cache, _temp_dir) = create_test_cache();
        cache.set("launches", launches(1), Utc::now() - Duration::seconds(1));
        assert!(cache.get("launches").is_none());
    }

    #[test]
    fn test_corrupt_file_is_a_miss() {
        let (cache, temp_dir) = create_test_cache();
        std::fs::write(temp_dir.path().join("launches.json"), "{ not json").unwrap();
        assert!(cache.get("launches").is_none());
    }

    #[test]
    fn test_remove_deletes_file() {
        let (cache, temp_dir) = create_test_cache();
        cache.set("launches", launches(1), Utc::now() + Duration::minutes(15));
        cache.remove("launches");
        assert!(!temp_dir.path().join("launches.json").exists());
    }
}
