//! Application settings.
//!
//! Two knobs control the client: how long fetched data stays cached and how
//! many launches a caller gets by default. Each field falls back to its own
//! default when missing from the file, so a partial config is valid.
//!
//! Settings are stored at `<config_dir>/launchfeed/config.json`.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for the config directory path
const APP_NAME: &str = "launchfeed";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Default cache lifetime in minutes
const DEFAULT_CACHE_TTL: i64 = 15;

/// Default number of launches returned to a caller
const DEFAULT_LAUNCH_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Cache lifetime in minutes.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl: i64,
    /// Number of launches returned when the caller does not ask for a count.
    #[serde(default = "default_launch_limit")]
    pub launch_limit: usize,
}

fn default_cache_ttl() -> i64 {
    DEFAULT_CACHE_TTL
}

fn default_launch_limit() -> usize {
    DEFAULT_LAUNCH_LIMIT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL,
            launch_limit: DEFAULT_LAUNCH_LIMIT,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.cache_ttl, 15);
        assert_eq!(settings.launch_limit, 5);
    }

    #[test]
    fn test_fields_default_independently() {
        let settings: Settings = serde_json::from_str(r#"{"cache_ttl": 60}"#).unwrap();
        assert_eq!(settings.cache_ttl, 60);
        assert_eq!(settings.launch_limit, 5);

        let settings: Settings = serde_json::from_str(r#"{"launch_limit": 10}"#).unwrap();
        assert_eq!(settings.cache_ttl, 15);
        assert_eq!(settings.launch_limit, 10);
    }

    #[test]
    fn test_empty_object_is_all_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.cache_ttl, 15);
        assert_eq!(settings.launch_limit, 5);
    }
}
