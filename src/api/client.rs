//! Cache-aside client for the public launch API.
//!
//! This module provides the `LaunchClient` struct, the only component that
//! talks to the upstream endpoint. Every read goes through the cache store
//! first; a miss triggers at most one HTTP call, and any failure is logged
//! and surfaced to the caller as an absent result rather than an error.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use anyhow::Result;
use chrono::{Duration, Utc};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, error};

use crate::cache::CacheStore;
use crate::config::Settings;
use crate::models::Launch;

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Upstream endpoint for launch data
const API_URL: &str = "https://api.spacexdata.com/v4/launches";

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Cache key shared by every page-level caller. The requested limit only
/// affects how much of the cached list a caller gets back, not what is stored.
const PAGE_CACHE_KEY: &str = "launches";

/// Upstream batch used to seed block caches on a miss. A tunable, not a
/// contract: it just has to cover any sensible block size.
const BLOCK_SEED_LIMIT: usize = 50;

/// Per-configuration cache key for block-level callers, so independently
/// configured blocks never collide with each other or with the page key.
fn block_cache_key(limit: usize, ttl_minutes: i64) -> String {
    format!("block_launches_{}_{}", limit, ttl_minutes)
}

/// Client for the launch API.
///
/// The cache store and settings are injected; the HTTP client is built
/// internally with the fixed request timeout. Clone is cheap -
/// reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct LaunchClient {
    client: Client,
    cache: Arc<dyn CacheStore>,
    settings: Settings,
    endpoint: String,
}

impl LaunchClient {
    /// Create a new client against the production endpoint.
    pub fn new(cache: Arc<dyn CacheStore>, settings: Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(StdDuration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            cache,
            settings,
            endpoint: API_URL.to_string(),
        })
    }

    /// Point the client at a different endpoint, e.g. a local mock server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Cache key used for page-level access; exposed so callers can
    /// invalidate it on an explicit refresh.
    pub fn page_cache_key() -> &'static str {
        PAGE_CACHE_KEY
    }

    /// Get launches, bounded by `requested_limit` or the configured default.
    ///
    /// All callers of this path share one cached copy of the full upstream
    /// list under a fixed key; the limit is applied to a clone at read time.
    /// Returns `None` on any upstream failure.
    pub async fn get_launches(&self, requested_limit: Option<usize>) -> Option<Vec<Launch>> {
        let limit = requested_limit.unwrap_or(self.settings.launch_limit);

        if let Some(entry) = self.cache.get(PAGE_CACHE_KEY) {
            debug!(key = PAGE_CACHE_KEY, limit, "serving launches from cache");
            return Some(head(&entry.data, limit));
        }

        match self.fetch_upstream().await {
            Ok(data) => {
                let expires_at = Utc::now() + Duration::minutes(self.settings.cache_ttl);
                self.cache.set(PAGE_CACHE_KEY, data.clone(), expires_at);
                debug!(key = PAGE_CACHE_KEY, count = data.len(), "cached launch list");
                Some(head(&data, limit))
            }
            Err(e) => {
                error!(error = %e, "failed to fetch launches");
                None
            }
        }
    }

    /// Get launches for a block with its own limit and cache lifetime.
    ///
    /// Each `(limit, ttl_minutes)` combination caches under its own key. On a
    /// miss the shared page path supplies the data, so a block miss still
    /// issues at most one upstream call and populates the page cache too.
    pub async fn get_launches_for_block(
        &self,
        limit: usize,
        ttl_minutes: i64,
    ) -> Option<Vec<Launch>> {
        let key = block_cache_key(limit, ttl_minutes);

        if let Some(entry) = self.cache.get(&key) {
            debug!(key = %key, "serving block launches from cache");
            return Some(head(&entry.data, limit));
        }

        let data = self.get_launches(Some(BLOCK_SEED_LIMIT)).await?;

        let expires_at = Utc::now() + Duration::minutes(ttl_minutes);
        self.cache.set(&key, data.clone(), expires_at);
        Some(head(&data, limit))
    }

    /// Single GET against the upstream endpoint.
    ///
    /// The body must be a JSON array; anything else is a failure, including
    /// valid JSON of another shape.
    async fn fetch_upstream(&self) -> Result<Vec<Launch>, ApiError> {
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiError::UpstreamStatus(status.as_u16()));
        }

        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text).map_err(|_| ApiError::InvalidBody)?;

        match body {
            Value::Array(items) => Ok(items.into_iter().map(Launch::new).collect()),
            _ => Err(ApiError::InvalidBody),
        }
    }
}

/// First `limit` entries, cloned; the cached list itself is never touched.
fn head(data: &[Launch], limit: usize) -> Vec<Launch> {
    data.iter().take(limit).cloned().collect()
}
