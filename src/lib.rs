//! launchfeed - cached access to the public SpaceX launch API.
//!
//! The core is `LaunchClient`: a cache-aside client that fetches the launch
//! list at most once per cache lifetime and hands callers bounded slices of
//! it. Page-level callers share one cache entry; block-level callers with
//! their own limit and TTL cache independently. Upstream failures are logged
//! and reported as an absent result, never as an error the caller must
//! handle.

pub mod api;
pub mod cache;
pub mod config;
pub mod models;
pub mod page;

pub use api::{ApiError, LaunchClient};
pub use cache::{CacheEntry, CacheStore, FileCache, MemoryCache};
pub use config::Settings;
pub use models::Launch;
