//! Client module for the public launch-data API.
//!
//! This module provides the `LaunchClient` for fetching launch records
//! through a cache-aside store, and the `ApiError` taxonomy for the ways an
//! upstream fetch can fail.
//!
//! The endpoint is unauthenticated; there is no retry, rate limiting, or
//! stampede protection.

pub mod client;
pub mod error;

pub use client::LaunchClient;
pub use error::ApiError;
