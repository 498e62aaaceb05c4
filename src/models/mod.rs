//! Data models for upstream launch data.
//!
//! The upstream payload is deliberately opaque; see `Launch` for the thin
//! wrapper the rest of the crate passes around.

pub mod launch;

pub use launch::Launch;
