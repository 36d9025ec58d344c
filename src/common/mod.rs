//! Common utilities and shared functionality.
//!
//! Helpers used across the data-access layer:
//!
//! - Wall-clock timestamps for cache entries and throttle markers
//! - Query text normalization for cache keys
//! - `CustomError` for boot-time failures

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
