//! Cache backend trait definitions.

/// Key-value operations every cache backend provides.
pub mod cache_backend;
