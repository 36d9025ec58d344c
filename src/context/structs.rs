//! Context structures.

/// Shared handle over the pool manager and the query cache.
pub mod data_context;
