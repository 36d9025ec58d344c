//! Cache enumeration types.

/// Cache backend engines (redis, memory).
pub mod cache_engine;

/// Resource kinds used to tag and invalidate cached results.
pub mod resource_tag;

/// Every write the back end performs, mapped to the tags it invalidates.
pub mod mutating_operation;

/// Result of an automatic-caching decision.
pub mod auto_cache_outcome;
