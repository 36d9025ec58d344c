//! Cache structures.

/// Unified connector dispatching to the configured engine.
pub mod cache_connector;

/// Redis connector over a multiplexed async connection.
pub mod cache_connector_redis;

/// In-process connector with backend-enforced expiry.
pub mod cache_connector_memory;

/// Deterministic key derived from a query and its parameters.
pub mod cache_key;

/// Serialized cached payload with its TTL and creation time.
pub mod cache_entry;

/// Query text plus the resource tag it belongs to.
pub mod query_descriptor;

/// Keyed storage with hit/miss accounting.
pub mod cache_store;

/// Read/write seam used by the controllers.
pub mod query_cache;

/// Per call-site automatic caching rules.
pub mod cache_rules;

/// Evaluates `CacheRules` including frequency throttling.
pub mod cache_policy;
