//! Implementation blocks for the cache types.

pub mod cache_engine;
pub mod resource_tag;
pub mod mutating_operation;
pub mod cache_connector;
pub mod cache_connector_redis;
pub mod cache_connector_memory;
pub mod cache_key;
pub mod query_descriptor;
pub mod cache_store;
pub mod query_cache;
pub mod cache_rules;
pub mod cache_policy;
