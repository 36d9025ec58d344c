//! Implementation blocks for configuration types.

pub mod configuration;
pub mod configuration_error;
pub mod cache_ttl_config;
pub mod database_pool_config;
