//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Primary/replica connection settings.
pub mod database_config;

/// Pool sizing and acquire timeout for one database target.
pub mod database_pool_config;

/// Cache backend configuration (Redis/in-memory).
pub mod cache_config;

/// Default cache TTLs per resource kind.
pub mod cache_ttl_config;

/// Operations API listener configuration.
pub mod api_server_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
