//! Configuration management module.
//!
//! Loads, overrides and validates the service configuration. The base layer
//! is a TOML file (`config.toml`); environment variables are applied on top
//! so deployments can inject credentials without touching the file.
//!
//! # Configuration Structure
//!
//! - **database**: primary and optional replica connection URLs, pool sizing per target
//! - **cache**: cache engine (redis/memory), address, credential and key prefix
//! - **cache_ttl**: default TTLs per resource kind
//! - **api_server**: operations API listener
//! - **sentry_config**: error reporting
//!
//! # Environment Overrides
//!
//! | Variable | Field |
//! |----------|-------|
//! | `DATABASE_PRIMARY_URL` | `database.primary_url` |
//! | `DATABASE_REPLICA_URL` | `database.replica_url` |
//! | `DATABASE_POOL_MIN` / `_MAX` / `_INCREMENT` / `_TIMEOUT` | both pool sections |
//! | `CACHE_ENGINE`, `CACHE_ADDRESS`, `CACHE_PASSWORD`, `CACHE_PREFIX` | `cache.*` |
//! | `CACHE_TTL_DEFAULT`, `CACHE_TTL_REPORTS`, `CACHE_TTL_FLIGHTS`, `CACHE_TTL_BOOKINGS` | `cache_ttl.*` |
//! | `API_KEY`, `LOG_LEVEL` | top level |
//!
//! # Example
//!
//! ```rust,ignore
//! use airport_ops::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file(false)?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
