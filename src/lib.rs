//! # Airport Ops data-access core
//!
//! The resource layer underneath the airport operations back end: a connection
//! pool manager routing reads to replica capacity and writes to the primary,
//! combined with a query-result cache in front of it.
//!
//! ## Overview
//!
//! Controllers call into a single [`context::structs::data_context::DataContext`]
//! built at startup. Reads check the cache first and fall back to the database;
//! writes run on the primary and, once committed, invalidate every cached result
//! of the resource kinds they touched.
//!
//! ## Features
//!
//! - **Primary/replica pools**: PostgreSQL, MySQL and SQLite through the sqlx `Any` driver
//! - **Query cache**: Redis (or in-process memory) with deterministic keys and per-tag invalidation
//! - **Automatic caching**: per call-site rules with frequency throttling
//! - **Observability**: hit/miss counters, Prometheus output, pool status and Sentry integration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use airport_ops::config::structs::configuration::Configuration;
//! use airport_ops::context::structs::data_context::DataContext;
//!
//! let config = Arc::new(Configuration::load_from_file(false)?);
//! let context = DataContext::new(config).await?;
//! ```
//!
//! ## Modules
//!
//! - [`api`] - operations endpoints for cache statistics, pool status and invalidation
//! - [`cache`] - cache backends, key derivation, orchestrator and caching policy
//! - [`common`] - shared helpers and the boot error type
//! - [`config`] - configuration loading, environment overrides and validation
//! - [`context`] - the data context handed to controllers
//! - [`database`] - primary/replica pool manager
//! - [`logging`] - fern based log output
//! - [`stats`] - cache counters
//! - [`structs`] - CLI arguments

/// Operations API for cache statistics, pool status and invalidation.
pub mod api;

/// Query-result cache: backends, keys, orchestrator and caching policy.
pub mod cache;

/// Shared helpers and the boot error type.
pub mod common;

/// Configuration management module.
///
/// Loads `config.toml`, applies environment overrides and validates the result.
pub mod config;

/// Data context handed to controllers.
pub mod context;

/// Connection pool manager for the primary and replica databases.
pub mod database;

/// Console logging setup.
pub mod logging;

/// Cache counters and their snapshots.
pub mod stats;

/// CLI argument parsing.
pub mod structs;
