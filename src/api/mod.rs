//! Operations API.
//!
//! A small actix-web listener exposing the cache counters, the pool status and
//! maintenance invalidation. Controllers do not go through here; it exists for
//! operators and monitoring.
//!
//! # Endpoints
//!
//! - `GET /api/cache/stats` - cache counters as JSON
//! - `GET /api/cache/metrics` - cache counters in Prometheus text format
//! - `GET /api/database/pools` - primary/replica pool usage
//! - `DELETE /api/cache/{tag}` - drop every cached result of one resource kind
//! - `DELETE /api/cache` - drop every cached result
//!
//! # Authentication
//!
//! Every endpoint requires the configured API key as a query parameter:
//! `?token=<api_key>`

/// Data structures for API service context.
pub mod structs;

/// Core API service functions and route configuration.
#[allow(clippy::module_inception)]
pub mod api;

/// Cache statistics, metrics and invalidation endpoints.
pub mod api_cache;

/// Pool status endpoint.
pub mod api_database;
