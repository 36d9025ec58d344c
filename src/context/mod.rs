//! Data context.
//!
//! `DataContext` is built once at startup and handed to every consumer. It
//! owns the pool manager and the query cache and provides the two paths
//! controllers use: a cached read and a write followed by invalidation.

/// Context structures.
pub mod structs;

/// Implementation blocks for the context.
pub mod impls;
