//! Statistics data structures.

/// Snapshot of current statistics values.
pub mod cache_stats;

/// Atomic counters for thread-safe statistics updates.
pub mod cache_stats_atomics;
