//! Statistics event types for the cache counters.

use serde::{Deserialize, Serialize};

/// Enumeration of every cache counter.
///
/// Used with `CacheStatsAtomics::update_stats()` (delta) and
/// `CacheStatsAtomics::set_stats()` (absolute value).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatsEvent {
    Hits,
    Misses,
    Invalidations,
    TotalQueries,
    Sets,
    CacheSize,
}
