//! Statistics enumeration types.

/// Counters that can be updated on `CacheStatsAtomics`.
pub mod cache_stats_event;
