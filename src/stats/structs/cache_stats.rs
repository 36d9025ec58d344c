use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CacheStats {
    pub hits: i64,
    pub misses: i64,
    pub invalidations: i64,
    /// Number of cache lookups; every lookup is either a hit or a miss.
    pub total_queries: i64,
    /// Number of successful populations.
    pub sets: i64,
    pub cache_size: i64,
    /// Percentage of lookups that were hits.
    pub hit_rate: f64,
    /// Percentage of lookups that were misses.
    pub miss_rate: f64,
}
