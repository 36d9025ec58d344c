use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::cache_stats_event::CacheStatsEvent;
use crate::stats::structs::cache_stats::CacheStats;
use crate::stats::structs::cache_stats_atomics::CacheStatsAtomics;

impl CacheStatsAtomics {
    pub fn new() -> CacheStatsAtomics {
        CacheStatsAtomics::default()
    }

    pub fn get_stats(&self) -> CacheStats
    {
        let hits = self.hits.load(Ordering::SeqCst);
        let misses = self.misses.load(Ordering::SeqCst);
        let total_queries = self.total_queries.load(Ordering::SeqCst);
        let (hit_rate, miss_rate) = if total_queries > 0 {
            (
                hits as f64 / total_queries as f64 * 100.0,
                misses as f64 / total_queries as f64 * 100.0,
            )
        } else {
            (0.0, 0.0)
        };
        CacheStats {
            hits,
            misses,
            invalidations: self.invalidations.load(Ordering::SeqCst),
            total_queries,
            sets: self.sets.load(Ordering::SeqCst),
            cache_size: self.cache_size.load(Ordering::SeqCst),
            hit_rate,
            miss_rate,
        }
    }

    pub(crate) fn update_stats(&self, event: CacheStatsEvent, value: i64)
    {
        let counter = self.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }

    pub(crate) fn set_stats(&self, event: CacheStatsEvent, value: i64)
    {
        self.counter(event).store(value, Ordering::SeqCst);
    }

    /// Counts one lookup together with its outcome.
    pub(crate) fn record_lookup(&self, hit: bool)
    {
        // Total first, so a concurrent snapshot can only see hits + misses <= total_queries.
        self.update_stats(CacheStatsEvent::TotalQueries, 1);
        if hit {
            self.update_stats(CacheStatsEvent::Hits, 1);
        } else {
            self.update_stats(CacheStatsEvent::Misses, 1);
        }
    }

    /// Turns an already counted hit into a miss, for entries the caller could not use.
    pub(crate) fn reclassify_hit(&self)
    {
        self.update_stats(CacheStatsEvent::Hits, -1);
        self.update_stats(CacheStatsEvent::Misses, 1);
    }

    fn counter(&self, event: CacheStatsEvent) -> &AtomicI64
    {
        match event {
            CacheStatsEvent::Hits => &self.hits,
            CacheStatsEvent::Misses => &self.misses,
            CacheStatsEvent::Invalidations => &self.invalidations,
            CacheStatsEvent::TotalQueries => &self.total_queries,
            CacheStatsEvent::Sets => &self.sets,
            CacheStatsEvent::CacheSize => &self.cache_size,
        }
    }
}
