use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct CacheStatsAtomics {
    pub(crate) hits: AtomicI64,
    pub(crate) misses: AtomicI64,
    pub(crate) invalidations: AtomicI64,
    pub(crate) total_queries: AtomicI64,
    pub(crate) sets: AtomicI64,
    pub(crate) cache_size: AtomicI64,
}
