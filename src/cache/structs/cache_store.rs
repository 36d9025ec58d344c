use std::sync::Arc;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::stats::structs::cache_stats_atomics::CacheStatsAtomics;

pub struct CacheStore {
    pub(crate) backend: Arc<dyn CacheBackend>,
    pub(crate) prefix: String,
    pub(crate) stats: Arc<CacheStatsAtomics>,
}
