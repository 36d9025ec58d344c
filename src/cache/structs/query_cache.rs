use std::sync::Arc;
use crate::cache::structs::cache_store::CacheStore;

#[derive(Clone)]
pub struct QueryCache {
    pub(crate) store: Arc<CacheStore>,
}
