use crate::cache::enums::cache_engine::CacheEngine;
use crate::cache::structs::cache_connector_memory::CacheConnectorMemory;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;

/// `engine == None` means caching is disabled; every call then reports the cache as unavailable.
#[derive(Debug, Clone)]
pub struct CacheConnector {
    pub(crate) redis: Option<CacheConnectorRedis>,
    pub(crate) memory: Option<CacheConnectorMemory>,
    pub(crate) engine: Option<CacheEngine>,
}
