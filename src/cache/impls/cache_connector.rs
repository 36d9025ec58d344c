use async_trait::async_trait;
use log::{info, warn};
use crate::cache::enums::cache_engine::CacheEngine;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector::CacheConnector;
use crate::cache::structs::cache_connector_memory::CacheConnectorMemory;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::structs::cache_config::CacheConfig;

impl CacheConnector {
    pub async fn new(config: &CacheConfig) -> Result<CacheConnector, CacheError> {
        if !config.enabled {
            info!("[CACHE] Caching disabled by configuration");
            return Ok(CacheConnector::disabled());
        }
        match config.engine {
            CacheEngine::redis => {
                let connection_url = CacheConnectorRedis::connection_url(&config.address, config.password.as_deref());
                let redis_connector = CacheConnectorRedis::connect(&connection_url).await?;
                redis_connector.ping().await?;
                info!("[CACHE] Connected to Redis at {}", config.address);
                Ok(CacheConnector {
                    redis: Some(redis_connector),
                    memory: None,
                    engine: Some(CacheEngine::redis),
                })
            }
            CacheEngine::memory => {
                info!("[CACHE] Using in-process memory cache");
                Ok(CacheConnector::memory())
            }
        }
    }

    /// Connects like `new`, but degrades to a disabled connector when the cache cannot be reached.
    pub async fn new_or_disabled(config: &CacheConfig) -> CacheConnector {
        match CacheConnector::new(config).await {
            Ok(connector) => connector,
            Err(error) => {
                warn!("[CACHE] {} - continuing without cache", error);
                CacheConnector::disabled()
            }
        }
    }

    pub fn memory() -> CacheConnector {
        CacheConnector {
            redis: None,
            memory: Some(CacheConnectorMemory::new()),
            engine: Some(CacheEngine::memory),
        }
    }

    pub fn disabled() -> CacheConnector {
        CacheConnector {
            redis: None,
            memory: None,
            engine: None,
        }
    }

    pub fn engine(&self) -> Option<CacheEngine> {
        self.engine
    }

    pub fn backend(&self) -> Result<&dyn CacheBackend, CacheError> {
        match self.engine.as_ref() {
            Some(CacheEngine::redis) => self.redis.as_ref()
                .map(|r| r as &dyn CacheBackend)
                .ok_or_else(|| CacheError::CacheUnavailable("Redis not connected".to_string())),
            Some(CacheEngine::memory) => self.memory.as_ref()
                .map(|m| m as &dyn CacheBackend)
                .ok_or_else(|| CacheError::CacheUnavailable("Memory cache not initialized".to_string())),
            None => Err(CacheError::CacheUnavailable("No cache engine configured".to_string())),
        }
    }
}

#[async_trait]
impl CacheBackend for CacheConnector {
    async fn ping(&self) -> Result<(), CacheError> {
        self.backend()?.ping().await
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.backend()?.get(key).await
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), CacheError> {
        self.backend()?.set(key, value, ttl_seconds).await
    }

    async fn delete(&self, keys: &[String]) -> Result<u64, CacheError> {
        self.backend()?.delete(keys).await
    }

    async fn keys(&self, prefix: &str) -> Result<Vec<String>, CacheError> {
        self.backend()?.keys(prefix).await
    }
}
