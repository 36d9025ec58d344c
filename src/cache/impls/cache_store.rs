use std::sync::Arc;
use log::{debug, warn};
use serde_json::Value;
use crate::cache::enums::resource_tag::ResourceTag;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_entry::CacheEntry;
use crate::cache::structs::cache_key::CacheKey;
use crate::cache::structs::cache_store::CacheStore;
use crate::cache::structs::query_descriptor::QueryDescriptor;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::common::common::current_time_millis;
use crate::stats::enums::cache_stats_event::CacheStatsEvent;
use crate::stats::structs::cache_stats::CacheStats;
use crate::stats::structs::cache_stats_atomics::CacheStatsAtomics;

impl CacheStore {
    pub fn new(backend: Arc<dyn CacheBackend>, prefix: &str) -> CacheStore
    {
        CacheStore {
            backend,
            prefix: prefix.to_string(),
            stats: Arc::new(CacheStatsAtomics::new()),
        }
    }

    pub fn prefix(&self) -> &str
    {
        &self.prefix
    }

    pub fn derive_key(&self, descriptor: &QueryDescriptor, params: &Value) -> CacheKey
    {
        CacheKey::derive(&self.prefix, descriptor, params)
    }

    /// Looks up `key`. A missing key is `Ok(None)`; a backend failure is
    /// counted as a miss before the error is returned.
    pub async fn get(&self, key: &CacheKey) -> Result<Option<CacheEntry>, CacheError>
    {
        let raw = match self.backend.get(key.as_str()).await {
            Ok(raw) => raw,
            Err(error) => {
                self.stats.record_lookup(false);
                return Err(error);
            }
        };
        match raw {
            None => {
                self.stats.record_lookup(false);
                Ok(None)
            }
            Some(raw) => match serde_json::from_str::<CacheEntry>(&raw) {
                Ok(entry) => {
                    self.stats.record_lookup(true);
                    Ok(Some(entry))
                }
                Err(error) => {
                    self.stats.record_lookup(false);
                    Err(CacheError::from(error))
                }
            }
        }
    }

    /// Counts the last hit on this store as a miss instead.
    pub(crate) fn reject_hit(&self)
    {
        self.stats.reclassify_hit();
    }

    pub async fn set(&self, key: &CacheKey, data: Value, ttl_seconds: u64) -> Result<(), CacheError>
    {
        if ttl_seconds == 0 {
            warn!("[CACHE] Refusing to store {} without a TTL", key);
            return Ok(());
        }
        let entry = CacheEntry {
            key: key.as_str().to_string(),
            data,
            duration: ttl_seconds,
            timestamp: current_time_millis(),
        };
        let raw = serde_json::to_string(&entry)?;
        self.backend.set(key.as_str(), &raw, ttl_seconds).await?;
        self.stats.update_stats(CacheStatsEvent::Sets, 1);
        self.refresh_size().await;
        Ok(())
    }

    /// Deletes one entry and its throttle marker. Deleting a missing key is not an error.
    pub async fn invalidate(&self, key: &CacheKey) -> Result<(), CacheError>
    {
        self.backend.delete(&[key.as_str().to_string(), key.marker()]).await?;
        self.stats.update_stats(CacheStatsEvent::Invalidations, 1);
        self.refresh_size().await;
        Ok(())
    }

    /// Deletes every entry tagged `tag` and returns the number of entries removed.
    /// Throttle markers under the tag are dropped as well but not counted.
    pub async fn invalidate_by_prefix(&self, tag: ResourceTag) -> Result<u64, CacheError>
    {
        let removed = self.delete_under(&CacheKey::tag_prefix(&self.prefix, tag.as_str())).await?;
        self.stats.update_stats(CacheStatsEvent::Invalidations, removed as i64);
        self.refresh_size().await;
        debug!("[CACHE] Invalidated {} entries tagged {}", removed, tag);
        Ok(removed)
    }

    pub async fn clear_all(&self) -> Result<u64, CacheError>
    {
        let removed = self.delete_under(&self.prefix).await?;
        self.stats.update_stats(CacheStatsEvent::Invalidations, removed as i64);
        self.stats.set_stats(CacheStatsEvent::CacheSize, 0);
        Ok(removed)
    }

    pub async fn get_marker(&self, key: &CacheKey) -> Result<Option<i64>, CacheError>
    {
        let raw = self.backend.get(&key.marker()).await?;
        Ok(raw.and_then(|value| value.trim().parse::<i64>().ok()))
    }

    pub async fn set_marker(&self, key: &CacheKey, ttl_seconds: u64) -> Result<(), CacheError>
    {
        self.backend.set(&key.marker(), &current_time_millis().to_string(), ttl_seconds).await
    }

    pub fn stats(&self) -> CacheStats
    {
        self.stats.get_stats()
    }

    pub async fn ping(&self) -> Result<(), CacheError>
    {
        self.backend.ping().await
    }

    async fn delete_under(&self, prefix: &str) -> Result<u64, CacheError>
    {
        let keys = self.backend.keys(prefix).await?;
        if keys.is_empty() {
            return Ok(0);
        }
        let entries = keys.iter().filter(|key| !CacheKey::is_marker(key)).count() as u64;
        self.backend.delete(&keys).await?;
        Ok(entries)
    }

    async fn refresh_size(&self)
    {
        match self.backend.keys(&self.prefix).await {
            Ok(keys) => {
                let size = keys.iter().filter(|key| !CacheKey::is_marker(key)).count() as i64;
                self.stats.set_stats(CacheStatsEvent::CacheSize, size);
            }
            Err(error) => warn!("[CACHE] Unable to refresh cache size: {}", error),
        }
    }
}
