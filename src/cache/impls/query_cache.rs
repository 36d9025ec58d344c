use std::sync::Arc;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use crate::cache::enums::mutating_operation::MutatingOperation;
use crate::cache::enums::resource_tag::ResourceTag;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_entry::CacheEntry;
use crate::cache::structs::cache_key::CacheKey;
use crate::cache::structs::cache_store::CacheStore;
use crate::cache::structs::query_cache::QueryCache;
use crate::cache::structs::query_descriptor::QueryDescriptor;
use crate::stats::structs::cache_stats::CacheStats;

/// Every public method here swallows cache errors: a cache outage degrades
/// reads to misses and writes/invalidations to no-ops, it never fails a request.
impl QueryCache {
    pub fn new(store: Arc<CacheStore>) -> QueryCache
    {
        QueryCache { store }
    }

    pub fn store(&self) -> &Arc<CacheStore>
    {
        &self.store
    }

    pub fn derive_key(&self, descriptor: &QueryDescriptor, params: &Value) -> CacheKey
    {
        self.store.derive_key(descriptor, params)
    }

    pub async fn get_from_cache<T: DeserializeOwned>(&self, descriptor: &QueryDescriptor, params: &Value) -> Option<T>
    {
        let entry = self.get_entry(descriptor, params).await?;
        match serde_json::from_value::<T>(entry.data) {
            Ok(payload) => Some(payload),
            Err(error) => {
                warn!("[CACHE] Cached payload for {} has an unexpected shape: {}", entry.key, error);
                self.store.reject_hit();
                None
            }
        }
    }

    pub async fn get_entry(&self, descriptor: &QueryDescriptor, params: &Value) -> Option<CacheEntry>
    {
        let key = self.derive_key(descriptor, params);
        match self.store.get(&key).await {
            Ok(entry) => entry,
            Err(error) => {
                warn!("[CACHE] Lookup failed, treating as miss: {}", error);
                None
            }
        }
    }

    pub async fn set_in_cache<T: Serialize>(&self, descriptor: &QueryDescriptor, params: &Value, payload: &T, ttl_seconds: u64)
    {
        let key = self.derive_key(descriptor, params);
        if let Err(error) = self.try_set(&key, payload, ttl_seconds).await {
            warn!("[CACHE] Unable to store {}: {}", descriptor.tag, error);
        }
    }

    pub async fn invalidate_cache(&self, descriptor: &QueryDescriptor, params: &Value)
    {
        let key = self.derive_key(descriptor, params);
        if let Err(error) = self.store.invalidate(&key).await {
            warn!("[CACHE] Unable to invalidate entry of {}: {}", descriptor.tag, error);
        }
    }

    pub async fn invalidate_by_prefix(&self, tag: ResourceTag) -> u64
    {
        match self.store.invalidate_by_prefix(tag).await {
            Ok(removed) => removed,
            Err(error) => {
                warn!("[CACHE] Unable to invalidate tag {}: {}", tag, error);
                0
            }
        }
    }

    /// Invalidates every tag `operation` affects. Call only after the write has committed.
    pub async fn invalidate_for(&self, operation: MutatingOperation) -> u64
    {
        let mut removed = 0;
        for tag in operation.invalidates() {
            removed += self.invalidate_by_prefix(*tag).await;
        }
        debug!("[CACHE] {} invalidated {} entries", operation, removed);
        removed
    }

    pub async fn clear_all(&self) -> u64
    {
        match self.store.clear_all().await {
            Ok(removed) => removed,
            Err(error) => {
                warn!("[CACHE] Unable to clear cache: {}", error);
                0
            }
        }
    }

    pub fn get_cache_stats(&self) -> CacheStats
    {
        self.store.stats()
    }

    pub(crate) async fn try_set<T: Serialize>(&self, key: &CacheKey, payload: &T, ttl_seconds: u64) -> Result<(), CacheError>
    {
        let data = serde_json::to_value(payload)?;
        self.store.set(key, data, ttl_seconds).await
    }
}
