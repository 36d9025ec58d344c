use async_trait::async_trait;
use log::debug;
use std::time::Duration;
use tokio::time::Instant;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_memory::CacheConnectorMemory;
use crate::cache::traits::cache_backend::CacheBackend;

impl CacheConnectorMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries.lock().values().filter(|(_, expires)| *expires > now).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn purge_expired(&self) {
        let now = Instant::now();
        self.entries.lock().retain(|_, (_, expires)| *expires > now);
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorMemory {
    async fn ping(&self) -> Result<(), CacheError> {
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let now = Instant::now();
        let mut lock = self.entries.lock();
        let expired = match lock.get(key) {
            Some((value, expires)) if *expires > now => return Ok(Some(value.clone())),
            Some(_) => true,
            None => false,
        };
        if expired {
            lock.remove(key);
        }
        Ok(None)
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), CacheError> {
        let expires = Instant::now().checked_add(Duration::from_secs(ttl_seconds))
            .ok_or_else(|| CacheError::CacheUnavailable(format!("ttl of {ttl_seconds}s is out of range")))?;
        self.entries.lock().insert(key.to_string(), (value.to_string(), expires));
        debug!("[Memory] Set {} (ttl {}s)", key, ttl_seconds);
        Ok(())
    }

    async fn delete(&self, keys: &[String]) -> Result<u64, CacheError> {
        self.purge_expired();
        let mut lock = self.entries.lock();
        let removed = keys.iter().filter(|key| lock.remove(key.as_str()).is_some()).count() as u64;
        debug!("[Memory] Deleted {} of {} keys", removed, keys.len());
        Ok(removed)
    }

    async fn keys(&self, prefix: &str) -> Result<Vec<String>, CacheError> {
        self.purge_expired();
        let lock = self.entries.lock();
        Ok(lock
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key.clone())
            .collect())
    }
}
