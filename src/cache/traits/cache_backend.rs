use async_trait::async_trait;
use crate::cache::errors::CacheError;

/// Raw key-value storage with expiry.
///
/// Backends store opaque strings; key layout, serialization and counters
/// are handled by `CacheStore`. Expiry is enforced by the backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn ping(&self) -> Result<(), CacheError>;

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), CacheError>;

    /// Deletes the given keys and returns how many existed.
    async fn delete(&self, keys: &[String]) -> Result<u64, CacheError>;

    /// Lists every live key starting with `prefix`.
    async fn keys(&self, prefix: &str) -> Result<Vec<String>, CacheError>;
}
