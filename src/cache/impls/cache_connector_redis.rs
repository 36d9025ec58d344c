use async_trait::async_trait;
use log::debug;
use redis::AsyncCommands;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;
use crate::cache::traits::cache_backend::CacheBackend;

const SCAN_BATCH: u64 = 500;

impl CacheConnectorRedis {
    pub async fn connect(url: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(url)
            .map_err(|e| CacheError::CacheUnavailable(format!("Failed to create Redis client: {}", e)))?;
        let connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| CacheError::CacheUnavailable(format!("Failed to connect to Redis: {}", e)))?;
        Ok(Self {
            connection,
        })
    }

    /// Builds `redis://[:password@]address`.
    pub fn connection_url(address: &str, password: Option<&str>) -> String {
        match password {
            Some(password) if !password.is_empty() => format!("redis://:{}@{}", password, address),
            _ => format!("redis://{}", address),
        }
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorRedis {
    async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.get(key)
            .await
            .map_err(CacheError::RedisError)?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        conn.set_ex::<_, _, ()>(key, value, ttl_seconds)
            .await
            .map_err(CacheError::RedisError)?;
        debug!("[Redis] Set {} (ttl {}s)", key, ttl_seconds);
        Ok(())
    }

    async fn delete(&self, keys: &[String]) -> Result<u64, CacheError> {
        if keys.is_empty() {
            return Ok(0);
        }
        let mut conn = self.connection.clone();
        let removed: u64 = conn.del(keys.to_vec())
            .await
            .map_err(CacheError::RedisError)?;
        debug!("[Redis] Deleted {} of {} keys", removed, keys.len());
        Ok(removed)
    }

    async fn keys(&self, prefix: &str) -> Result<Vec<String>, CacheError> {
        let mut conn = self.connection.clone();
        let pattern = format!("{}*", prefix);
        let mut cursor: u64 = 0;
        let mut keys = Vec::new();
        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH)
                .query_async(&mut conn)
                .await
                .map_err(CacheError::RedisError)?;
            keys.extend(batch);
            if next == 0 {
                break;
            }
            cursor = next;
        }
        // SCAN may return a key more than once.
        keys.sort_unstable();
        keys.dedup();
        Ok(keys)
    }
}
