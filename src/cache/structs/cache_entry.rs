use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub key: String,
    pub data: Value,
    /// TTL in seconds the entry was stored with.
    pub duration: u64,
    /// Unix milliseconds at population.
    pub timestamp: i64,
}
