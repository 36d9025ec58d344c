use crate::cache::enums::cache_engine::CacheEngine;
use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CacheConfig {
    pub enabled: bool,
    pub engine: CacheEngine,
    pub address: String,
    pub password: Option<String>,
    pub prefix: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            engine: CacheEngine::redis,
            address: "127.0.0.1:6379".to_string(),
            password: None,
            prefix: "airport:".to_string(),
        }
    }
}
