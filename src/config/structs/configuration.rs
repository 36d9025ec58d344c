use serde::{Deserialize, Serialize};
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::cache_ttl_config::CacheTtlConfig;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::sentry_config::SentryConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub api_key: String,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub cache_ttl: CacheTtlConfig,
    pub api_server: ApiServerConfig,
    pub sentry_config: SentryConfig
}
