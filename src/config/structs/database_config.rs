use serde::{Deserialize, Serialize};
use crate::config::structs::database_pool_config::DatabasePoolConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseConfig {
    pub primary_url: String,
    /// Leave out to run without a replica; replica reads then fail with a configuration error.
    pub replica_url: Option<String>,
    pub primary_pool: DatabasePoolConfig,
    pub replica_pool: DatabasePoolConfig
}
