use crate::config::structs::database_pool_config::DatabasePoolConfig;
use crate::database::enums::database_backend::DatabaseBackend;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::database_target::DatabaseTarget;

#[derive(Debug, Clone)]
pub struct DatabasePool {
    pub(crate) target: DatabaseTarget,
    pub(crate) driver: DatabaseDrivers,
    pub(crate) backend: DatabaseBackend,
    pub(crate) config: DatabasePoolConfig,
}
