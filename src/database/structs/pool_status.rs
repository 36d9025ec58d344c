use serde::{Deserialize, Serialize};
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::database_target::DatabaseTarget;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PoolStatus {
    pub target: DatabaseTarget,
    pub driver: DatabaseDrivers,
    pub size: u32,
    pub idle: usize,
    pub min: u32,
    pub max: u32,
    pub increment: u32,
    pub timeout: u64,
    pub closed: bool,
}
