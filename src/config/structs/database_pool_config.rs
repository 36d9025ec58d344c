use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabasePoolConfig {
    pub min: u32,
    pub max: u32,
    pub increment: u32,
    /// Acquire timeout in milliseconds.
    pub timeout: u64
}
