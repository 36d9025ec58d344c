use serde::{Deserialize, Serialize};

/// TTLs in seconds. Tags without a dedicated field use `default`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheTtlConfig {
    pub default: u64,
    pub reports: u64,
    pub flights: u64,
    pub bookings: u64
}
