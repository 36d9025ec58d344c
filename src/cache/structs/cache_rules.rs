use serde::{Deserialize, Serialize};
use crate::cache::enums::resource_tag::ResourceTag;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CacheRules {
    pub enabled: bool,
    pub types: Vec<ResourceTag>,
    /// Minimum seconds between two populations of the same key; values of 0 or 1 disable throttling.
    pub frequency_seconds: u64,
    pub ttl_seconds: u64,
}
