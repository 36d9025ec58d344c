use crate::cache::enums::resource_tag::ResourceTag;
use crate::cache::structs::cache_rules::CacheRules;

impl CacheRules {
    pub fn new(types: &[ResourceTag], frequency_seconds: u64, ttl_seconds: u64) -> CacheRules
    {
        CacheRules {
            enabled: true,
            types: types.to_vec(),
            frequency_seconds,
            ttl_seconds,
        }
    }

    pub fn disabled() -> CacheRules
    {
        CacheRules {
            enabled: false,
            types: Vec::new(),
            frequency_seconds: 0,
            ttl_seconds: 0,
        }
    }

    pub fn applies_to(&self, tag: ResourceTag) -> bool
    {
        self.enabled && self.types.contains(&tag)
    }

    pub fn is_throttled(&self) -> bool
    {
        self.frequency_seconds > 1
    }
}
