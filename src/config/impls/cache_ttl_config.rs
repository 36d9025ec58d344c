use crate::cache::enums::resource_tag::ResourceTag;
use crate::config::structs::cache_ttl_config::CacheTtlConfig;

impl Default for CacheTtlConfig {
    fn default() -> Self {
        Self {
            default: 300,
            reports: 3600,
            flights: 300,
            bookings: 600,
        }
    }
}

impl CacheTtlConfig {
    /// Longest TTL accepted from configuration: one year.
    pub const MAX_SECONDS: u64 = 31_536_000;

    pub fn for_tag(&self, tag: ResourceTag) -> u64
    {
        match tag {
            ResourceTag::reports => self.reports,
            ResourceTag::flights => self.flights,
            ResourceTag::bookings => self.bookings,
            ResourceTag::passengers
            | ResourceTag::security
            | ResourceTag::audit
            | ResourceTag::users => self.default,
        }
    }
}
