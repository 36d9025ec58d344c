use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;
use crate::cache::enums::auto_cache_outcome::{AutoCacheOutcome, SkipReason};
use crate::cache::structs::cache_policy::CachePolicy;
use crate::cache::structs::cache_rules::CacheRules;
use crate::cache::structs::query_cache::QueryCache;
use crate::cache::structs::query_descriptor::QueryDescriptor;
use crate::common::common::current_time_millis;

impl CachePolicy {
    pub fn new(rules: CacheRules) -> CachePolicy
    {
        CachePolicy { rules }
    }

    pub fn rules(&self) -> &CacheRules
    {
        &self.rules
    }

    /// Decides whether `payload` gets written for `descriptor`/`params` and writes it if so.
    ///
    /// Under a frequency above one second a `{key}:access` marker records the last population;
    /// while it is younger than `frequency_seconds` the write is skipped. The stored entry keeps
    /// its own TTL, a skipped write never extends it.
    pub async fn auto_cache<T: Serialize>(&self, cache: &QueryCache, descriptor: &QueryDescriptor, params: &Value, payload: &T) -> AutoCacheOutcome
    {
        if !self.rules.enabled {
            return AutoCacheOutcome::Skipped(SkipReason::Disabled);
        }
        if !self.rules.applies_to(descriptor.tag) {
            return AutoCacheOutcome::Skipped(SkipReason::TypeNotCached);
        }

        let key = cache.derive_key(descriptor, params);
        let store = cache.store();

        if self.rules.is_throttled() {
            match store.get_marker(&key).await {
                Ok(Some(last)) => {
                    let elapsed = current_time_millis().saturating_sub(last);
                    if elapsed < (self.rules.frequency_seconds as i64).saturating_mul(1000) {
                        debug!("[POLICY] {} refreshed {}ms ago, skipping", descriptor.tag, elapsed);
                        return AutoCacheOutcome::Skipped(SkipReason::Throttled);
                    }
                }
                Ok(None) => {}
                Err(error) => {
                    warn!("[POLICY] Unable to read throttle marker: {}", error);
                    return AutoCacheOutcome::Skipped(SkipReason::CacheUnavailable);
                }
            }
            if let Err(error) = store.set_marker(&key, self.rules.frequency_seconds).await {
                warn!("[POLICY] Unable to write throttle marker: {}", error);
                return AutoCacheOutcome::Skipped(SkipReason::CacheUnavailable);
            }
        }

        match cache.try_set(&key, payload, self.rules.ttl_seconds).await {
            Ok(()) => AutoCacheOutcome::Cached,
            Err(error) => {
                warn!("[POLICY] Unable to cache {}: {}", descriptor.tag, error);
                AutoCacheOutcome::Skipped(SkipReason::CacheUnavailable)
            }
        }
    }
}
