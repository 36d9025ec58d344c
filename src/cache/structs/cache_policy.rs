use crate::cache::structs::cache_rules::CacheRules;

#[derive(Debug, Clone)]
pub struct CachePolicy {
    pub(crate) rules: CacheRules,
}
