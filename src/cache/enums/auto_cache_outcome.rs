#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoCacheOutcome {
    Cached,
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Disabled,
    TypeNotCached,
    Throttled,
    CacheUnavailable,
}
