use std::fmt;
use std::str::FromStr;
use crate::cache::enums::cache_engine::CacheEngine;

impl fmt::Display for CacheEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheEngine::redis => write!(f, "redis"),
            CacheEngine::memory => write!(f, "memory"),
        }
    }
}

impl FromStr for CacheEngine {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "redis" => Ok(CacheEngine::redis),
            "memory" => Ok(CacheEngine::memory),
            other => Err(format!("unknown cache engine '{other}'")),
        }
    }
}

impl CacheEngine {
    pub fn url_scheme(&self) -> &'static str {
        match self {
            CacheEngine::redis => "redis://",
            CacheEngine::memory => "memory://",
        }
    }
}
