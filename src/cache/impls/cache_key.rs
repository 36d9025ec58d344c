use std::fmt;
use serde_json::{json, Map, Value};
use crate::cache::structs::cache_key::CacheKey;
use crate::cache::structs::query_descriptor::QueryDescriptor;
use crate::common::common::normalize_whitespace;

const MARKER_SUFFIX: &str = ":access";

impl CacheKey {
    /// Derives `{prefix}{tag}:{json}` where `json` is `{"params": .., "query": ..}` with
    /// whitespace-normalized query text and recursively sorted object keys.
    pub fn derive(prefix: &str, descriptor: &QueryDescriptor, params: &Value) -> CacheKey {
        let params = match params {
            Value::Null => Value::Object(Map::new()),
            other => canonicalize(other),
        };
        let body = json!({
            "params": params,
            "query": normalize_whitespace(&descriptor.text),
        });
        CacheKey(format!("{}{}:{}", prefix, descriptor.tag, body))
    }

    pub fn tag_prefix(prefix: &str, tag: &str) -> String {
        format!("{}{}:", prefix, tag)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key of the throttle marker belonging to this entry.
    pub fn marker(&self) -> String {
        format!("{}{}", self.0, MARKER_SUFFIX)
    }

    pub fn is_marker(key: &str) -> bool {
        key.ends_with(MARKER_SUFFIX)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rebuilds `value` with every object's keys in sorted order.
pub fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut sorted = Map::with_capacity(map.len());
            for key in keys {
                sorted.insert(key.clone(), canonicalize(&map[key]));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}
