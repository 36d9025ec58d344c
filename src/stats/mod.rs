//! Cache statistics tracking module.
//!
//! Process-wide atomic counters for the query cache: hits, misses,
//! invalidations, lookups, populations and the current number of stored
//! entries. Counters start at zero on boot and are never persisted; they are
//! an observability aid and are not kept transactionally consistent with the
//! cache contents.
//!
//! Only `CacheStore` mutates the counters. Everyone else reads a
//! `CacheStats` snapshot, which adds the derived hit and miss rates.
//!
//! # Example
//!
//! ```rust,ignore
//! let stats = query_cache.get_cache_stats();
//! println!("hit rate {:.1}%", stats.hit_rate);
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshots).
pub mod structs;
