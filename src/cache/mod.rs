//! Query-result cache.
//!
//! Results are stored under deterministic keys derived from the query text and its
//! parameters, grouped by [`ResourceTag`](enums::resource_tag::ResourceTag) so that a
//! write can drop every result of the resources it touched.
//!
//! # Layers
//!
//! - `CacheBackend`: raw key/value with expiry (Redis, or in-process memory)
//! - `CacheStore`: key derivation, entry (de)serialization and hit/miss counters
//! - `QueryCache`: the seam controllers use; cache failures degrade to misses
//! - `CachePolicy`: automatic caching per call site with frequency throttling
//!
//! # Example
//!
//! ```rust,ignore
//! use airport_ops::cache::structs::query_descriptor::QueryDescriptor;
//!
//! let descriptor = QueryDescriptor::new(ResourceTag::flights, "SELECT * FROM flights WHERE id = :id");
//! query_cache.set_in_cache(&descriptor, &json!({"id": 7}), &rows, 300).await;
//! ```

/// Cache engines, resource tags, mutating operations and policy outcomes.
pub mod enums;

/// Error types for cache operations.
pub mod errors;

/// Implementation blocks for the cache types.
pub mod impls;

/// Data structures for connectors, keys, entries and the orchestrator.
pub mod structs;

/// Cache backend trait definitions.
pub mod traits;
