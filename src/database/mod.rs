//! Connection pool manager.
//!
//! Owns the primary pool and the optional replica pool, hands out leased
//! connections and executes statements and procedures against them. Pools are
//! built on the sqlx `Any` driver so the same code serves PostgreSQL, MySQL and
//! SQLite URLs.
//!
//! Reads may be routed to the replica; writes always run on the primary inside
//! a transaction. No statement is retried here: `PoolExhausted` is the only
//! transient error and retrying it is left to the caller.

/// Drivers, pool targets and bind values.
pub mod enums;

/// Error types for pool and statement failures.
pub mod errors;

/// Implementation blocks for the pool manager types.
pub mod impls;

/// Pools, binds, result sets and status snapshots.
pub mod structs;

#[cfg(test)]
mod tests;
