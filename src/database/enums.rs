//! Database enumeration types.

/// Supported database driver types (sqlite3, mysql, pgsql).
pub mod database_drivers;

/// Pool a statement is routed to (primary or replica).
pub mod database_target;

/// Single positional bind parameter.
pub mod bind_value;

/// Driver specific pool.
pub mod database_backend;

/// Leased connection of any driver.
pub mod database_lease;
