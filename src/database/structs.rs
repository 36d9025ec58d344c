//! Database connector structures.

/// Pool manager owning the primary and optional replica pool.
pub mod database_connector;

/// One pool together with its target and sizing.
pub mod database_pool;

/// SQLite pool.
pub mod database_connector_sqlite;

/// MySQL pool.
pub mod database_connector_mysql;

/// PostgreSQL pool.
pub mod database_connector_pgsql;

/// Positional bind parameter builder.
pub mod binds;

/// Decoded rows of a statement.
pub mod row_set;

/// Rows, out values and affected row count of a procedure call.
pub mod procedure_result;

/// Point-in-time pool usage.
pub mod pool_status;
