use sqlx::pool::PoolConnection;
use sqlx::{MySql, Postgres, Sqlite};

/// A connection leased from one of the pools. It goes back to its pool when dropped.
#[allow(non_camel_case_types)]
pub enum DatabaseLease {
    sqlite3(PoolConnection<Sqlite>),
    mysql(PoolConnection<MySql>),
    pgsql(PoolConnection<Postgres>),
}
