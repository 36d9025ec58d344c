//! Implementation blocks for the pool manager types.

pub mod database_drivers;
pub mod database_target;
pub mod bind_value;
pub mod binds;
pub mod row_set;
pub mod procedure_result;
pub mod database_connector_sqlite;
pub mod database_connector_mysql;
pub mod database_connector_pgsql;
pub mod database_pool;
pub mod database_connector;
