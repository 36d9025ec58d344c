use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;

/// Driver specific pool behind a `DatabasePool`.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone)]
pub enum DatabaseBackend {
    sqlite3(DatabaseConnectorSQLite),
    mysql(DatabaseConnectorMySQL),
    pgsql(DatabaseConnectorPgSQL),
}
