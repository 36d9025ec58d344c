use std::str::FromStr;
use std::time::Duration;
use futures_util::TryStreamExt;
use log::warn;
use serde_json::{json, Value};
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{ConnectOptions, Either, Error, Executor, Sqlite};
use crate::config::structs::database_pool_config::DatabasePoolConfig;
use crate::database::enums::database_target::DatabaseTarget;
use crate::database::errors::DatabaseError;
use crate::database::impls::row_set::{bytes_value, decode_column};
use crate::database::structs::binds::Binds;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::structs::procedure_result::ProcedureResult;
use crate::database::structs::row_set::RowSet;

impl DatabaseConnectorSQLite {
    pub async fn create(url: &str, config: &DatabasePoolConfig, slow_statement: Duration) -> Result<DatabaseConnectorSQLite, Error>
    {
        let options = SqliteConnectOptions::from_str(url)?
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Warn, slow_statement);
        let pool = SqlitePoolOptions::new()
            .min_connections(config.min)
            .max_connections(config.max)
            .acquire_timeout(config.acquire_timeout())
            .connect_with(options)
            .await?;
        Ok(DatabaseConnectorSQLite { pool })
    }

    pub async fn acquire(&self, target: DatabaseTarget) -> Result<PoolConnection<Sqlite>, DatabaseError>
    {
        self.pool.acquire().await.map_err(|e| DatabaseError::from_acquire(target, e))
    }

    pub async fn query(&self, target: DatabaseTarget, sql: &str, binds: &Binds) -> Result<RowSet, DatabaseError>
    {
        let mut connection = self.acquire(target).await?;
        let rows = binds.apply::<Sqlite>(sql)
            .fetch_all(&mut *connection)
            .await
            .map_err(|e| {
                warn!("[SQLite] Query on {} failed: {}", target, e);
                DatabaseError::QueryError { message: e.to_string() }
            })?;
        Ok(RowSet::from_rows(&rows, column_value))
    }

    /// Runs `procedure` in a transaction; dropping the transaction on an error rolls it back.
    pub async fn procedure(&self, procedure: &str, binds: &Binds) -> Result<ProcedureResult, DatabaseError>
    {
        let mut transaction = self.pool.begin().await.map_err(|e| DatabaseError::from_acquire(DatabaseTarget::Primary, e))?;
        let mut rows = Vec::new();
        let mut rows_affected = 0u64;
        {
            let mut stream = (&mut *transaction).fetch_many(binds.apply::<Sqlite>(procedure));
            loop {
                match stream.try_next().await {
                    Ok(Some(Either::Left(result))) => rows_affected += result.rows_affected(),
                    Ok(Some(Either::Right(row))) => rows.push(row),
                    Ok(None) => break,
                    Err(e) => {
                        warn!("[SQLite] Procedure failed, rolling back: {}", e);
                        return Err(DatabaseError::ProcedureError { message: e.to_string() });
                    }
                }
            }
        }
        transaction.commit().await.map_err(|e| DatabaseError::ProcedureError { message: e.to_string() })?;
        Ok(ProcedureResult::new(RowSet::from_rows(&rows, column_value), rows_affected))
    }

    pub async fn ping(&self, target: DatabaseTarget) -> Result<(), DatabaseError>
    {
        let mut connection = self.acquire(target).await?;
        sqlx::query("SELECT 1")
            .execute(&mut *connection)
            .await
            .map(|_| ())
            .map_err(|e| DatabaseError::QueryError { message: e.to_string() })
    }
}

/// SQLite values carry their storage class; dates and times are stored as text.
fn column_value(row: &SqliteRow, index: usize) -> Value {
    decode_column(row, index, |v: i64| json!(v))
        .or_else(|| decode_column(row, index, |v: f64| json!(v)))
        .or_else(|| decode_column(row, index, Value::String))
        .or_else(|| decode_column(row, index, bytes_value))
        .unwrap_or(Value::Null)
}
