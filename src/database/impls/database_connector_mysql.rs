use std::str::FromStr;
use std::time::Duration;
use chrono::{NaiveDate, NaiveTime};
use futures_util::TryStreamExt;
use log::warn;
use serde_json::{json, Value};
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions, MySqlRow};
use sqlx::pool::PoolConnection;
use sqlx::types::Decimal;
use sqlx::{Column, ConnectOptions, Either, Error, Executor, MySql, Row, TypeInfo};
use crate::config::structs::database_pool_config::DatabasePoolConfig;
use crate::database::enums::database_target::DatabaseTarget;
use crate::database::errors::DatabaseError;
use crate::database::impls::row_set::{bytes_value, decode_column, naive_timestamp_value, number_value, timestamp_value};
use crate::database::structs::binds::Binds;
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::procedure_result::ProcedureResult;
use crate::database::structs::row_set::RowSet;

impl DatabaseConnectorMySQL {
    pub async fn create(url: &str, config: &DatabasePoolConfig, slow_statement: Duration) -> Result<DatabaseConnectorMySQL, Error>
    {
        let options = MySqlConnectOptions::from_str(url)?
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Warn, slow_statement);
        let pool = MySqlPoolOptions::new()
            .min_connections(config.min)
            .max_connections(config.max)
            .acquire_timeout(config.acquire_timeout())
            .connect_with(options)
            .await?;
        Ok(DatabaseConnectorMySQL { pool })
    }

    pub async fn acquire(&self, target: DatabaseTarget) -> Result<PoolConnection<MySql>, DatabaseError>
    {
        self.pool.acquire().await.map_err(|e| DatabaseError::from_acquire(target, e))
    }

    pub async fn query(&self, target: DatabaseTarget, sql: &str, binds: &Binds) -> Result<RowSet, DatabaseError>
    {
        let mut connection = self.acquire(target).await?;
        let rows = binds.apply::<MySql>(sql)
            .fetch_all(&mut *connection)
            .await
            .map_err(|e| {
                warn!("[MySQL] Query on {} failed: {}", target, e);
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
            let mut stream = (&mut *transaction).fetch_many(binds.apply::<MySql>(procedure));
            loop {
                match stream.try_next().await {
                    Ok(Some(Either::Left(result))) => rows_affected += result.rows_affected(),
                    Ok(Some(Either::Right(row))) => rows.push(row),
                    Ok(None) => break,
                    Err(e) => {
                        warn!("[MySQL] Procedure failed, rolling back: {}", e);
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

fn column_value(row: &MySqlRow, index: usize) -> Value {
    // TINYINT(1) is reported as BOOLEAN; wider TINYINTs stay numbers.
    if row.column(index).type_info().name() == "BOOLEAN" {
        if let Some(value) = decode_column(row, index, Value::Bool) {
            return value;
        }
    }
    decode_column(row, index, |v: i64| json!(v))
        .or_else(|| decode_column(row, index, |v: u64| json!(v)))
        .or_else(|| decode_column(row, index, |v: f32| json!(v)))
        .or_else(|| decode_column(row, index, |v: f64| json!(v)))
        .or_else(|| decode_column(row, index, |v: Decimal| number_value(v.to_string())))
        .or_else(|| decode_column(row, index, Value::String))
        .or_else(|| decode_column(row, index, timestamp_value))
        .or_else(|| decode_column(row, index, naive_timestamp_value))
        .or_else(|| decode_column(row, index, |v: NaiveDate| Value::String(v.to_string())))
        .or_else(|| decode_column(row, index, |v: NaiveTime| Value::String(v.to_string())))
        .or_else(|| decode_column(row, index, |v: Value| v))
        .or_else(|| decode_column(row, index, bytes_value))
        .unwrap_or(Value::Null)
}
