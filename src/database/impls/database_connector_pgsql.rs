use std::str::FromStr;
use std::time::Duration;
use chrono::{NaiveDate, NaiveTime};
use futures_util::TryStreamExt;
use log::{debug, warn};
use serde_json::{json, Value};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgRow};
use sqlx::pool::PoolConnection;
use sqlx::types::{Decimal, Uuid};
use sqlx::{Column, ConnectOptions, Either, Error, Executor, Postgres, Row, TypeInfo};
use crate::config::structs::database_pool_config::DatabasePoolConfig;
use crate::database::enums::database_target::DatabaseTarget;
use crate::database::errors::DatabaseError;
use crate::database::impls::row_set::{bytes_value, decode_column, naive_timestamp_value, number_value, timestamp_value};
use crate::database::structs::binds::Binds;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;
use crate::database::structs::procedure_result::ProcedureResult;
use crate::database::structs::row_set::RowSet;

impl DatabaseConnectorPgSQL {
    pub async fn create(url: &str, config: &DatabasePoolConfig, slow_statement: Duration) -> Result<DatabaseConnectorPgSQL, Error>
    {
        let options = PgConnectOptions::from_str(url)?
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Warn, slow_statement);
        let pool = PgPoolOptions::new()
            .min_connections(config.min)
            .max_connections(config.max)
            .acquire_timeout(config.acquire_timeout())
            .connect_with(options)
            .await?;
        Ok(DatabaseConnectorPgSQL { pool })
    }

    pub async fn acquire(&self, target: DatabaseTarget) -> Result<PoolConnection<Postgres>, DatabaseError>
    {
        self.pool.acquire().await.map_err(|e| DatabaseError::from_acquire(target, e))
    }

    pub async fn query(&self, target: DatabaseTarget, sql: &str, binds: &Binds) -> Result<RowSet, DatabaseError>
    {
        let mut connection = self.acquire(target).await?;
        let rows = binds.apply::<Postgres>(sql)
            .fetch_all(&mut *connection)
            .await
            .map_err(|e| {
                warn!("[PgSQL] Query on {} failed: {}", target, e);
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
            let mut stream = (&mut *transaction).fetch_many(binds.apply::<Postgres>(procedure));
            loop {
                match stream.try_next().await {
                    Ok(Some(Either::Left(result))) => rows_affected += result.rows_affected(),
                    Ok(Some(Either::Right(row))) => rows.push(row),
                    Ok(None) => break,
                    Err(e) => {
                        warn!("[PgSQL] Procedure failed, rolling back: {}", e);
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

fn column_value(row: &PgRow, index: usize) -> Value {
    decode_column(row, index, Value::Bool)
        .or_else(|| decode_column(row, index, |v: i16| json!(v)))
        .or_else(|| decode_column(row, index, |v: i32| json!(v)))
        .or_else(|| decode_column(row, index, |v: i64| json!(v)))
        .or_else(|| decode_column(row, index, |v: f32| json!(v)))
        .or_else(|| decode_column(row, index, |v: f64| json!(v)))
        .or_else(|| decode_column(row, index, |v: Decimal| number_value(v.to_string())))
        .or_else(|| decode_column(row, index, Value::String))
        .or_else(|| decode_column(row, index, timestamp_value))
        .or_else(|| decode_column(row, index, naive_timestamp_value))
        .or_else(|| decode_column(row, index, |v: NaiveDate| Value::String(v.to_string())))
        .or_else(|| decode_column(row, index, |v: NaiveTime| Value::String(v.to_string())))
        .or_else(|| decode_column(row, index, |v: Uuid| Value::String(v.to_string())))
        .or_else(|| decode_column(row, index, |v: Value| v))
        .or_else(|| decode_column(row, index, bytes_value))
        .unwrap_or_else(|| {
            debug!("[PgSQL] Column {} has type {} without a JSON mapping", row.column(index).name(), row.column(index).type_info().name());
            Value::Null
        })
}
