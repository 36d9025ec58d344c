use std::time::Duration;
use log::info;
use crate::config::structs::database_pool_config::DatabasePoolConfig;
use crate::database::enums::database_backend::DatabaseBackend;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::database_lease::DatabaseLease;
use crate::database::enums::database_target::DatabaseTarget;
use crate::database::errors::DatabaseError;
use crate::database::structs::binds::Binds;
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::structs::database_pool::DatabasePool;
use crate::database::structs::pool_status::PoolStatus;
use crate::database::structs::procedure_result::ProcedureResult;
use crate::database::structs::row_set::RowSet;

const SLOW_STATEMENT: Duration = Duration::from_secs(1);

impl DatabasePool {
    #[tracing::instrument(level = "debug", skip(url))]
    pub async fn create(target: DatabaseTarget, url: &str, config: DatabasePoolConfig) -> Result<DatabasePool, DatabaseError>
    {
        let driver = DatabaseDrivers::from_url(url)
            .ok_or_else(|| DatabaseError::PoolUnavailable(format!("{target} url has an unsupported scheme")))?;
        config.validate(target.as_str()).map_err(DatabaseError::PoolUnavailable)?;

        let backend = match driver {
            DatabaseDrivers::sqlite3 => DatabaseConnectorSQLite::create(url, &config, SLOW_STATEMENT).await.map(DatabaseBackend::sqlite3),
            DatabaseDrivers::mysql => DatabaseConnectorMySQL::create(url, &config, SLOW_STATEMENT).await.map(DatabaseBackend::mysql),
            DatabaseDrivers::pgsql => DatabaseConnectorPgSQL::create(url, &config, SLOW_STATEMENT).await.map(DatabaseBackend::pgsql),
        }.map_err(|e| DatabaseError::PoolUnavailable(format!("unable to connect to {driver} {target}: {e}")))?;

        info!("[DATABASE] {} pool ready on {} (min {}, max {}, timeout {}ms)", target, driver, config.min, config.max, config.timeout);
        Ok(DatabasePool { target, driver, backend, config })
    }

    pub fn target(&self) -> DatabaseTarget
    {
        self.target
    }

    pub fn driver(&self) -> DatabaseDrivers
    {
        self.driver
    }

    pub async fn acquire(&self) -> Result<DatabaseLease, DatabaseError>
    {
        Ok(match &self.backend {
            DatabaseBackend::sqlite3(connector) => DatabaseLease::sqlite3(connector.acquire(self.target).await?),
            DatabaseBackend::mysql(connector) => DatabaseLease::mysql(connector.acquire(self.target).await?),
            DatabaseBackend::pgsql(connector) => DatabaseLease::pgsql(connector.acquire(self.target).await?),
        })
    }

    pub async fn query(&self, sql: &str, binds: &Binds) -> Result<RowSet, DatabaseError>
    {
        match &self.backend {
            DatabaseBackend::sqlite3(connector) => connector.query(self.target, sql, binds).await,
            DatabaseBackend::mysql(connector) => connector.query(self.target, sql, binds).await,
            DatabaseBackend::pgsql(connector) => connector.query(self.target, sql, binds).await,
        }
    }

    pub async fn procedure(&self, procedure: &str, binds: &Binds) -> Result<ProcedureResult, DatabaseError>
    {
        match &self.backend {
            DatabaseBackend::sqlite3(connector) => connector.procedure(procedure, binds).await,
            DatabaseBackend::mysql(connector) => connector.procedure(procedure, binds).await,
            DatabaseBackend::pgsql(connector) => connector.procedure(procedure, binds).await,
        }
    }

    pub async fn ping(&self) -> Result<(), DatabaseError>
    {
        match &self.backend {
            DatabaseBackend::sqlite3(connector) => connector.ping(self.target).await,
            DatabaseBackend::mysql(connector) => connector.ping(self.target).await,
            DatabaseBackend::pgsql(connector) => connector.ping(self.target).await,
        }
    }

    pub fn status(&self) -> PoolStatus
    {
        let (size, idle, closed) = match &self.backend {
            DatabaseBackend::sqlite3(connector) => (connector.pool.size(), connector.pool.num_idle(), connector.pool.is_closed()),
            DatabaseBackend::mysql(connector) => (connector.pool.size(), connector.pool.num_idle(), connector.pool.is_closed()),
            DatabaseBackend::pgsql(connector) => (connector.pool.size(), connector.pool.num_idle(), connector.pool.is_closed()),
        };
        PoolStatus {
            target: self.target,
            driver: self.driver,
            size,
            idle,
            min: self.config.min,
            max: self.config.max,
            increment: self.config.increment,
            timeout: self.config.timeout,
            closed,
        }
    }

    pub async fn close(&self)
    {
        match &self.backend {
            DatabaseBackend::sqlite3(connector) => connector.pool.close().await,
            DatabaseBackend::mysql(connector) => connector.pool.close().await,
            DatabaseBackend::pgsql(connector) => connector.pool.close().await,
        }
        info!("[DATABASE] {} pool closed", self.target);
    }
}
