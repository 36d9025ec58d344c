use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use log::{debug, error, info};
use crate::config::structs::database_config::DatabaseConfig;
use crate::database::enums::database_lease::DatabaseLease;
use crate::database::enums::database_target::DatabaseTarget;
use crate::database::errors::DatabaseError;
use crate::database::structs::binds::Binds;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_pool::DatabasePool;
use crate::database::structs::pool_status::PoolStatus;
use crate::database::structs::procedure_result::ProcedureResult;
use crate::database::structs::row_set::RowSet;

impl DatabaseConnector {
    /// Creates the primary pool, and the replica pool when a replica URL is configured.
    ///
    /// A primary failure is returned as `PoolUnavailable`; a replica failure is logged and
    /// the connector runs without a replica.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn initialize(config: &DatabaseConfig) -> Result<DatabaseConnector, DatabaseError>
    {
        let primary = DatabasePool::create(DatabaseTarget::Primary, &config.primary_url, config.primary_pool).await?;
        let replica = match config.replica_url.as_deref() {
            None => {
                info!("[DATABASE] No replica configured, replica reads are unavailable");
                None
            }
            Some(url) => match DatabasePool::create(DatabaseTarget::Replica, url, config.replica_pool).await {
                Ok(pool) => Some(pool),
                Err(e) => {
                    error!("[DATABASE] {} - continuing without replica", e);
                    None
                }
            },
        };

        Ok(DatabaseConnector {
            primary,
            replica,
            closed: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn has_replica(&self) -> bool
    {
        self.replica.is_some()
    }

    pub fn is_closed(&self) -> bool
    {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn pool(&self, target: DatabaseTarget) -> Result<&DatabasePool, DatabaseError>
    {
        if self.is_closed() {
            return Err(DatabaseError::PoolUnavailable(String::from("connector is closed")));
        }
        match target {
            DatabaseTarget::Primary => Ok(&self.primary),
            DatabaseTarget::Replica => self.replica.as_ref()
                .ok_or_else(|| DatabaseError::PoolUnavailable(String::from("no replica configured"))),
        }
    }

    /// Leases a connection; it goes back to its pool when dropped.
    pub async fn acquire(&self, target: DatabaseTarget) -> Result<DatabaseLease, DatabaseError>
    {
        self.pool(target)?.acquire().await
    }

    /// Runs a read statement on the replica when `use_replica` is set, otherwise on the primary.
    ///
    /// Replica reads may lag behind the primary: a row written a moment ago is not
    /// guaranteed to be visible here.
    #[tracing::instrument(level = "debug", skip(self, binds))]
    pub async fn execute_query(&self, sql: &str, binds: &Binds, use_replica: bool) -> Result<RowSet, DatabaseError>
    {
        let target = if use_replica { DatabaseTarget::Replica } else { DatabaseTarget::Primary };
        let rows = self.pool(target)?.query(sql, binds).await?;
        debug!("[DATABASE] Query on {} returned {} rows", target, rows.len());
        Ok(rows)
    }

    /// Runs a procedure call on the primary inside a transaction.
    ///
    /// The transaction commits only when the statement and the commit succeed; on any
    /// error it is rolled back.
    #[tracing::instrument(level = "debug", skip(self, binds))]
    pub async fn execute_procedure(&self, procedure: &str, binds: &Binds) -> Result<ProcedureResult, DatabaseError>
    {
        let result = self.pool(DatabaseTarget::Primary)?.procedure(procedure, binds).await?;
        debug!("[DATABASE] Procedure affected {} rows, returned {}", result.rows_affected, result.rows.len());
        Ok(result)
    }

    pub async fn ping(&self, target: DatabaseTarget) -> Result<(), DatabaseError>
    {
        self.pool(target)?.ping().await
    }

    pub fn pool_status(&self) -> Vec<PoolStatus>
    {
        let mut status = vec![self.primary.status()];
        if let Some(replica) = &self.replica {
            status.push(replica.status());
        }
        status
    }

    /// Drains and closes every pool. Later calls do nothing.
    pub async fn close(&self)
    {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        self.primary.close().await;
        if let Some(replica) = &self.replica {
            replica.close().await;
        }
    }
}
