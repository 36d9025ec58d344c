use thiserror::Error;
use crate::database::enums::database_target::DatabaseTarget;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Pool unavailable: {0}")]
    PoolUnavailable(String),

    #[error("Pool exhausted: no {0} connection became free before the acquire timeout")]
    PoolExhausted(DatabaseTarget),

    #[error("Query error: {message}")]
    QueryError { message: String },

    #[error("Procedure error: {message}")]
    ProcedureError { message: String },
}

impl DatabaseError {
    /// Only exhaustion is worth retrying; everything else needs a fix or surfaces to the caller.
    pub fn is_transient(&self) -> bool {
        matches!(self, DatabaseError::PoolExhausted(_))
    }

    /// Maps a failure to obtain a connection from the `target` pool.
    pub(crate) fn from_acquire(target: DatabaseTarget, error: sqlx::Error) -> DatabaseError {
        match error {
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted(target),
            sqlx::Error::PoolClosed => DatabaseError::PoolUnavailable(format!("{target} pool is closed")),
            other => DatabaseError::PoolUnavailable(format!("{target} connection failed: {other}")),
        }
    }
}
