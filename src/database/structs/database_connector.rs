use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use crate::database::structs::database_pool::DatabasePool;

#[derive(Debug, Clone)]
pub struct DatabaseConnector {
    pub(crate) primary: DatabasePool,
    pub(crate) replica: Option<DatabasePool>,
    pub(crate) closed: Arc<AtomicBool>,
}
