use std::sync::Arc;
use crate::cache::structs::query_cache::QueryCache;
use crate::config::structs::configuration::Configuration;
use crate::database::structs::database_connector::DatabaseConnector;

#[derive(Clone)]
pub struct DataContext {
    pub(crate) config: Arc<Configuration>,
    pub(crate) database: DatabaseConnector,
    pub(crate) cache: QueryCache,
}
