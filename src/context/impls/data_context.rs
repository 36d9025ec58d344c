use std::sync::Arc;
use log::{debug, info};
use serde_json::Value;
use crate::cache::enums::mutating_operation::MutatingOperation;
use crate::cache::enums::resource_tag::ResourceTag;
use crate::cache::structs::cache_connector::CacheConnector;
use crate::cache::structs::cache_policy::CachePolicy;
use crate::cache::structs::cache_rules::CacheRules;
use crate::cache::structs::cache_store::CacheStore;
use crate::cache::structs::query_cache::QueryCache;
use crate::cache::structs::query_descriptor::QueryDescriptor;
use crate::config::structs::configuration::Configuration;
use crate::context::structs::data_context::DataContext;
use crate::database::errors::DatabaseError;
use crate::database::structs::binds::Binds;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::procedure_result::ProcedureResult;
use crate::database::structs::row_set::RowSet;

impl DataContext {
    /// Opens the pools and connects the cache.
    ///
    /// Fails only when the primary pool cannot be created. An unreachable cache
    /// leaves the context running with caching disabled.
    pub async fn new(config: Arc<Configuration>) -> Result<DataContext, DatabaseError>
    {
        let database = DatabaseConnector::initialize(&config.database).await?;
        let connector = CacheConnector::new_or_disabled(&config.cache).await;
        let store = CacheStore::new(Arc::new(connector), &config.cache.prefix);
        info!("[BOOT] Data context ready (replica: {}, cache prefix: {})", database.has_replica(), config.cache.prefix);
        Ok(DataContext::from_parts(config, database, QueryCache::new(Arc::new(store))))
    }

    pub fn from_parts(config: Arc<Configuration>, database: DatabaseConnector, cache: QueryCache) -> DataContext
    {
        DataContext { config, database, cache }
    }

    pub fn config(&self) -> &Arc<Configuration>
    {
        &self.config
    }

    pub fn database(&self) -> &DatabaseConnector
    {
        &self.database
    }

    pub fn cache(&self) -> &QueryCache
    {
        &self.cache
    }

    pub fn default_ttl(&self, tag: ResourceTag) -> u64
    {
        self.config.cache_ttl.for_tag(tag)
    }

    /// Caches every result of `tag` for its configured TTL, without throttling.
    pub fn default_policy(&self, tag: ResourceTag) -> CachePolicy
    {
        CachePolicy::new(CacheRules::new(&[tag], 0, self.default_ttl(tag)))
    }

    /// Read path: a cached result when present, otherwise the query runs (on the replica
    /// when one is configured) and `policy` decides whether the rows are cached.
    pub async fn cached_query(&self, descriptor: &QueryDescriptor, params: &Value, sql: &str, binds: &Binds, policy: &CachePolicy) -> Result<RowSet, DatabaseError>
    {
        if let Some(rows) = self.cache.get_from_cache::<RowSet>(descriptor, params).await {
            debug!("[CACHE] Hit for {}", descriptor.tag);
            return Ok(rows);
        }
        let rows = self.database.execute_query(sql, binds, self.database.has_replica()).await?;
        let outcome = policy.auto_cache(&self.cache, descriptor, params, &rows).await;
        debug!("[CACHE] Miss for {}, {:?}", descriptor.tag, outcome);
        Ok(rows)
    }

    /// Write path: runs `procedure` on the primary and, once it has committed, drops
    /// every cached result `operation` may have made stale.
    pub async fn execute_mutation(&self, operation: MutatingOperation, procedure: &str, binds: &Binds) -> Result<ProcedureResult, DatabaseError>
    {
        let result = self.database.execute_procedure(procedure, binds).await?;
        self.cache.invalidate_for(operation).await;
        Ok(result)
    }

    pub async fn shutdown(&self)
    {
        info!("[SHUTDOWN] Closing database pools...");
        self.database.close().await;
    }
}
