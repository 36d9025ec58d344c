#![allow(dead_code)]
use std::sync::Arc;
use tempfile::TempDir;
use airport_ops::cache::enums::cache_engine::CacheEngine;
use airport_ops::config::structs::configuration::Configuration;
use airport_ops::config::structs::database_pool_config::DatabasePoolConfig;
use airport_ops::context::structs::data_context::DataContext;
use airport_ops::database::structs::binds::Binds;

pub const API_KEY: &str = "test-api-key";

pub fn sqlite_url(dir: &TempDir, name: &str) -> String {
    format!("sqlite://{}?mode=rwc", dir.path().join(name).display())
}

pub fn pool_config(max: u32, timeout: u64) -> DatabasePoolConfig {
    DatabasePoolConfig { min: 1, max, increment: 1, timeout }
}

pub fn create_test_config(dir: &TempDir) -> Configuration {
    let mut config = Configuration::init();
    config.api_key = API_KEY.to_string();
    config.database.primary_url = sqlite_url(dir, "airport.db");
    config.database.replica_url = None;
    config.database.primary_pool = pool_config(4, 2000);
    config.database.replica_pool = pool_config(4, 2000);
    config.cache.engine = CacheEngine::memory;
    config.cache.prefix = "test:".to_string();
    config
}

pub async fn create_schema(context: &DataContext) {
    for statement in [
        "CREATE TABLE IF NOT EXISTS flights (id INTEGER PRIMARY KEY, flight_number TEXT NOT NULL, seats INTEGER NOT NULL)",
        "CREATE TABLE IF NOT EXISTS bookings (id INTEGER PRIMARY KEY AUTOINCREMENT, flight_id INTEGER NOT NULL, passenger TEXT NOT NULL)",
        "CREATE TABLE IF NOT EXISTS incidents (id INTEGER PRIMARY KEY AUTOINCREMENT, severity TEXT NOT NULL)",
    ] {
        context.database().execute_procedure(statement, &Binds::new()).await.unwrap();
    }
    context.database()
        .execute_procedure(
            "INSERT INTO flights (id, flight_number, seats) VALUES (?, ?, ?), (?, ?, ?)",
            &Binds::new().int(1).text("AB123").int(180).int(2).text("CD456").int(90),
        )
        .await
        .unwrap();
}

pub async fn create_test_context_with(config: Configuration) -> Arc<DataContext> {
    let context = DataContext::new(Arc::new(config)).await.unwrap();
    create_schema(&context).await;
    Arc::new(context)
}

pub async fn create_test_context() -> (TempDir, Arc<DataContext>) {
    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir);
    let context = create_test_context_with(config).await;
    (dir, context)
}
