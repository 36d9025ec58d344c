mod common;

use std::sync::Arc;
use serde_json::{json, Value};
use tempfile::TempDir;
use airport_ops::cache::enums::cache_engine::CacheEngine;
use airport_ops::cache::enums::mutating_operation::MutatingOperation;
use airport_ops::cache::enums::resource_tag::ResourceTag;
use airport_ops::cache::structs::cache_connector::CacheConnector;
use airport_ops::cache::structs::cache_policy::CachePolicy;
use airport_ops::cache::structs::cache_rules::CacheRules;
use airport_ops::cache::structs::cache_store::CacheStore;
use airport_ops::cache::structs::query_cache::QueryCache;
use airport_ops::cache::structs::query_descriptor::QueryDescriptor;
use airport_ops::context::structs::data_context::DataContext;
use airport_ops::database::errors::DatabaseError;
use airport_ops::database::structs::binds::Binds;
use airport_ops::database::structs::database_connector::DatabaseConnector;

const FLIGHT_BY_ID: &str = "SELECT id, flight_number, seats FROM flights WHERE id = ?";
const BOOKINGS_FOR_FLIGHT: &str = "SELECT id, passenger FROM bookings WHERE flight_id = ?";

fn flight_descriptor() -> QueryDescriptor {
    QueryDescriptor::new(ResourceTag::flights, FLIGHT_BY_ID)
}

fn bookings_descriptor() -> QueryDescriptor {
    QueryDescriptor::new(ResourceTag::bookings, BOOKINGS_FOR_FLIGHT)
}

#[tokio::test]
async fn test_read_path_populates_then_hits() {
    let (_dir, context) = common::create_test_context().await;
    let policy = context.default_policy(ResourceTag::flights);
    let params = json!({"id": 1});

    let first = context.cached_query(&flight_descriptor(), &params, FLIGHT_BY_ID, &Binds::new().int(1), &policy).await.unwrap();
    assert_eq!(first.rows[0].get("flight_number"), Some(&json!("AB123")));

    // Changed behind the cache's back: the cached row must still be served.
    context.database()
        .execute_procedure("UPDATE flights SET flight_number = 'ZZ999' WHERE id = 1", &Binds::new())
        .await
        .unwrap();
    let second = context.cached_query(&flight_descriptor(), &params, FLIGHT_BY_ID, &Binds::new().int(1), &policy).await.unwrap();
    assert_eq!(second, first);

    let stats = context.cache().get_cache_stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.sets, 1);
    assert!((stats.hit_rate + stats.miss_rate - 100.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_booking_mutation_invalidates_bookings_not_security() {
    let (_dir, context) = common::create_test_context().await;
    let bookings_policy = context.default_policy(ResourceTag::bookings);
    let params = json!({"flight_id": 1});
    let security = QueryDescriptor::for_tag(ResourceTag::security);
    context.cache().set_in_cache(&security, &json!({}), &json!([{"id": 1, "severity": "low"}]), 300).await;

    let before = context.cached_query(&bookings_descriptor(), &params, BOOKINGS_FOR_FLIGHT, &Binds::new().int(1), &bookings_policy).await.unwrap();
    assert!(before.is_empty());

    context.execute_mutation(
        MutatingOperation::CreateBooking,
        "INSERT INTO bookings (flight_id, passenger) VALUES (?, ?)",
        &Binds::new().int(1).text("Ada Lovelace"),
    ).await.unwrap();

    let after = context.cached_query(&bookings_descriptor(), &params, BOOKINGS_FOR_FLIGHT, &Binds::new().int(1), &bookings_policy).await.unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after.rows[0].get("passenger"), Some(&json!("Ada Lovelace")));

    let cached_security: Option<Value> = context.cache().get_from_cache(&security, &json!({})).await;
    assert!(cached_security.is_some());
}

#[tokio::test]
async fn test_failed_mutation_keeps_cache() {
    let (_dir, context) = common::create_test_context().await;
    let policy = context.default_policy(ResourceTag::flights);
    let params = json!({"id": 2});
    context.cached_query(&flight_descriptor(), &params, FLIGHT_BY_ID, &Binds::new().int(2), &policy).await.unwrap();

    let result = context.execute_mutation(
        MutatingOperation::UpdateFlight,
        "UPDATE missing_table SET seats = 0",
        &Binds::new(),
    ).await;
    assert!(matches!(result, Err(DatabaseError::ProcedureError { .. })));

    let cached = context.cache().get_from_cache::<Value>(&flight_descriptor(), &params).await;
    assert!(cached.is_some());
    assert_eq!(context.cache().get_cache_stats().invalidations, 0);
}

#[tokio::test]
async fn test_policy_type_filter_on_read_path() {
    let (_dir, context) = common::create_test_context().await;
    let reports_only = CachePolicy::new(CacheRules::new(&[ResourceTag::reports], 0, 3600));
    let params = json!({"id": 1});

    for _ in 0..2 {
        context.cached_query(&flight_descriptor(), &params, FLIGHT_BY_ID, &Binds::new().int(1), &reports_only).await.unwrap();
    }
    let stats = context.cache().get_cache_stats();
    assert_eq!(stats.sets, 0);
    assert_eq!(stats.misses, 2);
}

#[tokio::test]
async fn test_disabled_cache_still_serves_rows() {
    let dir = TempDir::new().unwrap();
    let config = Arc::new(common::create_test_config(&dir));
    let database = DatabaseConnector::initialize(&config.database).await.unwrap();
    let store = CacheStore::new(Arc::new(CacheConnector::disabled()), &config.cache.prefix);
    let context = DataContext::from_parts(config, database, QueryCache::new(Arc::new(store)));
    common::create_schema(&context).await;
    let policy = context.default_policy(ResourceTag::flights);

    for _ in 0..2 {
        let rows = context.cached_query(&flight_descriptor(), &json!({"id": 1}), FLIGHT_BY_ID, &Binds::new().int(1), &policy).await.unwrap();
        assert_eq!(rows.len(), 1);
    }
    let result = context.execute_mutation(
        MutatingOperation::CreateBooking,
        "INSERT INTO bookings (flight_id, passenger) VALUES (?, ?)",
        &Binds::new().int(1).text("Grace Hopper"),
    ).await;
    assert!(result.is_ok());

    let stats = context.cache().get_cache_stats();
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.sets, 0);
}

#[tokio::test]
async fn test_unreachable_redis_boots_without_cache() {
    let dir = TempDir::new().unwrap();
    let mut config = common::create_test_config(&dir);
    config.cache.engine = CacheEngine::redis;
    config.cache.address = "127.0.0.1:1".to_string();
    let context = common::create_test_context_with(config).await;

    let policy = context.default_policy(ResourceTag::flights);
    let rows = context.cached_query(&flight_descriptor(), &json!({"id": 1}), FLIGHT_BY_ID, &Binds::new().int(1), &policy).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(context.cache().get_cache_stats().sets, 0);
}

#[tokio::test]
async fn test_default_ttls() {
    let (_dir, context) = common::create_test_context().await;
    assert_eq!(context.default_ttl(ResourceTag::reports), 3600);
    assert_eq!(context.default_ttl(ResourceTag::flights), 300);
    assert_eq!(context.default_ttl(ResourceTag::bookings), 600);
    assert_eq!(context.default_ttl(ResourceTag::passengers), 300);
    assert_eq!(context.default_policy(ResourceTag::reports).rules().ttl_seconds, 3600);
}

#[tokio::test]
async fn test_read_path_uses_replica_when_configured() {
    let dir = TempDir::new().unwrap();
    let mut config = common::create_test_config(&dir);
    config.database.replica_url = Some(config.database.primary_url.clone());
    let context = common::create_test_context_with(config).await;
    let policy = context.default_policy(ResourceTag::flights);

    let rows = context.cached_query(&flight_descriptor(), &json!({"id": 2}), FLIGHT_BY_ID, &Binds::new().int(2), &policy).await.unwrap();
    assert_eq!(rows.rows[0].get("flight_number"), Some(&json!("CD456")));
}
