mod common;

use std::time::Duration;
use serde_json::json;
use tempfile::TempDir;
use airport_ops::database::enums::database_target::DatabaseTarget;
use airport_ops::database::errors::DatabaseError;
use airport_ops::database::structs::binds::Binds;
use airport_ops::database::structs::database_connector::DatabaseConnector;

#[tokio::test]
async fn test_query_returns_columns_and_rows() {
    let (_dir, context) = common::create_test_context().await;
    let rows = context.database()
        .execute_query("SELECT id, flight_number, seats FROM flights WHERE seats > ? ORDER BY id", &Binds::new().int(100), false)
        .await
        .unwrap();

    assert_eq!(rows.columns, vec!["id", "flight_number", "seats"]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows.rows[0].get("flight_number"), Some(&json!("AB123")));
    assert_eq!(rows.rows[0].get("seats"), Some(&json!(180)));
}

#[tokio::test]
async fn test_query_decodes_null_float_and_blob() {
    let (_dir, context) = common::create_test_context().await;
    let rows = context.database()
        .execute_query("SELECT NULL AS gate, 1.5 AS delay_hours, X'DEAD' AS payload", &Binds::new(), false)
        .await
        .unwrap();

    let row = rows.first().unwrap();
    assert_eq!(row.get("gate"), Some(&json!(null)));
    assert_eq!(row.get("delay_hours"), Some(&json!(1.5)));
    assert_eq!(row.get("payload"), Some(&json!("dead")));
}

#[tokio::test]
async fn test_empty_result() {
    let (_dir, context) = common::create_test_context().await;
    let rows = context.database()
        .execute_query("SELECT id FROM flights WHERE id = ?", &Binds::new().int(404), false)
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_query_error_is_reported() {
    let (_dir, context) = common::create_test_context().await;
    let result = context.database().execute_query("SELECT * FROM runways", &Binds::new(), false).await;
    match result {
        Err(DatabaseError::QueryError { message }) => assert!(message.contains("runways")),
        other => panic!("expected a query error, got {:?}", other.map(|rows| rows.len())),
    }
}

#[tokio::test]
async fn test_replica_read_without_replica_is_unavailable() {
    let (_dir, context) = common::create_test_context().await;
    assert!(!context.database().has_replica());
    let result = context.database().execute_query("SELECT 1", &Binds::new(), true).await;
    assert!(matches!(result, Err(DatabaseError::PoolUnavailable(_))));
}

#[tokio::test]
async fn test_replica_reads_are_routed() {
    let dir = TempDir::new().unwrap();
    let mut config = common::create_test_config(&dir);
    config.database.replica_url = Some(config.database.primary_url.clone());
    let context = common::create_test_context_with(config).await;

    assert!(context.database().has_replica());
    let rows = context.database().execute_query("SELECT COUNT(*) AS total FROM flights", &Binds::new(), true).await.unwrap();
    assert_eq!(rows.rows[0].get("total"), Some(&json!(2)));

    let status = context.database().pool_status();
    assert_eq!(status.len(), 2);
    assert_eq!(status[0].target, DatabaseTarget::Primary);
    assert_eq!(status[1].target, DatabaseTarget::Replica);
}

#[tokio::test]
async fn test_broken_replica_degrades_to_none() {
    let dir = TempDir::new().unwrap();
    let mut config = common::create_test_config(&dir);
    config.database.replica_url = Some("oracle://replica/airport".to_string());
    let connector = DatabaseConnector::initialize(&config.database).await.unwrap();
    assert!(!connector.has_replica());
    assert_eq!(connector.pool_status().len(), 1);
}

#[tokio::test]
async fn test_unreachable_primary_fails_initialize() {
    let dir = TempDir::new().unwrap();
    let mut config = common::create_test_config(&dir);
    config.database.primary_url = format!("sqlite://{}?mode=ro", dir.path().join("missing").join("airport.db").display());
    config.database.primary_pool = common::pool_config(1, 500);
    let result = DatabaseConnector::initialize(&config.database).await;
    assert!(matches!(result, Err(DatabaseError::PoolUnavailable(_))));
}

#[tokio::test]
async fn test_exhausted_pool_times_out_and_recovers() {
    let dir = TempDir::new().unwrap();
    let mut config = common::create_test_config(&dir);
    config.database.primary_pool = common::pool_config(1, 200);
    let connector = DatabaseConnector::initialize(&config.database).await.unwrap();

    let held = connector.acquire(DatabaseTarget::Primary).await.unwrap();
    let result = connector.execute_query("SELECT 1 AS one", &Binds::new(), false).await;
    match result {
        Err(error) => {
            assert!(matches!(error, DatabaseError::PoolExhausted(DatabaseTarget::Primary)));
            assert!(error.is_transient());
        }
        Ok(_) => panic!("expected the pool to be exhausted"),
    }

    drop(held);
    let rows = connector.execute_query("SELECT 1 AS one", &Binds::new(), false).await.unwrap();
    assert_eq!(rows.rows[0].get("one"), Some(&json!(1)));
}

#[tokio::test]
async fn test_waiter_blocks_until_a_lease_is_returned() {
    let dir = TempDir::new().unwrap();
    let mut config = common::create_test_config(&dir);
    config.database.primary_pool = common::pool_config(2, 5000);
    let connector = DatabaseConnector::initialize(&config.database).await.unwrap();

    let first = connector.acquire(DatabaseTarget::Primary).await.unwrap();
    let _second = connector.acquire(DatabaseTarget::Primary).await.unwrap();

    let waiter = connector.clone();
    let handle = tokio::spawn(async move {
        waiter.execute_query("SELECT 1 AS one", &Binds::new(), false).await
    });
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(!handle.is_finished());
    assert!(connector.pool_status()[0].size <= 2);

    drop(first);
    let rows = handle.await.unwrap().unwrap();
    assert_eq!(rows.rows[0].get("one"), Some(&json!(1)));
    assert!(connector.pool_status()[0].size <= 2);
}

#[tokio::test]
async fn test_failed_query_releases_connection() {
    let dir = TempDir::new().unwrap();
    let mut config = common::create_test_config(&dir);
    config.database.primary_pool = common::pool_config(1, 500);
    let connector = DatabaseConnector::initialize(&config.database).await.unwrap();

    for _ in 0..3 {
        let result = connector.execute_query("SELECT * FROM nowhere", &Binds::new(), false).await;
        assert!(matches!(result, Err(DatabaseError::QueryError { .. })));
    }
    assert!(connector.execute_query("SELECT 1", &Binds::new(), false).await.is_ok());
}

#[tokio::test]
async fn test_procedure_commits_and_reports_rows_affected() {
    let (_dir, context) = common::create_test_context().await;
    let result = context.database()
        .execute_procedure("INSERT INTO bookings (flight_id, passenger) VALUES (?, ?)", &Binds::new().int(1).text("Ada Lovelace"))
        .await
        .unwrap();
    assert_eq!(result.rows_affected, 1);
    assert!(result.out_binds.is_empty());

    let rows = context.database().execute_query("SELECT passenger FROM bookings", &Binds::new(), false).await.unwrap();
    assert_eq!(rows.rows[0].get("passenger"), Some(&json!("Ada Lovelace")));
}

#[tokio::test]
async fn test_procedure_returning_values_fills_out_binds() {
    let (_dir, context) = common::create_test_context().await;
    let result = context.database()
        .execute_procedure(
            "INSERT INTO bookings (flight_id, passenger) VALUES (?, ?) RETURNING id, passenger",
            &Binds::new().int(2).text("Grace Hopper"),
        )
        .await
        .unwrap();
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.out_binds.get("id"), Some(&json!(1)));
    assert_eq!(result.out_binds.get("passenger"), Some(&json!("Grace Hopper")));
}

#[tokio::test]
async fn test_failed_procedure_leaves_no_partial_rows() {
    let (_dir, context) = common::create_test_context().await;
    let result = context.database()
        .execute_procedure(
            "INSERT INTO bookings (flight_id, passenger) VALUES (?, ?); INSERT INTO missing_table VALUES (1)",
            &Binds::new().int(1).text("Alan Turing"),
        )
        .await;
    assert!(matches!(result, Err(DatabaseError::ProcedureError { .. })));

    let rows = context.database().execute_query("SELECT COUNT(*) AS total FROM bookings", &Binds::new(), false).await.unwrap();
    assert_eq!(rows.rows[0].get("total"), Some(&json!(0)));
}

#[tokio::test]
async fn test_close_is_idempotent() {
    let (_dir, context) = common::create_test_context().await;
    context.shutdown().await;
    context.shutdown().await;
    assert!(context.database().is_closed());

    let result = context.database().execute_query("SELECT 1", &Binds::new(), false).await;
    assert!(matches!(result, Err(DatabaseError::PoolUnavailable(_))));
    let result = context.database().execute_procedure("SELECT 1", &Binds::new()).await;
    assert!(matches!(result, Err(DatabaseError::PoolUnavailable(_))));
}

#[tokio::test]
async fn test_ping() {
    let (_dir, context) = common::create_test_context().await;
    assert!(context.database().ping(DatabaseTarget::Primary).await.is_ok());
    assert!(matches!(context.database().ping(DatabaseTarget::Replica).await, Err(DatabaseError::PoolUnavailable(_))));
}
