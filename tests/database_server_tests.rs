// Column mapping against real servers. Skipped unless AIRPORT_OPS_PGSQL_URL or
// AIRPORT_OPS_MYSQL_URL points at a reachable database.

use serde_json::json;
use airport_ops::config::structs::database_pool_config::DatabasePoolConfig;
use airport_ops::database::enums::database_target::DatabaseTarget;
use airport_ops::database::structs::binds::Binds;
use airport_ops::database::structs::database_pool::DatabasePool;

async fn server_pool(variable: &str) -> Option<DatabasePool> {
    let url = std::env::var(variable).ok()?;
    let config = DatabasePoolConfig { min: 1, max: 2, increment: 1, timeout: 5000 };
    Some(DatabasePool::create(DatabaseTarget::Primary, &url, config).await.unwrap())
}

#[tokio::test]
async fn test_pgsql_typed_columns() {
    let Some(pool) = server_pool("AIRPORT_OPS_PGSQL_URL").await else { return };
    let rows = pool.query(
        "SELECT TIMESTAMP '2026-10-18 08:30:00' AS departure, \
                TIMESTAMPTZ '2026-10-18 07:55:00+00' AS boarded_at, \
                DATE '2026-10-18' AS day, \
                NUMERIC '1250.75' AS fare, \
                '6f1c8a2e-4b7d-4c1e-9a3f-2d5e8b7c6a10'::uuid AS booking_ref, \
                CAST('B7' AS CHAR(4)) AS gate, \
                TRUE AS boarded, \
                CAST(NULL AS TEXT) AS remark, \
                $1::BIGINT AS seats",
        &Binds::new().int(180),
    ).await.unwrap();
    let row = rows.first().unwrap();
    assert_eq!(row["departure"], json!("2026-10-18T08:30:00"));
    assert_eq!(row["boarded_at"], json!("2026-10-18T07:55:00+00:00"));
    assert_eq!(row["day"], json!("2026-10-18"));
    assert_eq!(row["fare"], json!(1250.75));
    assert_eq!(row["booking_ref"], json!("6f1c8a2e-4b7d-4c1e-9a3f-2d5e8b7c6a10"));
    assert_eq!(row["gate"], json!("B7  "));
    assert_eq!(row["boarded"], json!(true));
    assert_eq!(row["remark"], json!(null));
    assert_eq!(row["seats"], json!(180));
    pool.close().await;
}

#[tokio::test]
async fn test_mysql_typed_columns() {
    let Some(pool) = server_pool("AIRPORT_OPS_MYSQL_URL").await else { return };
    let rows = pool.query(
        "SELECT CAST('2026-10-18 08:30:00' AS DATETIME) AS departure, \
                CAST('2026-10-18' AS DATE) AS day, \
                CAST(1250.75 AS DECIMAL(10,2)) AS fare, \
                CAST('B7' AS CHAR(4)) AS gate, \
                ? AS seats",
        &Binds::new().int(180),
    ).await.unwrap();
    let row = rows.first().unwrap();
    assert!(row["departure"].as_str().unwrap().starts_with("2026-10-18T08:30:00"));
    assert_eq!(row["day"], json!("2026-10-18"));
    assert_eq!(row["fare"], json!(1250.75));
    assert_eq!(row["gate"], json!("B7"));
    assert_eq!(row["seats"], json!(180));
    pool.close().await;
}
