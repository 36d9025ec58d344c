#[cfg(test)]
mod database_tests {
    use crate::config::structs::database_pool_config::DatabasePoolConfig;
    use crate::database::enums::bind_value::BindValue;
    use crate::database::enums::database_drivers::DatabaseDrivers;
    use crate::database::enums::database_target::DatabaseTarget;
    use crate::database::errors::DatabaseError;
    use crate::database::structs::binds::Binds;
    use crate::database::structs::database_pool::DatabasePool;

    mod drivers_tests {
        use super::*;

        #[test]
        fn test_driver_from_url() {
            assert_eq!(DatabaseDrivers::from_url("sqlite://airport.db?mode=rwc"), Some(DatabaseDrivers::sqlite3));
            assert_eq!(DatabaseDrivers::from_url("sqlite::memory:"), Some(DatabaseDrivers::sqlite3));
            assert_eq!(DatabaseDrivers::from_url("mysql://airport@db/airport"), Some(DatabaseDrivers::mysql));
            assert_eq!(DatabaseDrivers::from_url("postgres://airport@db/airport"), Some(DatabaseDrivers::pgsql));
            assert_eq!(DatabaseDrivers::from_url("PostgreSQL://airport@db/airport"), Some(DatabaseDrivers::pgsql));
            assert_eq!(DatabaseDrivers::from_url("oracle://airport@db/airport"), None);
            assert_eq!(DatabaseDrivers::from_url("no scheme"), None);
        }

        #[test]
        fn test_target_display() {
            assert_eq!(DatabaseTarget::Primary.to_string(), "primary");
            assert_eq!(DatabaseTarget::Replica.to_string(), "replica");
        }
    }

    mod binds_tests {
        use super::*;

        #[test]
        fn test_builder_keeps_order() {
            let binds = Binds::new()
                .text("AB123")
                .int(42)
                .float(1.5)
                .bool(true)
                .null()
                .bytes(&[0xde, 0xad]);
            assert_eq!(binds.len(), 6);
            assert_eq!(binds.values(), &[
                BindValue::Text("AB123".to_string()),
                BindValue::Int(42),
                BindValue::Float(1.5),
                BindValue::Bool(true),
                BindValue::Null,
                BindValue::Bytes(vec![0xde, 0xad]),
            ]);
        }

        #[test]
        fn test_push_converts() {
            let binds = Binds::new()
                .push("gate")
                .push(7i32)
                .push(None::<i64>)
                .push(Some(String::from("B12")));
            assert_eq!(binds.values(), &[
                BindValue::Text("gate".to_string()),
                BindValue::Int(7),
                BindValue::Null,
                BindValue::Text("B12".to_string()),
            ]);
            assert!(Binds::new().is_empty());
        }

        #[test]
        fn test_collect_into_binds() {
            let binds: Binds = vec![BindValue::Int(1), BindValue::Int(2)].into_iter().collect();
            assert_eq!(binds, Binds::new().int(1).int(2));
        }

        #[test]
        fn test_bind_value_serialization() {
            let json = serde_json::to_string(&BindValue::Int(3)).unwrap();
            assert_eq!(json, r#"{"type":"int","value":3}"#);
            let null = serde_json::to_string(&BindValue::Null).unwrap();
            assert_eq!(null, r#"{"type":"null"}"#);
        }
    }

    mod pool_tests {
        use super::*;

        #[tokio::test]
        async fn test_unsupported_scheme_is_unavailable() {
            let result = DatabasePool::create(DatabaseTarget::Primary, "oracle://airport@db", DatabasePoolConfig::default()).await;
            assert!(matches!(result, Err(DatabaseError::PoolUnavailable(_))));
        }

        #[tokio::test]
        async fn test_invalid_sizing_is_unavailable() {
            let config = DatabasePoolConfig { min: 5, max: 2, increment: 1, timeout: 1000 };
            let result = DatabasePool::create(DatabaseTarget::Replica, "sqlite::memory:", config).await;
            match result {
                Err(DatabaseError::PoolUnavailable(message)) => assert!(message.contains("min (5) is larger than max (2)")),
                other => panic!("unexpected result: {:?}", other.map(|pool| pool.status())),
            }
        }
    }

    mod row_value_tests {
        use chrono::{NaiveDate, TimeZone, Utc};
        use serde_json::{json, Value};
        use crate::database::impls::row_set::{bytes_value, naive_timestamp_value, number_value, timestamp_value};

        #[test]
        fn test_decimal_text_becomes_number() {
            assert_eq!(number_value("1250.75".to_string()), json!(1250.75));
            assert_eq!(number_value("42".to_string()), json!(42));
            assert_eq!(number_value("NaN".to_string()), json!("NaN"));
        }

        #[test]
        fn test_timestamps_are_iso_text() {
            let departure = NaiveDate::from_ymd_opt(2026, 10, 18).and_then(|date| date.and_hms_opt(8, 30, 0)).unwrap();
            assert_eq!(naive_timestamp_value(departure), json!("2026-10-18T08:30:00"));

            let boarded = Utc.with_ymd_and_hms(2026, 10, 18, 7, 55, 0).unwrap();
            assert_eq!(timestamp_value(boarded), json!("2026-10-18T07:55:00+00:00"));
        }

        #[test]
        fn test_bytes_are_hex() {
            assert_eq!(bytes_value(vec![0xde, 0xad, 0x01]), Value::String("dead01".to_string()));
        }
    }
}
