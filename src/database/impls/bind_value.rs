use sqlx::query::Query;
use sqlx::{Database, Encode, Type};
use crate::database::enums::bind_value::BindValue;

impl BindValue {
    pub(crate) fn bind_to<'q, DB>(&self, query: Query<'q, DB, <DB as Database>::Arguments<'q>>) -> Query<'q, DB, <DB as Database>::Arguments<'q>>
    where
        DB: Database,
        bool: Encode<'q, DB> + Type<DB>,
        i64: Encode<'q, DB> + Type<DB>,
        f64: Encode<'q, DB> + Type<DB>,
        String: Encode<'q, DB> + Type<DB>,
        Vec<u8>: Encode<'q, DB> + Type<DB>,
        Option<String>: Encode<'q, DB> + Type<DB>,
    {
        match self {
            BindValue::Null => query.bind(Option::<String>::None),
            BindValue::Bool(value) => query.bind(*value),
            BindValue::Int(value) => query.bind(*value),
            BindValue::Float(value) => query.bind(*value),
            BindValue::Text(value) => query.bind(value.clone()),
            BindValue::Bytes(value) => query.bind(value.clone()),
        }
    }
}

impl From<bool> for BindValue {
    fn from(value: bool) -> Self {
        BindValue::Bool(value)
    }
}

impl From<i64> for BindValue {
    fn from(value: i64) -> Self {
        BindValue::Int(value)
    }
}

impl From<i32> for BindValue {
    fn from(value: i32) -> Self {
        BindValue::Int(value as i64)
    }
}

impl From<f64> for BindValue {
    fn from(value: f64) -> Self {
        BindValue::Float(value)
    }
}

impl From<&str> for BindValue {
    fn from(value: &str) -> Self {
        BindValue::Text(value.to_string())
    }
}

impl From<String> for BindValue {
    fn from(value: String) -> Self {
        BindValue::Text(value)
    }
}

impl From<Vec<u8>> for BindValue {
    fn from(value: Vec<u8>) -> Self {
        BindValue::Bytes(value)
    }
}

impl<T: Into<BindValue>> From<Option<T>> for BindValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(BindValue::Null)
    }
}
