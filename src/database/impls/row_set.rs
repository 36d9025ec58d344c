use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::{Map, Number, Value};
use sqlx::{Column, ColumnIndex, Decode, Row, Type};
use crate::database::structs::row_set::RowSet;

impl RowSet {
    /// Maps driver rows to JSON objects, decoding each column with `value`.
    pub(crate) fn from_rows<R: Row>(rows: &[R], value: fn(&R, usize) -> Value) -> RowSet {
        let columns = rows.first()
            .map(|row| row.columns().iter().map(|column| column.name().to_string()).collect())
            .unwrap_or_default();
        RowSet {
            columns,
            rows: rows.iter().map(|row| row_to_object(row, value)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first(&self) -> Option<&Map<String, Value>> {
        self.rows.first()
    }
}

fn row_to_object<R: Row>(row: &R, value: fn(&R, usize) -> Value) -> Map<String, Value> {
    let mut object = Map::with_capacity(row.columns().len());
    for (index, column) in row.columns().iter().enumerate() {
        object.insert(column.name().to_string(), value(row, index));
    }
    object
}

/// Decodes column `index` as `T` when the column type allows it.
///
/// `None` means the type did not match; SQL `NULL` is `Some(Value::Null)`.
pub(crate) fn decode_column<'r, R, T, F>(row: &'r R, index: usize, into: F) -> Option<Value>
where
    R: Row,
    usize: ColumnIndex<R>,
    T: Decode<'r, R::Database> + Type<R::Database>,
    F: FnOnce(T) -> Value,
{
    row.try_get::<Option<T>, usize>(index)
        .ok()
        .map(|value| value.map(into).unwrap_or(Value::Null))
}

/// Exact decimals keep their digits when they fit a JSON number, otherwise they stay text.
pub(crate) fn number_value(text: String) -> Value {
    match text.parse::<Number>() {
        Ok(number) => Value::Number(number),
        Err(_) => Value::String(text),
    }
}

pub(crate) fn naive_timestamp_value(value: NaiveDateTime) -> Value {
    Value::String(value.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
}

pub(crate) fn timestamp_value(value: DateTime<Utc>) -> Value {
    Value::String(value.to_rfc3339())
}

pub(crate) fn bytes_value(value: Vec<u8>) -> Value {
    Value::String(hex::encode(value))
}
