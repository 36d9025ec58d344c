use sqlx::query::Query;
use sqlx::{Database, Encode, Type};
use crate::database::enums::bind_value::BindValue;
use crate::database::structs::binds::Binds;

impl Binds {
    pub fn new() -> Binds {
        Binds::default()
    }

    pub fn push(mut self, value: impl Into<BindValue>) -> Binds {
        self.values.push(value.into());
        self
    }

    pub fn null(self) -> Binds {
        self.push(BindValue::Null)
    }

    pub fn bool(self, value: bool) -> Binds {
        self.push(BindValue::Bool(value))
    }

    pub fn int(self, value: i64) -> Binds {
        self.push(BindValue::Int(value))
    }

    pub fn float(self, value: f64) -> Binds {
        self.push(BindValue::Float(value))
    }

    pub fn text(self, value: &str) -> Binds {
        self.push(BindValue::Text(value.to_string()))
    }

    pub fn bytes(self, value: &[u8]) -> Binds {
        self.push(BindValue::Bytes(value.to_vec()))
    }

    pub fn values(&self) -> &[BindValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Builds a query for `DB` with every value bound in order.
    pub(crate) fn apply<'q, DB>(&self, sql: &'q str) -> Query<'q, DB, <DB as Database>::Arguments<'q>>
    where
        DB: Database,
        bool: Encode<'q, DB> + Type<DB>,
        i64: Encode<'q, DB> + Type<DB>,
        f64: Encode<'q, DB> + Type<DB>,
        String: Encode<'q, DB> + Type<DB>,
        Vec<u8>: Encode<'q, DB> + Type<DB>,
        Option<String>: Encode<'q, DB> + Type<DB>,
    {
        self.values.iter().fold(sqlx::query::<DB>(sql), |query, value| value.bind_to(query))
    }
}

impl FromIterator<BindValue> for Binds {
    fn from_iter<I: IntoIterator<Item = BindValue>>(iter: I) -> Self {
        Binds { values: iter.into_iter().collect() }
    }
}
