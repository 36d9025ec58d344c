use std::fmt;
use crate::database::enums::database_drivers::DatabaseDrivers;

impl DatabaseDrivers {
    /// Detects the driver from the scheme of a connection URL.
    pub fn from_url(url: &str) -> Option<DatabaseDrivers> {
        let scheme = url.split_once(':').map(|(scheme, _)| scheme)?;
        match scheme.to_ascii_lowercase().as_str() {
            "sqlite" => Some(DatabaseDrivers::sqlite3),
            "mysql" | "mariadb" => Some(DatabaseDrivers::mysql),
            "postgres" | "postgresql" => Some(DatabaseDrivers::pgsql),
            _ => None,
        }
    }
}

impl fmt::Display for DatabaseDrivers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseDrivers::sqlite3 => f.write_str("SQLite"),
            DatabaseDrivers::mysql => f.write_str("MySQL"),
            DatabaseDrivers::pgsql => f.write_str("PgSQL"),
        }
    }
}
