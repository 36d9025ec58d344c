use std::fmt;
use crate::database::enums::database_target::DatabaseTarget;

impl DatabaseTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseTarget::Primary => "primary",
            DatabaseTarget::Replica => "replica",
        }
    }
}

impl fmt::Display for DatabaseTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
