use std::time::Duration;
use crate::config::structs::database_pool_config::DatabasePoolConfig;

impl Default for DatabasePoolConfig {
    fn default() -> Self {
        Self {
            min: 2,
            max: 10,
            increment: 1,
            timeout: 30000,
        }
    }
}

impl DatabasePoolConfig {
    pub fn acquire_timeout(&self) -> Duration
    {
        Duration::from_millis(self.timeout)
    }

    pub fn validate(&self, name: &str) -> Result<(), String>
    {
        if self.max == 0 {
            return Err(format!("{name}: max must be at least 1"));
        }
        if self.min > self.max {
            return Err(format!("{name}: min ({}) is larger than max ({})", self.min, self.max));
        }
        if self.increment == 0 || self.increment > self.max {
            return Err(format!("{name}: increment ({}) must be between 1 and max ({})", self.increment, self.max));
        }
        if self.timeout == 0 {
            return Err(format!("{name}: timeout must be larger than 0"));
        }
        Ok(())
    }
}
