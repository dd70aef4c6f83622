//! Database configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Largest pool worth opening against a single SQLite file.
const MAX_POOL_SIZE: u32 = 16;

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL (`sqlite:path` or `sqlite::memory:`)
    #[serde(default = "default_url")]
    pub url: String,

    /// Maximum connections allowed
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Create the database file when it does not exist yet
    #[serde(default = "default_true")]
    pub create_if_missing: bool,

    /// Run migrations on startup
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    /// Get acquire timeout as Duration
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Whether the URL points at a throwaway in-memory database
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE_URL"));
        }
        if !self.url.starts_with("sqlite:") {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.max_connections == 0 || self.max_connections > MAX_POOL_SIZE {
            return Err(ValidationError::InvalidPoolSize);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            create_if_missing: true,
            run_migrations: true,
        }
    }
}

fn default_url() -> String {
    "sqlite:starter-deck.db".to_string()
}

// The repository holds one connection for its open unit of work; a second
// one keeps migrations and ad-hoc reads from queueing behind it.
fn default_max_connections() -> u32 {
    2
}

fn default_acquire_timeout() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_defaults() {
        let config = DatabaseConfig::default();
        assert_eq!(config.url, "sqlite:starter-deck.db");
        assert_eq!(config.max_connections, 2);
        assert!(config.create_if_missing);
        assert!(config.run_migrations);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_timeout_duration() {
        let config = DatabaseConfig {
            acquire_timeout_secs: 3,
            ..Default::default()
        };
        assert_eq!(config.acquire_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_in_memory_detection() {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..Default::default()
        };
        assert!(config.is_in_memory());
        assert!(!DatabaseConfig::default().is_in_memory());
    }

    #[test]
    fn test_validation_missing_url() {
        let config = DatabaseConfig {
            url: String::new(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("DATABASE_URL"))
        );
    }

    #[test]
    fn test_validation_rejects_non_sqlite_url() {
        let config = DatabaseConfig {
            url: "postgresql://localhost/test".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidDatabaseUrl));
    }

    #[test]
    fn test_validation_pool_size_bounds() {
        for max_connections in [0, 17] {
            let config = DatabaseConfig {
                max_connections,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidPoolSize));
        }
    }
}
