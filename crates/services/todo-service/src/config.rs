//! Todo service configuration.

use std::env;
use std::str::FromStr;

use common::{AppError, DatabaseConfig};

/// Where users and todo items are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    Memory,
    Postgres,
}

impl FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "postgres" => Ok(Self::Postgres),
            other => Err(AppError::internal(format!(
                "Unknown STORAGE_BACKEND '{}', expected memory or postgres",
                other
            ))),
        }
    }
}

/// Todo service configuration.
#[derive(Debug, Clone, Default)]
pub struct TodoServiceConfig {
    pub storage: StorageBackend,
    /// Only read when `storage` is [`StorageBackend::Postgres`]
    pub database: DatabaseConfig,
}

impl TodoServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        let storage = match env::var("STORAGE_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => StorageBackend::default(),
        };

        let defaults = DatabaseConfig::default();
        let database = DatabaseConfig {
            url: env::var("DATABASE_URL").unwrap_or(defaults.url),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_connections),
            min_connections: defaults.min_connections,
        };

        Ok(Self { storage, database })
    }

    /// In-memory configuration, handy for tests
    pub fn in_memory() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_storage_backend() {
        assert_eq!("memory".parse::<StorageBackend>().unwrap(), StorageBackend::Memory);
        assert_eq!(" Postgres ".parse::<StorageBackend>().unwrap(), StorageBackend::Postgres);
        assert!("sqlite".parse::<StorageBackend>().is_err());
    }
}
