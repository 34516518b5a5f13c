//! Web application configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                       | Default               |
//! |--------------------------------|-----------------------|
//! | `STOCKROOM_HOST`               | `0.0.0.0`             |
//! | `STOCKROOM_PORT`               | `5000`                |
//! | `STOCKROOM_DATABASE_PATH`      | `./data/stockroom.db` |
//! | `STOCKROOM_DB_MAX_CONNECTIONS` | `5`                   |
//! | `STOCKROOM_RUN_MIGRATIONS`     | `true`                |
//! | `STOCKROOM_SEED_SAMPLE_DATA`   | `false`               |

use std::env;
use std::path::PathBuf;

use stockroom_db::DbConfig;

/// Web application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface to bind
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// SQLite database file (`:memory:` for a throwaway database)
    pub database_path: PathBuf,

    /// Upper bound on pooled SQLite connections
    pub db_max_connections: u32,

    /// Apply pending migrations at startup
    pub run_migrations: bool,

    /// Insert the reference products when the table is empty
    pub seed_sample_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "0.0.0.0".to_string(),
            port: 5000,
            database_path: PathBuf::from("./data/stockroom.db"),
            db_max_connections: 5,
            run_migrations: true,
            seed_sample_data: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from any key lookup (the process environment
    /// in production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();

        let config = AppConfig {
            host: lookup("STOCKROOM_HOST").unwrap_or(defaults.host),

            port: parse_or("STOCKROOM_PORT", &lookup, defaults.port)?,

            database_path: lookup("STOCKROOM_DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),

            db_max_connections: parse_or(
                "STOCKROOM_DB_MAX_CONNECTIONS",
                &lookup,
                defaults.db_max_connections,
            )?,

            run_migrations: parse_or("STOCKROOM_RUN_MIGRATIONS", &lookup, defaults.run_migrations)?,

            seed_sample_data: parse_or(
                "STOCKROOM_SEED_SAMPLE_DATA",
                &lookup,
                defaults.seed_sample_data,
            )?,
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "STOCKROOM_DB_MAX_CONNECTIONS".to_string(),
            ));
        }

        Ok(config)
    }

    /// `host:port` for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Pool settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        if self.database_path.as_os_str() == ":memory:" {
            return DbConfig::in_memory().run_migrations(self.run_migrations);
        }

        DbConfig::new(&self.database_path)
            .max_connections(self.db_max_connections)
            .run_migrations(self.run_migrations)
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
        assert!(config.run_migrations);
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("STOCKROOM_HOST", "127.0.0.1"),
            ("STOCKROOM_PORT", "8080"),
            ("STOCKROOM_DATABASE_PATH", "/tmp/shop.db"),
            ("STOCKROOM_DB_MAX_CONNECTIONS", "12"),
            ("STOCKROOM_SEED_SAMPLE_DATA", "true"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.database_path, PathBuf::from("/tmp/shop.db"));

        let db = config.db_config();
        assert_eq!(db.max_connections, 12);
        assert!(db.run_migrations);
        assert!(config.seed_sample_data);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("STOCKROOM_PORT", "eighty")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for STOCKROOM_PORT");

        assert!(AppConfig::from_lookup(lookup_from(&[("STOCKROOM_RUN_MIGRATIONS", "yes")])).is_err());
        assert!(
            AppConfig::from_lookup(lookup_from(&[("STOCKROOM_DB_MAX_CONNECTIONS", "0")])).is_err()
        );
    }

    #[test]
    fn test_memory_database_uses_single_connection() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("STOCKROOM_DATABASE_PATH", ":memory:")])).unwrap();

        let db = config.db_config();
        assert!(db.is_in_memory());
        assert_eq!(db.max_connections, 1);
    }
}
