use app_config::{env_parse_or_default, env_required, ConfigError, FromEnv};
use sea_orm::ConnectOptions;
use std::time::Duration;

/// PostgreSQL connection pool settings.
///
/// Construct manually for tests or load from environment variables:
///
/// ```ignore
/// use app_config::FromEnv;
/// use database::postgres::PostgresConfig;
///
/// let config = PostgresConfig::from_env()?;
/// let options = config.into_connect_options();
/// ```
#[derive(Clone, Debug)]
pub struct PostgresConfig {
    /// Database connection URL (required)
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Connection acquire timeout in seconds
    pub acquire_timeout_secs: u64,

    /// Connection idle timeout in seconds
    pub idle_timeout_secs: u64,

    /// Enable SQL query logging
    pub sqlx_logging: bool,
}

impl PostgresConfig {
    /// A config with default pool settings for the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 20,
            min_connections: 2,
            connect_timeout_secs: 8,
            acquire_timeout_secs: 8,
            idle_timeout_secs: 300,
            sqlx_logging: true,
        }
    }

    /// Convert this config into SeaORM connect options.
    pub fn into_connect_options(self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(&self.url);
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(self.idle_timeout_secs))
            .sqlx_logging(self.sqlx_logging);
        opt
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Load from environment variables:
/// - `DATABASE_URL` (required)
/// - `DB_MAX_CONNECTIONS` (default: 20)
/// - `DB_MIN_CONNECTIONS` (default: 2)
/// - `DB_CONNECT_TIMEOUT_SECS` (default: 8)
/// - `DB_ACQUIRE_TIMEOUT_SECS` (default: 8)
/// - `DB_IDLE_TIMEOUT_SECS` (default: 300)
/// - `DB_SQLX_LOGGING` (default: true)
impl FromEnv for PostgresConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_required("DATABASE_URL")?,
            max_connections: env_parse_or_default("DB_MAX_CONNECTIONS", "20")?,
            min_connections: env_parse_or_default("DB_MIN_CONNECTIONS", "2")?,
            connect_timeout_secs: env_parse_or_default("DB_CONNECT_TIMEOUT_SECS", "8")?,
            acquire_timeout_secs: env_parse_or_default("DB_ACQUIRE_TIMEOUT_SECS", "8")?,
            idle_timeout_secs: env_parse_or_default("DB_IDLE_TIMEOUT_SECS", "300")?,
            sqlx_logging: env_parse_or_default("DB_SQLX_LOGGING", "true")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_config_new_defaults() {
        let config = PostgresConfig::new("postgresql://localhost/inventory");
        assert_eq!(config.url(), "postgresql://localhost/inventory");
        assert_eq!(config.max_connections, 20);
        assert_eq!(config.min_connections, 2);
        assert!(config.sqlx_logging);
    }

    #[test]
    fn test_postgres_config_from_env() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/testdb")),
                ("DB_MAX_CONNECTIONS", Some("50")),
                ("DB_SQLX_LOGGING", Some("false")),
            ],
            || {
                let config = PostgresConfig::from_env().unwrap();
                assert_eq!(config.url, "postgresql://localhost/testdb");
                assert_eq!(config.max_connections, 50);
                assert_eq!(config.min_connections, 2);
                assert!(!config.sqlx_logging);
            },
        );
    }

    #[test]
    fn test_postgres_config_from_env_requires_url() {
        temp_env::with_var_unset("DATABASE_URL", || {
            let result = PostgresConfig::from_env();
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("DATABASE_URL"));
        });
    }

    #[test]
    fn test_postgres_config_from_env_invalid_pool_size() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/testdb")),
                ("DB_MAX_CONNECTIONS", Some("many")),
            ],
            || {
                let result = PostgresConfig::from_env();
                assert!(result.is_err());
                assert!(result
                    .unwrap_err()
                    .to_string()
                    .contains("DB_MAX_CONNECTIONS"));
            },
        );
    }
}
