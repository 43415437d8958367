//! Configuration module for the Cartel API.
//!
//! Loads configuration from YAML files and environment variables.

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Optional database collaborator configuration.
///
/// Only the presence of `url` and `name` is ever reported; their values
/// are never echoed back to clients.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfig {
    /// Whether the database collaborator is installed at all.
    #[serde(default)]
    pub enabled: bool,
    /// Connection string (`DATABASE_URL`).
    #[serde(default)]
    pub url: Option<String>,
    /// Database name (`DATABASE_NAME`).
    #[serde(default)]
    pub name: Option<String>,
}

impl DatabaseConfig {
    /// The connection string, if set to a non-empty value.
    pub fn url(&self) -> Option<&str> {
        non_empty(self.url.as_deref())
    }

    /// The database name, if set to a non-empty value.
    pub fn name(&self) -> Option<&str> {
        non_empty(self.name.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Conventional unprefixed variables that take precedence over everything else.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub port: Option<String>,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
}

impl EnvOverrides {
    /// Read `PORT`, `DATABASE_URL` and `DATABASE_NAME` from the process environment.
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT").ok(),
            database_url: std::env::var("DATABASE_URL").ok(),
            database_name: std::env::var("DATABASE_NAME").ok(),
        }
    }
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. `PORT`, `DATABASE_URL`, `DATABASE_NAME`
    /// 2. Environment variables (CARTEL__*)
    /// 3. config/local.yaml (if exists)
    /// 4. config/default.yaml (if exists)
    /// 5. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(EnvOverrides::from_env())
    }

    /// Load configuration with an explicit set of unprefixed overrides.
    pub fn load_with(overrides: EnvOverrides) -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("database.enabled", false)?
            // Start with default config
            .add_source(File::with_name("config/default").required(false))
            // Layer on local overrides
            .add_source(File::with_name("config/local").required(false))
            // Layer on environment variables with CARTEL_ prefix
            .add_source(
                Environment::with_prefix("CARTEL")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", overrides.port)?
            .set_override_option("database.url", overrides.database_url)?
            .set_override_option("database.name", overrides.database_name)?
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::load_with(EnvOverrides::default()).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_port_override() {
        let config = Config::load_with(EnvOverrides {
            port: Some("9123".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(config.server.port, 9123);
    }

    #[test]
    fn test_database_overrides() {
        let config = Config::load_with(EnvOverrides {
            database_url: Some("sqlite::memory:".to_string()),
            database_name: Some("cards".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(config.database.url(), Some("sqlite::memory:"));
        assert_eq!(config.database.name(), Some("cards"));
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let database = DatabaseConfig {
            enabled: true,
            url: Some(String::new()),
            name: None,
        };
        assert_eq!(database.url(), None);
        assert_eq!(database.name(), None);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = Config::load_with(EnvOverrides {
            port: Some("not-a-port".to_string()),
            ..Default::default()
        });
        assert!(result.is_err());
    }
}
