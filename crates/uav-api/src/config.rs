//! # API Configuration
//!
//! Environment-based configuration for the UAV Configurator service.
//! Nothing here influences the calculations themselves.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

/// API server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub server_addr: SocketAddr,

    /// Logging level, used when `RUST_LOG` is unset
    pub log_level: String,

    /// Emit JSON log lines instead of human-readable ones
    pub log_json: bool,

    /// CORS allowed origins (`*` allows any)
    pub cors_origins: Vec<String>,

    /// Enable GraphQL Playground
    pub enable_playground: bool,

    /// Enable GraphQL introspection
    pub enable_introspection: bool,

    /// Maximum query depth
    pub max_query_depth: usize,

    /// Maximum query complexity
    pub max_query_complexity: usize,
}

/// Invalid configuration value
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup, falling back to
    /// [`Config::default`] for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            server_addr: parse_or(&lookup, "SERVER_ADDR", defaults.server_addr)?,

            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),

            log_json: flag_or(&lookup, "LOG_JSON", defaults.log_json),

            cors_origins: lookup("CORS_ORIGINS")
                .map(|v| split_list(&v))
                .unwrap_or(defaults.cors_origins),

            enable_playground: flag_or(&lookup, "ENABLE_PLAYGROUND", defaults.enable_playground),

            enable_introspection: flag_or(
                &lookup,
                "ENABLE_INTROSPECTION",
                defaults.enable_introspection,
            ),

            max_query_depth: parse_or(&lookup, "MAX_QUERY_DEPTH", defaults.max_query_depth)?,

            max_query_complexity: parse_or(
                &lookup,
                "MAX_QUERY_COMPLEXITY",
                defaults.max_query_complexity,
            )?,
        })
    }

    /// Whether any origin may call the API
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            log_level: "info".to_string(),
            log_json: true,
            cors_origins: vec!["*".to_string()],
            enable_playground: true,
            enable_introspection: true,
            max_query_depth: 10,
            max_query_complexity: 1000,
        }
    }
}

fn parse_or<T, F>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}

fn flag_or<F>(lookup: &F, name: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).map_or(default, |v| v == "true" || v == "1")
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.server_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_level, "info");
        assert!(config.log_json);
        assert!(config.allows_any_origin());
        assert_eq!(config.max_query_depth, 10);
        assert_eq!(config.max_query_complexity, 1000);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("SERVER_ADDR", "127.0.0.1:9000"),
            ("LOG_JSON", "false"),
            ("ENABLE_PLAYGROUND", "0"),
            ("MAX_QUERY_DEPTH", "5"),
            ("CORS_ORIGINS", "https://uav.example, http://localhost:3000,"),
        ]))
        .unwrap();

        assert_eq!(config.server_addr.port(), 9000);
        assert!(!config.log_json);
        assert!(!config.enable_playground);
        assert!(config.enable_introspection);
        assert_eq!(config.max_query_depth, 5);
        assert_eq!(
            config.cors_origins,
            vec!["https://uav.example", "http://localhost:3000"]
        );
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn test_invalid_server_addr() {
        let err = Config::from_lookup(lookup_from(&[("SERVER_ADDR", "nowhere")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                name: "SERVER_ADDR",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_limit() {
        assert!(Config::from_lookup(lookup_from(&[("MAX_QUERY_COMPLEXITY", "lots")])).is_err());
    }
}
