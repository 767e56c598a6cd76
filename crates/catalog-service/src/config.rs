//! Runtime configuration, read from the environment (and an optional `.env` file).

use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use thiserror::Error;
use tracing::info;

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid CATALOG_ADDR '{value}': {reason}")]
    InvalidAddr { value: String, reason: String },
    #[error("Invalid CATALOG_SEED '{value}': {reason}")]
    InvalidSeed { value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Listen address (`CATALOG_ADDR`, default `0.0.0.0:8080`).
    pub addr: SocketAddr,
    /// Insert the sample products at startup (`CATALOG_SEED`, default `true`).
    pub seed: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        let config = Self::from_lookup(|name| env::var(name).ok())?;
        info!(addr = %config.addr, seed = config.seed, "Configuration loaded");
        Ok(config)
    }

    /// Builds the config from any variable source; unset variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr_value = lookup("CATALOG_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidAddr {
                reason: e.to_string(),
                value: addr_value.clone(),
            })?;

        let seed = match lookup("CATALOG_SEED") {
            None => true,
            Some(value) => value
                .trim()
                .parse::<bool>()
                .map_err(|e| ConfigError::InvalidSeed {
                    reason: e.to_string(),
                    value: value.clone(),
                })?,
        };

        Ok(Self { addr, seed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr, "0.0.0.0:8080".parse().unwrap());
        assert!(config.seed);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("CATALOG_ADDR", "127.0.0.1:9000"),
            ("CATALOG_SEED", "false"),
        ]))
        .unwrap();
        assert_eq!(config.addr.port(), 9000);
        assert!(!config.seed);
    }

    #[test]
    fn test_invalid_values() {
        let err = AppConfig::from_lookup(lookup(&[("CATALOG_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr { .. }));

        let err = AppConfig::from_lookup(lookup(&[("CATALOG_SEED", "yes")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeed { ref value, .. } if value == "yes"));
    }
}
