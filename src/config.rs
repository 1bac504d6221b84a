// src/config.rs

use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_WORKERS: usize = 8;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PROPIZ_ADDR is not a socket address: {0}")]
    InvalidAddr(String),
    #[error("PROPIZ_MAX_WORKERS must be a positive integer, got {0:?}")]
    InvalidWorkers(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub max_workers: usize,
}

impl AppConfig {
    /// Reads `PROPIZ_ADDR` and `PROPIZ_MAX_WORKERS` from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, but with an injectable lookup so tests
    /// don't have to touch process state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr_raw = lookup("PROPIZ_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr(addr_raw.clone()))?;

        let max_workers = match lookup("PROPIZ_MAX_WORKERS") {
            None => DEFAULT_MAX_WORKERS,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidWorkers(raw)),
            },
        };

        Ok(Self { addr, max_workers })
    }
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
    fn defaults_when_unset() {
        let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.addr, DEFAULT_ADDR.parse().unwrap());
        assert_eq!(cfg.max_workers, DEFAULT_MAX_WORKERS);
    }

    #[test]
    fn reads_overrides() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("PROPIZ_ADDR", "0.0.0.0:8080"),
            ("PROPIZ_MAX_WORKERS", "2"),
        ]))
        .unwrap();
        assert_eq!(cfg.addr.port(), 8080);
        assert_eq!(cfg.max_workers, 2);
    }

    #[test]
    fn rejects_zero_workers() {
        let err = AppConfig::from_lookup(lookup_from(&[("PROPIZ_MAX_WORKERS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWorkers(_)));
    }

    #[test]
    fn rejects_bad_addr() {
        let err = AppConfig::from_lookup(lookup_from(&[("PROPIZ_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr(_)));
    }
}
