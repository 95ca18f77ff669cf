//! Process configuration, read once from the environment at startup.

use std::net::SocketAddr;

use bookshelf_observability::{LogFormat, ParseLogFormatError};
use thiserror::Error;

pub const ADDR_VAR: &str = "BOOKSHELF_ADDR";
pub const SEED_VAR: &str = "BOOKSHELF_SEED";
pub const LOG_FORMAT_VAR: &str = "BOOKSHELF_LOG_FORMAT";

const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: invalid socket address {value:?}: {source}")]
    Addr {
        var: &'static str,
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("{var}: expected a boolean, got {value:?}")]
    Bool { var: &'static str, value: String },

    #[error("{var}: {source}")]
    LogFormat {
        var: &'static str,
        source: ParseLogFormatError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Address the HTTP listener binds to.
    pub addr: SocketAddr,
    /// Whether the store starts with the fixture books.
    pub seed: bool,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            seed: true,
            log_format: LogFormat::Json,
        }
    }
}

impl ApiConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; unset variables take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr.trim().parse::<SocketAddr>().map_err(|source| ConfigError::Addr {
            var: ADDR_VAR,
            value: raw_addr.clone(),
            source,
        })?;

        let seed = match lookup(SEED_VAR) {
            Some(value) => parse_bool(SEED_VAR, value)?,
            None => true,
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(value) => value.parse::<LogFormat>().map_err(|source| ConfigError::LogFormat {
                var: LOG_FORMAT_VAR,
                source,
            })?,
            None => LogFormat::default(),
        };

        Ok(Self {
            addr,
            seed,
            log_format,
        })
    }
}

fn parse_bool(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Bool { var, value }),
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = ApiConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg, ApiConfig::default());
        assert_eq!(cfg.addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn reads_all_variables() {
        let cfg = ApiConfig::from_lookup(lookup_from(&[
            (ADDR_VAR, "0.0.0.0:9000"),
            (SEED_VAR, "false"),
            (LOG_FORMAT_VAR, "pretty"),
        ]))
        .unwrap();

        assert_eq!(cfg.addr.port(), 9000);
        assert!(!cfg.seed);
        assert_eq!(cfg.log_format, LogFormat::Pretty);
    }

    #[test]
    fn rejects_bad_values() {
        let err = ApiConfig::from_lookup(lookup_from(&[(ADDR_VAR, "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::Addr { .. }));

        let err = ApiConfig::from_lookup(lookup_from(&[(SEED_VAR, "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::Bool { .. }));
        assert!(err.to_string().starts_with(SEED_VAR));

        let err = ApiConfig::from_lookup(lookup_from(&[(LOG_FORMAT_VAR, "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::LogFormat { .. }));
    }
}
