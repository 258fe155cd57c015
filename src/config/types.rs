//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::history::HistoryConfig;
use super::limits::LimitsConfig;
use super::listen::ListenConfig;
use super::logging::LoggingConfig;
use super::validation::{ValidationError, validate};

/// Config file consulted when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "linecast.toml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Network listen configuration.
    #[serde(default)]
    pub listen: ListenConfig,
    /// Replay buffer configuration.
    #[serde(default)]
    pub history: HistoryConfig,
    /// Input limits.
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        validate(&config).map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Resolve the configuration for this process.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// used if present, otherwise built-in defaults apply.
    pub fn resolve(explicit: Option<&str>) -> Result<(Self, Option<String>), ConfigError> {
        match explicit {
            Some(path) => Ok((Self::load(path)?, Some(path.to_string()))),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Ok((
                Self::load(DEFAULT_CONFIG_PATH)?,
                Some(DEFAULT_CONFIG_PATH.to_string()),
            )),
            None => Ok((Self::default(), None)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;

    #[test]
    fn empty_file_uses_defaults() {
        let cfg = Config::from_toml("").unwrap();
        assert_eq!(cfg.listen.address.to_string(), "127.0.0.1:9999");
        assert_eq!(cfg.history.capacity, 10);
        assert_eq!(cfg.limits.max_line_len, 4096);
        assert_eq!(cfg.logging.format, LogFormat::Text);
    }

    #[test]
    fn full_file() {
        let cfg = Config::from_toml(
            r#"
            [listen]
            address = "0.0.0.0:7000"

            [history]
            capacity = 25

            [limits]
            max_line_len = 1024

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.listen.address.port(), 7000);
        assert_eq!(cfg.history.capacity, 25);
        assert_eq!(cfg.limits.max_line_len, 1024);
        assert_eq!(cfg.logging.format, LogFormat::Json);
    }

    #[test]
    fn rejects_zero_history_capacity() {
        let err = Config::from_toml("[history]\ncapacity = 0\n").unwrap_err();
        match err {
            ConfigError::Invalid(errors) => {
                assert!(matches!(errors[..], [ValidationError::HistoryCapacity]));
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn reports_every_invalid_field() {
        let err = Config::from_toml(
            r#"
            [history]
            capacity = 0
            [limits]
            max_line_len = 1
            "#,
        )
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("history.capacity"));
        assert!(msg.contains("limits.max_line_len"));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            Config::from_toml("[listen\naddress = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_bad_address() {
        assert!(matches!(
            Config::from_toml("[listen]\naddress = \"not-an-address\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io(_))));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linecast.toml");
        std::fs::write(&path, "[listen]\naddress = \"127.0.0.1:4000\"\n").unwrap();
        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.listen.address.port(), 4000);
    }
}
