//! Core runtime configuration.
//!
//! # Responsibility
//! - Hold the few tunables the core honors (splash delay, logging).
//! - Parse optional JSON configuration supplied by the host shell.
//!
//! # Invariants
//! - Every field has a default; an empty JSON object is a valid config.
//! - Unknown fields are rejected instead of silently ignored.

use crate::logging::{default_log_level, init_logging, LoggingError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Default splash screen hold time in milliseconds.
pub const DEFAULT_SPLASH_DELAY_MS: u64 = 2_500;

/// Host-provided configuration for one app value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    /// How long the splash screen stays up before the login form appears.
    pub splash_delay_ms: u64,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling log files. `None` disables file logs.
    pub log_dir: Option<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            splash_delay_ms: DEFAULT_SPLASH_DELAY_MS,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Parses a JSON config document.
    ///
    /// # Errors
    /// - Returns `ConfigError::Parse` for malformed JSON, wrong types or
    ///   unknown fields.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(ConfigError::Parse)
    }

    /// Splash hold time as a `Duration`.
    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }
}

/// Starts file logging when the config names a log directory.
///
/// Returns `Ok(false)` when no directory is configured.
pub fn init_logging_from_config(config: &CoreConfig) -> Result<bool, ConfigError> {
    match config.log_dir.as_deref() {
        Some(dir) => {
            init_logging(config.log_level.as_str(), dir)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Configuration load/apply errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config document could not be decoded.
    Parse(serde_json::Error),
    /// Logging settings were rejected by the logging bootstrap.
    Logging(LoggingError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::Logging(err) => write!(f, "invalid logging config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Logging(err) => Some(err),
        }
    }
}

impl From<LoggingError> for ConfigError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{init_logging_from_config, ConfigError, CoreConfig, DEFAULT_SPLASH_DELAY_MS};
    use std::time::Duration;

    #[test]
    fn empty_object_uses_defaults() {
        let config = CoreConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CoreConfig::default());
        assert_eq!(config.splash_delay_ms, DEFAULT_SPLASH_DELAY_MS);
        assert_eq!(config.splash_delay(), Duration::from_millis(2_500));
    }

    #[test]
    fn partial_object_overrides_only_given_fields() {
        let config = CoreConfig::from_json_str(r#"{ "splash_delay_ms": 10 }"#).unwrap();
        assert_eq!(config.splash_delay(), Duration::from_millis(10));
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = CoreConfig::from_json_str(r#"{ "theme": "dark" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("theme"));
    }

    #[test]
    fn missing_log_dir_skips_logging_init() {
        let started = init_logging_from_config(&CoreConfig::default()).unwrap();
        assert!(!started);
    }

    #[test]
    fn relative_log_dir_is_reported_as_logging_error() {
        let config = CoreConfig {
            log_dir: Some("logs/dev".to_string()),
            ..CoreConfig::default()
        };
        let err = init_logging_from_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::Logging(_)));
    }
}
