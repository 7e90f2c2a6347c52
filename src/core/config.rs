//! Logger configuration

use super::error::{LoggerError, Result};
use super::log_level::Level;
use serde::{Deserialize, Serialize};

/// Environment variable holding the threshold (`debug`, `info`, ... or an ordinal).
pub const LEVEL_ENV: &str = "LOG_LEVEL";

/// Environment variable toggling the timestamp prefix.
pub const TIMESTAMPS_ENV: &str = "LOG_TIMESTAMPS";

/// Settings a [`Logger`](super::Logger) is built from.
///
/// Missing fields fall back to the defaults: threshold `ERROR`, timestamps on.
///
/// # Example
///
/// ```
/// use leveled_log::{Level, LoggerConfig};
///
/// let config: LoggerConfig = serde_json::from_str(r#"{ "level": "debug" }"#).unwrap();
/// assert_eq!(config.level, Level::DEBUG);
/// assert!(config.timestamps);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: Level,
    pub timestamps: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::ERROR,
            timestamps: true,
        }
    }
}

impl LoggerConfig {
    /// Read `LOG_LEVEL` and `LOG_TIMESTAMPS` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, unset keys keeping defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup(LEVEL_ENV) {
            config.level = level.parse()?;
        }

        if let Some(flag) = lookup(TIMESTAMPS_ENV) {
            config.timestamps = parse_flag(&flag)
                .ok_or_else(|| LoggerError::message(format!("Invalid {}: '{}'", TIMESTAMPS_ENV, flag)))?;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
