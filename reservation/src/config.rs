use std::env;

use crate::error::ConfigError;

const DEFAULT_LOG_FILTER: &str = "info,reservation=debug";
const DEFAULT_LOGGER_NAME: &str = "Test logger";

#[derive(Debug, Clone)]
pub struct Config {
    /// Tracing filter directive, used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Name recorded on the suite logging handle
    pub logger_name: String,
    pub log_ansi: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            logger_name: DEFAULT_LOGGER_NAME.to_string(),
            log_ansi: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_ansi = match lookup("RESERVATION_LOG_ANSI") {
            Some(value) => parse_bool("RESERVATION_LOG_ANSI", &value)?,
            None => true,
        };

        Ok(Self {
            log_filter: lookup("RESERVATION_LOG")
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            logger_name: lookup("RESERVATION_LOGGER_NAME")
                .unwrap_or_else(|| DEFAULT_LOGGER_NAME.to_string()),
            log_ansi,
        })
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        }),
    }
}
