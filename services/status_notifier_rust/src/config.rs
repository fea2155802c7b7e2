use std::env;
use std::fmt;
use thiserror::Error;

use homework_bot_core::clients::{practicum, telegram};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("Invalid {key}: {value} ({expected})")]
    Invalid {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,

    pub practicum_endpoint: String,
    pub telegram_api_base_url: String,

    /// Initial `from_date` cursor, unix seconds
    pub from_date: i64,
    /// Forward cycle failures to the chat as well as the log
    pub notify_on_errors: bool,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("practicum_endpoint", &self.practicum_endpoint)
            .field("telegram_api_base_url", &self.telegram_api_base_url)
            .field("from_date", &self.from_date)
            .field("notify_on_errors", &self.notify_on_errors)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    ///
    /// All three credentials are checked before anything else so a missing
    /// one is reported even when optional settings are also broken.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let practicum_token = required(&lookup, "YP_TOKEN")?;
        let telegram_token = required(&lookup, "BOT_TOKEN")?;
        let telegram_chat_id = required(&lookup, "CHAT_ID")?;

        let practicum_endpoint = lookup("PRACTICUM_ENDPOINT")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| practicum::DEFAULT_ENDPOINT.to_string());
        let telegram_api_base_url = lookup("TELEGRAM_API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| telegram::DEFAULT_API_BASE_URL.to_string());

        let from_date = parse_i64(&lookup, "FROM_DATE", 0)?;
        let notify_on_errors = parse_bool(&lookup, "NOTIFY_ON_ERRORS", false);

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            practicum_endpoint,
            telegram_api_base_url,
            from_date,
            notify_on_errors,
        })
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn parse_bool<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "y" | "on"))
        .unwrap_or(default)
}

fn parse_i64<F>(lookup: &F, key: &'static str, default: i64) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<i64>() {
            Ok(v) => Ok(v),
            Err(_) => Err(ConfigError::Invalid {
                key,
                value: raw,
                expected: "expected integer unix timestamp",
            }),
        },
    }
}
