use std::env;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::notification::DEFAULT_FOOTER_ICON;

pub const DEFAULT_CHUNK_SIZE: usize = 100;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Process-wide settings, read once before the first invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub webhook_url: Url,
    pub channel: String,
    pub footer: String,
    pub footer_icon: String,
    pub chunk_size: usize,
    pub timeout: Duration,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("SLACK_WEBHOOK not set - {0}")]
    MissingWebhook(#[source] env::VarError),
    #[error("SLACK_WEBHOOK is not a valid url - {0}")]
    InvalidWebhook(#[from] url::ParseError),
    #[error("Error parsing {name} - {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

impl Config {
    pub fn load_from_env() -> Result<Config, ConfigError> {
        let webhook_url = env::var("SLACK_WEBHOOK")
            .map_err(ConfigError::MissingWebhook)?
            .parse::<Url>()?;

        let chunk_size = env::var("SLACK_ATTACHMENTS_CHUNK_SIZE")
            .unwrap_or(DEFAULT_CHUNK_SIZE.to_string())
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidValue {
                name: "SLACK_ATTACHMENTS_CHUNK_SIZE",
                reason: e.to_string(),
            })?;
        if chunk_size == 0 {
            return Err(ConfigError::InvalidValue {
                name: "SLACK_ATTACHMENTS_CHUNK_SIZE",
                reason: "must be at least 1".to_string(),
            });
        }

        let timeout_secs = env::var("SLACK_TIMEOUT_SECS")
            .unwrap_or(DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidValue {
                name: "SLACK_TIMEOUT_SECS",
                reason: e.to_string(),
            })?;

        Ok(Config {
            webhook_url,
            channel: env::var("SLACK_MONITOR_CHANNEL").unwrap_or_default(),
            footer: env::var("AWS_LAMBDA_FUNCTION_NAME").unwrap_or_default(),
            footer_icon: env::var("SLACK_FOOTER_ICON")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(DEFAULT_FOOTER_ICON.to_string()),
            chunk_size,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
