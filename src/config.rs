//! Backend configuration, resolved once at startup

use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

use crate::constants::{CONTACT_PATH, DEFAULT_TIMEOUT_SECS, ENV_BACKEND_URL, ENV_REQUEST_TIMEOUT};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("invalid backend URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("invalid {name} value '{value}'")]
    InvalidTimeout { name: &'static str, value: String },
}

/// Immutable backend settings injected into the submission client
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    base_url: String,
    request_timeout: Duration,
}

impl Config {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Config {
            base_url: trimmed.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Reads `.env` (if any) and the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_BACKEND_URL)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(ENV_BACKEND_URL))?;
        let config = Config::new(&base_url)?;

        match lookup(ENV_REQUEST_TIMEOUT) {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|s| *s > 0)
                    .ok_or(ConfigError::InvalidTimeout {
                        name: ENV_REQUEST_TIMEOUT,
                        value: raw.clone(),
                    })?;
                Ok(config.with_timeout(Duration::from_secs(secs)))
            }
            None => Ok(config),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn contact_endpoint(&self) -> String {
        format!("{}{}", self.base_url, CONTACT_PATH)
    }
}
