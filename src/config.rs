use reqwest::Url;

use crate::constants::*;
use crate::error::ConfigError;

/// Runtime configuration, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend origin, without a trailing slash. Resource paths are appended to it.
    pub base_url: String,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var(BACKEND_URL_VAR)
            .or_else(|_| std::env::var(LEGACY_BACKEND_URL_VAR))
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());

        let log_filter =
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            base_url: normalize_base_url(&base_url)?,
            log_filter,
        })
    }

    /// Replaces the backend origin, e.g. from a command-line flag.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.base_url = normalize_base_url(base_url)?;
        Ok(self)
    }
}

pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyUrl);
    }

    let url = Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}
