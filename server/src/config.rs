//! Server configuration parsed from environment variables.

use docqa_client::config::{ApiConfig, DEFAULT_API_BASE_URL, MAX_REQUEST_TIMEOUT_MS, normalize_base_url};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u32 = 120;
/// Largest timeout whose millisecond value still fits a browser timer.
pub const MAX_REQUEST_TIMEOUT_SECS: u32 = MAX_REQUEST_TIMEOUT_MS / 1000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend origin the browser client talks to.
    pub api_base_url: String,
    pub request_timeout_secs: u32,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DOCQA_API_BASE_URL`: default `http://localhost:8000`
    /// - `DOCQA_REQUEST_TIMEOUT_SECS`: default 120, at most [`MAX_REQUEST_TIMEOUT_SECS`]
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                var: "PORT",
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let api_base_url = match lookup("DOCQA_API_BASE_URL") {
            Some(raw) => parse_base_url(&raw)?,
            None => DEFAULT_API_BASE_URL.to_owned(),
        };

        let request_timeout_secs = match lookup("DOCQA_REQUEST_TIMEOUT_SECS") {
            Some(raw) => parse_timeout_secs(&raw)?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self { port, api_base_url, request_timeout_secs })
    }

    /// Config handed to the browser client through the SSR shell.
    pub fn client_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_base_url.clone(),
            request_timeout_ms: self.request_timeout_secs.saturating_mul(1000).min(MAX_REQUEST_TIMEOUT_MS),
        }
    }
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let invalid = |reason: &str| ConfigError::Invalid { var: "DOCQA_API_BASE_URL", reason: reason.to_owned() };
    let url = normalize_base_url(raw).ok_or_else(|| invalid("empty"))?;
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(invalid("must start with http:// or https://"));
    }
    Ok(url)
}

fn parse_timeout_secs(raw: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid { var: "DOCQA_REQUEST_TIMEOUT_SECS", reason };
    let secs = raw.trim().parse::<u32>().map_err(|e| invalid(e.to_string()))?;
    if secs == 0 {
        return Err(invalid("must be greater than zero".to_owned()));
    }
    if secs > MAX_REQUEST_TIMEOUT_SECS {
        return Err(invalid(format!("must be at most {MAX_REQUEST_TIMEOUT_SECS}")));
    }
    Ok(secs)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
