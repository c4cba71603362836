//! Backend endpoint configuration for the browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The SSR host renders the deployment's backend base URL and request
//! timeout into `<meta>` tags in the page head. On hydrate the client reads
//! them back here, falling back to local-development defaults when a tag is
//! missing or malformed.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::net::error::Endpoint;

/// Backend base URL used when the page does not carry one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
/// Default per-request deadline. Answer generation and document ingestion
/// can both take a long time on the backend.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 120_000;
/// Longest deadline a browser timer honors. `setTimeout` takes a signed
/// 32-bit delay and fires immediately on anything larger.
pub const MAX_REQUEST_TIMEOUT_MS: u32 = 2_147_483_647;

/// `<meta name=...>` carrying the backend base URL.
pub const BASE_URL_META: &str = "docqa-api-base-url";
/// `<meta name=...>` carrying the request timeout in milliseconds.
pub const TIMEOUT_META: &str = "docqa-request-timeout-ms";

/// Where and how the client talks to the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend origin without a trailing slash, e.g. `http://localhost:8000`.
    pub base_url: String,
    /// Deadline applied to every request.
    pub request_timeout_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned(), request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS }
    }
}

impl ApiConfig {
    /// Build a config from raw values, substituting defaults for blank or
    /// unparsable input.
    pub fn from_raw(base_url: Option<&str>, timeout_ms: Option<&str>) -> Self {
        Self {
            base_url: base_url
                .and_then(normalize_base_url)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned()),
            request_timeout_ms: parse_timeout_ms(timeout_ms),
        }
    }

    /// Read the config rendered into the page head by the SSR host.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let base_url = read_meta(BASE_URL_META);
            let timeout = read_meta(TIMEOUT_META);
            Self::from_raw(base_url.as_deref(), timeout.as_deref())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    /// Absolute URL for `endpoint` on this backend.
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

/// Trim whitespace and trailing slashes. Returns `None` for blank input.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_owned())
}

/// Parse a positive millisecond timeout no larger than
/// [`MAX_REQUEST_TIMEOUT_MS`], defaulting on anything else.
pub fn parse_timeout_ms(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|ms| (1..=MAX_REQUEST_TIMEOUT_MS).contains(ms))
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS)
}

#[cfg(feature = "hydrate")]
fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{name}\"]");
    let element = document.query_selector(&selector).ok().flatten()?;
    element.get_attribute("content")
}
