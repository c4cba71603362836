use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_base_url, "http://localhost:8000");
    assert_eq!(cfg.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
}

#[test]
fn parses_overrides_and_trims_base_url() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("DOCQA_API_BASE_URL", " https://qa.example.test/ "),
        ("DOCQA_REQUEST_TIMEOUT_SECS", "30"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_base_url, "https://qa.example.test");
    assert_eq!(cfg.request_timeout_secs, 30);
}

#[test]
fn client_config_converts_timeout_to_millis() {
    let cfg = ServerConfig::from_lookup(lookup(&[("DOCQA_REQUEST_TIMEOUT_SECS", "45")])).unwrap();
    let client = cfg.client_config();
    assert_eq!(client.base_url, "http://localhost:8000");
    assert_eq!(client.request_timeout_ms, 45_000);
}

#[test]
fn rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
}

#[test]
fn rejects_non_http_base_url() {
    let err = ServerConfig::from_lookup(lookup(&[("DOCQA_API_BASE_URL", "ftp://files")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid DOCQA_API_BASE_URL: must start with http:// or https://");
}

#[test]
fn rejects_blank_base_url() {
    let err = ServerConfig::from_lookup(lookup(&[("DOCQA_API_BASE_URL", "  ")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid DOCQA_API_BASE_URL: empty");
}

#[test]
fn rejects_zero_timeout() {
    let err = ServerConfig::from_lookup(lookup(&[("DOCQA_REQUEST_TIMEOUT_SECS", "0")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid DOCQA_REQUEST_TIMEOUT_SECS: must be greater than zero");
}

#[test]
fn rejects_timeout_past_browser_timer_range() {
    let err = ServerConfig::from_lookup(lookup(&[("DOCQA_REQUEST_TIMEOUT_SECS", "3000000")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid DOCQA_REQUEST_TIMEOUT_SECS: must be at most 2147483");
}

#[test]
fn largest_timeout_stays_within_browser_timer_range() {
    let cfg = ServerConfig::from_lookup(lookup(&[("DOCQA_REQUEST_TIMEOUT_SECS", "2147483")])).unwrap();
    assert_eq!(cfg.request_timeout_secs, MAX_REQUEST_TIMEOUT_SECS);
    let client = cfg.client_config();
    assert_eq!(client.request_timeout_ms, 2_147_483_000);
    assert!(i32::try_from(client.request_timeout_ms).is_ok());
}

#[test]
fn client_config_clamps_hand_built_timeout() {
    let cfg = ServerConfig {
        port: DEFAULT_PORT,
        api_base_url: DEFAULT_API_BASE_URL.to_owned(),
        request_timeout_secs: u32::MAX,
    };
    assert_eq!(cfg.client_config().request_timeout_ms, MAX_REQUEST_TIMEOUT_MS);
}
