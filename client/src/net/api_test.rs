use futures::executor::block_on;

use super::*;
use crate::net::types::Source;

#[test]
fn decode_body_parses_ask_example() {
    let body = r#"{"answer":"It starts the server.","sources":[{"content":"func main(){...}","source":"main.go","chunk_index":0}]}"#;
    let resp: AskResponse = decode_body(body).unwrap();
    assert_eq!(resp.answer, "It starts the server.");
    assert_eq!(
        resp.sources,
        vec![Source { content: "func main(){...}".to_owned(), source: "main.go".to_owned(), chunk_index: Some(0), page: None }]
    );
}

#[test]
fn decode_body_accepts_backend_text_document_sources() {
    let body = r#"{"answer":"It starts the server.","sources":[{"content":"func main(){...}","source":"main.go","chunk_index":0,"page":"N/A"}],"retrieved_chunk_count":1}"#;
    let resp: AskResponse = decode_body(body).unwrap();
    assert_eq!(resp.sources.len(), 1);
    assert_eq!(resp.sources[0].source, "main.go");
    assert_eq!(resp.sources[0].page, None);
    assert_eq!(resp.retrieved_chunk_count, Some(1));
}

#[test]
fn decode_body_reports_schema_mismatch() {
    let err = decode_body::<MessageResponse>(r#"{"status":"success"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(ref msg) if msg.contains("message")));
}

#[test]
fn decode_body_reports_non_json() {
    let err = decode_body::<HealthResponse>("Internal Server Error").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn calls_outside_browser_fail_without_panicking() {
    let config = ApiConfig::default();
    let health = block_on(get_health(&config, CancelToken::detached()));
    assert_eq!(health, Err(ApiError::Network("not available on server".to_owned())));

    let docs = block_on(list_documents(&config, CancelToken::detached()));
    assert!(docs.is_err());

    let cleared = block_on(clear_documents(&config, CancelToken::detached()));
    assert!(cleared.is_err());

    let answer = block_on(ask(&config, "What does main.go do?", CancelToken::detached()));
    assert!(answer.is_err());
}
