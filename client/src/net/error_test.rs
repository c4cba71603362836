use super::*;

// =============================================================
// Endpoint
// =============================================================

#[test]
fn endpoint_paths_match_backend_routes() {
    assert_eq!(Endpoint::Health.path(), "/health");
    assert_eq!(Endpoint::ListDocuments.path(), "/list-documents");
    assert_eq!(Endpoint::UploadDocument.path(), "/upload-document");
    assert_eq!(Endpoint::ClearDocuments.path(), "/clear-documents");
    assert_eq!(Endpoint::Ask.path(), "/ask");
}

#[test]
fn endpoint_methods_split_reads_and_writes() {
    assert_eq!(Endpoint::Health.method(), "GET");
    assert_eq!(Endpoint::ListDocuments.method(), "GET");
    assert_eq!(Endpoint::UploadDocument.method(), "POST");
    assert_eq!(Endpoint::ClearDocuments.method(), "POST");
    assert_eq!(Endpoint::Ask.method(), "POST");
}

#[test]
fn failure_message_prefixes_error_text() {
    let err = ApiError::Network("Failed to fetch".to_owned());
    assert_eq!(Endpoint::UploadDocument.failure_message(&err), "Upload failed: Failed to fetch");
    assert_eq!(Endpoint::ClearDocuments.failure_message(&err), "Failed to clear documents: Failed to fetch");
    assert_eq!(Endpoint::Ask.failure_message(&err), "Query failed: Failed to fetch");
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn from_response_prefers_server_detail() {
    let err = ApiError::from_response(500, r#"{"detail":"Failed to process query: boom"}"#);
    assert_eq!(err, ApiError::Http { status: 500, detail: Some("Failed to process query: boom".to_owned()) });
    assert_eq!(err.to_string(), "Failed to process query: boom");
}

#[test]
fn from_response_falls_back_to_status_text() {
    let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
    assert_eq!(err.to_string(), "HTTP error! status: 502");
}

#[test]
fn from_response_with_empty_body_uses_status() {
    let err = ApiError::from_response(404, "");
    assert_eq!(err, ApiError::Http { status: 404, detail: None });
}

#[test]
fn timeout_and_decode_have_readable_text() {
    assert_eq!(ApiError::Timeout(5000).to_string(), "request timed out after 5000 ms");
    assert_eq!(ApiError::Decode("missing field `answer`".to_owned()).to_string(), "unexpected response body: missing field `answer`");
}

#[test]
fn only_cancelled_reports_cancelled() {
    assert!(ApiError::Cancelled.is_cancelled());
    assert!(!ApiError::Timeout(1).is_cancelled());
}

// =============================================================
// ValidationError
// =============================================================

#[test]
fn validation_messages_are_user_facing() {
    assert_eq!(ValidationError::NoFileSelected.to_string(), "Please select a file to upload.");
    assert_eq!(ValidationError::EmptyQuestion.to_string(), "Please enter a question.");
}
