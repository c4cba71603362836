use super::*;

fn sample_source() -> Source {
    Source { content: "func main(){...}".to_owned(), source: "main.go".to_owned(), chunk_index: Some(0), page: None }
}

#[test]
fn role_labels() {
    assert_eq!(Role::User.label(), "You");
    assert_eq!(Role::Assistant.label(), "Assistant");
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Role::Assistant).unwrap(), serde_json::json!("assistant"));
    assert_eq!(serde_json::from_str::<Role>(r#""user""#).unwrap(), Role::User);
}

#[test]
fn user_message_has_no_sources() {
    let msg = ChatMessage::user("m-1", "What does main.go do?", "10:00:00");
    assert_eq!(msg.role, Role::User);
    assert_eq!(msg.text, "What does main.go do?");
    assert!(msg.sources.is_none());
    assert!(msg.cited_sources().is_empty());
    assert!(!msg.is_assistant());
}

#[test]
fn answer_keeps_sources_unmodified() {
    let response = AskResponse {
        answer: "It starts the server.".to_owned(),
        sources: vec![sample_source()],
        retrieved_chunk_count: Some(1),
    };
    let msg = ChatMessage::answer("m-2", response, "10:00:01");
    assert!(msg.is_assistant());
    assert_eq!(msg.text, "It starts the server.");
    assert_eq!(msg.cited_sources(), &[sample_source()]);
    assert_eq!(msg.retrieved_chunk_count, Some(1));
}

#[test]
fn failed_answer_carries_detail_without_sources() {
    let msg = ChatMessage::answer_failed("m-3", "Failed to process query: boom", "10:00:02");
    assert!(msg.is_assistant());
    assert_eq!(msg.text, "Error: Failed to get an answer. Failed to process query: boom");
    assert!(msg.sources.is_none());
}
