//! Conversation transcript entries.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{AskResponse, Source};

/// Author of a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Speaker label shown in the message header.
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "Assistant",
        }
    }
}

/// One turn of the conversation. Immutable once appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub text: String,
    /// Cited excerpts; only successful assistant answers carry these.
    #[serde(default)]
    pub sources: Option<Vec<Source>>,
    /// Number of chunks the backend retrieved for this answer, when reported.
    #[serde(default)]
    pub retrieved_chunk_count: Option<u32>,
    /// Locale time string captured when the entry was created.
    pub timestamp: String,
}

impl ChatMessage {
    /// The user's question as submitted.
    pub fn user(id: impl Into<String>, text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: Role::User,
            text: text.into(),
            sources: None,
            retrieved_chunk_count: None,
            timestamp: timestamp.into(),
        }
    }

    /// An answer from the backend, keeping its sources as returned.
    pub fn answer(id: impl Into<String>, response: AskResponse, timestamp: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: Role::Assistant,
            text: response.answer,
            sources: Some(response.sources),
            retrieved_chunk_count: response.retrieved_chunk_count,
            timestamp: timestamp.into(),
        }
    }

    /// Assistant entry standing in for an answer that failed.
    pub fn answer_failed(id: impl Into<String>, detail: &str, timestamp: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: Role::Assistant,
            text: format!("Error: Failed to get an answer. {detail}"),
            sources: None,
            retrieved_chunk_count: None,
            timestamp: timestamp.into(),
        }
    }

    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }

    /// Sources to render, empty for entries without any.
    pub fn cited_sources(&self) -> &[Source] {
        self.sources.as_deref().unwrap_or_default()
    }
}
