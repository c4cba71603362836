//! Wire DTOs for the backend's JSON endpoints.
//!
//! DESIGN
//! ======
//! Field names mirror the backend payloads exactly. Fields the client can
//! live without are `#[serde(default)]` so an older or newer backend does not
//! break decoding of the parts we render.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Response of `GET /health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
    /// `"ok"` or `"error: <reason>"` for the backend's vector store.
    #[serde(default)]
    pub chroma_db_status: String,
}

impl HealthResponse {
    /// Whether the vector store reported itself healthy.
    pub fn vector_store_ok(&self) -> bool {
        self.chroma_db_status.starts_with("ok")
    }
}

/// Response of `GET /list-documents`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentListResponse {
    #[serde(default)]
    pub documents: Vec<String>,
}

/// Response of `POST /upload-document` and `POST /clear-documents`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of `POST /ask`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AskRequest<'a> {
    pub query: &'a str,
}

/// Response of `POST /ask`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub retrieved_chunk_count: Option<u32>,
}

/// A cited excerpt returned alongside an answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Excerpt text of the retrieved chunk.
    pub content: String,
    /// Name of the document the chunk came from.
    pub source: String,
    /// Position of the chunk within its document. The backend sends `"N/A"`
    /// when its metadata has none.
    #[serde(default, deserialize_with = "lenient_index")]
    pub chunk_index: Option<u32>,
    /// Page number for paginated formats such as PDF. Other formats carry
    /// `"N/A"` here.
    #[serde(default, deserialize_with = "lenient_index", skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl Source {
    /// Location line shown under the document name,
    /// e.g. `Chunk Index: 3, Page: 2`.
    pub fn location_label(&self) -> String {
        let chunk = self.chunk_index.map_or_else(|| "N/A".to_owned(), |index| index.to_string());
        match self.page {
            Some(page) => format!("Chunk Index: {chunk}, Page: {page}"),
            None => format!("Chunk Index: {chunk}"),
        }
    }
}

/// Accept a non-negative integer (or its decimal string). Placeholders like
/// `"N/A"`, `null` and anything else decode as `None`.
fn lenient_index<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(serde_json::Value::String(s)) => s.trim().parse::<u32>().ok(),
        _ => None,
    })
}

/// Error body returned by the backend on non-2xx responses.
///
/// `detail` is usually a string, but request-validation failures carry a
/// structured list, so it is kept as raw JSON.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Human-readable detail text, if the server supplied any.
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.trim().is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(items) => {
                let messages: Vec<String> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                    .map(str::to_owned)
                    .collect();
                if messages.is_empty() { Some(serde_json::Value::Array(items.clone()).to_string()) } else { Some(messages.join("; ")) }
            }
            other => Some(other.to_string()),
        }
    }
}
