//! Failure taxonomy for backend calls and client-side validation.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is caught at the action that triggered it and rendered into
//! that action's status slot as `"<prefix>: <error>"`. Nothing propagates past
//! the shell. `Cancelled` marks a superseded request and is never shown.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

/// Backend endpoints the client talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Health,
    ListDocuments,
    UploadDocument,
    ClearDocuments,
    Ask,
}

impl Endpoint {
    /// Request path relative to the backend base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::Health => "/health",
            Self::ListDocuments => "/list-documents",
            Self::UploadDocument => "/upload-document",
            Self::ClearDocuments => "/clear-documents",
            Self::Ask => "/ask",
        }
    }

    pub fn method(self) -> &'static str {
        match self {
            Self::Health | Self::ListDocuments => "GET",
            Self::UploadDocument | Self::ClearDocuments | Self::Ask => "POST",
        }
    }

    /// Prefix for the user-facing failure message of this endpoint.
    pub fn failure_prefix(self) -> &'static str {
        match self {
            Self::Health => "Error connecting to backend",
            Self::ListDocuments => "Failed to load documents",
            Self::UploadDocument => "Upload failed",
            Self::ClearDocuments => "Failed to clear documents",
            Self::Ask => "Query failed",
        }
    }

    /// Full user-facing failure message for `err`.
    pub fn failure_message(self, err: &ApiError) -> String {
        format!("{}: {err}", self.failure_prefix())
    }
}

/// A backend call that did not produce a usable response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never got a response (host unreachable, CORS, offline).
    #[error("{0}")]
    Network(String),

    /// Non-2xx response, with the server's `detail` when it sent one.
    #[error("{}", http_message(.status, .detail))]
    Http { status: u16, detail: Option<String> },

    /// 2xx response whose body did not match the expected schema.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The request deadline elapsed before a response arrived.
    #[error("request timed out after {0} ms")]
    Timeout(u32),

    /// A newer request for the same slot superseded this one.
    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    /// Build the error for a non-2xx response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail_text());
        Self::Http { status, detail }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

// thiserror hands fields to format args by reference.
#[allow(clippy::trivially_copy_pass_by_ref, clippy::ref_option)]
fn http_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => detail.clone(),
        None => format!("HTTP error! status: {status}"),
    }
}

/// Input rejected before any request is issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please select a file to upload.")]
    NoFileSelected,
    #[error("Please enter a question.")]
    EmptyQuestion,
}
