//! Uploaded-document list state.
//!
//! DESIGN
//! ======
//! Owned by the document list view, separate from the session record. The
//! shell reaches it only through the refresh counter. Each fetch is tagged
//! with a sequence number so that an older, slower response never replaces
//! a newer list.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use super::request_seq::RequestSlot;
use crate::net::error::{ApiError, Endpoint};

/// Names of ingested documents plus fetch status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentListState {
    pub documents: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
    slot: RequestSlot,
}

impl Default for DocumentListState {
    fn default() -> Self {
        // The first fetch starts on mount, so render the loading state up front.
        Self { documents: Vec::new(), loading: true, error: None, slot: RequestSlot::default() }
    }
}

impl DocumentListState {
    /// Mark a fetch as started and return its sequence number.
    pub fn begin_fetch(&mut self) -> u64 {
        self.loading = true;
        self.error = None;
        self.slot.begin()
    }

    /// Apply the outcome of fetch `seq`. Returns `false` if it was discarded.
    pub fn finish_fetch(&mut self, seq: u64, result: Result<Vec<String>, ApiError>) -> bool {
        if matches!(result, Err(ApiError::Cancelled)) {
            return false;
        }
        if !self.slot.complete(seq) {
            return false;
        }
        match result {
            Ok(documents) => {
                self.documents = documents;
                self.error = None;
            }
            Err(err) => {
                self.documents.clear();
                self.error = Some(Endpoint::ListDocuments.failure_message(&err));
            }
        }
        self.loading = self.slot.is_pending();
        true
    }

    /// Nothing to list and nothing pending or failed.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.documents.is_empty()
    }
}
