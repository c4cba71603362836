//! Per-request cancellation tokens.
//!
//! DESIGN
//! ======
//! Every backend call runs under a [`CancelToken`]. The issuing side keeps the
//! matching `AbortHandle` in a [`CancelRegistry`] keyed by [`RequestKind`];
//! registering a new request of the same kind aborts the previous one. The
//! aborted future resolves to `ApiError::Cancelled`, and in the browser the
//! underlying fetch is aborted as well (see `api`).

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::collections::HashMap;
use std::future::Future;

use futures::future::{AbortHandle, AbortRegistration, Abortable};

use super::error::ApiError;
use crate::state::request_seq::RequestKind;

/// Cancellation side of one in-flight request.
#[derive(Debug)]
pub struct CancelToken {
    registration: AbortRegistration,
}

impl CancelToken {
    /// Create a token plus the handle that cancels it.
    pub fn new() -> (Self, AbortHandle) {
        let (handle, registration) = AbortHandle::new_pair();
        (Self { registration }, handle)
    }

    /// A token nobody holds a handle for. It can never be cancelled.
    pub fn detached() -> Self {
        Self::new().0
    }

    /// Drive `fut` to completion unless the token is cancelled first.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Cancelled` when the handle was aborted before `fut`
    /// finished, otherwise whatever `fut` returned.
    pub async fn run<T, F>(self, fut: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        match Abortable::new(fut, self.registration).await {
            Ok(result) => result,
            Err(_aborted) => Err(ApiError::Cancelled),
        }
    }
}

/// Latest in-flight request per kind.
#[derive(Debug, Default)]
pub struct CancelRegistry {
    handles: HashMap<RequestKind, AbortHandle>,
}

impl CancelRegistry {
    /// Issue a token for `kind`, aborting whatever request of that kind was
    /// still running.
    pub fn issue(&mut self, kind: RequestKind) -> CancelToken {
        let (token, handle) = CancelToken::new();
        if let Some(previous) = self.handles.insert(kind, handle) {
            previous.abort();
        }
        token
    }

    /// Abort the in-flight request of `kind`, if any.
    pub fn cancel(&mut self, kind: RequestKind) {
        if let Some(handle) = self.handles.remove(&kind) {
            handle.abort();
        }
    }

    /// Abort every in-flight request.
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.handles.drain() {
            handle.abort();
        }
    }
}
