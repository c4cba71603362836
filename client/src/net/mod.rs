//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `types` defines the wire schema, `error`
//! classifies failures and `cancel` carries per-request cancellation.

pub mod api;
pub mod cancel;
pub mod error;
pub mod types;
