//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The page-wide session lives in one record (`session`) that only changes
//! through its reducer. Smaller models (`chat`, `dialog`, `documents`,
//! `request_seq`) are split out so components can depend on focused types.

pub mod chat;
pub mod dialog;
pub mod documents;
pub mod request_seq;
pub mod session;
