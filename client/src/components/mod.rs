//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one region of the page. They read session state passed
//! in as signals and report user actions through callbacks; only the home
//! page shell turns those actions into session events.

pub mod chat_message;
pub mod confirm_dialog;
pub mod conversation;
pub mod document_list;
pub mod document_manager;
pub mod system_status;
