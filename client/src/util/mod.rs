//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (clipboard, clock) and rendering
//! helpers from component logic so the latter stays testable off-browser.

pub mod clipboard;
pub mod markdown;
pub mod time;
