//! # docqa-client
//!
//! Leptos + WASM frontend for the document question-answering app.
//!
//! Users upload documents, browse what has been ingested, and ask questions
//! against the backend's retrieval pipeline. All parsing, embedding and answer
//! generation happen in the backend; this crate only renders state and
//! orchestrates HTTP calls to it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `state` holds the session reducer, `net` wraps the backend endpoints,
//! `components` render pieces of the page and `pages::home` is the shell that
//! wires them together.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
