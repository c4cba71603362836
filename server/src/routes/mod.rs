//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the server-rendered Leptos shell at `/`, the compiled client bundle
//! under `/pkg`, and a liveness probe at `/healthz`. The document QA backend
//! itself is a separate service; the browser talks to it directly.

pub mod health;

use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use docqa_client::app::{App, shell};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Leptos SSR frontend plus static assets and health probe.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);
    let client_config = config.client_config();

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let client_config = client_config.clone();
                move || provide_context(client_config.clone())
            },
            {
                let opts = leptos_options.clone();
                move || shell(opts.clone(), client_config.clone())
            },
        )
        .with_state(leptos_options.clone());

    // Compiled WASM, JS glue and CSS live under the site root's /pkg.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(Router::new()
        .route("/healthz", get(health::healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}
