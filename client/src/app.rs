//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{ApiConfig, BASE_URL_META, TIMEOUT_META};
use crate::pages::home::HomePage;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is the backend location for this deployment; it is written into
/// `<meta>` tags that the hydrated client reads back.
pub fn shell(options: LeptosOptions, config: ApiConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=BASE_URL_META content=config.base_url/>
                <meta name=TIMEOUT_META content=config.request_timeout_ms.to_string()/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and backend config contexts and sets up routing. The
/// SSR host may supply the config as context; otherwise it comes from the
/// page's `<meta>` tags.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);
    let config = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_document);
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/docqa.css"/>
        <Title text="Codebase QA"/>
        <Meta name="description" content="Ask questions about your uploaded documents."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
