//! Uploaded-document list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns its own fetch state. The shell only bumps `refresh`; every change
//! (and the initial mount) issues exactly one `GET /list-documents`.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::cancel::CancelRegistry;
use crate::state::documents::DocumentListState;
#[cfg(feature = "hydrate")]
use crate::state::request_seq::RequestKind;

/// Lists ingested document names, refetching whenever `refresh` changes.
#[component]
pub fn DocumentList(#[prop(into)] refresh: Signal<u64>) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let list = RwSignal::new(DocumentListState::default());
    let cancels = StoredValue::new(CancelRegistry::default());

    Effect::new(move || {
        let _ = refresh.get();
        let seq = list.try_update(DocumentListState::begin_fetch).unwrap_or_default();

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let token = cancels
                .try_update_value(|registry| registry.issue(RequestKind::Documents))
                .unwrap_or_else(crate::net::cancel::CancelToken::detached);
            leptos::task::spawn_local(async move {
                let result = crate::net::api::list_documents(&config, token).await;
                list.update(|state| {
                    state.finish_fetch(seq, result);
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, seq);
        }
    });

    on_cleanup(move || cancels.update_value(CancelRegistry::cancel_all));

    view! {
        <section class="panel document-list">
            <h2 class="panel__title">"Uploaded Documents"</h2>
            {move || {
                let state = list.get();
                if state.loading {
                    return view! { <p class="document-list__loading">"Loading documents..."</p> }.into_any();
                }
                if let Some(error) = state.error {
                    return view! { <p class="panel__error">{error}</p> }.into_any();
                }
                if state.documents.is_empty() {
                    return view! {
                        <p class="document-list__empty">"No documents uploaded yet. Upload some documentation to get started!"</p>
                    }
                        .into_any();
                }
                view! {
                    <ul class="document-list__items">
                        {state
                            .documents
                            .into_iter()
                            .map(|name| view! { <li class="document-list__item">{name}</li> })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                    .into_any()
            }}
        </section>
    }
}
