//! Backend health panel.

use leptos::prelude::*;

use crate::state::session::{HealthStatus, SessionState};

/// Shows backend and vector-store health from the startup check.
#[component]
pub fn SystemStatus(session: RwSignal<SessionState>) -> impl IntoView {
    let health = Memo::new(move |_| session.with(|s| s.health));
    let backend = Memo::new(move |_| session.with(|s| s.backend.clone()));
    let error = Memo::new(move |_| session.with(|s| s.backend_error.clone()));

    let status_text = move || match (health.get(), backend.get()) {
        (HealthStatus::Ok, Some(b)) => b.status,
        (status, _) => status.label().to_owned(),
    };

    view! {
        <section class="panel system-status">
            <h2 class="panel__title">"System Status"</h2>
            <p class="system-status__row">
                "Backend Status: "
                <strong class=move || health.get().tone().class()>{status_text}</strong>
            </p>
            {move || {
                backend
                    .get()
                    .filter(|b| !b.message.is_empty())
                    .map(|b| {
                        view! {
                            <p class="system-status__detail">
                                "Backend Message: " <em>{b.message}</em>
                            </p>
                        }
                    })
            }}
            {move || {
                backend
                    .get()
                    .filter(|b| !b.chroma_db_status.is_empty())
                    .map(|b| {
                        let class = if b.vector_store_ok() { "status--success" } else { "status--failure" };
                        view! {
                            <p class=format!("system-status__detail {class}")>
                                "ChromaDB Status: " <em>{b.chroma_db_status}</em>
                            </p>
                        }
                    })
            }}
            <Show when=move || error.get().is_some()>
                <p class="panel__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </section>
    }
}
