//! Upload and clear-all controls.

use leptos::prelude::*;

use crate::state::session::{SelectedFile, SessionState};

/// File picker plus upload and clear-all buttons.
///
/// Performs no requests itself. The picker's DOM node is owned by the shell
/// (`file_input`) so the upload command can read the chosen file from it.
#[component]
pub fn DocumentManager(
    session: RwSignal<SessionState>,
    file_input: NodeRef<leptos::html::Input>,
    on_file_change: Callback<Option<SelectedFile>>,
    on_upload: Callback<()>,
    on_clear_request: Callback<()>,
) -> impl IntoView {
    let selected = Memo::new(move |_| session.with(|s| s.selected_file.clone()));
    let can_upload = Memo::new(move |_| session.with(SessionState::can_upload));
    let clearing = Memo::new(move |_| session.with(SessionState::is_clearing));
    let upload = Memo::new(move |_| session.with(|s| s.upload.clone()));
    let upload_error = Memo::new(move |_| session.with(|s| s.upload_error.clone()));
    let clear = Memo::new(move |_| session.with(|s| s.clear.clone()));
    let clear_error = Memo::new(move |_| session.with(|s| s.clear_error.clone()));

    let on_change = move |_ev: leptos::ev::Event| {
        on_file_change.run(selected_file(file_input));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_upload.run(());
    };

    view! {
        <section class="panel document-manager">
            <h2 class="panel__title">"Manage Documents"</h2>
            <form class="document-manager__form" on:submit=on_submit>
                <input
                    class="document-manager__file"
                    type="file"
                    accept=".txt,.md,.pdf"
                    node_ref=file_input
                    on:change=on_change
                />
                {move || {
                    selected
                        .get()
                        .map(|file| {
                            view! {
                                <p class="document-manager__selected">
                                    "Selected: " <strong>{file.name.clone()}</strong> " (" {file.size_label()} ")"
                                </p>
                            }
                        })
                }}
                <button class="btn btn--primary" type="submit" disabled=move || !can_upload.get()>
                    "Upload & Process"
                </button>
            </form>
            <p class=move || format!("status {}", upload.get().tone().class())>{move || upload.get().label()}</p>
            <Show when=move || upload_error.get().is_some()>
                <p class="panel__error">{move || upload_error.get().unwrap_or_default()}</p>
            </Show>

            <div class="document-manager__danger-zone">
                <button
                    class="btn btn--danger"
                    type="button"
                    disabled=move || clearing.get()
                    on:click=move |_| on_clear_request.run(())
                >
                    {move || if clearing.get() { "Clearing..." } else { "Clear All Documents" }}
                </button>
                <p class=move || format!("status {}", clear.get().tone().class())>{move || clear.get().label()}</p>
                <Show when=move || clear_error.get().is_some()>
                    <p class="panel__error">{move || clear_error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </section>
    }
}

/// Name and size of the first file in the picker, if any.
fn selected_file(input: NodeRef<leptos::html::Input>) -> Option<SelectedFile> {
    #[cfg(feature = "hydrate")]
    {
        let file = input.get_untracked()?.files()?.get(0)?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let size = file.size() as u64;
        Some(SelectedFile { name: file.name(), size })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        None
    }
}
