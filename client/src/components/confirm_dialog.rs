//! Modal dialog shared by every confirm/notify interaction on the page.

use leptos::prelude::*;

use crate::state::dialog::{DEFAULT_CANCEL_LABEL, DEFAULT_CONFIRM_LABEL};

/// Confirmation dialog. Renders nothing while `open` is false.
///
/// Labels default to "Confirm"/"Cancel". Clicking the backdrop counts as cancel.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] message: Signal<String>,
    #[prop(optional, into)] confirm_label: Option<Signal<String>>,
    #[prop(optional, into)] cancel_label: Option<Signal<String>>,
    #[prop(into)] destructive: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_text = move || confirm_label.map_or_else(|| DEFAULT_CONFIRM_LABEL.to_owned(), |label| label.get());
    let cancel_text = move || cancel_label.map_or_else(|| DEFAULT_CANCEL_LABEL.to_owned(), |label| label.get());

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
                <div
                    class="dialog"
                    role="dialog"
                    aria-modal="true"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <h2 class="dialog__title">{move || title.get()}</h2>
                    <p class="dialog__message">{move || message.get()}</p>
                    <div class="dialog__actions">
                        <button
                            class="btn btn--primary"
                            class:btn--danger=move || destructive.get()
                            on:click=move |_| on_confirm.run(())
                        >
                            {confirm_text}
                        </button>
                        <button class="btn" on:click=move |_| on_cancel.run(())>
                            {cancel_text}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
