//! Question box and chat transcript.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the transcript and query status from the session and reports
//! edits, submissions, clear-chat requests and copy outcomes upward. The
//! copy itself happens here since it never touches the backend.

use leptos::prelude::*;

use crate::components::chat_message::ChatMessageView;
use crate::state::session::SessionState;
use crate::util::clipboard::copy_text;

/// Transcript, question textarea, submit and clear-chat controls.
#[component]
pub fn Conversation(
    session: RwSignal<SessionState>,
    on_query_change: Callback<String>,
    on_submit: Callback<()>,
    on_clear_chat: Callback<()>,
    on_copy_result: Callback<bool>,
) -> impl IntoView {
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let chat_len = Memo::new(move |_| session.with(|s| s.chat.len()));
    let thinking = Memo::new(move |_| session.with(SessionState::is_thinking));
    let can_submit = Memo::new(move |_| session.with(SessionState::can_submit_question));
    let query = Memo::new(move |_| session.with(|s| s.query));
    let query_error = Memo::new(move |_| session.with(|s| s.query_error.clone()));

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = chat_len.get();
        let _ = thinking.get();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let on_copy = Callback::new(move |text: String| {
        leptos::task::spawn_local(async move {
            let copied = match copy_text(&text).await {
                Ok(()) => true,
                Err(err) => {
                    leptos::logging::warn!("copy to clipboard failed: {err}");
                    false
                }
            };
            on_copy_result.run(copied);
        });
    });

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            on_submit.run(());
        }
    };

    view! {
        <section class="panel conversation">
            <h2 class="panel__title">"Ask a Question"</h2>
            <div class="conversation__messages" node_ref=messages_ref>
                <Show when=move || chat_len.get() == 0>
                    <p class="conversation__empty">
                        "Start a conversation by asking a question about your documents!"
                    </p>
                </Show>
                <For
                    each=move || session.with(|s| s.chat.clone())
                    key=|message| message.id.clone()
                    children=move |message| view! { <ChatMessageView message=message on_copy=on_copy /> }
                />
            </div>

            <Show when=move || { chat_len.get() > 0 }>
                <div class="conversation__toolbar">
                    <button class="btn" type="button" on:click=move |_| on_clear_chat.run(())>
                        "Clear Chat"
                    </button>
                </div>
            </Show>

            <form class="conversation__form" on:submit=on_form_submit>
                <textarea
                    class="conversation__input"
                    rows="4"
                    placeholder="Ask a question about your uploaded documents..."
                    prop:value=move || session.with(|s| s.query_input.clone())
                    on:input=move |ev| on_query_change.run(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button class="btn btn--primary conversation__submit" type="submit" disabled=move || !can_submit.get()>
                    {move || {
                        if thinking.get() {
                            view! {
                                <span class="spinner" aria-hidden="true"></span>
                                "Processing..."
                            }
                                .into_any()
                        } else {
                            view! { "Get Answer" }.into_any()
                        }
                    }}
                </button>
            </form>
            <p class=move || format!("status {}", query.get().tone().class())>{move || query.get().label()}</p>
            <Show when=move || query_error.get().is_some()>
                <p class="panel__error">{move || query_error.get().unwrap_or_default()}</p>
            </Show>
        </section>
    }
}
