//! One transcript entry with its sources and copy action.

use leptos::prelude::*;

use crate::net::types::Source;
use crate::state::chat::ChatMessage;
use crate::util::markdown::render_markdown_html;

/// Renders a single chat message. Assistant entries get a copy button and,
/// when the answer cited anything, a collapsible source list.
#[component]
pub fn ChatMessageView(message: ChatMessage, on_copy: Callback<String>) -> impl IntoView {
    let is_assistant = message.is_assistant();
    let sources = message.cited_sources().to_vec();
    let chunk_count = message.retrieved_chunk_count;
    let copy_text = message.text.clone();

    let body = if is_assistant {
        let rendered = render_markdown_html(&message.text);
        view! { <div class="chat-message__markdown" inner_html=rendered></div> }.into_any()
    } else {
        view! { <p class="chat-message__text">{message.text}</p> }.into_any()
    };

    view! {
        <div
            class="chat-message"
            class:chat-message--user=!is_assistant
            class:chat-message--assistant=is_assistant
        >
            <div class="chat-message__header">
                <span class="chat-message__role">{message.role.label()}</span>
                <span class="chat-message__time">{message.timestamp}</span>
            </div>
            {body}
            {is_assistant
                .then(|| {
                    view! {
                        <button
                            class="btn btn--small chat-message__copy"
                            type="button"
                            title="Copy answer"
                            on:click=move |_| on_copy.run(copy_text.clone())
                        >
                            "Copy"
                        </button>
                    }
                })}
            {(!sources.is_empty()).then(|| view! { <SourceList sources=sources chunk_count=chunk_count /> })}
        </div>
    }
}

#[component]
fn SourceList(sources: Vec<Source>, chunk_count: Option<u32>) -> impl IntoView {
    let summary = match chunk_count {
        Some(count) => format!("Sources ({}) from {count} retrieved chunks", sources.len()),
        None => format!("Sources ({})", sources.len()),
    };

    view! {
        <details class="chat-message__sources">
            <summary>{summary}</summary>
            <ul class="source-list">
                {sources
                    .into_iter()
                    .map(|src| {
                        view! {
                            <li class="source-list__item">
                                <strong>"Source: "</strong>
                                {src.source.clone()}
                                " ("
                                {src.location_label()}
                                ")"
                                <details class="source-list__content">
                                    <summary>"Show Content"</summary>
                                    <pre>{src.content}</pre>
                                </details>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </details>
    }
}
