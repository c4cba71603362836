//! Home page: the application shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the session signal, turns user actions into [`SessionEvent`]s, runs
//! them through the reducer and executes the resulting commands as backend
//! calls. Every completion comes back as another event.
//!
//! DESIGN
//! ======
//! Commands run as independent `spawn_local` tasks; nothing serializes them.
//! Each request takes a cancellation token from the shell's registry, so a
//! newer request of the same kind (or a conversation reset) aborts the older
//! one, and the reducer's sequence check drops whatever still slips through.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::conversation::Conversation;
use crate::components::document_list::DocumentList;
use crate::components::document_manager::DocumentManager;
use crate::components::system_status::SystemStatus;
use crate::config::ApiConfig;
use crate::net::cancel::CancelRegistry;
use crate::state::dialog::{DEFAULT_CANCEL_LABEL, DEFAULT_CONFIRM_LABEL};
use crate::state::request_seq::RequestKind;
use crate::state::session::{Command, SessionEvent, SessionState, reduce};
use crate::util::time::{display_time, new_message_id};

/// Handles the shell's event loop needs. All fields are arena-backed, so the
/// whole thing is `Copy` and can move into any closure or task.
#[derive(Clone, Copy)]
struct Shell {
    session: RwSignal<SessionState>,
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    config: StoredValue<ApiConfig>,
    cancels: StoredValue<CancelRegistry>,
    file_input: NodeRef<leptos::html::Input>,
}

impl Shell {
    /// Apply `event` and execute whatever it asks for.
    fn dispatch(self, event: SessionEvent) {
        let mut commands = Vec::new();
        self.session.update(|state| {
            let (next, issued) = reduce(std::mem::take(state), event);
            *state = next;
            commands = issued;
        });
        for command in commands {
            self.execute(command);
        }
    }

    /// Server render never issues requests; only cancellation applies.
    #[cfg(not(feature = "hydrate"))]
    fn execute(self, command: Command) {
        if let Command::CancelAsk = command {
            self.cancel_ask();
        }
    }

    fn cancel_ask(self) {
        self.cancels.update_value(|registry| registry.cancel(RequestKind::Ask));
    }

    #[cfg(feature = "hydrate")]
    fn token(self, kind: RequestKind) -> crate::net::cancel::CancelToken {
        self.cancels
            .try_update_value(|registry| registry.issue(kind))
            .unwrap_or_else(crate::net::cancel::CancelToken::detached)
    }

    #[cfg(feature = "hydrate")]
    fn execute(self, command: Command) {
        use leptos::task::spawn_local;

        use crate::net::api;
        use crate::net::error::ApiError;

        let config = self.config.get_value();
        match command {
            Command::CheckHealth { seq } => {
                let token = self.token(RequestKind::Health);
                spawn_local(async move {
                    let result = api::get_health(&config, token).await;
                    self.dispatch(SessionEvent::HealthChecked { seq, result });
                });
            }
            Command::Upload { seq } => {
                let token = self.token(RequestKind::Upload);
                let file = self.file_input.get_untracked().and_then(|input| input.files()).and_then(|files| files.get(0));
                spawn_local(async move {
                    let result = match file {
                        Some(file) => api::upload_document(&config, file, token).await,
                        None => Err(ApiError::Network("selected file is no longer available".to_owned())),
                    };
                    let uploaded = result.is_ok();
                    self.dispatch(SessionEvent::UploadFinished { seq, result });
                    if uploaded {
                        if let Some(input) = self.file_input.get_untracked() {
                            input.set_value("");
                        }
                    }
                });
            }
            Command::ClearDocuments { seq } => {
                let token = self.token(RequestKind::Clear);
                spawn_local(async move {
                    let result = api::clear_documents(&config, token).await;
                    self.dispatch(SessionEvent::ClearDocumentsFinished { seq, result });
                });
            }
            Command::Ask { seq, query } => {
                let token = self.token(RequestKind::Ask);
                spawn_local(async move {
                    let result = api::ask(&config, &query, token).await;
                    self.dispatch(SessionEvent::AnswerReceived {
                        seq,
                        id: new_message_id(),
                        timestamp: display_time(),
                        result,
                    });
                });
            }
            Command::CancelAsk => self.cancel_ask(),
        }
    }
}

/// The single page: status, document list, upload controls and chat.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<ApiConfig>();

    let shell = Shell {
        session,
        config: StoredValue::new(config),
        cancels: StoredValue::new(CancelRegistry::default()),
        file_input: NodeRef::new(),
    };

    // Effects only run in the browser, so this fires once after hydration.
    Effect::new(move || untrack(move || shell.dispatch(SessionEvent::HealthCheckRequested)));

    on_cleanup(move || shell.cancels.update_value(CancelRegistry::cancel_all));

    let refresh = Signal::derive(move || session.with(|s| s.documents_refresh));
    let dialog = Memo::new(move |_| session.with(|s| s.dialog.clone()));

    let on_file_change = Callback::new(move |file| shell.dispatch(SessionEvent::FileSelected(file)));
    let on_upload = Callback::new(move |()| shell.dispatch(SessionEvent::UploadSubmitted));
    let on_clear_request = Callback::new(move |()| shell.dispatch(SessionEvent::ClearDocumentsRequested));
    let on_query_change = Callback::new(move |text| shell.dispatch(SessionEvent::QueryEdited(text)));
    let on_submit = Callback::new(move |()| {
        shell.dispatch(SessionEvent::QuestionSubmitted { id: new_message_id(), timestamp: display_time() });
    });
    let on_clear_chat = Callback::new(move |()| shell.dispatch(SessionEvent::ClearChatRequested));
    let on_copy_result = Callback::new(move |copied| shell.dispatch(SessionEvent::CopyFinished { copied }));
    let on_confirm = Callback::new(move |()| shell.dispatch(SessionEvent::DialogConfirmed));
    let on_dismiss = Callback::new(move |()| shell.dispatch(SessionEvent::DialogDismissed));

    view! {
        <main class="home-page">
            <div class="home-page__card">
                <h1 class="home-page__title">"Codebase QA App"</h1>
                <SystemStatus session=session />
                <DocumentList refresh=refresh />
                <DocumentManager
                    session=session
                    file_input=shell.file_input
                    on_file_change=on_file_change
                    on_upload=on_upload
                    on_clear_request=on_clear_request
                />
                <Conversation
                    session=session
                    on_query_change=on_query_change
                    on_submit=on_submit
                    on_clear_chat=on_clear_chat
                    on_copy_result=on_copy_result
                />
            </div>
            <ConfirmDialog
                open=Signal::derive(move || dialog.with(Option::is_some))
                title=Signal::derive(move || dialog.get().map(|d| d.title().to_owned()).unwrap_or_default())
                message=Signal::derive(move || dialog.get().map(|d| d.message().to_owned()).unwrap_or_default())
                confirm_label=Signal::derive(move || {
                    dialog.get().and_then(|d| d.confirm_label()).unwrap_or(DEFAULT_CONFIRM_LABEL).to_owned()
                })
                cancel_label=Signal::derive(move || {
                    dialog.get().and_then(|d| d.cancel_label()).unwrap_or(DEFAULT_CANCEL_LABEL).to_owned()
                })
                destructive=Signal::derive(move || dialog.get().is_some_and(|d| d.is_destructive()))
                on_confirm=on_confirm
                on_cancel=on_dismiss
            />
        </main>
    }
}
