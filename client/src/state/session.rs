//! Page-wide session state and its reducer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The home page shell owns one `RwSignal<SessionState>`. Components never
//! mutate it directly: they dispatch a [`SessionEvent`], [`reduce`] produces
//! the next state plus any [`Command`]s (requests to issue), and network
//! tasks feed their results back in as completion events.
//!
//! DESIGN
//! ======
//! Health, upload, clear and query progress are tracked independently; any
//! of them may be in flight at once. Completions carry the sequence number
//! they were issued with, and the reducer drops results that a newer request
//! of the same kind has already superseded.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::chat::ChatMessage;
use super::dialog::ConfirmAction;
use super::request_seq::{RequestSlot, RequestSlots};
use crate::net::error::{ApiError, Endpoint, ValidationError};
use crate::net::types::{AskResponse, HealthResponse, MessageResponse, Source};

/// Visual tone for a status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Neutral,
    Progress,
    Success,
    Failure,
}

impl StatusTone {
    /// CSS modifier class for this tone.
    pub fn class(self) -> &'static str {
        match self {
            Self::Neutral => "status--neutral",
            Self::Progress => "status--progress",
            Self::Success => "status--success",
            Self::Failure => "status--failure",
        }
    }
}

/// Backend reachability as seen by the startup health check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HealthStatus {
    #[default]
    Loading,
    Ok,
    Error,
}

impl HealthStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Loading => "Loading backend status...",
            Self::Ok => "ok",
            Self::Error => "Error",
        }
    }

    pub fn tone(self) -> StatusTone {
        match self {
            Self::Loading => StatusTone::Progress,
            Self::Ok => StatusTone::Success,
            Self::Error => StatusTone::Failure,
        }
    }
}

/// Progress of the most recent document upload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Success { message: String },
    Failed,
}

impl UploadStatus {
    pub fn label(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::Uploading => "Uploading and processing...".to_owned(),
            Self::Success { message } => format!("Upload successful! {message}"),
            Self::Failed => "Failed".to_owned(),
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            Self::Idle => StatusTone::Neutral,
            Self::Uploading => StatusTone::Progress,
            Self::Success { .. } => StatusTone::Success,
            Self::Failed => StatusTone::Failure,
        }
    }
}

/// Progress of the most recent clear-all-documents request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ClearStatus {
    #[default]
    Idle,
    Clearing,
    Success { message: String },
    Failed,
}

impl ClearStatus {
    pub fn label(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::Clearing => "Clearing all documents...".to_owned(),
            Self::Success { message } => format!("Success: {message}"),
            Self::Failed => "Failed".to_owned(),
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            Self::Idle => StatusTone::Neutral,
            Self::Clearing => StatusTone::Progress,
            Self::Success { .. } => StatusTone::Success,
            Self::Failed => StatusTone::Failure,
        }
    }
}

/// Progress of the most recent question.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QueryStatus {
    #[default]
    Idle,
    Thinking,
    Ready,
    Failed,
}

impl QueryStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Thinking => "Thinking...",
            Self::Ready => "Answer ready!",
            Self::Failed => "Failed",
        }
    }

    pub fn tone(self) -> StatusTone {
        match self {
            Self::Idle => StatusTone::Neutral,
            Self::Thinking => StatusTone::Progress,
            Self::Ready => StatusTone::Success,
            Self::Failed => StatusTone::Failure,
        }
    }
}

/// Display metadata for the file chosen in the upload picker. The browser
/// file handle itself stays in the `<input>` element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

impl SelectedFile {
    /// Human-readable size, e.g. `512 B`, `2.0 KB`, `3.4 MB`.
    #[allow(clippy::cast_precision_loss)]
    pub fn size_label(&self) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        match self.size {
            bytes if bytes < KB => format!("{bytes} B"),
            bytes if bytes < MB => format!("{:.1} KB", bytes as f64 / KB as f64),
            bytes => format!("{:.1} MB", bytes as f64 / MB as f64),
        }
    }
}

/// Everything the shell renders, in one record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub health: HealthStatus,
    /// Last successful health payload.
    pub backend: Option<HealthResponse>,
    pub backend_error: Option<String>,

    pub selected_file: Option<SelectedFile>,
    pub upload: UploadStatus,
    pub upload_error: Option<String>,

    pub clear: ClearStatus,
    pub clear_error: Option<String>,

    /// Text currently in the question box.
    pub query_input: String,
    /// Most recent answer and its sources.
    pub answer: String,
    pub sources: Vec<Source>,
    pub query: QueryStatus,
    pub query_error: Option<String>,

    /// Transcript in display order. Append-only until cleared.
    pub chat: Vec<ChatMessage>,
    /// Bumped whenever the document list should re-fetch. Never decreases.
    pub documents_refresh: u64,
    /// The confirmation dialog currently open, if any.
    pub dialog: Option<ConfirmAction>,
    pub requests: RequestSlots,
}

impl SessionState {
    /// A file is chosen and no upload is running.
    pub fn can_upload(&self) -> bool {
        self.selected_file.is_some() && self.upload != UploadStatus::Uploading
    }

    /// The question box has text and no question is being answered.
    pub fn can_submit_question(&self) -> bool {
        !self.query_input.trim().is_empty() && !self.is_thinking()
    }

    pub fn is_thinking(&self) -> bool {
        self.query == QueryStatus::Thinking
    }

    pub fn is_clearing(&self) -> bool {
        self.clear == ClearStatus::Clearing
    }

    /// Drop transcript, answer and query progress. An answer still in
    /// flight is abandoned so it cannot land in the fresh transcript.
    fn reset_conversation(&mut self, commands: &mut Vec<Command>) {
        self.chat.clear();
        self.query_input.clear();
        self.answer.clear();
        self.sources.clear();
        self.query = QueryStatus::Idle;
        self.query_error = None;
        if self.requests.ask.is_pending() {
            self.requests.ask.invalidate();
            commands.push(Command::CancelAsk);
        }
    }
}

/// Something that happened: a user action or a request completing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// Page mounted; check the backend.
    HealthCheckRequested,
    HealthChecked { seq: u64, result: Result<HealthResponse, ApiError> },

    /// The upload picker changed. `None` when the selection was cleared.
    FileSelected(Option<SelectedFile>),
    UploadSubmitted,
    UploadFinished { seq: u64, result: Result<MessageResponse, ApiError> },

    /// "Clear All Documents" pressed; asks for confirmation first.
    ClearDocumentsRequested,
    ClearDocumentsFinished { seq: u64, result: Result<MessageResponse, ApiError> },

    /// "Clear Chat" pressed; asks for confirmation first.
    ClearChatRequested,
    /// Copying an answer to the clipboard finished.
    CopyFinished { copied: bool },
    DialogConfirmed,
    DialogDismissed,

    QueryEdited(String),
    /// Question submitted. `id` and `timestamp` label the user's transcript entry.
    QuestionSubmitted { id: String, timestamp: String },
    AnswerReceived { seq: u64, id: String, timestamp: String, result: Result<AskResponse, ApiError> },
}

/// Side effect requested by a transition. The shell executes these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    CheckHealth { seq: u64 },
    Upload { seq: u64 },
    ClearDocuments { seq: u64 },
    Ask { seq: u64, query: String },
    /// Abort the in-flight question; its slot has already been invalidated.
    CancelAsk,
}

/// Apply `event` to `state`, returning the next state and the requests to issue.
pub fn reduce(mut state: SessionState, event: SessionEvent) -> (SessionState, Vec<Command>) {
    let mut commands = Vec::new();

    match event {
        SessionEvent::HealthCheckRequested => {
            state.health = HealthStatus::Loading;
            state.backend_error = None;
            let seq = state.requests.health.begin();
            commands.push(Command::CheckHealth { seq });
        }
        SessionEvent::HealthChecked { seq, result } => {
            if !accept(&mut state.requests.health, seq, &result) {
                return (state, commands);
            }
            match result {
                Ok(health) => {
                    state.health = HealthStatus::Ok;
                    state.backend = Some(health);
                    state.backend_error = None;
                    state.documents_refresh += 1;
                }
                Err(err) => {
                    state.health = HealthStatus::Error;
                    state.backend = None;
                    state.backend_error = Some(format!(
                        "{}. Make sure the backend server is running.",
                        Endpoint::Health.failure_message(&err)
                    ));
                }
            }
        }

        SessionEvent::FileSelected(file) => {
            if file.is_some() {
                state.upload = UploadStatus::Idle;
                state.upload_error = None;
            }
            state.selected_file = file;
        }
        SessionEvent::UploadSubmitted => {
            if state.upload == UploadStatus::Uploading {
                return (state, commands);
            }
            if state.selected_file.is_none() {
                state.upload_error = Some(ValidationError::NoFileSelected.to_string());
                return (state, commands);
            }
            state.upload = UploadStatus::Uploading;
            state.upload_error = None;
            let seq = state.requests.upload.begin();
            commands.push(Command::Upload { seq });
        }
        SessionEvent::UploadFinished { seq, result } => {
            if !accept(&mut state.requests.upload, seq, &result) {
                return (state, commands);
            }
            match result {
                Ok(resp) => {
                    state.upload = UploadStatus::Success { message: resp.message };
                    state.selected_file = None;
                    state.reset_conversation(&mut commands);
                    state.documents_refresh += 1;
                }
                Err(err) => {
                    state.upload_error = Some(Endpoint::UploadDocument.failure_message(&err));
                    state.upload = UploadStatus::Failed;
                }
            }
        }

        SessionEvent::ClearDocumentsRequested => {
            if !state.is_clearing() {
                state.dialog = Some(ConfirmAction::ClearDocuments);
            }
        }
        SessionEvent::ClearDocumentsFinished { seq, result } => {
            if !accept(&mut state.requests.clear, seq, &result) {
                return (state, commands);
            }
            match result {
                Ok(resp) => {
                    state.clear = ClearStatus::Success { message: resp.message };
                    state.documents_refresh += 1;
                }
                Err(err) => {
                    state.clear_error = Some(Endpoint::ClearDocuments.failure_message(&err));
                    state.clear = ClearStatus::Failed;
                }
            }
        }

        SessionEvent::ClearChatRequested => {
            state.dialog = Some(ConfirmAction::ClearChat);
        }
        SessionEvent::CopyFinished { copied } => {
            state.dialog = Some(ConfirmAction::CopyResult { copied });
        }
        SessionEvent::DialogDismissed => {
            state.dialog = None;
        }
        SessionEvent::DialogConfirmed => match state.dialog.take() {
            Some(ConfirmAction::ClearDocuments) => {
                state.clear = ClearStatus::Clearing;
                state.clear_error = None;
                state.reset_conversation(&mut commands);
                let seq = state.requests.clear.begin();
                commands.push(Command::ClearDocuments { seq });
            }
            Some(ConfirmAction::ClearChat) => {
                state.reset_conversation(&mut commands);
            }
            Some(ConfirmAction::CopyResult { .. }) | None => {}
        },

        SessionEvent::QueryEdited(text) => {
            state.query_input = text;
        }
        SessionEvent::QuestionSubmitted { id, timestamp } => {
            if state.is_thinking() {
                return (state, commands);
            }
            let question = state.query_input.trim().to_owned();
            if question.is_empty() {
                state.query_error = Some(ValidationError::EmptyQuestion.to_string());
                return (state, commands);
            }
            state.chat.push(ChatMessage::user(id, question.clone(), timestamp));
            state.query_input.clear();
            state.query = QueryStatus::Thinking;
            state.query_error = None;
            state.answer.clear();
            state.sources.clear();
            let seq = state.requests.ask.begin();
            commands.push(Command::Ask { seq, query: question });
        }
        SessionEvent::AnswerReceived { seq, id, timestamp, result } => {
            if !accept(&mut state.requests.ask, seq, &result) {
                return (state, commands);
            }
            match result {
                Ok(resp) => {
                    state.answer.clone_from(&resp.answer);
                    state.sources.clone_from(&resp.sources);
                    state.query = QueryStatus::Ready;
                    state.chat.push(ChatMessage::answer(id, resp, timestamp));
                }
                Err(err) => {
                    state.query_error = Some(Endpoint::Ask.failure_message(&err));
                    state.query = QueryStatus::Failed;
                    state.chat.push(ChatMessage::answer_failed(id, &err.to_string(), timestamp));
                }
            }
        }
    }

    (state, commands)
}

/// Whether a completion should be applied: not cancelled and not stale.
fn accept<T>(slot: &mut RequestSlot, seq: u64, result: &Result<T, ApiError>) -> bool {
    if matches!(result, Err(ApiError::Cancelled)) {
        return false;
    }
    slot.complete(seq)
}
