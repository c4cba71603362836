//! The single confirmation/notification dialog slot.
//!
//! DESIGN
//! ======
//! Clearing documents, clearing the chat and reporting a clipboard copy all
//! share one dialog. The pending [`ConfirmAction`] decides what it says and
//! what confirming does; only one can be open at a time.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

/// Label used when an action does not name its confirm button.
pub const DEFAULT_CONFIRM_LABEL: &str = "Confirm";
/// Label used when an action does not name its cancel button.
pub const DEFAULT_CANCEL_LABEL: &str = "Cancel";

/// What the open dialog is asking about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Remove every document from the knowledge base.
    ClearDocuments,
    /// Wipe the conversation transcript.
    ClearChat,
    /// Acknowledge the outcome of copying an answer.
    CopyResult { copied: bool },
}

impl ConfirmAction {
    pub fn title(&self) -> &'static str {
        match self {
            Self::ClearDocuments => "Confirm Clear Documents",
            Self::ClearChat => "Confirm Clear Chat",
            Self::CopyResult { copied: true } => "Copied to Clipboard!",
            Self::CopyResult { copied: false } => "Copy Failed",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::ClearDocuments => {
                "Are you absolutely sure you want to remove ALL uploaded documents from the knowledge base? This action cannot be undone."
            }
            Self::ClearChat => "Are you sure you want to clear the entire chat history? This action cannot be undone.",
            Self::CopyResult { copied: true } => "The answer has been successfully copied to your clipboard.",
            Self::CopyResult { copied: false } => "Failed to copy answer. Please try again or copy manually.",
        }
    }

    /// Custom confirm label, if the action has one.
    pub fn confirm_label(&self) -> Option<&'static str> {
        match self {
            Self::ClearDocuments => Some("Yes, Clear All"),
            Self::ClearChat => Some("Yes, Clear Chat"),
            Self::CopyResult { .. } => Some("OK"),
        }
    }

    /// Custom cancel label, if the action has one.
    pub fn cancel_label(&self) -> Option<&'static str> {
        match self {
            Self::ClearDocuments => Some("No, Keep Documents"),
            Self::ClearChat => Some("No, Keep Chat"),
            Self::CopyResult { .. } => None,
        }
    }

    /// Whether confirming destroys data (rendered as a danger button).
    pub fn is_destructive(&self) -> bool {
        matches!(self, Self::ClearDocuments | Self::ClearChat)
    }
}
