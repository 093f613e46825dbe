//! Screen controllers
//!
//! View-models owned by the hosting shell (CLI or TUI). Each is an explicit
//! state container; nothing here is global.

pub mod add_entry;
pub mod summary;

pub use add_entry::AddExpenseForm;
pub use summary::{FetchState, FetchTicket, SummaryController};

/// Outcome category of a user-visible notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A message the shell should surface to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}
