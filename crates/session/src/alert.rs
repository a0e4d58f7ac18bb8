//! Submission outcome banners.

use serde::{Deserialize, Serialize};

use kasbuku_core::DomainError;

/// What the page should flash after a submission.
///
/// Banners are transient (the UI hides them after a short delay); a later
/// alert simply supersedes an earlier one, so this is fire-and-forget
/// from the handler's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Alert {
    Success,
    Error { message: String },
}

impl Alert {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Alert::Success)
    }
}

impl From<DomainError> for Alert {
    fn from(err: DomainError) -> Self {
        Alert::error(err.to_string())
    }
}
