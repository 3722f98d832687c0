//! Transient user-facing notices emitted by form actions.

use serde::Serialize;

pub const TITLE_MISSING_INFORMATION: &str = "Missing Information";
pub const TITLE_ADD_TAGS: &str = "Add Tags";
pub const TITLE_INVALID_INFORMATION: &str = "Invalid Information";
pub const TITLE_EMPTY_QUESTION: &str = "Empty Question";
pub const TITLE_FEEDBACK_SUBMITTED: &str = "Feedback Submitted!";
pub const TITLE_QUESTION_SUBMITTED: &str = "Question Submitted!";
pub const TITLE_QUESTION_POSTED: &str = "Question Posted!";

/// Visual weight of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// A title/description pair shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    /// A confirmation notice.
    pub fn success(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: NoticeVariant::Default,
        }
    }

    /// An advisory notice for a rejected action.
    pub fn destructive(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn is_rejection(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}
