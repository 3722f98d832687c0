use crate::notice::{
    Notice, TITLE_ADD_TAGS, TITLE_EMPTY_QUESTION, TITLE_INVALID_INFORMATION,
    TITLE_MISSING_INFORMATION,
};
use crate::types::RecordId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: RecordId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Why a form submission was turned away.
///
/// Every variant leaves the draft untouched so the user can correct it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// One or more required fields are empty or unset.
    #[error("Missing required fields: {}", .fields.join(", "))]
    MissingInformation { fields: Vec<&'static str> },

    /// A question suggestion was submitted without any tags.
    #[error("At least one tag is required")]
    MissingTags,

    /// A community post was submitted with blank text.
    #[error("Question text is empty")]
    EmptyQuestion,

    /// A field is present but malformed (bad email, too long, unknown option).
    #[error("Invalid field value: {0}")]
    InvalidInformation(String),
}

impl FormError {
    /// The notice shown to the user for this rejection.
    pub fn notice(&self) -> Notice {
        match self {
            FormError::MissingInformation { .. } => Notice::destructive(
                TITLE_MISSING_INFORMATION,
                "Please fill in all required fields.",
            ),
            FormError::MissingTags => Notice::destructive(
                TITLE_ADD_TAGS,
                "Please add at least one tag to help categorize your question.",
            ),
            FormError::EmptyQuestion => Notice::destructive(
                TITLE_EMPTY_QUESTION,
                "Please write your question before posting.",
            ),
            FormError::InvalidInformation(msg) => {
                Notice::destructive(TITLE_INVALID_INFORMATION, msg.clone())
            }
        }
    }
}
