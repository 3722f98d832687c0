//! Draft forms: presence validation, confirmation notices, and reset on
//! success.
//!
//! A draft is plain data owned by whoever is editing it. Submitting either
//! rejects with a [`FormError`] and leaves the draft untouched, or accepts,
//! returns the captured [`Accepted`] value and resets the draft to empty.

pub mod community;
pub mod feedback;
pub mod suggestion;

use serde::Serialize;
use validator::{Validate, ValidationErrors};

use crate::error::FormError;
use crate::notice::Notice;

/// Maximum length for long free-text fields (characters).
pub const MAX_LONG_TEXT_LENGTH: u64 = 10_000;

/// Maximum length for short free-text fields such as a subject line.
pub const MAX_SHORT_TEXT_LENGTH: u64 = 200;

/// The outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Accepted<T> {
    pub notice: Notice,
    pub submission: T,
}

/// A form draft that can be submitted.
pub trait DraftForm {
    /// The validated value captured on success.
    type Submission;

    /// Validate and, on success, reset the draft.
    fn submit(&mut self) -> Result<Accepted<Self::Submission>, FormError>;

    /// Return every field to its initial empty state.
    fn reset(&mut self);
}

/// Check that every `(field, value)` pair has a non-blank value.
pub(crate) fn require_present(fields: &[(&'static str, &str)]) -> Result<(), FormError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(FormError::MissingInformation { fields: missing })
    }
}

/// Run `validator` rules and fold failures into a single form error.
pub(crate) fn check_rules<T: Validate>(value: &T) -> Result<(), FormError> {
    value.validate().map_err(describe_validation_errors)
}

fn describe_validation_errors(errors: ValidationErrors) -> FormError {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|k| k.to_string())
        .collect();
    fields.sort_unstable();
    FormError::InvalidInformation(format!("Please check: {}.", fields.join(", ")))
}

/// Trimmed value, or `None` when blank.
pub(crate) fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
