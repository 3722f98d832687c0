//! User feedback form.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{
    check_rules, optional_text, require_present, Accepted, DraftForm, MAX_LONG_TEXT_LENGTH,
    MAX_SHORT_TEXT_LENGTH,
};
use crate::error::FormError;
use crate::notice::{Notice, TITLE_FEEDBACK_SUBMITTED};

/// Highest selectable star rating.
pub const MAX_RATING: u8 = 5;

/// Areas a piece of feedback can be related to.
pub const RELATED_AREAS: &[&str] = &[
    "User Interface",
    "Performance",
    "Content Quality",
    "Navigation",
    "Mobile Experience",
    "Accessibility",
    "Documentation",
    "Pricing",
];

/// Kind of feedback being given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackType {
    General,
    Bug,
    Feature,
    Interview,
    Website,
}

impl FeedbackType {
    pub const ALL: [FeedbackType; 5] = [
        FeedbackType::General,
        FeedbackType::Bug,
        FeedbackType::Feature,
        FeedbackType::Interview,
        FeedbackType::Website,
    ];

    pub fn id(self) -> &'static str {
        match self {
            FeedbackType::General => "general",
            FeedbackType::Bug => "bug",
            FeedbackType::Feature => "feature",
            FeedbackType::Interview => "interview",
            FeedbackType::Website => "website",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeedbackType::General => "General Feedback",
            FeedbackType::Bug => "Bug Report",
            FeedbackType::Feature => "Feature Request",
            FeedbackType::Interview => "Interview Experience",
            FeedbackType::Website => "Website Usability",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id.trim())
    }
}

/// Feedback form fields as the user is editing them.
///
/// `rating` is 0 while unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackDraft {
    pub feedback_type: String,
    pub rating: u8,
    pub subject: String,
    pub description: String,
    pub areas: Vec<String>,
    pub email: String,
}

impl FeedbackDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the star rating. Only 1 through [`MAX_RATING`] are accepted.
    pub fn set_rating(&mut self, stars: u8) -> Result<(), FormError> {
        if (1..=MAX_RATING).contains(&stars) {
            self.rating = stars;
            Ok(())
        } else {
            Err(FormError::InvalidInformation(format!(
                "Rating must be between 1 and {MAX_RATING}."
            )))
        }
    }

    /// Check or uncheck a related area. Checking an already-checked area
    /// changes nothing.
    pub fn toggle_area(&mut self, area: &str, checked: bool) {
        if checked {
            if !self.areas.iter().any(|a| a == area) {
                self.areas.push(area.to_string());
            }
        } else {
            self.areas.retain(|a| a != area);
        }
    }
}

/// Areas in first-seen order with repeats dropped.
fn unique_areas(areas: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(areas.len());
    for area in areas {
        if !unique.contains(area) {
            unique.push(area.clone());
        }
    }
    unique
}

/// Validated feedback captured on a successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct FeedbackSubmission {
    pub feedback_type: FeedbackType,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<u8>,
    #[validate(length(min = 1, max = MAX_SHORT_TEXT_LENGTH))]
    pub subject: String,
    #[validate(length(min = 1, max = MAX_LONG_TEXT_LENGTH))]
    pub description: String,
    pub areas: Vec<String>,
    #[validate(email)]
    pub email: Option<String>,
}

impl DraftForm for FeedbackDraft {
    type Submission = FeedbackSubmission;

    fn submit(&mut self) -> Result<Accepted<FeedbackSubmission>, FormError> {
        require_present(&[
            ("feedback_type", &self.feedback_type),
            ("subject", &self.subject),
            ("description", &self.description),
        ])?;

        let feedback_type = FeedbackType::parse(&self.feedback_type).ok_or_else(|| {
            FormError::InvalidInformation(format!(
                "Unknown feedback type '{}'.",
                self.feedback_type.trim()
            ))
        })?;

        if let Some(area) = self.areas.iter().find(|a| !RELATED_AREAS.contains(&a.as_str())) {
            return Err(FormError::InvalidInformation(format!(
                "Unknown related area '{area}'."
            )));
        }

        let submission = FeedbackSubmission {
            feedback_type,
            rating: (self.rating != 0).then_some(self.rating),
            subject: self.subject.trim().to_string(),
            description: self.description.trim().to_string(),
            areas: unique_areas(&self.areas),
            email: optional_text(&self.email),
        };
        check_rules(&submission)?;

        self.reset();
        Ok(Accepted {
            notice: Notice::success(
                TITLE_FEEDBACK_SUBMITTED,
                "Thank you for your feedback. We'll review it and get back to you soon.",
            ),
            submission,
        })
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
