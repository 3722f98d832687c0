//! Question suggestion form.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{check_rules, optional_text, require_present, Accepted, DraftForm, MAX_LONG_TEXT_LENGTH};
use crate::error::FormError;
use crate::notice::{Notice, TITLE_QUESTION_SUBMITTED};
use crate::tags::TagEditor;
use crate::types::Difficulty;

/// Categories a suggested question can be filed under.
pub const SUGGESTION_CATEGORIES: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "React",
    "Node.js",
    "System Design",
    "Data Structures",
    "Algorithms",
    "Behavioral",
    "Database",
    "DevOps",
    "Machine Learning",
    "Cybersecurity",
    "Product Management",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    Technical,
    Behavioral,
    SystemDesign,
    CaseStudy,
}

impl QuestionType {
    pub const ALL: [QuestionType; 4] = [
        QuestionType::Technical,
        QuestionType::Behavioral,
        QuestionType::SystemDesign,
        QuestionType::CaseStudy,
    ];

    pub fn id(self) -> &'static str {
        match self {
            QuestionType::Technical => "technical",
            QuestionType::Behavioral => "behavioral",
            QuestionType::SystemDesign => "system-design",
            QuestionType::CaseStudy => "case-study",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuestionType::Technical => "Technical Question",
            QuestionType::Behavioral => "Behavioral Question",
            QuestionType::SystemDesign => "System Design",
            QuestionType::CaseStudy => "Case Study",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            QuestionType::Technical => "Coding or technical concept question",
            QuestionType::Behavioral => "Soft skills and experience-based question",
            QuestionType::SystemDesign => "Architecture and design question",
            QuestionType::CaseStudy => "Problem-solving scenario question",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id.trim())
    }
}

/// Question suggestion fields as the user is editing them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionDraft {
    pub question_type: String,
    pub question: String,
    pub category: String,
    pub difficulty: String,
    pub expected_time: String,
    pub tags: TagEditor,
    pub sample_answer: String,
    pub hints: String,
}

impl QuestionDraft {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Validated question suggestion captured on a successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct QuestionSubmission {
    pub question_type: QuestionType,
    #[validate(length(min = 1, max = MAX_LONG_TEXT_LENGTH))]
    pub question: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub expected_time: Option<String>,
    pub tags: Vec<String>,
    #[validate(length(max = MAX_LONG_TEXT_LENGTH))]
    pub sample_answer: Option<String>,
    #[validate(length(max = MAX_LONG_TEXT_LENGTH))]
    pub hints: Option<String>,
}

impl DraftForm for QuestionDraft {
    type Submission = QuestionSubmission;

    fn submit(&mut self) -> Result<Accepted<QuestionSubmission>, FormError> {
        require_present(&[
            ("question", &self.question),
            ("category", &self.category),
            ("difficulty", &self.difficulty),
            ("question_type", &self.question_type),
        ])?;

        if self.tags.tags.is_empty() {
            return Err(FormError::MissingTags);
        }

        let question_type = QuestionType::parse(&self.question_type).ok_or_else(|| {
            FormError::InvalidInformation(format!(
                "Unknown question type '{}'.",
                self.question_type.trim()
            ))
        })?;
        let difficulty = Difficulty::parse(&self.difficulty).ok_or_else(|| {
            FormError::InvalidInformation(format!(
                "Unknown difficulty '{}'.",
                self.difficulty.trim()
            ))
        })?;
        let category = self.category.trim();
        if !SUGGESTION_CATEGORIES.contains(&category) {
            return Err(FormError::InvalidInformation(format!(
                "Unknown category '{category}'."
            )));
        }

        let submission = QuestionSubmission {
            question_type,
            question: self.question.trim().to_string(),
            category: category.to_string(),
            difficulty,
            expected_time: optional_text(&self.expected_time),
            tags: self.tags.tags.as_slice().to_vec(),
            sample_answer: optional_text(&self.sample_answer),
            hints: optional_text(&self.hints),
        };
        check_rules(&submission)?;

        self.reset();
        Ok(Accepted {
            notice: Notice::success(
                TITLE_QUESTION_SUBMITTED,
                "Thank you for contributing to our question bank. Your question will be reviewed and added soon.",
            ),
            submission,
        })
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn filled_without_tags() -> QuestionDraft {
        QuestionDraft {
            question_type: "technical".to_string(),
            question: "How does a hash map resolve collisions?".to_string(),
            category: "Data Structures".to_string(),
            difficulty: "medium".to_string(),
            expected_time: "15 min".to_string(),
            ..QuestionDraft::default()
        }
    }

    #[test]
    fn missing_scalars_reported_before_tags() {
        let mut draft = QuestionDraft {
            category: String::new(),
            ..filled_without_tags()
        };
        let err = draft.submit().unwrap_err();
        assert_matches!(&err, FormError::MissingInformation { fields } if fields == &vec!["category"]);
        assert_eq!(err.notice().title, "Missing Information");
    }

    #[test]
    fn zero_tags_rejected_then_one_tag_accepted() {
        let mut draft = filled_without_tags();
        let before = draft.clone();

        let err = draft.submit().unwrap_err();
        assert_eq!(err, FormError::MissingTags);
        assert_eq!(err.notice().title, "Add Tags");
        assert_eq!(draft, before);

        draft.tags.set_pending("Hashing");
        assert!(draft.tags.handle_key("Enter"));

        let accepted = draft.submit().unwrap();
        assert_eq!(accepted.notice.title, "Question Submitted!");
        assert_eq!(accepted.submission.tags, vec!["hashing"]);
        assert_eq!(accepted.submission.difficulty, Difficulty::Medium);
        assert_eq!(accepted.submission.question_type, QuestionType::Technical);

        assert_eq!(draft, QuestionDraft::default());
        assert!(draft.tags.tags.is_empty());
    }

    #[test]
    fn unknown_category_is_invalid() {
        let mut draft = filled_without_tags();
        draft.category = "Cooking".to_string();
        draft.tags.set_pending("food");
        draft.tags.confirm();
        assert_matches!(draft.submit(), Err(FormError::InvalidInformation(_)));
        assert_eq!(draft.category, "Cooking");
    }

    #[test]
    fn optional_fields_blank_become_none() {
        let mut draft = filled_without_tags();
        draft.expected_time = " ".to_string();
        draft.tags.set_pending("maps");
        draft.tags.confirm();
        let accepted = draft.submit().unwrap();
        assert_eq!(accepted.submission.expected_time, None);
        assert_eq!(accepted.submission.hints, None);
    }

    #[test]
    fn question_type_ids_round_trip() {
        for t in QuestionType::ALL {
            assert_eq!(QuestionType::parse(t.id()), Some(t));
        }
        assert_eq!(
            serde_json::to_value(QuestionType::SystemDesign).unwrap(),
            serde_json::json!("system-design")
        );
    }
}
