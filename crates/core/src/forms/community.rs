//! "Ask the Community" post form on the discussions page.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{check_rules, Accepted, DraftForm, MAX_LONG_TEXT_LENGTH};
use crate::error::FormError;
use crate::notice::{Notice, TITLE_QUESTION_POSTED};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommunityPostDraft {
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct CommunityPost {
    #[validate(length(min = 1, max = MAX_LONG_TEXT_LENGTH))]
    pub question: String,
}

impl DraftForm for CommunityPostDraft {
    type Submission = CommunityPost;

    fn submit(&mut self) -> Result<Accepted<CommunityPost>, FormError> {
        let question = self.question.trim();
        if question.is_empty() {
            return Err(FormError::EmptyQuestion);
        }

        let submission = CommunityPost {
            question: question.to_string(),
        };
        check_rules(&submission)?;

        self.reset();
        Ok(Accepted {
            notice: Notice::success(
                TITLE_QUESTION_POSTED,
                "Your question has been posted to the community.",
            ),
            submission,
        })
    }

    fn reset(&mut self) {
        self.question.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_post_is_rejected() {
        let mut draft = CommunityPostDraft {
            question: "  \n ".to_string(),
        };
        let err = draft.submit().unwrap_err();
        assert_eq!(err, FormError::EmptyQuestion);
        assert_eq!(err.notice().title, "Empty Question");
        assert_eq!(draft.question, "  \n ");
    }

    #[test]
    fn post_is_trimmed_and_draft_cleared() {
        let mut draft = CommunityPostDraft {
            question: " How long should a take-home take? ".to_string(),
        };
        let accepted = draft.submit().unwrap();
        assert_eq!(accepted.submission.question, "How long should a take-home take?");
        assert_eq!(accepted.notice.title, "Question Posted!");
        assert!(draft.question.is_empty());
    }
}
