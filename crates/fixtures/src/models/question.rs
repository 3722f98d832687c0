//! Question bank records.

use interviewer_core::catalog::Filterable;
use interviewer_core::types::{Difficulty, RecordId};
use serde::Serialize;

/// A question in the question bank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionRecord {
    pub id: RecordId,
    pub title: String,
    pub category: String,
    pub subtopic: String,
    pub difficulty: Difficulty,
    pub views: u32,
    pub rating: f32,
    pub time_to_solve: String,
    pub tags: Vec<String>,
}

impl Filterable for QuestionRecord {
    fn category(&self) -> &str {
        &self.category
    }

    fn subtopic(&self) -> Option<&str> {
        Some(&self.subtopic)
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// One page of a filtered question listing.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionPage {
    /// Number of questions matching the filter, before pagination.
    pub total: usize,
    pub items: Vec<QuestionRecord>,
}
