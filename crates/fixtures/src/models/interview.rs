//! Past interview records and dashboard analytics.

use interviewer_core::stats::ScoreBand;
use interviewer_core::types::{Date, Difficulty, RecordId};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    Completed,
    InProgress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterviewRecord {
    pub id: RecordId,
    pub title: String,
    pub date: Date,
    pub duration: String,
    /// Overall score, 0 to 100.
    pub score: u8,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub difficulty: Difficulty,
    pub category: String,
    pub status: InterviewStatus,
}

/// An interview with its score band resolved for display.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewEntry {
    pub band: ScoreBand,
    #[serde(flatten)]
    pub interview: InterviewRecord,
}

/// Per-question result within an interview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionAnalytics {
    pub id: String,
    pub question: String,
    pub difficulty: Difficulty,
    pub score: u8,
    pub time: String,
}

/// Aggregates over the interview history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterviewSummary {
    pub total_interviews: usize,
    pub average_score: Option<u32>,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub accuracy_percent: u32,
    pub total_time: String,
}
