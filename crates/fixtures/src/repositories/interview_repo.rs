//! Past interview history and dashboard analytics.

use interviewer_core::stats::{accuracy_percent, average_score, score_band};
use interviewer_core::types::RecordId;

use crate::models::interview::{
    InterviewEntry, InterviewRecord, InterviewSummary, QuestionAnalytics,
};
use crate::FixtureSource;

/// Number of interviews shown under "Recent Interviews" on the dashboard.
pub const RECENT_INTERVIEW_COUNT: usize = 3;

pub struct InterviewRepo;

impl InterviewRepo {
    /// All interviews in fixture order, each with its score band.
    pub fn list(source: &dyn FixtureSource) -> Vec<InterviewEntry> {
        source.interviews().iter().map(entry).collect()
    }

    /// The `count` most recent interviews, newest first.
    pub fn recent(source: &dyn FixtureSource, count: usize) -> Vec<InterviewEntry> {
        let mut records: Vec<&InterviewRecord> = source.interviews().iter().collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        records.into_iter().take(count).map(entry).collect()
    }

    pub fn summary(source: &dyn FixtureSource) -> InterviewSummary {
        let interviews = source.interviews();
        let total_questions = interviews.iter().map(|i| i.total_questions).sum();
        let correct_answers = interviews.iter().map(|i| i.correct_answers).sum();

        InterviewSummary {
            total_interviews: interviews.len(),
            average_score: average_score(interviews.iter().map(|i| i.score)),
            total_questions,
            correct_answers,
            accuracy_percent: accuracy_percent(correct_answers, total_questions),
            total_time: source.interview_total_time().to_string(),
        }
    }

    pub fn find_by_id(source: &dyn FixtureSource, id: RecordId) -> Option<&InterviewRecord> {
        source.interviews().iter().find(|i| i.id == id)
    }

    /// Per-question breakdown for an interview. `None` if the interview does
    /// not exist.
    ///
    /// The fixtures carry a single breakdown, shown for every interview.
    pub fn analytics_for(
        source: &dyn FixtureSource,
        id: RecordId,
    ) -> Option<&[QuestionAnalytics]> {
        Self::find_by_id(source, id).map(|_| source.question_analytics())
    }
}

fn entry(record: &InterviewRecord) -> InterviewEntry {
    InterviewEntry {
        band: score_band(record.score),
        interview: record.clone(),
    }
}
