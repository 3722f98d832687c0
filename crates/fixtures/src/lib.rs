//! Read-only fixture data behind every catalog view.
//!
//! Handlers never reach the data directly. They go through a
//! [`FixtureSource`], so a test can inject its own records while the server
//! runs on [`StaticFixtures`].

use std::collections::HashSet;

use interviewer_core::catalog::CategoryFacet;
use interviewer_core::tags::normalize_tag;
use interviewer_core::types::RecordId;

use crate::models::content::{DashboardSummary, HomeContent, PreparationContent};
use crate::models::discussion::{CommunityStats, DiscussionRecord};
use crate::models::interview::{InterviewRecord, QuestionAnalytics};
use crate::models::question::QuestionRecord;
use crate::models::trending::TrendingQuestion;

pub mod models;
pub mod repositories;
mod seed;

pub use seed::DISCUSSION_CATEGORIES;

/// Supplies the records and static content shown by the views.
pub trait FixtureSource: Send + Sync {
    fn questions(&self) -> &[QuestionRecord];
    fn question_facets(&self) -> &[CategoryFacet];
    fn trending(&self) -> &[TrendingQuestion];
    fn trending_facets(&self) -> &[CategoryFacet];
    fn discussions(&self) -> &[DiscussionRecord];
    fn discussion_facets(&self) -> &[CategoryFacet];
    fn community_stats(&self) -> &CommunityStats;
    fn interviews(&self) -> &[InterviewRecord];
    fn question_analytics(&self) -> &[QuestionAnalytics];
    /// Total practice time across the interview history, preformatted.
    fn interview_total_time(&self) -> &str;
    fn dashboard_summary(&self) -> &DashboardSummary;
    fn home(&self) -> &HomeContent;
    fn preparation(&self) -> &PreparationContent;
}

/// The built-in fixture set, constructed once at startup.
#[derive(Debug, Clone)]
pub struct StaticFixtures {
    questions: Vec<QuestionRecord>,
    question_facets: Vec<CategoryFacet>,
    trending: Vec<TrendingQuestion>,
    trending_facets: Vec<CategoryFacet>,
    discussions: Vec<DiscussionRecord>,
    discussion_facets: Vec<CategoryFacet>,
    community_stats: CommunityStats,
    interviews: Vec<InterviewRecord>,
    question_analytics: Vec<QuestionAnalytics>,
    interview_total_time: String,
    dashboard_summary: DashboardSummary,
    home: HomeContent,
    preparation: PreparationContent,
}

impl StaticFixtures {
    pub fn new() -> Self {
        let discussions = seed::discussions();
        let discussion_facets = seed::discussion_facets(&discussions);

        Self {
            questions: seed::questions(),
            question_facets: seed::question_facets(),
            trending: seed::trending(),
            trending_facets: seed::trending_facets(),
            discussions,
            discussion_facets,
            community_stats: seed::community_stats(),
            interviews: seed::interviews(),
            question_analytics: seed::question_analytics(),
            interview_total_time: "4.2h".to_string(),
            dashboard_summary: seed::dashboard_summary(),
            home: seed::home(),
            preparation: seed::preparation(),
        }
    }
}

impl Default for StaticFixtures {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureSource for StaticFixtures {
    fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    fn question_facets(&self) -> &[CategoryFacet] {
        &self.question_facets
    }

    fn trending(&self) -> &[TrendingQuestion] {
        &self.trending
    }

    fn trending_facets(&self) -> &[CategoryFacet] {
        &self.trending_facets
    }

    fn discussions(&self) -> &[DiscussionRecord] {
        &self.discussions
    }

    fn discussion_facets(&self) -> &[CategoryFacet] {
        &self.discussion_facets
    }

    fn community_stats(&self) -> &CommunityStats {
        &self.community_stats
    }

    fn interviews(&self) -> &[InterviewRecord] {
        &self.interviews
    }

    fn question_analytics(&self) -> &[QuestionAnalytics] {
        &self.question_analytics
    }

    fn interview_total_time(&self) -> &str {
        &self.interview_total_time
    }

    fn dashboard_summary(&self) -> &DashboardSummary {
        &self.dashboard_summary
    }

    fn home(&self) -> &HomeContent {
        &self.home
    }

    fn preparation(&self) -> &PreparationContent {
        &self.preparation
    }
}

// ---------------------------------------------------------------------------
// Integrity
// ---------------------------------------------------------------------------

/// A fixture set that breaks a data invariant.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FixtureError {
    #[error("Duplicate {collection} id {id}")]
    DuplicateId {
        collection: &'static str,
        id: RecordId,
    },

    #[error("{collection} {id} has score {score}, above 100")]
    ScoreOutOfRange {
        collection: &'static str,
        id: RecordId,
        score: u8,
    },

    #[error("Interview {id} has more correct answers than questions")]
    AnswersExceedQuestions { id: RecordId },

    #[error("{collection} {id} has tag {tag:?} that is not normalized or not unique")]
    BadTag {
        collection: &'static str,
        id: RecordId,
        tag: String,
    },
}

/// Check the invariants every view relies on.
///
/// Called once at startup; a failure means the fixture data itself is wrong.
pub fn check_integrity(source: &dyn FixtureSource) -> Result<(), FixtureError> {
    check_ids(
        "question",
        source.questions().iter().map(|q| q.id),
    )?;
    check_ids("trending question", source.trending().iter().map(|q| q.id))?;
    check_ids("discussion", source.discussions().iter().map(|d| d.id))?;
    check_ids("interview", source.interviews().iter().map(|i| i.id))?;

    for q in source.questions() {
        check_tags("question", q.id, &q.tags)?;
    }
    for q in source.trending() {
        check_tags("trending question", q.id, &q.tags)?;
        if q.trending_score > 100 {
            return Err(FixtureError::ScoreOutOfRange {
                collection: "trending question",
                id: q.id,
                score: q.trending_score,
            });
        }
    }
    for d in source.discussions() {
        check_tags("discussion", d.id, &d.tags)?;
    }
    for i in source.interviews() {
        if i.score > 100 {
            return Err(FixtureError::ScoreOutOfRange {
                collection: "interview",
                id: i.id,
                score: i.score,
            });
        }
        if i.correct_answers > i.total_questions {
            return Err(FixtureError::AnswersExceedQuestions { id: i.id });
        }
    }

    tracing::debug!(
        questions = source.questions().len(),
        trending = source.trending().len(),
        discussions = source.discussions().len(),
        interviews = source.interviews().len(),
        "Fixture integrity check passed"
    );
    Ok(())
}

fn check_ids(
    collection: &'static str,
    ids: impl Iterator<Item = RecordId>,
) -> Result<(), FixtureError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(FixtureError::DuplicateId { collection, id });
        }
    }
    Ok(())
}

fn check_tags(collection: &'static str, id: RecordId, tags: &[String]) -> Result<(), FixtureError> {
    let mut seen = HashSet::new();
    for tag in tags {
        let normalized = normalize_tag(tag);
        if normalized.as_deref() != Some(tag.as_str()) || !seen.insert(tag.as_str()) {
            return Err(FixtureError::BadTag {
                collection,
                id,
                tag: tag.clone(),
            });
        }
    }
    Ok(())
}
