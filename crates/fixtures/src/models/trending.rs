//! Trending question records and the ranked view built from them.

use interviewer_core::catalog::Filterable;
use interviewer_core::stats::{TrendingPeriod, TrendingTier};
use interviewer_core::types::{Difficulty, RecordId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendingQuestion {
    pub id: RecordId,
    pub title: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub stars: u32,
    pub views: u32,
    pub upvotes: u32,
    pub time_to_solve: String,
    /// Popularity score, 0 to 100.
    pub trending_score: u8,
    pub tags: Vec<String>,
    pub author: String,
    pub weekly_growth: String,
}

impl Filterable for TrendingQuestion {
    fn category(&self) -> &str {
        &self.category
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// A trending question with its position in the filtered list.
#[derive(Debug, Clone, Serialize)]
pub struct RankedTrending {
    /// 1-based position within the filtered view.
    pub rank: usize,
    pub tier: TrendingTier,
    #[serde(flatten)]
    pub question: TrendingQuestion,
}

/// Engagement totals across a set of trending questions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrendingTotals {
    pub stars: u64,
    pub views: u64,
    pub upvotes: u64,
    pub stars_display: String,
    pub views_display: String,
    pub upvotes_display: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendingListing {
    pub period: TrendingPeriod,
    pub count: usize,
    pub totals: TrendingTotals,
    pub items: Vec<RankedTrending>,
}
