//! Community discussion threads.

use interviewer_core::catalog::Filterable;
use interviewer_core::error::CoreError;
use interviewer_core::stats::ReputationBadge;
use interviewer_core::types::RecordId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    pub initials: String,
    pub reputation: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscussionRecord {
    pub id: RecordId,
    pub title: String,
    pub author: Author,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub likes: u32,
    pub replies: u32,
    pub time_ago: String,
    pub is_hot: bool,
    pub last_activity: String,
}

impl Filterable for DiscussionRecord {
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

/// Ordering applied to a filtered discussion list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscussionSort {
    /// Fixture order.
    #[default]
    Latest,
    /// Hot threads first, otherwise fixture order.
    Hot,
    /// Most likes first, ties in fixture order.
    MostLiked,
}

impl DiscussionSort {
    /// Parse a query value (`latest`, `hot`, `most_liked`). Blank input
    /// selects the default ordering.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        match raw.trim().to_lowercase().as_str() {
            "" => Ok(Self::default()),
            "latest" => Ok(DiscussionSort::Latest),
            "hot" => Ok(DiscussionSort::Hot),
            "most_liked" => Ok(DiscussionSort::MostLiked),
            other => Err(CoreError::Validation(format!(
                "Unknown discussion sort '{other}'"
            ))),
        }
    }
}

/// A discussion with the author's reputation badge resolved.
#[derive(Debug, Clone, Serialize)]
pub struct DiscussionEntry {
    pub badge: ReputationBadge,
    #[serde(flatten)]
    pub discussion: DiscussionRecord,
}

/// Site-wide community counters shown beside the thread list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommunityStats {
    pub active_users: u32,
    pub posts_today: u32,
    pub weekly_growth: String,
}

/// A filtered, ordered discussion list with the community counters.
#[derive(Debug, Clone, Serialize)]
pub struct DiscussionListing {
    pub sort: DiscussionSort,
    pub count: usize,
    pub stats: CommunityStats,
    pub items: Vec<DiscussionEntry>,
}
