//! Query parameter types for the catalog listings.
//!
//! Each listing spells out its fields rather than flattening a shared struct;
//! `serde_urlencoded` cannot parse numbers through `#[serde(flatten)]`.

use interviewer_core::catalog::CatalogFilter;
use interviewer_core::error::CoreError;
use interviewer_core::stats::TrendingPeriod;
use interviewer_fixtures::models::discussion::DiscussionSort;
use serde::Deserialize;

/// `GET /questions?category=&subtopic=&q=&limit=&offset=`
///
/// `limit` and `offset` are clamped in the repository layer via
/// `clamp_limit` / `clamp_offset`.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionListParams {
    pub category: Option<String>,
    pub subtopic: Option<String>,
    pub q: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl QuestionListParams {
    pub fn filter(&self) -> CatalogFilter {
        CatalogFilter::from_parts(
            self.category.as_deref(),
            self.subtopic.as_deref(),
            self.q.as_deref(),
        )
    }
}

/// `GET /trending?category=&q=&period=`
#[derive(Debug, Default, Deserialize)]
pub struct TrendingParams {
    pub category: Option<String>,
    pub q: Option<String>,
    pub period: Option<String>,
}

impl TrendingParams {
    pub fn filter(&self) -> CatalogFilter {
        CatalogFilter::from_parts(self.category.as_deref(), None, self.q.as_deref())
    }

    /// The requested period; absent means the default.
    pub fn period(&self) -> Result<TrendingPeriod, CoreError> {
        TrendingPeriod::parse(self.period.as_deref().unwrap_or_default())
    }
}

/// `GET /discussions?category=&q=&sort=`
#[derive(Debug, Default, Deserialize)]
pub struct DiscussionParams {
    pub category: Option<String>,
    pub q: Option<String>,
    pub sort: Option<String>,
}

impl DiscussionParams {
    pub fn filter(&self) -> CatalogFilter {
        CatalogFilter::from_parts(self.category.as_deref(), None, self.q.as_deref())
    }

    /// The requested ordering; absent means the default.
    pub fn sort(&self) -> Result<DiscussionSort, CoreError> {
        DiscussionSort::parse(self.sort.as_deref().unwrap_or_default())
    }
}

/// `GET /views/resolve?path=`
#[derive(Debug, Deserialize)]
pub struct ResolveParams {
    #[serde(default)]
    pub path: String,
}

/// `GET /preferences?scroll_y=`
#[derive(Debug, Default, Deserialize)]
pub struct ScrollParams {
    #[serde(default)]
    pub scroll_y: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_are_unrestricted() {
        assert!(QuestionListParams::default().filter().is_unrestricted());
        assert!(TrendingParams::default().filter().is_unrestricted());
        assert!(DiscussionParams::default().filter().is_unrestricted());
    }

    #[test]
    fn question_params_build_filter() {
        let params = QuestionListParams {
            category: Some("JavaScript".into()),
            subtopic: Some("React".into()),
            q: Some("  DOM ".into()),
            ..Default::default()
        };
        let filter = params.filter();
        assert_eq!(filter.category(), "JavaScript");
        assert_eq!(filter.subtopic(), Some("React"));
        assert_eq!(filter.query(), Some("dom"));
    }

    #[test]
    fn defaults_for_period_and_sort() {
        assert_eq!(TrendingParams::default().period().unwrap(), TrendingPeriod::Week);
        assert_eq!(DiscussionParams::default().sort().unwrap(), DiscussionSort::Latest);
    }

    #[test]
    fn unknown_sort_is_a_validation_error() {
        let params = DiscussionParams {
            sort: Some("oldest".into()),
            ..Default::default()
        };
        assert!(matches!(params.sort(), Err(CoreError::Validation(_))));
    }
}
