//! Question bank listing with category, subtopic and text filters.

use interviewer_core::catalog::{CatalogFilter, CategoryFacet};
use interviewer_core::search::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use interviewer_core::types::RecordId;

use crate::models::question::{QuestionPage, QuestionRecord};
use crate::FixtureSource;

pub struct QuestionRepo;

impl QuestionRepo {
    /// Filter the question bank and return one page of the result.
    ///
    /// `total` counts every match; `limit` and `offset` are clamped the same
    /// way as every other listing.
    pub fn list(
        source: &dyn FixtureSource,
        filter: &CatalogFilter,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> QuestionPage {
        let limit = clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT) as usize;
        let offset = clamp_offset(offset) as usize;

        let view = filter.apply(source.questions());
        let total = view.count();
        let items = view.iter().skip(offset).take(limit).cloned().collect();

        QuestionPage { total, items }
    }

    pub fn facets(source: &dyn FixtureSource) -> &[CategoryFacet] {
        source.question_facets()
    }

    pub fn find_by_id(source: &dyn FixtureSource, id: RecordId) -> Option<&QuestionRecord> {
        source.questions().iter().find(|q| q.id == id)
    }
}
