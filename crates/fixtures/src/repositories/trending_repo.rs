//! Ranked trending questions.

use interviewer_core::catalog::{CatalogFilter, CategoryFacet};
use interviewer_core::stats::{compact_count, trending_tier, TrendingPeriod};

use crate::models::trending::{RankedTrending, TrendingListing, TrendingQuestion, TrendingTotals};
use crate::FixtureSource;

pub struct TrendingRepo;

impl TrendingRepo {
    /// Filter trending questions and rank them by position.
    ///
    /// The period is echoed back unchanged; it does not narrow the set.
    pub fn list(
        source: &dyn FixtureSource,
        filter: &CatalogFilter,
        period: TrendingPeriod,
    ) -> TrendingListing {
        let view = filter.apply(source.trending());
        let totals = totals(view.iter());
        let items: Vec<RankedTrending> = view
            .iter()
            .enumerate()
            .map(|(index, question)| RankedTrending {
                rank: index + 1,
                tier: trending_tier(question.trending_score),
                question: question.clone(),
            })
            .collect();

        TrendingListing {
            period,
            count: items.len(),
            totals,
            items,
        }
    }

    pub fn facets(source: &dyn FixtureSource) -> &[CategoryFacet] {
        source.trending_facets()
    }
}

fn totals<'a>(questions: impl Iterator<Item = &'a TrendingQuestion>) -> TrendingTotals {
    let (stars, views, upvotes) = questions.fold((0u64, 0u64, 0u64), |(s, v, u), q| {
        (
            s + u64::from(q.stars),
            v + u64::from(q.views),
            u + u64::from(q.upvotes),
        )
    });

    TrendingTotals {
        stars,
        views,
        upvotes,
        stars_display: compact_count(stars),
        views_display: compact_count(views),
        upvotes_display: compact_count(upvotes),
    }
}
