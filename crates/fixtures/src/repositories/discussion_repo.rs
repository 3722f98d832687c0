//! Community discussion listing.

use interviewer_core::catalog::{CatalogFilter, CategoryFacet};
use interviewer_core::stats::reputation_badge;
use interviewer_core::types::RecordId;

use crate::models::discussion::{
    DiscussionEntry, DiscussionListing, DiscussionRecord, DiscussionSort,
};
use crate::FixtureSource;

pub struct DiscussionRepo;

impl DiscussionRepo {
    /// Filter threads by category and query, then order them.
    ///
    /// Every ordering is stable, so ties keep fixture order.
    pub fn list(
        source: &dyn FixtureSource,
        filter: &CatalogFilter,
        sort: DiscussionSort,
    ) -> DiscussionListing {
        let mut threads = filter.apply(source.discussions()).into_items();
        match sort {
            DiscussionSort::Latest => {}
            DiscussionSort::Hot => threads.sort_by_key(|d| !d.is_hot),
            DiscussionSort::MostLiked => threads.sort_by(|a, b| b.likes.cmp(&a.likes)),
        }

        let items: Vec<DiscussionEntry> = threads
            .into_iter()
            .map(|d| DiscussionEntry {
                badge: reputation_badge(d.author.reputation),
                discussion: d.clone(),
            })
            .collect();

        DiscussionListing {
            sort,
            count: items.len(),
            stats: source.community_stats().clone(),
            items,
        }
    }

    pub fn facets(source: &dyn FixtureSource) -> &[CategoryFacet] {
        source.discussion_facets()
    }

    pub fn find_by_id(source: &dyn FixtureSource, id: RecordId) -> Option<&DiscussionRecord> {
        source.discussions().iter().find(|d| d.id == id)
    }
}

#[cfg(test)]
mod tests {
    use interviewer_core::stats::ReputationBadge;

    use super::*;
    use crate::StaticFixtures;

    fn ids(listing: &DiscussionListing) -> Vec<RecordId> {
        listing.items.iter().map(|e| e.discussion.id).collect()
    }

    #[test]
    fn latest_keeps_fixture_order() {
        let fixtures = StaticFixtures::new();
        let listing = DiscussionRepo::list(&fixtures, &CatalogFilter::new(), DiscussionSort::Latest);
        assert_eq!(ids(&listing), [1, 2, 3, 4, 5]);
        assert_eq!(listing.count, 5);
        assert_eq!(listing.stats.active_users, 1247);
    }

    #[test]
    fn hot_first_is_stable() {
        let fixtures = StaticFixtures::new();
        let listing = DiscussionRepo::list(&fixtures, &CatalogFilter::new(), DiscussionSort::Hot);
        assert_eq!(ids(&listing), [1, 2, 5, 3, 4]);
    }

    #[test]
    fn most_liked_descends() {
        let fixtures = StaticFixtures::new();
        let listing =
            DiscussionRepo::list(&fixtures, &CatalogFilter::new(), DiscussionSort::MostLiked);
        assert_eq!(ids(&listing), [5, 2, 3, 4, 1]);
    }

    #[test]
    fn category_filter() {
        let fixtures = StaticFixtures::new();
        let filter = CatalogFilter::from_parts(Some("Career"), None, None);
        let listing = DiscussionRepo::list(&fixtures, &filter, DiscussionSort::Latest);
        assert_eq!(ids(&listing), [4]);
    }

    #[test]
    fn query_matches_tag_case_insensitively() {
        let fixtures = StaticFixtures::new();
        let filter = CatalogFilter::from_parts(None, None, Some("React"));
        let listing = DiscussionRepo::list(&fixtures, &filter, DiscussionSort::Latest);
        assert_eq!(ids(&listing), [2]);
    }

    #[test]
    fn badges_follow_reputation() {
        let fixtures = StaticFixtures::new();
        let listing = DiscussionRepo::list(&fixtures, &CatalogFilter::new(), DiscussionSort::Latest);
        let badges: Vec<_> = listing.items.iter().map(|e| e.badge).collect();
        assert_eq!(
            badges,
            [
                ReputationBadge::Expert,
                ReputationBadge::Advanced,
                ReputationBadge::Advanced,
                ReputationBadge::Contributor,
                ReputationBadge::Expert,
            ]
        );
    }

    #[test]
    fn find_by_id() {
        let fixtures = StaticFixtures::new();
        assert_eq!(
            DiscussionRepo::find_by_id(&fixtures, 5).map(|d| d.author.initials.as_str()),
            Some("DP")
        );
        assert!(DiscussionRepo::find_by_id(&fixtures, 0).is_none());
    }

    #[test]
    fn sort_parse() {
        assert_eq!(DiscussionSort::parse("most_liked").unwrap(), DiscussionSort::MostLiked);
        assert_eq!(DiscussionSort::parse("").unwrap(), DiscussionSort::Latest);
        assert_matches::assert_matches!(
            DiscussionSort::parse("oldest"),
            Err(interviewer_core::error::CoreError::Validation(_))
        );
    }
}
