//! Catalog filtering shared by the question bank, trending questions and
//! discussions.
//!
//! A [`CatalogFilter`] holds three independent predicates (category,
//! subtopic, free-text query). [`CatalogFilter::apply`] derives the visible
//! subset of a fixture slice without touching the slice itself.

use serde::{Deserialize, Serialize};

use crate::search::normalize_query;

/// Category sentinel meaning "no category restriction".
pub const ALL_CATEGORY: &str = "All";

/// The fields a record exposes to the catalog filter.
pub trait Filterable {
    fn category(&self) -> &str;

    /// Records without a subtopic never match an active subtopic filter.
    fn subtopic(&self) -> Option<&str> {
        None
    }

    fn title(&self) -> &str;

    fn tags(&self) -> &[String];
}

// ---------------------------------------------------------------------------
// Facets
// ---------------------------------------------------------------------------

/// A filter dimension value with a display count and optional subtopics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFacet {
    pub name: String,
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtopics: Option<Vec<String>>,
}

impl CategoryFacet {
    pub fn new(name: &str, count: u32) -> Self {
        Self {
            name: name.to_string(),
            count,
            subtopics: None,
        }
    }

    pub fn with_subtopics(name: &str, count: u32, subtopics: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            count,
            subtopics: Some(subtopics.iter().map(|s| s.to_string()).collect()),
        }
    }
}

/// Find the facet for a category name.
pub fn facet_for<'a>(facets: &'a [CategoryFacet], name: &str) -> Option<&'a CategoryFacet> {
    facets.iter().find(|f| f.name == name)
}

/// Subtopics offered for a category; empty when the facet has none.
pub fn subtopics_for<'a>(facets: &'a [CategoryFacet], name: &str) -> &'a [String] {
    facet_for(facets, name)
        .and_then(|f| f.subtopics.as_deref())
        .unwrap_or(&[])
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Active selections for a catalog view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFilter {
    category: String,
    subtopic: Option<String>,
    query: Option<String>,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORY.to_string(),
            subtopic: None,
            query: None,
        }
    }
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from optional request parameters.
    ///
    /// The category is selected first, so the subtopic given here is applied
    /// after the reset that a category change performs.
    pub fn from_parts(category: Option<&str>, subtopic: Option<&str>, query: Option<&str>) -> Self {
        let mut filter = Self::new();
        if let Some(category) = category {
            filter.select_category(category);
        }
        filter.select_subtopic(subtopic);
        if let Some(query) = query {
            filter.set_query(query);
        }
        filter
    }

    /// Select a top-level category. Always clears the subtopic.
    ///
    /// A blank name selects [`ALL_CATEGORY`].
    pub fn select_category(&mut self, name: &str) {
        let name = name.trim();
        self.category = if name.is_empty() {
            ALL_CATEGORY.to_string()
        } else {
            name.to_string()
        };
        self.subtopic = None;
    }

    /// Select a subtopic; `None` or a blank name clears it.
    pub fn select_subtopic(&mut self, name: Option<&str>) {
        self.subtopic = name
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = normalize_query(query);
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn subtopic(&self) -> Option<&str> {
        self.subtopic.as_deref()
    }

    /// The normalized (trimmed, lower-cased) query, if any.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn is_unrestricted(&self) -> bool {
        self.category == ALL_CATEGORY && self.subtopic.is_none() && self.query.is_none()
    }

    /// Whether a single record passes all three predicates.
    pub fn matches<T: Filterable + ?Sized>(&self, record: &T) -> bool {
        self.matches_category(record) && self.matches_subtopic(record) && self.matches_query(record)
    }

    fn matches_category<T: Filterable + ?Sized>(&self, record: &T) -> bool {
        self.category == ALL_CATEGORY || record.category() == self.category
    }

    fn matches_subtopic<T: Filterable + ?Sized>(&self, record: &T) -> bool {
        match &self.subtopic {
            None => true,
            Some(active) => record.subtopic() == Some(active.as_str()),
        }
    }

    fn matches_query<T: Filterable + ?Sized>(&self, record: &T) -> bool {
        let Some(query) = &self.query else {
            return true;
        };
        record.title().to_lowercase().contains(query.as_str())
            || record.tags().iter().any(|tag| tag.to_lowercase() == *query)
    }

    /// Derive the visible subset of `records`, preserving relative order.
    pub fn apply<'a, T: Filterable>(&self, records: &'a [T]) -> FilteredView<'a, T> {
        FilteredView {
            items: records.iter().filter(|r| self.matches(*r)).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Filtered view
// ---------------------------------------------------------------------------

/// The result of applying a [`CatalogFilter`]: borrowed records in source
/// order. An empty view is a valid result.
#[derive(Debug)]
pub struct FilteredView<'a, T> {
    items: Vec<&'a T>,
}

impl<'a, T> FilteredView<'a, T> {
    /// Number of visible records, always taken from the filtered sequence.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.items.iter().copied()
    }

    pub fn into_items(self) -> Vec<&'a T> {
        self.items
    }
}

impl<T: Clone> FilteredView<'_, T> {
    /// Clone the visible records into an owned vector.
    pub fn to_owned_vec(&self) -> Vec<T> {
        self.items.iter().map(|r| (*r).clone()).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
