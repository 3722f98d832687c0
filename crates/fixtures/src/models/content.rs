//! Static marketing and dashboard content.

use interviewer_core::views::View;
use serde::Serialize;

/// A headline figure such as "50K+ Practice Sessions".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub value: String,
    pub label: String,
}

impl Highlight {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// A card linking to another view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureCard {
    pub title: String,
    pub description: String,
    pub action: String,
    pub target: View,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeContent {
    pub headline: String,
    pub tagline: String,
    pub stats: Vec<Highlight>,
    pub features: Vec<FeatureCard>,
}

/// One of the preparation tracks on the interview-preparation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparationPath {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparationContent {
    pub paths: Vec<PreparationPath>,
    pub benefits: Vec<Highlight>,
}

/// Headline cards at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub cards: Vec<DashboardCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardCard {
    pub title: String,
    pub value: String,
    pub caption: String,
}
