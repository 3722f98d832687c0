pub mod dashboard;
pub mod discussions;
pub mod feedback;
pub mod health;
pub mod interviews;
pub mod preferences;
pub mod questions;
pub mod suggestions;
pub mod trending;
pub mod views;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /views                                           all routable views
/// /views/resolve                                   resolve a path (?path=)
///
/// /home                                            hero stats + feature cards
/// /preparation                                     preparation paths + benefits
///
/// /dashboard                                       summary cards + recent interviews
/// /dashboard/interviews/{id}/questions             per-question analytics
///
/// /interviews                                      past interviews + summary
///
/// /questions                                       question bank (?category=&subtopic=&q=&limit=&offset=)
/// /questions/categories                            question bank facets
///
/// /trending                                        ranked trending questions (?category=&q=&period=)
/// /trending/categories                             trending facets
///
/// /discussions                                     threads (?category=&q=&sort=)
/// /discussions/categories                          discussion facets
/// /discussions/posts                               ask the community (POST)
///
/// /feedback                                        submit feedback (POST)
/// /feedback/options                                feedback types, areas, rating range
///
/// /suggestions                                     submit a question suggestion (POST)
/// /suggestions/options                             categories, types, difficulties
/// /suggestions/tags                                tag editor: add (POST)
/// /suggestions/tags/remove                         tag editor: remove (POST)
///
/// /preferences                                     get, replace (GET, PUT)
/// /preferences/theme/toggle                        flip light/dark (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // View identifiers and path resolution.
        .nest("/views", views::router())
        // Static marketing content.
        .route("/home", get(handlers::content::home))
        .route("/preparation", get(handlers::content::preparation))
        // Dashboard and interview history.
        .nest("/dashboard", dashboard::router())
        .nest("/interviews", interviews::router())
        // Catalog views.
        .nest("/questions", questions::router())
        .nest("/trending", trending::router())
        .nest("/discussions", discussions::router())
        // Forms.
        .nest("/feedback", feedback::router())
        .nest("/suggestions", suggestions::router())
        // Viewer preferences.
        .nest("/preferences", preferences::router())
}
