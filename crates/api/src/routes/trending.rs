use axum::routing::get;
use axum::Router;

use crate::handlers::trending;
use crate::state::AppState;

/// Routes mounted at `/trending`.
///
/// ```text
/// GET /             -> list_trending
/// GET /categories   -> list_categories
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(trending::list_trending))
        .route("/categories", get(trending::list_categories))
}
