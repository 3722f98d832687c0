use axum::routing::get;
use axum::Router;

use crate::handlers::questions;
use crate::state::AppState;

/// Routes mounted at `/questions`.
///
/// ```text
/// GET /             -> list_questions
/// GET /categories   -> list_categories
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(questions::list_questions))
        .route("/categories", get(questions::list_categories))
}
