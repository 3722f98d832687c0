use axum::routing::{get, post};
use axum::Router;

use crate::handlers::discussions;
use crate::state::AppState;

/// Routes mounted at `/discussions`.
///
/// ```text
/// GET  /             -> list_discussions
/// GET  /categories   -> list_categories
/// POST /posts        -> create_post
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(discussions::list_discussions))
        .route("/categories", get(discussions::list_categories))
        .route("/posts", post(discussions::create_post))
}
