use axum::routing::{get, post};
use axum::Router;

use crate::handlers::suggestions;
use crate::state::AppState;

/// Routes mounted at `/suggestions`.
///
/// ```text
/// POST /               -> submit_suggestion
/// GET  /options        -> suggestion_options
/// POST /tags           -> add_tag
/// POST /tags/remove    -> remove_tag
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(suggestions::submit_suggestion))
        .route("/options", get(suggestions::suggestion_options))
        .route("/tags", post(suggestions::add_tag))
        .route("/tags/remove", post(suggestions::remove_tag))
}
