use axum::routing::{get, post};
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

/// Routes mounted at `/feedback`.
///
/// ```text
/// POST /           -> submit_feedback
/// GET  /options    -> feedback_options
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(feedback::submit_feedback))
        .route("/options", get(feedback::feedback_options))
}
