use axum::routing::get;
use axum::Router;

use crate::handlers::interviews;
use crate::state::AppState;

/// Routes mounted at `/interviews`.
///
/// ```text
/// GET /        -> list_interviews
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(interviews::list_interviews))
}
