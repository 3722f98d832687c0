use axum::routing::get;
use axum::Router;

use crate::handlers::views;
use crate::state::AppState;

/// Routes mounted at `/views`.
///
/// ```text
/// GET /          -> list_views
/// GET /resolve   -> resolve_view (?path=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(views::list_views))
        .route("/resolve", get(views::resolve_view))
}
