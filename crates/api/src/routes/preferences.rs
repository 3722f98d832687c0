use axum::routing::{get, post};
use axum::Router;

use crate::handlers::preferences;
use crate::state::AppState;

/// Routes mounted at `/preferences`.
///
/// ```text
/// GET  /               -> get_preferences (?scroll_y=)
/// PUT  /               -> replace_preferences
/// POST /theme/toggle   -> toggle_theme
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(preferences::get_preferences).put(preferences::replace_preferences),
        )
        .route("/theme/toggle", post(preferences::toggle_theme))
}
