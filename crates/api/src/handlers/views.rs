//! Handlers for view identifiers and the not-found fallback.

use axum::extract::Query;
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Json;
use interviewer_core::views::{View, ViewInfo};
use serde_json::json;

use crate::error::AppResult;
use crate::query::ResolveParams;
use crate::response::DataResponse;

/// GET /api/v1/views
///
/// Every routable view with its path, title and description.
pub async fn list_views() -> AppResult<impl IntoResponse> {
    let views: Vec<ViewInfo> = View::ROUTABLE.into_iter().map(ViewInfo::from).collect();

    Ok(Json(DataResponse { data: views }))
}

/// GET /api/v1/views/resolve?path=
///
/// Resolve a client path to its view. Unknown paths answer 404 with the
/// not-found view as the payload.
pub async fn resolve_view(Query(params): Query<ResolveParams>) -> AppResult<impl IntoResponse> {
    let view = View::resolve(&params.path);
    let status = if view == View::NotFound {
        tracing::debug!(path = %params.path, "Path resolved to the not-found view");
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(DataResponse {
            data: ViewInfo::from(view),
        }),
    ))
}

/// Fallback for any request no route matches.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::warn!(path = %uri.path(), "No route matched");

    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": format!("No route for {}", uri.path()),
            "code": "NOT_FOUND",
            "view": ViewInfo::from(View::NotFound),
        })),
    )
}
