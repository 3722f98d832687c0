//! Handlers for trending questions.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use interviewer_fixtures::repositories::TrendingRepo;

use crate::error::AppResult;
use crate::query::TrendingParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/trending
pub async fn list_trending(
    State(state): State<AppState>,
    Query(params): Query<TrendingParams>,
) -> AppResult<impl IntoResponse> {
    let period = params.period()?;
    let listing = TrendingRepo::list(state.fixtures.as_ref(), &params.filter(), period);

    Ok(Json(DataResponse { data: listing }))
}

/// GET /api/v1/trending/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: TrendingRepo::facets(state.fixtures.as_ref()).to_vec(),
    }))
}
