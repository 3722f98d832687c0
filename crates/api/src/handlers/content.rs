//! Handlers for the static marketing pages.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/home
pub async fn home(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.fixtures.home().clone(),
    }))
}

/// GET /api/v1/preparation
pub async fn preparation(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.fixtures.preparation().clone(),
    }))
}
