//! Handlers for community discussions and the "Ask the Community" form.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use interviewer_core::forms::community::CommunityPostDraft;
use interviewer_fixtures::repositories::DiscussionRepo;

use super::submit_draft;
use crate::error::AppResult;
use crate::query::DiscussionParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/discussions
pub async fn list_discussions(
    State(state): State<AppState>,
    Query(params): Query<DiscussionParams>,
) -> AppResult<impl IntoResponse> {
    let sort = params.sort()?;
    let listing = DiscussionRepo::list(state.fixtures.as_ref(), &params.filter(), sort);

    Ok(Json(DataResponse { data: listing }))
}

/// GET /api/v1/discussions/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: DiscussionRepo::facets(state.fixtures.as_ref()).to_vec(),
    }))
}

/// POST /api/v1/discussions/posts
///
/// Nothing is stored; an accepted post only yields its notice.
pub async fn create_post(Json(draft): Json<CommunityPostDraft>) -> AppResult<impl IntoResponse> {
    submit_draft("community_post", draft)
}
