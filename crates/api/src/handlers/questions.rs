//! Handlers for the question bank.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use interviewer_fixtures::repositories::QuestionRepo;

use crate::error::AppResult;
use crate::query::QuestionListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/questions
///
/// Filter by category, subtopic and free text, then paginate. `total` is the
/// filtered count before pagination.
pub async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<QuestionListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.filter();
    let page = QuestionRepo::list(state.fixtures.as_ref(), &filter, params.limit, params.offset);

    tracing::debug!(
        category = filter.category(),
        subtopic = filter.subtopic(),
        query = filter.query(),
        total = page.total,
        "Question bank filtered"
    );

    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/questions/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: QuestionRepo::facets(state.fixtures.as_ref()).to_vec(),
    }))
}
