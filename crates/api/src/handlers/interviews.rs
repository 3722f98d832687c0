//! Handlers for the past-interviews page.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use interviewer_fixtures::models::interview::{InterviewEntry, InterviewSummary};
use interviewer_fixtures::repositories::InterviewRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct InterviewHistory {
    pub summary: InterviewSummary,
    pub items: Vec<InterviewEntry>,
}

/// GET /api/v1/interviews
pub async fn list_interviews(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let fixtures = state.fixtures.as_ref();

    Ok(Json(DataResponse {
        data: InterviewHistory {
            summary: InterviewRepo::summary(fixtures),
            items: InterviewRepo::list(fixtures),
        },
    }))
}
