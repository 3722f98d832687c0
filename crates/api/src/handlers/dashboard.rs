//! Handlers for the dashboard page.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use interviewer_core::error::CoreError;
use interviewer_core::types::RecordId;
use interviewer_fixtures::models::content::DashboardSummary;
use interviewer_fixtures::models::interview::InterviewEntry;
use interviewer_fixtures::repositories::interview_repo::RECENT_INTERVIEW_COUNT;
use interviewer_fixtures::repositories::InterviewRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub summary: DashboardSummary,
    pub recent_interviews: Vec<InterviewEntry>,
}

/// GET /api/v1/dashboard
pub async fn get_dashboard(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let fixtures = state.fixtures.as_ref();

    Ok(Json(DataResponse {
        data: DashboardResponse {
            summary: fixtures.dashboard_summary().clone(),
            recent_interviews: InterviewRepo::recent(fixtures, RECENT_INTERVIEW_COUNT),
        },
    }))
}

/// GET /api/v1/dashboard/interviews/{id}/questions
///
/// Per-question breakdown for one interview.
pub async fn interview_questions(
    State(state): State<AppState>,
    Path(interview_id): Path<RecordId>,
) -> AppResult<impl IntoResponse> {
    let analytics = InterviewRepo::analytics_for(state.fixtures.as_ref(), interview_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Interview",
            id: interview_id,
        }))?;

    Ok(Json(DataResponse {
        data: analytics.to_vec(),
    }))
}
