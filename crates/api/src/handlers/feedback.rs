//! Handlers for the user feedback form.

use axum::response::IntoResponse;
use axum::Json;
use interviewer_core::forms::feedback::{FeedbackDraft, FeedbackType, MAX_RATING, RELATED_AREAS};
use serde::Serialize;

use super::submit_draft;
use crate::error::AppResult;
use crate::response::DataResponse;

#[derive(Debug, Serialize)]
pub struct OptionItem {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FeedbackOptions {
    pub types: Vec<OptionItem>,
    pub areas: &'static [&'static str],
    pub max_rating: u8,
}

/// POST /api/v1/feedback
///
/// Validate a feedback draft. Rejections answer 422 with the notice and the
/// draft as sent; acceptances answer 201 with the reset draft.
pub async fn submit_feedback(Json(draft): Json<FeedbackDraft>) -> AppResult<impl IntoResponse> {
    submit_draft("feedback", draft)
}

/// GET /api/v1/feedback/options
pub async fn feedback_options() -> AppResult<impl IntoResponse> {
    let types = FeedbackType::ALL
        .into_iter()
        .map(|t| OptionItem {
            id: t.id(),
            label: t.label(),
        })
        .collect();

    Ok(Json(DataResponse {
        data: FeedbackOptions {
            types,
            areas: RELATED_AREAS,
            max_rating: MAX_RATING,
        },
    }))
}
