//! Request handlers.
//!
//! Each submodule provides async handler functions for one view. Listing
//! handlers delegate to the repositories in `interviewer_fixtures`; form
//! handlers run the drafts from `interviewer_core::forms` and map rejections
//! via [`AppError`](crate::error::AppError).

pub mod content;
pub mod dashboard;
pub mod discussions;
pub mod feedback;
pub mod interviews;
pub mod preferences;
pub mod questions;
pub mod suggestions;
pub mod trending;
pub mod views;

use axum::http::StatusCode;
use axum::Json;
use interviewer_core::forms::DraftForm;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, SubmissionResponse};

/// Submit a draft and shape the outcome for the wire.
///
/// Rejections carry the untouched draft; acceptances carry the captured
/// submission and the reset draft.
pub(crate) fn submit_draft<D>(
    form: &'static str,
    mut draft: D,
) -> AppResult<(
    StatusCode,
    Json<DataResponse<SubmissionResponse<D::Submission, D>>>,
)>
where
    D: DraftForm + Serialize,
    D::Submission: Serialize,
{
    match draft.submit() {
        Ok(accepted) => {
            let reference = Uuid::now_v7();
            tracing::info!(form, %reference, "Form submission accepted");

            Ok((
                StatusCode::CREATED,
                Json(DataResponse {
                    data: SubmissionResponse {
                        reference,
                        notice: accepted.notice,
                        submission: accepted.submission,
                        draft,
                    },
                }),
            ))
        }
        Err(error) => {
            tracing::info!(form, reason = %error, "Form submission rejected");
            Err(AppError::form_rejected(error, &draft))
        }
    }
}
