use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use interviewer_core::error::{CoreError, FormError};
use serde::Serialize;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `interviewer_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A form submission was turned away. `draft` is echoed back unchanged.
    #[error("Form rejected: {error}")]
    FormRejected {
        error: FormError,
        draft: serde_json::Value,
    },

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Reject a form, keeping the draft the user submitted.
    pub fn form_rejected<D: Serialize>(error: FormError, draft: &D) -> Self {
        match serde_json::to_value(draft) {
            Ok(draft) => AppError::FormRejected { error, draft },
            Err(e) => AppError::InternalError(format!("Failed to serialize draft: {e}")),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Form(err) => {
                    return form_rejection(err, None);
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Form rejections ---
            AppError::FormRejected { error, draft } => {
                return form_rejection(error, Some(draft));
            }

            // --- HTTP-specific errors ---
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// 422 with the rejection notice and, when known, the intact draft.
fn form_rejection(error: &FormError, draft: Option<&serde_json::Value>) -> Response {
    let notice = error.notice();
    let mut body = json!({
        "error": notice.title,
        "code": "FORM_REJECTED",
        "notice": notice,
    });
    if let Some(draft) = draft {
        body["draft"] = draft.clone();
    }

    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response()
}
