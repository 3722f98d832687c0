//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Use [`DataResponse`]
//! instead of ad-hoc `serde_json::json!({ "data": ... })` to get
//! compile-time type safety and consistent serialization.

use interviewer_core::notice::Notice;
use serde::Serialize;
use uuid::Uuid;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Payload returned when a form submission is accepted.
///
/// `draft` is the form after reset, ready for the next entry.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse<S: Serialize, D: Serialize> {
    /// Time-ordered reference for the accepted submission.
    pub reference: Uuid,
    pub notice: Notice,
    pub submission: S,
    pub draft: D,
}
