use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the fixture data passes its integrity check.
    pub fixtures_healthy: bool,
}

/// GET /health -- returns service and fixture health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let fixtures_healthy = match interviewer_fixtures::check_integrity(state.fixtures.as_ref()) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Fixture integrity check failed");
            false
        }
    };

    let status = if fixtures_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        fixtures_healthy,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
