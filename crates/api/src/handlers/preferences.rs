//! Handlers for viewer preferences.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use interviewer_core::preferences::{nav_style, NavStyle, Preferences};
use serde::Serialize;

use crate::error::AppResult;
use crate::query::ScrollParams;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PreferencesResponse {
    #[serde(flatten)]
    pub preferences: Preferences,
    /// Navigation bar style for the `scroll_y` the client reported.
    pub nav_style: NavStyle,
}

/// GET /api/v1/preferences?scroll_y=
pub async fn get_preferences(
    State(state): State<AppState>,
    Query(params): Query<ScrollParams>,
) -> AppResult<impl IntoResponse> {
    let preferences = state.preferences.read().await.clone();

    Ok(Json(DataResponse {
        data: PreferencesResponse {
            preferences,
            nav_style: nav_style(params.scroll_y),
        },
    }))
}

/// PUT /api/v1/preferences
///
/// Replace the preferences wholesale. Omitted fields take their defaults.
pub async fn replace_preferences(
    State(state): State<AppState>,
    Json(input): Json<Preferences>,
) -> AppResult<impl IntoResponse> {
    let mut current = state.preferences.write().await;
    *current = input;

    tracing::info!(theme = ?current.theme, signed_in = current.signed_in, "Preferences replaced");

    Ok(Json(DataResponse {
        data: current.clone(),
    }))
}

/// POST /api/v1/preferences/theme/toggle
pub async fn toggle_theme(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut current = state.preferences.write().await;
    let theme = current.toggle_theme();

    tracing::info!(?theme, "Theme toggled");

    Ok(Json(DataResponse {
        data: current.clone(),
    }))
}
