//! HTTP-level integration tests for viewer preferences and view resolution.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, build_test_app_and_state, get, post_empty, put_json};
use interviewer_core::preferences::Theme;
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: preferences start light and signed out
// ---------------------------------------------------------------------------

#[tokio::test]
async fn preferences_initial_state() {
    let response = get(build_test_app(), "/api/v1/preferences").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["theme"], "light");
    assert_eq!(json["data"]["signed_in"], false);
    assert_eq!(json["data"]["nav_style"], "transparent");
}

#[tokio::test]
async fn nav_style_blurs_past_threshold() {
    let response = get(build_test_app(), "/api/v1/preferences?scroll_y=20").await;
    assert_eq!(body_json(response).await["data"]["nav_style"], "transparent");

    let response = get(build_test_app(), "/api/v1/preferences?scroll_y=21").await;
    assert_eq!(body_json(response).await["data"]["nav_style"], "blurred");
}

// ---------------------------------------------------------------------------
// Test: theme toggle persists in shared state
// ---------------------------------------------------------------------------

#[tokio::test]
async fn toggle_theme_flips_and_persists() {
    let (app, state) = build_test_app_and_state();

    let response = post_empty(app.clone(), "/api/v1/preferences/theme/toggle").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["theme"], "dark");
    assert_eq!(state.preferences.read().await.theme, Theme::Dark);

    let response = post_empty(app.clone(), "/api/v1/preferences/theme/toggle").await;
    assert_eq!(body_json(response).await["data"]["theme"], "light");

    let response = get(app, "/api/v1/preferences").await;
    assert_eq!(body_json(response).await["data"]["theme"], "light");
}

#[tokio::test]
async fn replace_preferences() {
    let (app, state) = build_test_app_and_state();

    let response = put_json(
        app.clone(),
        "/api/v1/preferences",
        json!({ "theme": "system", "signed_in": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["theme"], "system");
    assert_eq!(json["data"]["signed_in"], true);
    assert!(state.preferences.read().await.signed_in);

    // Toggling out of `system` lands on light.
    let response = post_empty(app, "/api/v1/preferences/theme/toggle").await;
    assert_eq!(body_json(response).await["data"]["theme"], "light");
}

#[tokio::test]
async fn replace_preferences_rejects_unknown_theme() {
    let response = put_json(
        build_test_app(),
        "/api/v1/preferences",
        json!({ "theme": "sepia" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Test: view identifiers and path resolution
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_views() {
    let response = get(build_test_app(), "/api/v1/views").await;
    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();

    assert_eq!(data.len(), 9);
    assert_eq!(data[0]["id"], "home");
    assert_eq!(data[0]["path"], "/");
    assert_eq!(data[4]["id"], "question-bank");
}

#[tokio::test]
async fn resolve_known_path() {
    let response = get(build_test_app(), "/api/v1/views/resolve?path=/trending-questions").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], "trending-questions");
    assert_eq!(json["data"]["title"], "Trending Questions");
}

#[tokio::test]
async fn resolve_unknown_path_is_not_found_view() {
    let response = get(build_test_app(), "/api/v1/views/resolve?path=/admin").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], "not-found");
}
