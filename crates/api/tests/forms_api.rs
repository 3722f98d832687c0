//! HTTP-level integration tests for the feedback, question suggestion and
//! community post forms, plus the tag editor endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};
use serde_json::json;

fn feedback_draft() -> serde_json::Value {
    json!({
        "feedback_type": "bug",
        "rating": 4,
        "subject": "Timer freezes",
        "description": "The countdown stops after the second question.",
        "areas": ["Performance"],
        "email": "candidate@example.com"
    })
}

fn suggestion_draft(tags: &[&str]) -> serde_json::Value {
    json!({
        "question_type": "technical",
        "question": "Explain event delegation in the DOM.",
        "category": "JavaScript",
        "difficulty": "medium",
        "expected_time": "10 min",
        "tags": { "pending": "", "tags": tags },
        "sample_answer": "",
        "hints": "Think about bubbling."
    })
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/feedback accepts a complete draft and resets it
// ---------------------------------------------------------------------------

#[tokio::test]
async fn feedback_accepted() {
    let response = post_json(build_test_app(), "/api/v1/feedback", feedback_draft()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["notice"]["title"], "Feedback Submitted!");
    assert_eq!(data["notice"]["variant"], "default");
    assert_eq!(data["submission"]["feedback_type"], "bug");
    assert_eq!(data["submission"]["rating"], 4);
    assert_eq!(data["reference"].as_str().unwrap().len(), 36);

    // Every field is back to its initial state.
    assert_eq!(data["draft"]["feedback_type"], "");
    assert_eq!(data["draft"]["rating"], 0);
    assert_eq!(data["draft"]["subject"], "");
    assert!(data["draft"]["areas"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn feedback_repeated_area_is_kept_once() {
    let mut draft = feedback_draft();
    draft["areas"] = json!(["Navigation", "Navigation", "Performance"]);

    let response = post_json(build_test_app(), "/api/v1/feedback", draft).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(
        json["data"]["submission"]["areas"],
        json!(["Navigation", "Performance"])
    );
}

#[tokio::test]
async fn feedback_unset_rating_is_omitted() {
    let mut draft = feedback_draft();
    draft["rating"] = json!(0);

    let response = post_json(build_test_app(), "/api/v1/feedback", draft).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["data"]["submission"]["rating"].is_null());
}

// ---------------------------------------------------------------------------
// Test: feedback with unset type is rejected and keeps the draft
// ---------------------------------------------------------------------------

#[tokio::test]
async fn feedback_missing_type_is_rejected() {
    let mut draft = feedback_draft();
    draft["feedback_type"] = json!("");

    let response = post_json(build_test_app(), "/api/v1/feedback", draft).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "FORM_REJECTED");
    assert_eq!(json["notice"]["title"], "Missing Information");
    assert_eq!(json["notice"]["description"], "Please fill in all required fields.");
    assert_eq!(json["draft"]["subject"], "Timer freezes");
    assert_eq!(
        json["draft"]["description"],
        "The countdown stops after the second question."
    );
}

#[tokio::test]
async fn feedback_bad_email_is_invalid_information() {
    let mut draft = feedback_draft();
    draft["email"] = json!("not-an-email");

    let response = post_json(build_test_app(), "/api/v1/feedback", draft).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["notice"]["title"], "Invalid Information");
    assert_eq!(json["draft"]["email"], "not-an-email");
}

#[tokio::test]
async fn feedback_options() {
    let response = get(build_test_app(), "/api/v1/feedback/options").await;
    let json = body_json(response).await;

    assert_eq!(json["data"]["types"].as_array().unwrap().len(), 5);
    assert_eq!(json["data"]["types"][1]["id"], "bug");
    assert_eq!(json["data"]["areas"].as_array().unwrap().len(), 8);
    assert_eq!(json["data"]["max_rating"], 5);
}

// ---------------------------------------------------------------------------
// Test: suggestion without tags is rejected; one tag makes it succeed
// ---------------------------------------------------------------------------

#[tokio::test]
async fn suggestion_without_tags_then_with_one_tag() {
    let response = post_json(build_test_app(), "/api/v1/suggestions", suggestion_draft(&[])).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["notice"]["title"], "Add Tags");
    assert_eq!(
        json["notice"]["description"],
        "Please add at least one tag to help categorize your question."
    );
    assert_eq!(json["draft"]["question"], "Explain event delegation in the DOM.");

    // Add a tag through the editor endpoint, then resubmit.
    let response = post_json(
        build_test_app(),
        "/api/v1/suggestions/tags",
        json!({ "editor": { "pending": "  DOM " }, "key": "Enter" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["changed"], true);
    assert_eq!(json["data"]["editor"]["tags"], json!(["dom"]));
    assert_eq!(json["data"]["editor"]["pending"], "");

    let response = post_json(
        build_test_app(),
        "/api/v1/suggestions",
        suggestion_draft(&["dom"]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["notice"]["title"], "Question Submitted!");
    assert_eq!(data["submission"]["question_type"], "technical");
    assert_eq!(data["submission"]["difficulty"], "Medium");
    assert_eq!(data["submission"]["tags"], json!(["dom"]));
    assert!(data["submission"]["sample_answer"].is_null());
    assert_eq!(data["draft"]["question"], "");
    assert!(data["draft"]["tags"]["tags"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: posted tag lists are normalized before the tag rule is checked
// ---------------------------------------------------------------------------

#[tokio::test]
async fn suggestion_posted_tags_are_normalized_and_deduplicated() {
    let response = post_json(
        build_test_app(),
        "/api/v1/suggestions",
        suggestion_draft(&["Arrays", "arrays", " ARRAYS "]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["submission"]["tags"], json!(["arrays"]));
}

#[tokio::test]
async fn suggestion_with_only_blank_tags_needs_tags() {
    let response = post_json(
        build_test_app(),
        "/api/v1/suggestions",
        suggestion_draft(&["   ", ""]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["notice"]["title"], "Add Tags");
    assert!(json["draft"]["tags"]["tags"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn tag_editor_normalizes_posted_state() {
    let response = post_json(
        build_test_app(),
        "/api/v1/suggestions/tags",
        json!({ "editor": { "pending": "arrays", "tags": ["Arrays", "  "] }, "key": "Enter" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["changed"], false);
    assert_eq!(json["data"]["editor"]["tags"], json!(["arrays"]));
    assert_eq!(json["data"]["editor"]["pending"], "arrays");
}

#[tokio::test]
async fn suggestion_missing_fields_reported_before_tags() {
    let mut draft = suggestion_draft(&[]);
    draft["category"] = json!("");

    let response = post_json(build_test_app(), "/api/v1/suggestions", draft).await;
    let json = body_json(response).await;

    assert_eq!(json["notice"]["title"], "Missing Information");
}

#[tokio::test]
async fn suggestion_unknown_category_is_invalid() {
    let mut draft = suggestion_draft(&["dom"]);
    draft["category"] = json!("Cooking");

    let response = post_json(build_test_app(), "/api/v1/suggestions", draft).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["notice"]["title"], "Invalid Information");
}

#[tokio::test]
async fn suggestion_options() {
    let response = get(build_test_app(), "/api/v1/suggestions/options").await;
    let json = body_json(response).await;

    assert_eq!(json["data"]["categories"].as_array().unwrap().len(), 14);
    assert_eq!(json["data"]["question_types"][2]["id"], "system-design");
    assert_eq!(json["data"]["difficulties"][0]["id"], "easy");
    assert_eq!(json["data"]["difficulties"][0]["label"], "Easy");
}

// ---------------------------------------------------------------------------
// Test: tag editor endpoints
// ---------------------------------------------------------------------------

#[tokio::test]
async fn duplicate_tag_keeps_pending_text() {
    let response = post_json(
        build_test_app(),
        "/api/v1/suggestions/tags",
        json!({ "editor": { "pending": "Arrays", "tags": ["arrays"] } }),
    )
    .await;
    let json = body_json(response).await;

    assert_eq!(json["data"]["changed"], false);
    assert_eq!(json["data"]["editor"]["tags"], json!(["arrays"]));
    assert_eq!(json["data"]["editor"]["pending"], "Arrays");
}

#[tokio::test]
async fn non_confirm_key_adds_nothing() {
    let response = post_json(
        build_test_app(),
        "/api/v1/suggestions/tags",
        json!({ "editor": { "pending": "graphs" }, "key": "Tab" }),
    )
    .await;
    let json = body_json(response).await;

    assert_eq!(json["data"]["changed"], false);
    assert!(json["data"]["editor"]["tags"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn remove_tag_by_exact_value() {
    let response = post_json(
        build_test_app(),
        "/api/v1/suggestions/tags/remove",
        json!({ "editor": { "tags": ["trees", "graphs"] }, "tag": "trees" }),
    )
    .await;
    let json = body_json(response).await;

    assert_eq!(json["data"]["changed"], true);
    assert_eq!(json["data"]["editor"]["tags"], json!(["graphs"]));
}

// ---------------------------------------------------------------------------
// Test: community posts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn community_post_accepted() {
    let response = post_json(
        build_test_app(),
        "/api/v1/discussions/posts",
        json!({ "question": "How long should a take-home take?" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["notice"]["title"], "Question Posted!");
    assert_eq!(json["data"]["draft"]["question"], "");
}

#[tokio::test]
async fn blank_community_post_is_rejected() {
    let response = post_json(
        build_test_app(),
        "/api/v1/discussions/posts",
        json!({ "question": "   " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["notice"]["title"], "Empty Question");
    assert_eq!(json["draft"]["question"], "   ");
}
