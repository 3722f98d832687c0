//! Handlers for the question suggestion form and its tag editor.

use axum::response::IntoResponse;
use axum::Json;
use interviewer_core::forms::suggestion::{QuestionDraft, QuestionType, SUGGESTION_CATEGORIES};
use interviewer_core::tags::TagEditor;
use interviewer_core::types::Difficulty;
use serde::{Deserialize, Serialize};

use super::submit_draft;
use crate::error::AppResult;
use crate::response::DataResponse;

#[derive(Debug, Serialize)]
pub struct QuestionTypeOption {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DifficultyOption {
    pub id: String,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SuggestionOptions {
    pub categories: &'static [&'static str],
    pub question_types: Vec<QuestionTypeOption>,
    pub difficulties: Vec<DifficultyOption>,
}

/// Body for adding a tag.
///
/// With `key` set the request acts as a key press in the tag input; only
/// the confirm key adds. Without it the pending text is confirmed directly.
#[derive(Debug, Deserialize)]
pub struct AddTagRequest {
    #[serde(default)]
    pub editor: TagEditor,
    pub key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RemoveTagRequest {
    #[serde(default)]
    pub editor: TagEditor,
    pub tag: String,
}

#[derive(Debug, Serialize)]
pub struct TagEditResponse {
    /// Whether the tag list changed.
    pub changed: bool,
    pub editor: TagEditor,
}

/// POST /api/v1/suggestions
pub async fn submit_suggestion(Json(draft): Json<QuestionDraft>) -> AppResult<impl IntoResponse> {
    submit_draft("question_suggestion", draft)
}

/// GET /api/v1/suggestions/options
pub async fn suggestion_options() -> AppResult<impl IntoResponse> {
    let question_types = QuestionType::ALL
        .into_iter()
        .map(|t| QuestionTypeOption {
            id: t.id(),
            label: t.label(),
            description: t.description(),
        })
        .collect();
    let difficulties = Difficulty::ALL
        .into_iter()
        .map(|d| DifficultyOption {
            id: d.as_str().to_lowercase(),
            label: d.as_str(),
        })
        .collect();

    Ok(Json(DataResponse {
        data: SuggestionOptions {
            categories: SUGGESTION_CATEGORIES,
            question_types,
            difficulties,
        },
    }))
}

/// POST /api/v1/suggestions/tags
pub async fn add_tag(Json(input): Json<AddTagRequest>) -> AppResult<impl IntoResponse> {
    let mut editor = input.editor;
    let before = editor.tags.len();
    match input.key.as_deref() {
        Some(key) => {
            editor.handle_key(key);
        }
        None => {
            editor.confirm();
        }
    }
    let changed = editor.tags.len() != before;

    tracing::debug!(changed, tags = editor.tags.len(), "Tag editor add");

    Ok(Json(DataResponse {
        data: TagEditResponse { changed, editor },
    }))
}

/// POST /api/v1/suggestions/tags/remove
pub async fn remove_tag(Json(input): Json<RemoveTagRequest>) -> AppResult<impl IntoResponse> {
    let mut editor = input.editor;
    let changed = editor.remove(&input.tag);

    Ok(Json(DataResponse {
        data: TagEditResponse { changed, editor },
    }))
}
