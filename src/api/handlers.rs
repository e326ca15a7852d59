//! Axum route handlers for the notes API.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::ApiError;
use super::AppState;
use crate::entity::{Note, NoteInput};

/// A note as sent to clients: no storage key, plus `secondaryContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub updated_at: Option<DateTime<Utc>>,
    /// Mirror of `description` that older clients read.
    pub secondary_content: String,
}

impl From<Note> for NoteView {
    fn from(note: Note) -> Self {
        Self {
            secondary_content: note.description.clone(),
            id: note.id,
            title: note.title,
            description: note.description,
            content: note.content,
            updated_at: note.updated_at,
        }
    }
}

// GET /api/notes
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<NoteView>>, ApiError> {
    let notes = state
        .repo
        .list_all()
        .map_err(ApiError::internal("Failed to load notes."))?;
    Ok(Json(notes.into_iter().map(NoteView::from).collect()))
}

// GET /api/notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NoteView>, ApiError> {
    state
        .repo
        .find_by_id(&id)
        .map_err(ApiError::internal("Failed to load note."))?
        .map(|note| Json(NoteView::from(note)))
        .ok_or(ApiError::NotFound)
}

// POST /api/notes
pub async fn create_note(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<NoteView>), ApiError> {
    let note = state
        .repo
        .create(NoteInput::from_body(&body))
        .map_err(ApiError::internal("Failed to create note."))?;
    Ok((StatusCode::CREATED, Json(NoteView::from(note))))
}

// PUT /api/notes/{id}
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<NoteView>, ApiError> {
    state
        .repo
        .update(&id, NoteInput::from_body(&body))
        .map_err(ApiError::internal("Failed to update note."))?
        .map(|note| Json(NoteView::from(note)))
        .ok_or(ApiError::NotFound)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
}

// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
