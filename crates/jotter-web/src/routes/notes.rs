//! The four CRUD operations over the notes collection.
//!
//! Required fields are checked before any store access; absent and empty
//! values are rejected the same way, but whitespace-only values pass. The
//! validation and not-found messages below are part of the API contract and
//! surface verbatim in the UI.

use crate::server::AppState;
use crate::WebError;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use jotter_core::{Note, NotesError};
use serde::Deserialize;
use serde_json::{json, Value};

pub fn notes_routes() -> Router<AppState> {
    Router::new().route(
        "/notes",
        get(list_notes)
            .post(create_note)
            .put(update_note)
            .delete(delete_note),
    )
}

async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, WebError> {
    let notes = state.store.list_notes().await?;
    Ok(Json(notes))
}

#[derive(Debug, Default, Deserialize)]
struct CreateNoteRequest {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

async fn create_note(
    State(state): State<AppState>,
    body: Option<Json<CreateNoteRequest>>,
) -> Result<(StatusCode, Json<Note>), WebError> {
    let req = body.map(|Json(req)| req).unwrap_or_default();

    let (Some(title), Some(content)) = (present(req.title), present(req.content)) else {
        return Err(NotesError::Validation("Title and content are required".to_string()).into());
    };

    let note = state.store.create_note(&title, &content).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

#[derive(Debug, Default, Deserialize)]
struct UpdateNoteRequest {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

async fn update_note(
    State(state): State<AppState>,
    body: Option<Json<UpdateNoteRequest>>,
) -> Result<Json<Note>, WebError> {
    let req = body.map(|Json(req)| req).unwrap_or_default();

    let (Some(id), Some(title), Some(content)) =
        (present(req.id), present(req.title), present(req.content))
    else {
        return Err(
            NotesError::Validation("ID, title, and content are required".to_string()).into(),
        );
    };

    let note = state.store.update_note(&id, &title, &content).await?;
    Ok(Json(note))
}

#[derive(Debug, Deserialize)]
struct DeleteNoteQuery {
    #[serde(default)]
    id: Option<String>,
}

async fn delete_note(
    State(state): State<AppState>,
    Query(query): Query<DeleteNoteQuery>,
) -> Result<Json<Value>, WebError> {
    let Some(id) = present(query.id) else {
        return Err(NotesError::Validation("ID is required".to_string()).into());
    };

    state.store.delete_note(&id).await?;
    Ok(Json(json!({ "message": "Note deleted" })))
}

/// Treat absent and empty as equally missing; whitespace-only passes.
fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
