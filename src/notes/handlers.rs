use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, info, instrument};

use crate::{
    auth::AuthAccount,
    error::ApiError,
    notes::{
        dto::{NoteResponse, SaveNoteRequest, SaveNoteResponse},
        repo::Note,
    },
    state::AppState,
};

pub fn note_routes() -> Router<AppState> {
    Router::new().route("/note", post(save_note).get(get_note))
}

#[instrument(skip(state, payload))]
pub async fn save_note(
    State(state): State<AppState>,
    AuthAccount(claims): AuthAccount,
    Json(payload): Json<SaveNoteRequest>,
) -> Result<Json<SaveNoteResponse>, ApiError> {
    Note::upsert(&state.db, &claims.email, &payload.content).await?;

    info!(email = %claims.email, bytes = payload.content.len(), "note saved");
    Ok(Json(SaveNoteResponse {
        message: "Note saved successfully".into(),
    }))
}

#[instrument(skip(state))]
pub async fn get_note(
    State(state): State<AppState>,
    AuthAccount(claims): AuthAccount,
) -> Result<Json<NoteResponse>, ApiError> {
    let content = Note::find_by_email(&state.db, &claims.email)
        .await?
        .map(|n| n.content)
        .unwrap_or_default();

    debug!(email = %claims.email, bytes = content.len(), "note loaded");
    Ok(Json(NoteResponse { content }))
}
