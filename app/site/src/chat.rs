//! JSON handlers for chat widget sessions.

use crate::{session::SessionHandle, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dcore::{ChatMessage, QuickOption, Visibility, Widget, chat};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Snapshot of a session as seen by the widget.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub id: String,
    pub title: &'static str,
    pub status: &'static str,
    pub visibility: Visibility,
    pub messages: Vec<ChatMessage>,
    pub quick_options: Vec<QuickOption>,
    /// Replies still waiting on their typing delay.
    pub pending: usize,
}

impl SessionView {
    fn new(id: Ulid, widget: &mut Widget) -> Self {
        Self {
            id: id.to_string(),
            title: chat::TITLE,
            status: chat::STATUS,
            visibility: widget.visibility(),
            messages: widget.messages(),
            quick_options: widget.quick_options().to_vec(),
            pending: widget.pending(),
        }
    }
}

/// Body of `POST /chat/sessions/{id}/messages`.
#[derive(Debug, Deserialize)]
pub struct SendRequest {
    pub text: String,
}

/// Body of `POST /chat/sessions/{id}/quick`.
#[derive(Debug, Deserialize)]
pub struct QuickRequest {
    pub label: String,
}

/// Errors answered as `{"error": ...}`.
#[derive(Debug)]
pub enum ApiError {
    /// No live session with that id.
    UnknownSession,
    /// The quick option is unknown or no longer offered.
    QuickOptionUnavailable,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::UnknownSession => (StatusCode::NOT_FOUND, "unknown chat session"),
            Self::QuickOptionUnavailable => {
                (StatusCode::CONFLICT, "quick option is not available")
            }
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

fn lookup(state: &AppState, id: &str) -> Result<(Ulid, SessionHandle), ApiError> {
    let id = Ulid::from_string(id).map_err(|_| ApiError::UnknownSession)?;
    let session = state.sessions.get(&id).ok_or(ApiError::UnknownSession)?;
    Ok((id, session))
}

/// `POST /chat/sessions`
pub async fn create(State(state): State<AppState>) -> impl IntoResponse {
    let (id, session) = state.sessions.create();
    let view = SessionView::new(id, &mut session.lock());
    (StatusCode::CREATED, Json(view))
}

/// `GET /chat/sessions/{id}`
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, ApiError> {
    let (id, session) = lookup(&state, &id)?;
    let view = SessionView::new(id, &mut session.lock());
    Ok(Json(view))
}

/// `POST /chat/sessions/{id}/messages`: 202 with the logged message, 204
/// when the text was blank.
pub async fn send(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SendRequest>,
) -> Result<Response, ApiError> {
    let (_, session) = lookup(&state, &id)?;
    let sent = session.lock().submit(&request.text);
    Ok(match sent {
        Some(message) => (StatusCode::ACCEPTED, Json(message)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

/// `POST /chat/sessions/{id}/quick`
pub async fn quick(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<QuickRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (_, session) = lookup(&state, &id)?;
    let sent = session.lock().select_quick_option(&request.label);
    let message = sent.ok_or(ApiError::QuickOptionUnavailable)?;
    Ok((StatusCode::ACCEPTED, Json(message)))
}

/// `POST /chat/sessions/{id}/toggle`
pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (_, session) = lookup(&state, &id)?;
    let visibility = session.lock().toggle();
    Ok(Json(serde_json::json!({ "visibility": visibility })))
}

/// `DELETE /chat/sessions/{id}`
pub async fn end(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = Ulid::from_string(&id).map_err(|_| ApiError::UnknownSession)?;
    if state.sessions.remove(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::UnknownSession)
    }
}
