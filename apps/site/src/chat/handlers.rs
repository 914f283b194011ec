//! Axum route handlers for the EduBot JSON endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use super::faq::reply_for;
use super::store::{ChatMessage, Role};
use crate::state::AppState;
use crate::validation::is_blank;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub conversation_id: Option<Uuid>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub conversation_id: Uuid,
    pub reply: ChatMessage,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub conversation_id: Uuid,
    pub messages: Vec<ChatMessage>,
}

/// Chat endpoint errors, rendered as JSON for the widget.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Conversation {0} not found")]
    NotFound(Uuid),
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ChatError::EmptyMessage => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ChatError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string()
            }
        }));

        (status, body).into_response()
    }
}

/// POST /api/chat
///
/// Records the visitor message, waits the configured typing delay, then
/// records and returns EduBot's answer. An unknown or missing conversation id
/// opens a fresh conversation.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ChatError> {
    if is_blank(&request.message) {
        return Err(ChatError::EmptyMessage);
    }

    let conversation_id = match request.conversation_id {
        Some(id) if state.chats.contains(id) => id,
        _ => {
            let id = state.chats.start();
            debug!(
                "Opened conversation {id} ({} active)",
                state.chats.len()
            );
            id
        }
    };

    state
        .chats
        .push(conversation_id, Role::User, &request.message)
        .ok_or(ChatError::NotFound(conversation_id))?;

    if !state.config.chat_reply_delay.is_zero() {
        tokio::time::sleep(state.config.chat_reply_delay).await;
    }

    let (topic, answer) = reply_for(&request.message);
    debug!("EduBot answered topic '{topic}' in {conversation_id}");

    let (conversation_id, reply) = match state.chats.push(conversation_id, Role::Assistant, answer)
    {
        Some(reply) => (conversation_id, reply),
        None => {
            // Evicted during the typing delay: carry the exchange over to a
            // fresh conversation.
            let fresh = state.chats.start();
            debug!("Conversation {conversation_id} evicted, continuing in {fresh}");
            state
                .chats
                .push(fresh, Role::User, &request.message)
                .ok_or(ChatError::NotFound(fresh))?;
            let reply = state
                .chats
                .push(fresh, Role::Assistant, answer)
                .ok_or(ChatError::NotFound(fresh))?;
            (fresh, reply)
        }
    };

    let messages = state
        .chats
        .transcript(conversation_id)
        .ok_or(ChatError::NotFound(conversation_id))?;

    Ok(Json(ChatResponse {
        conversation_id,
        reply,
        messages,
    }))
}

/// GET /api/chat/:id
pub async fn handle_transcript(
    State(state): State<AppState>,
    Path(conversation_id): Path<Uuid>,
) -> Result<Json<TranscriptResponse>, ChatError> {
    let messages = state
        .chats
        .transcript(conversation_id)
        .ok_or(ChatError::NotFound(conversation_id))?;

    Ok(Json(TranscriptResponse {
        conversation_id,
        messages,
    }))
}
