use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use phanloai_classify::ModelKind;
use phanloai_persist::{ClassificationOutcome, Message, Thread};

use crate::error::{ApiError, ApiResult};
use crate::extract::CurrentUser;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SendTurnRequest {
    pub thread_id: Option<String>,
    pub user_prompt: Option<String>,
    pub model_type: Option<u8>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadResponse {
    pub id: String,
    pub title: String,
    pub messages: Vec<MessageResponse>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub from: &'static str,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_type: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<ClassificationOutcome>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        match message {
            Message::User { content, timestamp } => Self {
                from: "USER",
                content,
                timestamp,
                model_type: None,
                classification: None,
            },
            Message::Assistant {
                content,
                timestamp,
                model,
                classification,
            } => Self {
                from: "ASSISTANT",
                content,
                timestamp,
                model_type: model.map(u8::from),
                classification,
            },
        }
    }
}

impl From<Thread> for ThreadResponse {
    fn from(thread: Thread) -> Self {
        Self {
            id: thread.id,
            title: thread.title,
            messages: thread.messages.into_iter().map(|m| m.into()).collect(),
            created_at: thread.created_at,
        }
    }
}

/// List the caller's threads, newest first.
pub async fn list_chats(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Json<Vec<ThreadResponse>>> {
    let threads = state.conversations.list_threads(&user.user_id).await?;
    Ok(Json(threads.into_iter().map(|t| t.into()).collect()))
}

/// Run one chat turn and return the updated-or-created thread.
pub async fn send_turn(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Json(req): Json<SendTurnRequest>,
) -> ApiResult<Json<ThreadResponse>> {
    let model = match req.model_type {
        None => ModelKind::default(),
        Some(selector) => ModelKind::try_from(selector).map_err(ApiError::BadRequest)?,
    };

    let thread = state
        .engine
        .handle_turn(
            &user.user_id,
            req.thread_id.as_deref(),
            req.user_prompt.as_deref().unwrap_or(""),
            model,
        )
        .await?;

    Ok(Json(thread.into()))
}
