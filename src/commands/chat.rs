//! Chat commands
//!
//! Backend commands for chat sessions: transcript persistence plus the
//! round-trip to the chat webhook. Webhook failures surface as error strings
//! for the front-end's manual retry; the user message is already persisted
//! by then, so a retry re-sends without duplicating it.

use crate::dashboard::DashboardCache;
use crate::file_storage::chats;
use crate::models::{
    ChatMessage, ChatSession, MessageRole, RenameSessionRequest, SendMessageRequest,
    SendMessageResponse,
};
use crate::server::{EventBroadcaster, EVENT_CHAT_MESSAGE};
use crate::webhook::WebhookClient;
use chrono::Utc;
use std::path::Path;
use uuid::Uuid;

/// Create a new chat session
pub async fn create_chat_session(data_dir: &Path) -> Result<ChatSession, String> {
    let session_id = Uuid::new_v4().to_string();
    chats::create_chat_session(data_dir, &session_id).map_err(|e| e.to_string())
}

/// List all chat sessions, newest first
pub async fn list_chat_sessions(data_dir: &Path) -> Result<Vec<ChatSession>, String> {
    chats::list_chat_sessions(data_dir).map_err(|e| e.to_string())
}

/// Get all messages for a chat session
pub async fn get_chat_messages(
    data_dir: &Path,
    session_id: String,
) -> Result<Vec<ChatMessage>, String> {
    chats::get_messages(data_dir, &session_id).map_err(|e| e.to_string())
}

/// Send a message: persist the user message, forward it to the chat
/// webhook, persist the assistant reply, and notify WebSocket clients.
pub async fn send_chat_message(
    data_dir: &Path,
    webhook: &WebhookClient,
    broadcaster: &EventBroadcaster,
    request: SendMessageRequest,
) -> Result<SendMessageResponse, String> {
    if request.content.trim().is_empty() {
        return Err("Message content cannot be empty".to_string());
    }

    // Store user message first; it must survive a webhook failure so the
    // transcript matches what the user sees
    let user_message = ChatMessage {
        id: Uuid::new_v4().to_string(),
        session_id: request.session_id.clone(),
        role: MessageRole::User,
        content: request.content.clone(),
        has_dashboard: false,
        created_at: Utc::now(),
    };
    chats::append_message(data_dir, &user_message)
        .map_err(|e| format!("Failed to store user message: {}", e))?;

    broadcaster.broadcast(EVENT_CHAT_MESSAGE, &user_message);

    // Forward to the webhook and wait for the reply
    let reply = webhook
        .send_message(&request.content, &request.session_id)
        .await?;

    let assistant_message = ChatMessage {
        id: Uuid::new_v4().to_string(),
        session_id: request.session_id.clone(),
        role: MessageRole::Assistant,
        content: reply,
        has_dashboard: false,
        created_at: Utc::now(),
    };
    chats::append_message(data_dir, &assistant_message)
        .map_err(|e| format!("Failed to store assistant message: {}", e))?;

    broadcaster.broadcast(EVENT_CHAT_MESSAGE, &assistant_message);

    Ok(SendMessageResponse {
        user_message,
        assistant_message,
    })
}

/// Remove all messages from a session, dropping their cached dashboards
pub async fn clear_chat_messages(
    data_dir: &Path,
    cache: &DashboardCache,
    session_id: String,
) -> Result<(), String> {
    let messages = chats::get_messages(data_dir, &session_id).map_err(|e| e.to_string())?;
    for message in &messages {
        cache.remove(&message.id);
    }
    chats::clear_messages(data_dir, &session_id).map_err(|e| e.to_string())
}

/// Delete a session and drop its cached dashboards
pub async fn delete_chat_session(
    data_dir: &Path,
    cache: &DashboardCache,
    session_id: String,
) -> Result<(), String> {
    if let Ok(messages) = chats::get_messages(data_dir, &session_id) {
        for message in &messages {
            cache.remove(&message.id);
        }
    }
    chats::delete_chat_file(data_dir, &session_id).map_err(|e| e.to_string())
}

/// Rename a session
pub async fn rename_chat_session(
    data_dir: &Path,
    request: RenameSessionRequest,
) -> Result<(), String> {
    if request.title.trim().is_empty() {
        return Err("Session title cannot be empty".to_string());
    }
    chats::rename_session(data_dir, &request.session_id, request.title.trim())
        .map_err(|e| e.to_string())
}
