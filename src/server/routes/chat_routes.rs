//! Chat command routing
//!
//! Handles chat session and messaging commands:
//! create_chat_session, list_chat_sessions, get_chat_messages,
//! send_chat_message, clear_chat_messages, delete_chat_session,
//! rename_chat_session

use crate::commands;
use crate::models::{RenameSessionRequest, SendMessageRequest};
use serde_json::Value;

use super::{get_arg, route_async, route_unit_async, ServerAppState};

/// Check if a command is a chat route
pub fn is_chat_command(cmd: &str) -> bool {
    matches!(
        cmd,
        "create_chat_session"
            | "list_chat_sessions"
            | "get_chat_messages"
            | "send_chat_message"
            | "clear_chat_messages"
            | "delete_chat_session"
            | "rename_chat_session"
    )
}

/// Route chat commands
pub async fn route_chat_command(
    cmd: &str,
    args: Value,
    state: &ServerAppState,
) -> Result<Value, String> {
    match cmd {
        "create_chat_session" => {
            route_async!(cmd, commands::chat::create_chat_session(&state.data_dir))
        }

        "list_chat_sessions" => {
            route_async!(cmd, commands::chat::list_chat_sessions(&state.data_dir))
        }

        "get_chat_messages" => {
            let session_id: String = get_arg(&args, "sessionId")?;
            route_async!(
                cmd,
                commands::chat::get_chat_messages(&state.data_dir, session_id)
            )
        }

        "send_chat_message" => {
            let session_id: String = get_arg(&args, "sessionId")?;
            let content: String = get_arg(&args, "content")?;

            let request = SendMessageRequest {
                session_id,
                content,
            };

            route_async!(
                cmd,
                commands::chat::send_chat_message(
                    &state.data_dir,
                    &state.webhook,
                    &state.broadcaster,
                    request
                )
            )
        }

        "clear_chat_messages" => {
            let session_id: String = get_arg(&args, "sessionId")?;
            route_unit_async!(commands::chat::clear_chat_messages(
                &state.data_dir,
                &state.dashboard_cache,
                session_id
            ))
        }

        "delete_chat_session" => {
            let session_id: String = get_arg(&args, "sessionId")?;
            route_unit_async!(commands::chat::delete_chat_session(
                &state.data_dir,
                &state.dashboard_cache,
                session_id
            ))
        }

        "rename_chat_session" => {
            let session_id: String = get_arg(&args, "sessionId")?;
            let title: String = get_arg(&args, "title")?;

            let request = RenameSessionRequest { session_id, title };

            route_unit_async!(commands::chat::rename_chat_session(
                &state.data_dir,
                request
            ))
        }

        _ => Err(format!("Unknown chat route: {}", cmd)),
    }
}
