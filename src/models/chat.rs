// Chat Models - Canonical type definitions for chat sessions and messages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Message Role Enum
// ============================================================================

/// Role of a chat message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            _ => Err(format!(
                "Invalid message role: '{}'. Expected 'user' or 'assistant'",
                s
            )),
        }
    }
}

// ============================================================================
// Core Chat Types
// ============================================================================

/// A single message in a chat session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Unique identifier for the message
    pub id: String,
    /// Session this message belongs to
    pub session_id: String,
    /// Who sent the message
    pub role: MessageRole,
    /// Message text content
    pub content: String,
    /// Whether a dashboard was generated for this message
    #[serde(default)]
    pub has_dashboard: bool,
    /// When the message was created
    pub created_at: DateTime<Utc>,
}

/// A chat session (transcript) with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    /// Unique identifier for the session
    pub id: String,
    /// Display title (defaults to the first user message, truncated)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Number of messages in the session
    pub message_count: usize,
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request to send a message in a chat session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub session_id: String,
    pub content: String,
}

/// Response from sending a message: the stored user message plus the
/// assistant reply from the chat webhook
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub user_message: ChatMessage,
    pub assistant_message: ChatMessage,
}

/// Request to rename a chat session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameSessionRequest {
    pub session_id: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_message_role_round_trip() {
        assert_eq!(MessageRole::from_str("user"), Ok(MessageRole::User));
        assert_eq!(
            MessageRole::from_str("ASSISTANT"),
            Ok(MessageRole::Assistant)
        );
        assert!(MessageRole::from_str("system").is_err());
    }

    #[test]
    fn test_chat_message_serde_camel_case() {
        let message = ChatMessage {
            id: "msg-1".to_string(),
            session_id: "session-1".to_string(),
            role: MessageRole::User,
            content: "hello".to_string(),
            has_dashboard: false,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&message).unwrap();
        assert!(json.get("sessionId").is_some());
        assert!(json.get("hasDashboard").is_some());
        assert_eq!(json["role"], "user");
    }
}
