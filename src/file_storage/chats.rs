//! Chat transcript storage
//!
//! Each session is one JSON file in `{data_dir}/chats/{session_id}.json`
//! with the messages embedded, so a transcript loads and saves as a unit.

use super::{ensure_dir, read_json, write_json, StorageError, StorageResult};
use crate::models::{ChatMessage, ChatSession};
use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Version of the chat file format
const CHAT_FILE_VERSION: u32 = 1;

/// On-disk chat session file with embedded messages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatFile {
    /// File format version
    pub version: u32,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub messages: Vec<ChatMessage>,
}

impl ChatFile {
    pub fn new(session_id: &str) -> Self {
        let now = Utc::now();
        Self {
            version: CHAT_FILE_VERSION,
            id: session_id.to_string(),
            title: None,
            created_at: now,
            updated_at: now,
            messages: Vec::new(),
        }
    }

    /// Session metadata view of this file
    pub fn to_session(&self) -> ChatSession {
        ChatSession {
            id: self.id.clone(),
            title: self.title.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            message_count: self.messages.len(),
        }
    }
}

// ============================================================================
// Path Helpers
// ============================================================================

/// Directory holding all chat files
pub fn chats_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("chats")
}

fn chat_file_path(data_dir: &Path, session_id: &str) -> PathBuf {
    chats_dir(data_dir).join(format!("{}.json", session_id))
}

// ============================================================================
// File Operations
// ============================================================================

pub fn chat_file_exists(data_dir: &Path, session_id: &str) -> bool {
    chat_file_path(data_dir, session_id).exists()
}

pub fn read_chat_file(data_dir: &Path, session_id: &str) -> StorageResult<ChatFile> {
    let path = chat_file_path(data_dir, session_id);
    if !path.exists() {
        return Err(StorageError::SessionNotFound(session_id.to_string()));
    }
    read_json(&path)
}

pub fn save_chat_file(data_dir: &Path, chat_file: &ChatFile) -> StorageResult<()> {
    ensure_dir(&chats_dir(data_dir))?;
    write_json(&chat_file_path(data_dir, &chat_file.id), chat_file)
}

pub fn delete_chat_file(data_dir: &Path, session_id: &str) -> StorageResult<()> {
    let path = chat_file_path(data_dir, session_id);
    if !path.exists() {
        return Err(StorageError::SessionNotFound(session_id.to_string()));
    }
    fs::remove_file(&path).map_err(|e| StorageError::Io { path, source: e })
}

/// List all chat files, newest first. Corrupt files are skipped with a
/// warning so one bad transcript can't hide the rest.
pub fn list_chat_files(data_dir: &Path) -> StorageResult<Vec<ChatFile>> {
    let dir = chats_dir(data_dir);
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(&dir).map_err(|e| StorageError::Io {
        path: dir.clone(),
        source: e,
    })?;

    let mut chat_files = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        match read_json::<ChatFile>(&path) {
            Ok(chat_file) => chat_files.push(chat_file),
            Err(e) => warn!("Skipping unreadable chat file {}: {}", path.display(), e),
        }
    }

    chat_files.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    Ok(chat_files)
}

// ============================================================================
// Session Operations
// ============================================================================

/// Create a new chat session file
pub fn create_chat_session(data_dir: &Path, session_id: &str) -> StorageResult<ChatSession> {
    let chat_file = ChatFile::new(session_id);
    save_chat_file(data_dir, &chat_file)?;
    Ok(chat_file.to_session())
}

/// Get a chat session's metadata by ID
pub fn get_chat_session(data_dir: &Path, session_id: &str) -> StorageResult<ChatSession> {
    Ok(read_chat_file(data_dir, session_id)?.to_session())
}

/// List all chat sessions, newest first
pub fn list_chat_sessions(data_dir: &Path) -> StorageResult<Vec<ChatSession>> {
    Ok(list_chat_files(data_dir)?
        .iter()
        .map(ChatFile::to_session)
        .collect())
}

/// Append a message to a session, creating the session file if needed.
/// Sets the session title from the first user message.
pub fn append_message(data_dir: &Path, message: &ChatMessage) -> StorageResult<()> {
    let mut chat_file = if chat_file_exists(data_dir, &message.session_id) {
        read_chat_file(data_dir, &message.session_id)?
    } else {
        ChatFile::new(&message.session_id)
    };

    if chat_file.title.is_none() && message.role == crate::models::MessageRole::User {
        chat_file.title = Some(truncate_title(&message.content));
    }

    chat_file.messages.push(message.clone());
    chat_file.updated_at = Utc::now();
    save_chat_file(data_dir, &chat_file)
}

/// Get all messages for a session
pub fn get_messages(data_dir: &Path, session_id: &str) -> StorageResult<Vec<ChatMessage>> {
    Ok(read_chat_file(data_dir, session_id)?.messages)
}

/// Remove all messages from a session, keeping the session itself
pub fn clear_messages(data_dir: &Path, session_id: &str) -> StorageResult<()> {
    let mut chat_file = read_chat_file(data_dir, session_id)?;
    chat_file.messages.clear();
    chat_file.updated_at = Utc::now();
    save_chat_file(data_dir, &chat_file)
}

/// Update a session's display title
pub fn rename_session(data_dir: &Path, session_id: &str, title: &str) -> StorageResult<()> {
    let mut chat_file = read_chat_file(data_dir, session_id)?;
    chat_file.title = Some(title.to_string());
    chat_file.updated_at = Utc::now();
    save_chat_file(data_dir, &chat_file)
}

/// First user message truncated to a display title
fn truncate_title(content: &str) -> String {
    const MAX_TITLE_CHARS: usize = 48;
    let trimmed = content.trim();
    if trimmed.chars().count() <= MAX_TITLE_CHARS {
        trimmed.to_string()
    } else {
        let truncated: String = trimmed.chars().take(MAX_TITLE_CHARS).collect();
        format!("{}…", truncated.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageRole;
    use tempfile::TempDir;

    fn make_message(session_id: &str, role: MessageRole, content: &str) -> ChatMessage {
        ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            session_id: session_id.to_string(),
            role,
            content: content.to_string(),
            has_dashboard: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_create_and_get_session() {
        let dir = TempDir::new().unwrap();
        let session = create_chat_session(dir.path(), "session-1").unwrap();
        assert_eq!(session.id, "session-1");
        assert_eq!(session.message_count, 0);

        let loaded = get_chat_session(dir.path(), "session-1").unwrap();
        assert_eq!(loaded.id, "session-1");
    }

    #[test]
    fn test_get_missing_session_is_not_found() {
        let dir = TempDir::new().unwrap();
        let result = get_chat_session(dir.path(), "nope");
        assert!(matches!(result, Err(StorageError::SessionNotFound(_))));
    }

    #[test]
    fn test_append_message_creates_session_and_sets_title() {
        let dir = TempDir::new().unwrap();
        let message = make_message("session-1", MessageRole::User, "Show revenue by quarter");
        append_message(dir.path(), &message).unwrap();

        let session = get_chat_session(dir.path(), "session-1").unwrap();
        assert_eq!(session.message_count, 1);
        assert_eq!(session.title.as_deref(), Some("Show revenue by quarter"));
    }

    #[test]
    fn test_title_comes_from_first_user_message_only() {
        let dir = TempDir::new().unwrap();
        append_message(
            dir.path(),
            &make_message("s", MessageRole::User, "first question"),
        )
        .unwrap();
        append_message(dir.path(), &make_message("s", MessageRole::Assistant, "reply"))
            .unwrap();
        append_message(
            dir.path(),
            &make_message("s", MessageRole::User, "second question"),
        )
        .unwrap();

        let session = get_chat_session(dir.path(), "s").unwrap();
        assert_eq!(session.title.as_deref(), Some("first question"));
        assert_eq!(session.message_count, 3);
    }

    #[test]
    fn test_long_title_is_truncated() {
        let dir = TempDir::new().unwrap();
        let long = "x".repeat(100);
        append_message(dir.path(), &make_message("s", MessageRole::User, &long)).unwrap();

        let session = get_chat_session(dir.path(), "s").unwrap();
        let title = session.title.unwrap();
        assert!(title.chars().count() <= 49);
        assert!(title.ends_with('…'));
    }

    #[test]
    fn test_clear_messages_keeps_session() {
        let dir = TempDir::new().unwrap();
        append_message(dir.path(), &make_message("s", MessageRole::User, "hi")).unwrap();
        clear_messages(dir.path(), "s").unwrap();

        let session = get_chat_session(dir.path(), "s").unwrap();
        assert_eq!(session.message_count, 0);
        assert!(get_messages(dir.path(), "s").unwrap().is_empty());
    }

    #[test]
    fn test_list_sessions_newest_first_and_skips_corrupt() {
        let dir = TempDir::new().unwrap();
        append_message(dir.path(), &make_message("older", MessageRole::User, "a")).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        append_message(dir.path(), &make_message("newer", MessageRole::User, "b")).unwrap();

        // A corrupt file in the directory must not break listing
        fs::write(chats_dir(dir.path()).join("corrupt.json"), "{oops").unwrap();

        let sessions = list_chat_sessions(dir.path()).unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].id, "newer");
        assert_eq!(sessions[1].id, "older");
    }

    #[test]
    fn test_delete_session() {
        let dir = TempDir::new().unwrap();
        create_chat_session(dir.path(), "s").unwrap();
        delete_chat_file(dir.path(), "s").unwrap();
        assert!(!chat_file_exists(dir.path(), "s"));
    }

    #[test]
    fn test_rename_session() {
        let dir = TempDir::new().unwrap();
        create_chat_session(dir.path(), "s").unwrap();
        rename_session(dir.path(), "s", "Quarterly numbers").unwrap();

        let session = get_chat_session(dir.path(), "s").unwrap();
        assert_eq!(session.title.as_deref(), Some("Quarterly numbers"));
    }
}
