//! In-process dashboard cache
//!
//! Message-id → rendered HTML map, shared across request handlers. The map
//! is unbounded with no eviction or TTL, matching the sessionStorage cache
//! of the front-end: a session's dashboard count is small and documents are
//! cheap to hold.

use crate::utils::lock_mutex_recover;
use std::collections::HashMap;
use std::sync::Mutex;

/// Thread-safe cache of generated dashboard documents keyed by message ID
pub struct DashboardCache {
    entries: Mutex<HashMap<String, String>>,
}

impl DashboardCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Get the cached document for a message, if any
    pub fn get(&self, message_id: &str) -> Option<String> {
        lock_mutex_recover(&self.entries).get(message_id).cloned()
    }

    /// Store a document for a message, replacing any previous entry
    pub fn insert(&self, message_id: &str, html: String) {
        lock_mutex_recover(&self.entries).insert(message_id.to_string(), html);
    }

    pub fn contains(&self, message_id: &str) -> bool {
        lock_mutex_recover(&self.entries).contains_key(message_id)
    }

    /// Remove a single entry (e.g. when its message is deleted)
    pub fn remove(&self, message_id: &str) {
        lock_mutex_recover(&self.entries).remove(message_id);
    }

    /// Drop all cached documents
    pub fn clear(&self) {
        lock_mutex_recover(&self.entries).clear();
    }

    pub fn len(&self) -> usize {
        lock_mutex_recover(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DashboardCache {
    fn default() -> Self {
        Self::new()
    }
}
