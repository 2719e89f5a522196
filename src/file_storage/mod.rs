//! File-backed storage for chat transcripts
//!
//! Chat history lives in JSON files under the configured data directory
//! (`{data_dir}/chats/{session_id}.json`), replacing the browser-local
//! storage of the front-end. Writes are atomic (temp file + rename) under
//! an exclusive file lock so concurrent handlers can't interleave.

pub mod chats;

use fs2::FileExt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from file storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize {what}: {source}")]
    Serialize {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Chat session not found: {0}")]
    SessionNotFound(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Create a directory (and parents) if it doesn't exist
pub fn ensure_dir(path: &Path) -> StorageResult<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| StorageError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    Ok(())
}

/// Read and deserialize a JSON file
pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> StorageResult<T> {
    let contents = fs::read_to_string(path).map_err(|e| StorageError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&contents).map_err(|e| StorageError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Serialize and atomically write a JSON file
pub fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> StorageResult<()> {
    let contents = serde_json::to_string_pretty(value).map_err(|e| StorageError::Serialize {
        what: path.display().to_string(),
        source: e,
    })?;

    atomic_write(path, &contents)
}

/// Write content to a temp file in the same directory, then rename over the
/// target. The temp file is exclusively locked for the duration of the write
/// so a second writer can't produce a torn file.
pub fn atomic_write(path: &Path, content: &str) -> StorageResult<()> {
    let io_err = |e: std::io::Error| StorageError::Io {
        path: path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");

    {
        let mut tmp = fs::File::create(&tmp_path).map_err(io_err)?;
        tmp.lock_exclusive().map_err(io_err)?;
        tmp.write_all(content.as_bytes()).map_err(io_err)?;
        tmp.sync_all().map_err(io_err)?;
        let _ = fs2::FileExt::unlock(&tmp);
    }

    fs::rename(&tmp_path, path).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_write_then_read_json_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("sample.json");

        let value = Sample {
            name: "astra".to_string(),
            count: 3,
        };
        write_json(&path, &value).unwrap();

        let loaded: Sample = read_json(&path).unwrap();
        assert_eq!(loaded, value);
        // No temp file left behind
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result: StorageResult<Sample> = read_json(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(StorageError::Io { .. })));
    }

    #[test]
    fn test_read_corrupt_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "not json at all").unwrap();

        let result: StorageResult<Sample> = read_json(&path);
        assert!(matches!(result, Err(StorageError::Parse { .. })));
    }
}
