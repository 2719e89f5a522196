// Utility functions

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

/// Get the Astra home directory (~/.astra).
///
/// Falls back to a relative `.astra` directory when the home directory
/// cannot be determined (e.g., stripped-down containers).
pub fn astra_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".astra")
}

/// Extension trait for Result that provides convenient error context methods.
/// Converts any error to a String with a descriptive message prefix.
///
/// # Example
/// ```ignore
/// use crate::utils::ResultExt;
///
/// let file = std::fs::read_to_string("config.yaml")
///     .with_context("Failed to read config file")?;
/// ```
pub trait ResultExt<T> {
    /// Converts the error to a String with context message.
    fn with_context(self, msg: &str) -> Result<T, String>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn with_context(self, msg: &str) -> Result<T, String> {
        self.map_err(|e| format!("{}: {}", msg, e))
    }
}

/// Safely acquire a mutex lock, recovering from poisoning by returning the guard.
/// This is useful when you want to continue even if a previous thread panicked.
/// The mutex state may be inconsistent, so use with caution.
pub fn lock_mutex_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            log::warn!("Mutex was poisoned, recovering: {}", poisoned);
            poisoned.into_inner()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_astra_dir_ends_with_dot_astra() {
        let dir = astra_dir();
        assert!(dir.ends_with(".astra"));
    }

    #[test]
    fn test_with_context_prefixes_message() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        let err = result.with_context("Failed to read config").unwrap_err();
        assert!(err.starts_with("Failed to read config: "));
        assert!(err.contains("no such file"));
    }

    #[test]
    fn test_lock_mutex_recover_returns_guard() {
        let mutex = Mutex::new(5);
        let guard = lock_mutex_recover(&mutex);
        assert_eq!(*guard, 5);
    }
}
