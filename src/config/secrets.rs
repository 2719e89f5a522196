// Secure storage for the generative API key
//
// The key is stored in ~/.astra/secrets.toml (never in config.yaml, which
// gets shared and committed). Environment variables take precedence so
// deployments can inject the key without touching disk.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variables checked (in order) for the API key
const API_KEY_ENV_VARS: &[&str] = &["ASTRA_API_KEY", "GEMINI_API_KEY"];

/// Secrets stored in ~/.astra/secrets.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SecretsConfig {
    /// Generative API key
    #[serde(default)]
    pub api_key: Option<String>,
}

impl SecretsConfig {
    /// Get the secrets file path (~/.astra/secrets.toml)
    pub fn secrets_path() -> PathBuf {
        crate::utils::astra_dir().join("secrets.toml")
    }

    /// Load secrets from disk; a missing file yields empty secrets
    pub fn load() -> Result<Self> {
        let path = Self::secrets_path();

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| anyhow!("Failed to read secrets file '{}': {}", path.display(), e))?;

        toml::from_str(&contents)
            .map_err(|e| anyhow!("Failed to parse secrets file '{}': {}", path.display(), e))
    }

    /// Save secrets to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::secrets_path();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    anyhow!(
                        "Failed to create secrets directory '{}': {}",
                        parent.display(),
                        e
                    )
                })?;
            }
        }

        let contents =
            toml::to_string_pretty(self).map_err(|e| anyhow!("Failed to serialize secrets: {}", e))?;

        fs::write(&path, contents)
            .map_err(|e| anyhow!("Failed to write secrets file '{}': {}", path.display(), e))?;

        // Owner read/write only on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&path, permissions).map_err(|e| {
                anyhow!(
                    "Failed to set permissions on secrets file '{}': {}",
                    path.display(),
                    e
                )
            })?;
        }

        log::info!("Saved secrets to: {}", path.display());
        Ok(())
    }
}

/// Resolve the generative API key: environment first, secrets file second.
///
/// None means the generative API is unavailable and dashboard generation
/// falls back to the local templater.
pub fn resolve_api_key() -> Option<String> {
    for var in API_KEY_ENV_VARS {
        if let Ok(key) = std::env::var(var) {
            if !key.trim().is_empty() {
                return Some(key);
            }
        }
    }

    SecretsConfig::load()
        .ok()
        .and_then(|secrets| secrets.api_key)
        .filter(|key| !key.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secrets_toml_round_trip() {
        let secrets = SecretsConfig {
            api_key: Some("sk-test".to_string()),
        };
        let toml_str = toml::to_string_pretty(&secrets).unwrap();
        let parsed: SecretsConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn test_empty_secrets_parse() {
        let parsed: SecretsConfig = toml::from_str("").unwrap();
        assert!(parsed.api_key.is_none());
    }
}
