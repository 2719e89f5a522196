//! Server configuration
//!
//! Cascade: built-in defaults, then `~/.astra/config.yaml`, then environment
//! variables, then CLI flags (applied by the binary). The generative API key
//! never lives in config.yaml; see `secrets`.

pub mod secrets;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default webhook endpoint shipped with the front-end
const DEFAULT_WEBHOOK_URL: &str = "https://astra-flows.app.n8n.cloud/webhook/astra-chat";

/// Default generative model
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default generative API base URL
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AstraConfig {
    pub server: ServerConfig,
    pub webhook: WebhookConfig,
    pub generative: GenerativeConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfig {
    pub port: u16,
    pub bind: String,
    /// Allowed CORS origins; empty means permissive (development default)
    pub cors_origins: Vec<String>,
    pub require_auth: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebhookConfig {
    pub url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerativeConfig {
    /// When false, dashboards always use the local fallback templater
    pub enabled: bool,
    pub model: String,
    pub api_base: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageConfig {
    /// Data directory for chat transcripts; None resolves to `~/.astra`
    pub data_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 4517,
            bind: "127.0.0.1".to_string(),
            cors_origins: Vec::new(),
            require_auth: true,
        }
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_WEBHOOK_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for GenerativeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: None }
    }
}

impl Default for AstraConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            webhook: WebhookConfig::default(),
            generative: GenerativeConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl AstraConfig {
    /// Resolved data directory (configured value or `~/.astra`)
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(crate::utils::astra_dir)
    }
}

/// Default config file path (`~/.astra/config.yaml`)
pub fn default_config_path() -> PathBuf {
    crate::utils::astra_dir().join("config.yaml")
}

/// Load configuration: defaults, overlaid by the YAML file (when present),
/// overlaid by environment variables
pub fn load_config(config_path: Option<&Path>) -> Result<AstraConfig> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path);

    let mut config = if path.exists() {
        let contents = fs::read_to_string(&path)
            .map_err(|e| anyhow!("Failed to read config file '{}': {}", path.display(), e))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| anyhow!("Failed to parse config file '{}': {}", path.display(), e))?
    } else {
        AstraConfig::default()
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

/// Persist configuration to disk (used by the config commands)
pub fn save_config(config: &AstraConfig, config_path: Option<&Path>) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| anyhow!("Failed to create config directory: {}", e))?;
    }

    let contents = serde_yaml::to_string(config)?;
    fs::write(&path, contents)
        .map_err(|e| anyhow!("Failed to write config file '{}': {}", path.display(), e))?;
    Ok(())
}

fn apply_env_overrides(config: &mut AstraConfig) {
    if let Ok(url) = std::env::var("ASTRA_WEBHOOK_URL") {
        if !url.is_empty() {
            config.webhook.url = url;
        }
    }
    if let Ok(port) = std::env::var("ASTRA_PORT") {
        if let Ok(port) = port.parse() {
            config.server.port = port;
        }
    }
    if let Ok(model) = std::env::var("ASTRA_MODEL") {
        if !model.is_empty() {
            config.generative.model = model;
        }
    }
    if let Ok(data_dir) = std::env::var("ASTRA_DATA_DIR") {
        if !data_dir.is_empty() {
            config.storage.data_dir = Some(PathBuf::from(data_dir));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AstraConfig::default();
        assert_eq!(config.server.port, 4517);
        assert!(config.generative.enabled);
        assert_eq!(config.webhook.timeout_secs, 30);
        assert!(config.server.cors_origins.is_empty());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(Some(&dir.path().join("absent.yaml"))).unwrap();
        assert_eq!(config.server.port, AstraConfig::default().server.port);
    }

    #[test]
    fn test_partial_yaml_overlays_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "server:\n  port: 9000\nwebhook:\n  url: https://example.test/hook\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.webhook.url, "https://example.test/hook");
        // Untouched sections keep their defaults
        assert_eq!(config.generative.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");

        let mut config = AstraConfig::default();
        config.webhook.url = "https://saved.example/hook".to_string();
        save_config(&config, Some(&path)).unwrap();

        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded.webhook.url, "https://saved.example/hook");
    }
}
