//! Configuration commands
//!
//! Backend commands for reading and updating server configuration and the
//! generative API key. Responses never include the key itself, only whether
//! one is configured.

use crate::config::secrets::{resolve_api_key, SecretsConfig};
use crate::config::{default_config_path, save_config, AstraConfig};
use serde::{Deserialize, Serialize};

/// Redacted view of the configuration returned to the front-end
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigView {
    pub webhook_url: String,
    pub webhook_timeout_secs: u64,
    pub generative_enabled: bool,
    pub generative_model: String,
    pub api_key_configured: bool,
    pub data_dir: String,
}

/// Status of the generative API key
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTokenStatus {
    pub configured: bool,
    /// "environment" or "secrets-file"; absent when not configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Get the current configuration with secrets redacted
pub async fn get_config(config: &AstraConfig) -> Result<ConfigView, String> {
    Ok(ConfigView {
        webhook_url: config.webhook.url.clone(),
        webhook_timeout_secs: config.webhook.timeout_secs,
        generative_enabled: config.generative.enabled,
        generative_model: config.generative.model.clone(),
        api_key_configured: resolve_api_key().is_some(),
        data_dir: config.data_dir().display().to_string(),
    })
}

/// Update the chat webhook URL and persist it to the config file.
///
/// Takes effect on the next server start; the running webhook client keeps
/// its URL for the lifetime of the process.
pub async fn set_webhook_url(config: &AstraConfig, url: String) -> Result<(), String> {
    let url = url.trim();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(format!("Invalid webhook URL: '{}'", url));
    }

    let mut updated = config.clone();
    updated.webhook.url = url.to_string();
    save_config(&updated, Some(&default_config_path())).map_err(|e| e.to_string())
}

/// Store the generative API key in the secrets file
pub async fn set_api_token(token: String) -> Result<(), String> {
    let token = token.trim().to_string();
    if token.is_empty() {
        return Err("API token cannot be empty".to_string());
    }

    let mut secrets = SecretsConfig::load().map_err(|e| e.to_string())?;
    secrets.api_key = Some(token);
    secrets.save().map_err(|e| e.to_string())
}

/// Report whether (and from where) an API key resolves
pub async fn get_api_token_status() -> Result<ApiTokenStatus, String> {
    let from_env = ["ASTRA_API_KEY", "GEMINI_API_KEY"]
        .iter()
        .any(|var| std::env::var(var).map(|v| !v.trim().is_empty()).unwrap_or(false));

    if from_env {
        return Ok(ApiTokenStatus {
            configured: true,
            source: Some("environment".to_string()),
        });
    }

    let from_file = SecretsConfig::load()
        .map(|secrets| secrets.api_key.is_some())
        .unwrap_or(false);

    Ok(ApiTokenStatus {
        configured: from_file,
        source: from_file.then(|| "secrets-file".to_string()),
    })
}
