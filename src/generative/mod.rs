//! Generative-content API client
//!
//! Calls a Gemini-style `generateContent` endpoint with the dashboard
//! prompt and returns the raw model text. Cleaning the reply into a
//! complete HTML document (fence stripping, fragment wrapping) belongs to
//! `dashboard::cleaner`; callers fall back to the local classifier/templater
//! when this client errors.

pub mod prompts;

use log::debug;
use serde_json::{json, Value};
use std::time::Duration;

/// Default request timeout; dashboard generation is slow but bounded
const GENERATE_TIMEOUT_SECS: u64 = 60;

/// Client for the generative-content HTTP endpoint
pub struct GenerativeClient {
    api_base: String,
    model: String,
    api_key: String,
}

impl GenerativeClient {
    pub fn new(api_base: String, model: String, api_key: String) -> Self {
        Self {
            api_base,
            model,
            api_key,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Ask the model for a dashboard document visualizing `content`.
    ///
    /// Returns the raw model text (possibly fenced, possibly a fragment).
    pub async fn generate_dashboard(&self, content: &str) -> Result<String, String> {
        let prompt = prompts::render_dashboard_prompt(content)?;

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base.trim_end_matches('/'),
            self.model,
            self.api_key
        );

        let body = json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "temperature": 0.4,
                "maxOutputTokens": 8192
            }
        });

        debug!("Requesting dashboard from model {}", self.model);

        let client = reqwest::Client::new();
        let response = client
            .post(&url)
            .timeout(Duration::from_secs(GENERATE_TIMEOUT_SECS))
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("Failed to reach generative API: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(format!("Generative API error ({}): {}", status, text));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse generative API response: {}", e))?;

        extract_text(&data)
            .ok_or_else(|| "Generative API response contained no candidate text".to_string())
    }
}

/// Pull the first candidate's text out of a generateContent response
fn extract_text(data: &Value) -> Option<String> {
    data["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(|text| text.to_string())
}
