// Chat webhook client
//
// Forwards user messages to the configured webhook and extracts the
// assistant reply. The webhook is a free-form automation endpoint: replies
// arrive either as plain text or as JSON with the reply under one of a few
// conventional field names.

use log::debug;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Reply field names checked in order on JSON webhook responses
const REPLY_FIELDS: &[&str] = &["output", "reply", "message", "text"];

/// Outbound payload for the chat webhook
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct WebhookPayload<'a> {
    message: &'a str,
    session_id: &'a str,
}

/// Client for the chat webhook endpoint
pub struct WebhookClient {
    url: String,
    timeout: Duration,
}

impl WebhookClient {
    pub fn new(url: String, timeout_secs: u64) -> Self {
        Self {
            url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send a user message and return the assistant reply text.
    ///
    /// Failures are surfaced to the caller as displayable error strings; the
    /// front-end offers a manual retry, so there is no automatic retry here.
    pub async fn send_message(&self, content: &str, session_id: &str) -> Result<String, String> {
        let client = reqwest::Client::new();
        let payload = WebhookPayload {
            message: content,
            session_id,
        };

        debug!("Forwarding message to webhook: {}", self.url);

        let response = client
            .post(&self.url)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| format!("Failed to reach chat webhook: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(format!("Chat webhook error ({}): {}", status, text));
        }

        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read webhook response: {}", e))?;

        Ok(extract_reply(&body))
    }
}

/// Pull the reply text out of a webhook response body.
///
/// JSON responses are checked for the conventional reply fields in order
/// (first present wins); anything else is treated as plain text.
fn extract_reply(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        for field in REPLY_FIELDS {
            if let Some(reply) = json.get(field).and_then(Value::as_str) {
                return reply.to_string();
            }
        }
        // A JSON array of one object is common for automation tools
        if let Some(first) = json.as_array().and_then(|items| items.first()) {
            for field in REPLY_FIELDS {
                if let Some(reply) = first.get(field).and_then(Value::as_str) {
                    return reply.to_string();
                }
            }
        }
    }

    body.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_reply_plain_text() {
        assert_eq!(extract_reply("  hello there \n"), "hello there");
    }

    #[test]
    fn test_extract_reply_json_output_field() {
        assert_eq!(extract_reply(r#"{"output":"the answer"}"#), "the answer");
    }

    #[test]
    fn test_extract_reply_field_precedence() {
        // "output" wins over "reply" regardless of key order
        assert_eq!(
            extract_reply(r#"{"reply":"second","output":"first"}"#),
            "first"
        );
    }

    #[test]
    fn test_extract_reply_json_array() {
        assert_eq!(extract_reply(r#"[{"text":"from array"}]"#), "from array");
    }

    #[test]
    fn test_extract_reply_unrecognized_json_falls_back_to_raw() {
        let body = r#"{"status":"ok"}"#;
        assert_eq!(extract_reply(body), body);
    }
}
