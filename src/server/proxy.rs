//! Command proxy handler
//!
//! A single `POST /api/invoke` endpoint carries every backend command as
//! `{cmd, args}` JSON, mirroring the invoke call the front-end already
//! makes. Routing lives in the `routes/` sub-modules:
//! - chat_routes: Chat session and messaging commands
//! - dashboard_routes: Dashboard generation commands
//! - config_routes: Configuration and secrets commands

use super::routes;
use super::ServerAppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for /api/invoke
#[derive(Debug, Deserialize)]
pub struct InvokeRequest {
    /// Command name (e.g., "send_chat_message", "generate_dashboard")
    pub cmd: String,
    /// Command arguments as a JSON object
    #[serde(default)]
    pub args: Value,
}

/// Response body for /api/invoke
#[derive(Debug, Serialize)]
pub struct InvokeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InvokeResponse {
    fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn err(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

/// Dispatch an invoke request to its command implementation
pub async fn invoke_handler(
    State(state): State<ServerAppState>,
    Json(req): Json<InvokeRequest>,
) -> (StatusCode, Json<InvokeResponse>) {
    log::debug!("Invoke command: {} with args: {:?}", req.cmd, req.args);

    match routes::route_command(&req.cmd, req.args, &state).await {
        Ok(data) => (StatusCode::OK, Json(InvokeResponse::ok(data))),
        Err(e) => {
            log::warn!("Command {} failed: {}", req.cmd, e);
            (StatusCode::BAD_REQUEST, Json(InvokeResponse::err(e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::routes::{get_arg, get_opt_arg};

    #[test]
    fn test_invoke_request_deserialization() {
        let json = r#"{"cmd": "get_chat_messages", "args": {"sessionId": "abc"}}"#;
        let req: InvokeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.cmd, "get_chat_messages");
        assert_eq!(req.args["sessionId"], "abc");
    }

    #[test]
    fn test_invoke_request_args_default_to_null() {
        let req: InvokeRequest = serde_json::from_str(r#"{"cmd": "list_chat_sessions"}"#).unwrap();
        assert!(req.args.is_null());
    }

    #[test]
    fn test_success_response_omits_error_field() {
        let json =
            serde_json::to_string(&InvokeResponse::ok(serde_json::json!({"count": 5}))).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"count\":5"));
        assert!(!json.contains("error"));
    }

    #[test]
    fn test_error_response_omits_data_field() {
        let json = serde_json::to_string(&InvokeResponse::err("boom".to_string())).unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("\"error\":\"boom\""));
        assert!(!json.contains("data"));
    }

    #[test]
    fn test_get_arg_success() {
        let args = serde_json::json!({"name": "test", "count": 42});
        let name: String = get_arg(&args, "name").unwrap();
        let count: i32 = get_arg(&args, "count").unwrap();
        assert_eq!(name, "test");
        assert_eq!(count, 42);
    }

    #[test]
    fn test_get_arg_missing() {
        let args = serde_json::json!({"name": "test"});
        let result: Result<i32, String> = get_arg(&args, "missing");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Missing argument"));
    }

    #[test]
    fn test_get_opt_arg() {
        let args = serde_json::json!({"name": "test"});
        let name: Option<String> = get_opt_arg(&args, "name").unwrap();
        let missing: Option<String> = get_opt_arg(&args, "missing").unwrap();
        assert_eq!(name, Some("test".to_string()));
        assert_eq!(missing, None);
    }
}
