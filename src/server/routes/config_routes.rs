//! Configuration command routing
//!
//! Handles configuration and secrets commands:
//! get_config, set_webhook_url, set_api_token, get_api_token_status

use crate::commands;
use serde_json::Value;

use super::{get_arg, route_async, route_unit_async, ServerAppState};

/// Check if a command is a config route
pub fn is_config_command(cmd: &str) -> bool {
    matches!(
        cmd,
        "get_config" | "set_webhook_url" | "set_api_token" | "get_api_token_status"
    )
}

/// Route configuration commands
pub async fn route_config_command(
    cmd: &str,
    args: Value,
    state: &ServerAppState,
) -> Result<Value, String> {
    match cmd {
        "get_config" => {
            route_async!(cmd, commands::config::get_config(&state.config))
        }

        "set_webhook_url" => {
            let url: String = get_arg(&args, "url")?;
            route_unit_async!(commands::config::set_webhook_url(&state.config, url))
        }

        "set_api_token" => {
            let token: String = get_arg(&args, "token")?;
            route_unit_async!(commands::config::set_api_token(token))
        }

        "get_api_token_status" => {
            route_async!(cmd, commands::config::get_api_token_status())
        }

        _ => Err(format!("Unknown config route: {}", cmd)),
    }
}
