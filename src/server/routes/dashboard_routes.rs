//! Dashboard command routing
//!
//! Handles dashboard generation commands:
//! generate_dashboard, get_cached_dashboard, classify_content,
//! clear_dashboard_cache

use crate::commands;
use crate::models::GenerateDashboardRequest;
use serde_json::Value;

use super::{get_arg, route_async, ServerAppState};

/// Check if a command is a dashboard route
pub fn is_dashboard_command(cmd: &str) -> bool {
    matches!(
        cmd,
        "generate_dashboard"
            | "get_cached_dashboard"
            | "classify_content"
            | "clear_dashboard_cache"
    )
}

/// Route dashboard commands
pub async fn route_dashboard_command(
    cmd: &str,
    args: Value,
    state: &ServerAppState,
) -> Result<Value, String> {
    match cmd {
        "generate_dashboard" => {
            let message_id: String = get_arg(&args, "messageId")?;
            let content: String = get_arg(&args, "content")?;

            let request = GenerateDashboardRequest {
                message_id,
                content,
            };

            route_async!(
                cmd,
                commands::dashboard::generate_dashboard(
                    &state.data_dir,
                    &state.dashboard_cache,
                    state.generative.as_deref(),
                    &state.broadcaster,
                    request
                )
            )
        }

        "get_cached_dashboard" => {
            let message_id: String = get_arg(&args, "messageId")?;
            route_async!(
                cmd,
                commands::dashboard::get_cached_dashboard(&state.dashboard_cache, message_id)
            )
        }

        "classify_content" => {
            let content: String = get_arg(&args, "content")?;
            route_async!(cmd, commands::dashboard::classify_content(content))
        }

        "clear_dashboard_cache" => {
            route_async!(
                cmd,
                commands::dashboard::clear_dashboard_cache(&state.dashboard_cache)
            )
        }

        _ => Err(format!("Unknown dashboard route: {}", cmd)),
    }
}
