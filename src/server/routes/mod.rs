//! Command routing modules
//!
//! This module organizes command routing into focused sub-modules by domain:
//! - chat_routes: Chat session and messaging commands
//! - dashboard_routes: Dashboard generation commands
//! - config_routes: Configuration and secrets commands

pub mod chat_routes;
pub mod config_routes;
pub mod dashboard_routes;

use serde_json::Value;

pub use super::ServerAppState;

// =============================================================================
// Re-export helper functions for use by route modules
// =============================================================================

/// Extract a required argument from JSON args
pub fn get_arg<T: serde::de::DeserializeOwned>(args: &Value, name: &str) -> Result<T, String> {
    serde_json::from_value(
        args.get(name)
            .ok_or_else(|| format!("Missing argument: {}", name))?
            .clone(),
    )
    .map_err(|e| format!("Invalid argument {}: {}", name, e))
}

/// Extract an optional argument from JSON args
pub fn get_opt_arg<T: serde::de::DeserializeOwned>(
    args: &Value,
    name: &str,
) -> Result<Option<T>, String> {
    match args.get(name) {
        Some(v) if !v.is_null() => serde_json::from_value(v.clone())
            .map(Some)
            .map_err(|e| format!("Invalid argument {}: {}", name, e)),
        _ => Ok(None),
    }
}

// =============================================================================
// Command Routing Macros
// =============================================================================

/// Routes a simple async command: calls the handler, serializes the result
#[macro_export]
macro_rules! route_async {
    ($cmd:expr, $handler:expr) => {{
        let result = $handler.await?;
        serde_json::to_value(result).map_err(|e| e.to_string())
    }};
}

/// Routes an async command that returns ()
#[macro_export]
macro_rules! route_unit_async {
    ($handler:expr) => {{
        $handler.await?;
        Ok(serde_json::Value::Null)
    }};
}

// Re-export macros for use in route modules
pub use route_async;
pub use route_unit_async;

// =============================================================================
// Main Command Dispatcher
// =============================================================================

/// Route a command to its implementation by dispatching to the appropriate sub-router
pub async fn route_command(
    cmd: &str,
    args: Value,
    state: &ServerAppState,
) -> Result<Value, String> {
    if chat_routes::is_chat_command(cmd) {
        return chat_routes::route_chat_command(cmd, args, state).await;
    }

    if dashboard_routes::is_dashboard_command(cmd) {
        return dashboard_routes::route_dashboard_command(cmd, args, state).await;
    }

    if config_routes::is_config_command(cmd) {
        return config_routes::route_config_command(cmd, args, state).await;
    }

    Err(format!("Unknown command: {}", cmd))
}
