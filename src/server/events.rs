//! WebSocket event broadcaster for real-time updates
//!
//! Pushes chat and dashboard events to connected front-end clients so the
//! UI can update without polling.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::ServerAppState;

/// Event names broadcast by the command layer
pub const EVENT_CHAT_MESSAGE: &str = "chat:message";
pub const EVENT_DASHBOARD_READY: &str = "dashboard:ready";

/// A server event that can be broadcast to WebSocket clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerEvent {
    /// Event type (e.g., "chat:message", "dashboard:ready")
    pub event: String,
    /// Event payload as JSON value
    pub payload: serde_json::Value,
}

/// Broadcasts events to all connected WebSocket clients
pub struct EventBroadcaster {
    tx: broadcast::Sender<ServerEvent>,
}

impl EventBroadcaster {
    /// Create a new event broadcaster with a channel capacity of 1000 events
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1000);
        Self { tx }
    }

    /// Broadcast an event to all connected clients
    pub fn broadcast(&self, event_type: &str, payload: impl Serialize) {
        let event = ServerEvent {
            event: event_type.to_string(),
            payload: serde_json::to_value(payload).unwrap_or(serde_json::Value::Null),
        };

        // Ignore send errors (no receivers)
        let _ = self.tx.send(event);
    }

    /// Subscribe to events (returns a receiver)
    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

/// WebSocket upgrade handler
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<ServerAppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_websocket(socket, state))
}

/// Handle a WebSocket connection
async fn handle_websocket(socket: WebSocket, state: ServerAppState) {
    let (mut sender, mut receiver) = socket.split();

    let mut event_rx = state.broadcaster.subscribe();

    log::info!("WebSocket client connected");

    // Forward broadcast events to this client
    let send_task = tokio::spawn(async move {
        while let Ok(event) = event_rx.recv().await {
            match serde_json::to_string(&event) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    log::warn!("Failed to serialize event: {}", e);
                }
            }
        }
    });

    // Drain incoming messages until the client disconnects
    while let Some(result) = receiver.next().await {
        match result {
            Ok(msg) => match msg {
                Message::Ping(data) => {
                    // Pong is handled automatically by axum
                    log::trace!("Received ping: {:?}", data);
                }
                Message::Close(_) => {
                    log::info!("WebSocket client disconnected");
                    break;
                }
                _ => {}
            },
            Err(e) => {
                log::warn!("WebSocket error: {}", e);
                break;
            }
        }
    }

    send_task.abort();
    log::info!("WebSocket connection closed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_broadcast_reaches_subscriber() {
        let broadcaster = EventBroadcaster::new();
        let mut rx = broadcaster.subscribe();

        broadcaster.broadcast(EVENT_DASHBOARD_READY, serde_json::json!({"messageId": "m1"}));

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event, EVENT_DASHBOARD_READY);
        assert_eq!(event.payload["messageId"], "m1");
    }

    #[test]
    fn test_broadcast_without_subscribers_is_ok() {
        let broadcaster = EventBroadcaster::new();
        broadcaster.broadcast(EVENT_CHAT_MESSAGE, serde_json::json!({}));
    }
}
