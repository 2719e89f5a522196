//! Server application state shared across handlers

use super::events::EventBroadcaster;
use crate::config::AstraConfig;
use crate::dashboard::DashboardCache;
use crate::generative::GenerativeClient;
use crate::webhook::WebhookClient;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared state for the server: configuration, the dashboard cache, and
/// the clients for the two external collaborators.
#[derive(Clone)]
pub struct ServerAppState {
    /// Authentication token for this session (None disables auth)
    pub auth_token: Option<String>,

    /// Loaded configuration
    pub config: Arc<AstraConfig>,

    /// Resolved data directory for chat transcripts
    pub data_dir: PathBuf,

    /// Message-id → HTML dashboard cache
    pub dashboard_cache: Arc<DashboardCache>,

    /// Chat webhook client
    pub webhook: Arc<WebhookClient>,

    /// Generative-content client; None when disabled or no API key is set,
    /// in which case dashboards always use the local fallback templater
    pub generative: Option<Arc<GenerativeClient>>,

    /// Event broadcaster for WebSocket clients
    pub broadcaster: Arc<EventBroadcaster>,
}

impl ServerAppState {
    /// Create server state from loaded configuration.
    ///
    /// The generative client is only constructed when the feature is enabled
    /// and an API key resolves from the environment or secrets file.
    pub fn new(auth_token: Option<String>, config: AstraConfig) -> Self {
        let data_dir = config.data_dir();

        let webhook = Arc::new(WebhookClient::new(
            config.webhook.url.clone(),
            config.webhook.timeout_secs,
        ));

        let generative = if config.generative.enabled {
            match crate::config::secrets::resolve_api_key() {
                Some(api_key) => Some(Arc::new(GenerativeClient::new(
                    config.generative.api_base.clone(),
                    config.generative.model.clone(),
                    api_key,
                ))),
                None => {
                    log::info!(
                        "No generative API key found; dashboards will use the fallback templater"
                    );
                    None
                }
            }
        } else {
            None
        };

        Self {
            auth_token,
            config: Arc::new(config),
            data_dir,
            dashboard_cache: Arc::new(DashboardCache::new()),
            webhook,
            generative,
            broadcaster: Arc::new(EventBroadcaster::new()),
        }
    }
}
