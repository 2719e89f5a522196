//! Dashboard commands
//!
//! Backend commands for dashboard generation. Flow per message:
//! cache hit → return as-is; else ask the generative API (when configured)
//! and clean its reply into a complete document; on any API failure fall
//! back to the local classifier/templater. Every produced document lands in
//! the cache keyed by message id.

use crate::dashboard::{self, classifier, cleaner, templates, DashboardCache};
use crate::file_storage::chats;
use crate::generative::GenerativeClient;
use crate::models::{
    ClassifyResponse, DashboardResponse, DashboardSource, GenerateDashboardRequest,
};
use crate::server::{EventBroadcaster, EVENT_DASHBOARD_READY};
use log::{info, warn};
use std::path::Path;

/// Generate a dashboard for a message, or return the cached one
pub async fn generate_dashboard(
    data_dir: &Path,
    cache: &DashboardCache,
    generative: Option<&GenerativeClient>,
    broadcaster: &EventBroadcaster,
    request: GenerateDashboardRequest,
) -> Result<DashboardResponse, String> {
    if request.message_id.trim().is_empty() {
        return Err("Message ID cannot be empty".to_string());
    }

    if let Some(html) = cache.get(&request.message_id) {
        return Ok(DashboardResponse {
            message_id: request.message_id,
            html,
            source: DashboardSource::Generative,
            bucket: None,
            cached: true,
        });
    }

    let response = match generative {
        Some(client) => match client.generate_dashboard(&request.content).await {
            Ok(raw) => DashboardResponse {
                message_id: request.message_id.clone(),
                html: cleaner::into_document(&raw),
                source: DashboardSource::Generative,
                bucket: None,
                cached: false,
            },
            Err(e) => {
                warn!(
                    "Generative API failed for message {}, using fallback: {}",
                    request.message_id, e
                );
                fallback_response(&request)
            }
        },
        None => fallback_response(&request),
    };

    cache.insert(&request.message_id, response.html.clone());
    mark_message_dashboard(data_dir, &request.message_id);

    info!(
        "Dashboard ready for message {} (source: {:?})",
        response.message_id, response.source
    );
    broadcaster.broadcast(
        EVENT_DASHBOARD_READY,
        serde_json::json!({ "messageId": response.message_id, "source": response.source }),
    );

    Ok(response)
}

/// Get a previously generated dashboard from the cache
pub async fn get_cached_dashboard(
    cache: &DashboardCache,
    message_id: String,
) -> Result<Option<DashboardResponse>, String> {
    Ok(cache.get(&message_id).map(|html| DashboardResponse {
        message_id,
        html,
        source: DashboardSource::Generative,
        bucket: None,
        cached: true,
    }))
}

/// Preview which bucket (and chart kind) a piece of content maps to,
/// without rendering anything
pub async fn classify_content(content: String) -> Result<ClassifyResponse, String> {
    let bucket = classifier::classify(&content);
    Ok(ClassifyResponse {
        bucket,
        chart_kind: templates::template_for(bucket).kind,
    })
}

/// Drop all cached dashboards
pub async fn clear_dashboard_cache(cache: &DashboardCache) -> Result<usize, String> {
    let dropped = cache.len();
    cache.clear();
    Ok(dropped)
}

fn fallback_response(request: &GenerateDashboardRequest) -> DashboardResponse {
    let bucket = classifier::classify(&request.content);
    DashboardResponse {
        message_id: request.message_id.clone(),
        html: dashboard::renderer::render(bucket).into_html(),
        source: DashboardSource::Fallback,
        bucket: Some(bucket),
        cached: false,
    }
}

/// Flag the message as having a dashboard so transcripts reload with the
/// dashboard toggle visible. Message lookup is best-effort: dashboards can
/// be generated for messages that were never persisted.
fn mark_message_dashboard(data_dir: &Path, message_id: &str) {
    let Ok(chat_files) = chats::list_chat_files(data_dir) else {
        return;
    };

    for mut chat_file in chat_files {
        if let Some(message) = chat_file
            .messages
            .iter_mut()
            .find(|message| message.id == message_id)
        {
            message.has_dashboard = true;
            if let Err(e) = chats::save_chat_file(data_dir, &chat_file) {
                warn!("Failed to persist dashboard flag: {}", e);
            }
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TopicBucket;
    use tempfile::TempDir;

    fn make_request(message_id: &str, content: &str) -> GenerateDashboardRequest {
        GenerateDashboardRequest {
            message_id: message_id.to_string(),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn test_generate_without_client_uses_fallback() {
        let dir = TempDir::new().unwrap();
        let cache = DashboardCache::new();
        let broadcaster = EventBroadcaster::new();

        let response = generate_dashboard(
            dir.path(),
            &cache,
            None,
            &broadcaster,
            make_request("m1", "Revenue increased from $12M to $45M over five quarters"),
        )
        .await
        .unwrap();

        assert_eq!(response.source, DashboardSource::Fallback);
        assert_eq!(response.bucket, Some(TopicBucket::RevenueTrend));
        assert!(!response.cached);
        assert!(response.html.contains("[12,19,25,32,45]"));
        assert!(cache.contains("m1"));
    }

    #[tokio::test]
    async fn test_second_generate_hits_cache() {
        let dir = TempDir::new().unwrap();
        let cache = DashboardCache::new();
        let broadcaster = EventBroadcaster::new();

        let first = generate_dashboard(
            dir.path(),
            &cache,
            None,
            &broadcaster,
            make_request("m1", "steady growth in adoption"),
        )
        .await
        .unwrap();

        let second = generate_dashboard(
            dir.path(),
            &cache,
            None,
            &broadcaster,
            make_request("m1", "completely different content"),
        )
        .await
        .unwrap();

        assert!(second.cached);
        // Cached content wins; the new content is never classified
        assert_eq!(second.html, first.html);
    }

    #[tokio::test]
    async fn test_generative_error_falls_back() {
        let dir = TempDir::new().unwrap();
        let cache = DashboardCache::new();
        let broadcaster = EventBroadcaster::new();
        // Unroutable endpoint forces the error path
        let client = GenerativeClient::new(
            "http://127.0.0.1:1".to_string(),
            "test-model".to_string(),
            "test-key".to_string(),
        );

        let response = generate_dashboard(
            dir.path(),
            &cache,
            Some(&client),
            &broadcaster,
            make_request("m1", "Product A vs Product B performance"),
        )
        .await
        .unwrap();

        assert_eq!(response.source, DashboardSource::Fallback);
        assert_eq!(response.bucket, Some(TopicBucket::Comparison));
        assert!(response.html.starts_with("<!DOCTYPE html>"));
    }

    #[tokio::test]
    async fn test_get_cached_dashboard() {
        let cache = DashboardCache::new();
        assert!(get_cached_dashboard(&cache, "m1".to_string())
            .await
            .unwrap()
            .is_none());

        cache.insert("m1", "<html></html>".to_string());
        let response = get_cached_dashboard(&cache, "m1".to_string())
            .await
            .unwrap()
            .unwrap();
        assert!(response.cached);
        assert_eq!(response.html, "<html></html>");
    }

    #[tokio::test]
    async fn test_classify_content_preview() {
        let response = classify_content("compare the options".to_string())
            .await
            .unwrap();
        assert_eq!(response.bucket, TopicBucket::Comparison);
        assert_eq!(response.chart_kind, crate::models::ChartKind::Bar);
    }

    #[tokio::test]
    async fn test_clear_cache_reports_dropped_count() {
        let cache = DashboardCache::new();
        cache.insert("a", "x".to_string());
        cache.insert("b", "y".to_string());

        let dropped = clear_dashboard_cache(&cache).await.unwrap();
        assert_eq!(dropped, 2);
        assert!(cache.is_empty());
    }
}
