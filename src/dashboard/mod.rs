//! Dashboard generation core
//!
//! The fallback path when the generative API is unavailable or disabled:
//! classify message content into a topic bucket, select that bucket's
//! compiled-in chart template, and interpolate it into a self-contained
//! HTML document. Everything here is pure and synchronous; the only state
//! in this module tree is the message-id → HTML cache.

pub mod cache;
pub mod classifier;
pub mod cleaner;
pub mod renderer;
pub mod templates;

pub use cache::DashboardCache;

use crate::models::RenderedDocument;

/// Generate a fallback dashboard document for message content:
/// classify, then render the selected template.
pub fn generate_fallback_dashboard(content: &str) -> RenderedDocument {
    renderer::render(classifier::classify(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_dashboard_for_revenue_content() {
        let doc =
            generate_fallback_dashboard("Revenue increased from $12M to $45M over five quarters");
        let html = doc.as_str();
        // Series comes from the static template, never from the input numbers
        assert!(html.contains("[12,19,25,32,45]"));
        assert!(html.contains("Revenue Performance"));
    }

    #[test]
    fn test_fallback_dashboard_is_always_complete() {
        for content in ["", "hello", "compare things", "growth!", "sales per year"] {
            let doc = generate_fallback_dashboard(content);
            assert!(doc.as_str().starts_with("<!DOCTYPE html>"));
            assert!(doc.as_str().ends_with("</html>"));
        }
    }
}
