//! Response cleaning for generative API output
//!
//! Models routinely wrap HTML replies in markdown code fences; the consumer
//! expects a bare document. Strips leading/trailing triple-backtick fences
//! (with an optional language tag) and wraps fragments that lack a root
//! `<html>` tag in the standard skeleton.

use crate::dashboard::renderer;
use regex::Regex;

/// Strip leading/trailing markdown code fences from a generative response.
///
/// No-op when no fences are present. Only outermost fences are removed;
/// fenced blocks inside the document body are left alone.
pub fn strip_code_fences(raw: &str) -> String {
    let trimmed = raw.trim();

    // Leading fence with optional language tag, e.g. ```html
    let leading = Regex::new(r"^```[a-zA-Z0-9_-]*[ \t]*\r?\n?").unwrap();
    // Trailing fence on its own line
    let trailing = Regex::new(r"\r?\n?```\s*$").unwrap();

    let without_leading = leading.replace(trimmed, "");
    let cleaned = trailing.replace(&without_leading, "");

    cleaned.trim().to_string()
}

/// Clean a generative response into a complete HTML document: strip fences,
/// then wrap in the standard skeleton if no root `<html>` tag is present.
pub fn into_document(raw: &str) -> String {
    let cleaned = strip_code_fences(raw);

    if has_html_root(&cleaned) {
        cleaned
    } else {
        renderer::wrap_fragment(&cleaned)
    }
}

fn has_html_root(html: &str) -> bool {
    let lowered = html.to_lowercase();
    lowered.contains("<html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_html_fence() {
        let raw = "```html\n<html>...</html>\n```";
        assert_eq!(strip_code_fences(raw), "<html>...</html>");
    }

    #[test]
    fn test_strips_bare_fence() {
        let raw = "```\n<html><body>hi</body></html>\n```";
        assert_eq!(strip_code_fences(raw), "<html><body>hi</body></html>");
    }

    #[test]
    fn test_no_fences_is_noop() {
        let raw = "<html><body>hi</body></html>";
        assert_eq!(strip_code_fences(raw), raw);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let raw = "  \n```html\n<html></html>\n```  \n";
        assert_eq!(strip_code_fences(raw), "<html></html>");
    }

    #[test]
    fn test_no_residual_fence_markers() {
        let cleaned = strip_code_fences("```html\n<!DOCTYPE html><html></html>\n```");
        assert!(!cleaned.contains("```"));
    }

    #[test]
    fn test_into_document_passes_through_full_document() {
        let raw = "```html\n<html><body>x</body></html>\n```";
        assert_eq!(into_document(raw), "<html><body>x</body></html>");
    }

    #[test]
    fn test_into_document_wraps_fragment() {
        let doc = into_document("<div>just a fragment</div>");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<div>just a fragment</div>"));
        assert!(doc.ends_with("</html>"));
    }

    #[test]
    fn test_html_root_detection_is_case_insensitive() {
        assert_eq!(
            into_document("<HTML><body>x</body></HTML>"),
            "<HTML><body>x</body></HTML>"
        );
    }
}
