// Prompt templates for the generative-content API

use crate::dashboard::templates::{BRAND_ACCENT, BRAND_PRIMARY, BRAND_SECONDARY};
use tera::{Context, Tera};

/// Template name registered with the engine
pub const DASHBOARD_PROMPT: &str = "dashboard_prompt";

/// Prompt instructing the model to answer with one self-contained HTML
/// dashboard document. The reply is still cleaned afterwards (fence
/// stripping, fragment wrapping) before it reaches the iframe.
const DASHBOARD_PROMPT_TEMPLATE: &str = r#"You are a data visualization assistant for the Astra AI dashboard.

Generate a single, complete, self-contained HTML document that visualizes the following message as an interactive dashboard:

"{{ message }}"

Requirements:
- Start with <!DOCTYPE html> and include <html>, <head>, and <body> tags.
- Load Chart.js from the jsdelivr CDN and render exactly one chart on a <canvas>.
- Pick the chart type that best fits the content (line for trends over time, bar for comparisons, doughnut for breakdowns).
- Include a panel of 3 headline metrics above the chart.
- Use only these brand colors for chart data and accents: {{ primary }}, {{ secondary }}, {{ accent }}.
- All CSS must be inline in a <style> tag; no external stylesheets.
- No explanations, no markdown, no code fences: respond with the raw HTML document only."#;

/// Render the dashboard prompt for a message
pub fn render_dashboard_prompt(message: &str) -> Result<String, String> {
    let mut tera = Tera::default();
    tera.add_raw_template(DASHBOARD_PROMPT, DASHBOARD_PROMPT_TEMPLATE)
        .map_err(|e| format!("Failed to register prompt template: {}", e))?;

    let mut context = Context::new();
    context.insert("message", message);
    context.insert("primary", BRAND_PRIMARY);
    context.insert("secondary", BRAND_SECONDARY);
    context.insert("accent", BRAND_ACCENT);

    tera.render(DASHBOARD_PROMPT, &context)
        .map_err(|e| format!("Failed to render prompt template: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_message_and_brand_colors() {
        let prompt = render_dashboard_prompt("Q3 revenue by region").unwrap();
        assert!(prompt.contains("Q3 revenue by region"));
        assert!(prompt.contains(BRAND_PRIMARY));
        assert!(prompt.contains(BRAND_SECONDARY));
        assert!(prompt.contains(BRAND_ACCENT));
    }

    #[test]
    fn test_prompt_has_no_unrendered_placeholders() {
        let prompt = render_dashboard_prompt("hello").unwrap();
        assert!(!prompt.contains("{{"));
    }
}
