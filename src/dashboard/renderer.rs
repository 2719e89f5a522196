//! Dashboard HTML renderer
//!
//! Interpolates a chart template into a fixed, self-contained HTML skeleton:
//! Chart.js CDN script, inline stylesheet with the Astra brand colors, a
//! three-card metrics panel, and a canvas wired to one chart. Rendering is a
//! pure function of the bucket; output is byte-identical across calls and is
//! always a complete document, since the consumer assigns it straight to a
//! sandboxed iframe.

use crate::dashboard::templates::{self, BRAND_ACCENT, BRAND_PRIMARY, BRAND_SECONDARY};
use crate::models::{ChartTemplate, RenderedDocument, TopicBucket};

/// Chart.js CDN script reference embedded in every document
const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// Render the chart template for a bucket into a complete HTML document
pub fn render(bucket: TopicBucket) -> RenderedDocument {
    let template = templates::template_for(bucket);
    RenderedDocument(shell(&template.title, &dashboard_body(template)))
}

/// Embed an HTML fragment (e.g. a generative response without a root
/// `<html>` tag) into the same skeleton shell
pub fn wrap_fragment(fragment: &str) -> String {
    shell("Astra Dashboard", fragment)
}

/// The fixed document shell: doctype, charting library, inline stylesheet
fn shell(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<script src="{cdn}"></script>
<style>
* {{ margin: 0; padding: 0; box-sizing: border-box; }}
body {{
  font-family: 'Segoe UI', system-ui, sans-serif;
  background: linear-gradient(135deg, {primary} 0%, {secondary} 100%);
  min-height: 100vh;
  padding: 24px;
  color: #1e293b;
}}
.container {{
  max-width: 860px;
  margin: 0 auto;
  background: rgba(255, 255, 255, 0.96);
  border-radius: 16px;
  padding: 32px;
  box-shadow: 0 20px 60px rgba(0, 0, 0, 0.25);
}}
h1 {{
  font-size: 1.5rem;
  margin-bottom: 24px;
  color: {primary};
}}
.metrics {{
  display: flex;
  gap: 16px;
  margin-bottom: 28px;
}}
.metric {{
  flex: 1;
  background: #f8fafc;
  border-left: 4px solid {accent};
  border-radius: 8px;
  padding: 16px;
}}
.metric .value {{
  font-size: 1.4rem;
  font-weight: 700;
  color: {secondary};
}}
.metric .label {{
  font-size: 0.8rem;
  color: #64748b;
  text-transform: uppercase;
  letter-spacing: 0.05em;
}}
.chart-wrap {{ position: relative; height: 340px; }}
</style>
</head>
<body>
{body}
</body>
</html>"#,
        title = title,
        cdn = CHART_JS_CDN,
        primary = BRAND_PRIMARY,
        secondary = BRAND_SECONDARY,
        accent = BRAND_ACCENT,
        body = body,
    )
}

/// Metrics panel + canvas + chart constructor for one template
fn dashboard_body(template: &ChartTemplate) -> String {
    let metrics = template
        .metrics
        .iter()
        .map(|metric| {
            format!(
                r#"<div class="metric"><div class="value">{}</div><div class="label">{}</div></div>"#,
                metric.value, metric.label
            )
        })
        .collect::<Vec<_>>()
        .join("\n    ");

    format!(
        r#"<div class="container">
  <h1>{title}</h1>
  <div class="metrics">
    {metrics}
  </div>
  <div class="chart-wrap"><canvas id="astraChart"></canvas></div>
  <script>
  new Chart(document.getElementById('astraChart'), {{
    type: '{kind}',
    data: {{
      labels: {labels},
      datasets: [ {{
        label: '{dataset_label}',
        data: {series},
        backgroundColor: {palette},
        borderColor: '{border}',
        borderWidth: 2,
        fill: false,
        tension: 0.35
      }} ]
    }},
    options: {{
      responsive: true,
      maintainAspectRatio: false,
      plugins: {{ legend: {{ position: 'bottom' }} }}
    }}
  }});
  </script>
</div>"#,
        title = template.title,
        metrics = metrics,
        kind = template.kind.as_str(),
        labels = json_array_str(template.labels),
        dataset_label = template.dataset_label,
        series = json_array_u32(template.series),
        palette = json_array_str(template.palette),
        border = template.palette.first().copied().unwrap_or(BRAND_PRIMARY),
    )
}

fn json_array_str(items: &[&str]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("\"{}\"", item)).collect();
    format!("[{}]", quoted.join(","))
}

fn json_array_u32(items: &[u32]) -> String {
    let rendered: Vec<String> = items.iter().map(|n| n.to_string()).collect();
    format!("[{}]", rendered.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_BUCKETS: [TopicBucket; 4] = [
        TopicBucket::RevenueTrend,
        TopicBucket::Comparison,
        TopicBucket::GrowthTrend,
        TopicBucket::Generic,
    ];

    #[test]
    fn test_output_is_complete_document() {
        for bucket in ALL_BUCKETS {
            let doc = render(bucket);
            assert!(doc.as_str().starts_with("<!DOCTYPE html>"));
            assert!(doc.as_str().ends_with("</html>"));
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        for bucket in ALL_BUCKETS {
            assert_eq!(render(bucket), render(bucket));
        }
    }

    #[test]
    fn test_revenue_document_embeds_fixed_template_data() {
        let doc = render(TopicBucket::RevenueTrend);
        let html = doc.as_str();
        assert!(html.contains(r#"["Q1 2023","Q2 2023","Q3 2023","Q4 2023","Q1 2024"]"#));
        assert!(html.contains("[12,19,25,32,45]"));
        assert!(html.contains("type: 'line'"));
    }

    #[test]
    fn test_document_references_chart_library_and_brand_colors() {
        let doc = render(TopicBucket::Generic);
        let html = doc.as_str();
        assert!(html.contains("chart.js"));
        assert!(html.contains(BRAND_PRIMARY));
        assert!(html.contains(BRAND_SECONDARY));
        assert!(html.contains(BRAND_ACCENT));
        assert!(html.contains("type: 'doughnut'"));
    }

    #[test]
    fn test_metrics_panel_has_three_cards() {
        let doc = render(TopicBucket::Comparison);
        assert_eq!(doc.as_str().matches(r#"class="metric""#).count(), 3);
    }

    #[test]
    fn test_wrap_fragment_produces_complete_document() {
        let html = wrap_fragment("<div>partial content</div>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert!(html.contains("<div>partial content</div>"));
    }
}
