// Dashboard Models - Canonical type definitions for dashboard generation

use serde::{Deserialize, Serialize};

// ============================================================================
// Topic Buckets
// ============================================================================

/// Topical classification assigned to message content for template selection.
///
/// Buckets are mutually exclusive and checked in a fixed priority order by
/// the classifier: RevenueTrend, then Comparison, then GrowthTrend, with
/// Generic as the fallback. The ordering is part of the observable behavior
/// and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TopicBucket {
    RevenueTrend,
    Comparison,
    GrowthTrend,
    Generic,
}

impl TopicBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicBucket::RevenueTrend => "revenue-trend",
            TopicBucket::Comparison => "comparison",
            TopicBucket::GrowthTrend => "growth-trend",
            TopicBucket::Generic => "generic",
        }
    }
}

impl std::fmt::Display for TopicBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TopicBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "revenue-trend" => Ok(TopicBucket::RevenueTrend),
            "comparison" => Ok(TopicBucket::Comparison),
            "growth-trend" => Ok(TopicBucket::GrowthTrend),
            "generic" => Ok(TopicBucket::Generic),
            _ => Err(format!(
                "Invalid topic bucket: '{}'. Expected 'revenue-trend', 'comparison', 'growth-trend', or 'generic'",
                s
            )),
        }
    }
}

// ============================================================================
// Chart Templates
// ============================================================================

/// Chart.js chart kind used by a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Doughnut,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Doughnut => "doughnut",
        }
    }
}

/// A metric caption shown in the dashboard metrics panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricCaption {
    pub label: &'static str,
    pub value: &'static str,
}

/// Static chart template associated with one topic bucket.
///
/// Templates are compiled-in constants and never mutated at runtime; the
/// sample series are fixed display data, not derived from the input text.
#[derive(Debug, Clone, Copy)]
pub struct ChartTemplate {
    pub bucket: TopicBucket,
    pub title: &'static str,
    pub kind: ChartKind,
    pub dataset_label: &'static str,
    pub labels: &'static [&'static str],
    pub series: &'static [u32],
    pub palette: &'static [&'static str],
    pub metrics: [MetricCaption; 3],
}

// ============================================================================
// Rendered Output
// ============================================================================

/// A self-contained HTML document produced by the renderer.
///
/// Always a syntactically complete document (`<!DOCTYPE html>` ... `</html>`);
/// the consumer assigns it directly to a sandboxed iframe without further
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderedDocument(pub String);

impl RenderedDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_html(self) -> String {
        self.0
    }
}

impl std::fmt::Display for RenderedDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Command Surface Types
// ============================================================================

/// Where a generated dashboard came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardSource {
    /// Returned by the generative-content API
    Generative,
    /// Built by the local classifier/templater
    Fallback,
}

/// Request to generate (or fetch a cached) dashboard for a message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDashboardRequest {
    /// Message ID used as the cache key
    pub message_id: String,
    /// Message content the dashboard visualizes
    pub content: String,
}

/// A generated dashboard ready for iframe rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub message_id: String,
    pub html: String,
    pub source: DashboardSource,
    /// Bucket selected by the fallback classifier (None for generative output)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<TopicBucket>,
    /// Whether this response was served from the cache
    pub cached: bool,
}

/// Result of classifying a piece of content without rendering it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyResponse {
    pub bucket: TopicBucket,
    pub chart_kind: ChartKind,
}
