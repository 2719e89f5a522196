// Built-in chart templates, one per topic bucket
//
// Templates are compiled-in constants: fixed labels, fixed sample series,
// and precomputed metric captions. The series are display data only and are
// never derived from the message text (known limitation of the heuristic,
// kept for parity with the front-end behavior).

use crate::models::{ChartKind, ChartTemplate, MetricCaption, TopicBucket};

/// Astra brand palette used by every dashboard
pub const BRAND_PRIMARY: &str = "#6366f1";
pub const BRAND_SECONDARY: &str = "#8b5cf6";
pub const BRAND_ACCENT: &str = "#22d3ee";

/// Quarterly revenue line chart
pub const REVENUE_TREND: ChartTemplate = ChartTemplate {
    bucket: TopicBucket::RevenueTrend,
    title: "Revenue Performance",
    kind: ChartKind::Line,
    dataset_label: "Revenue ($M)",
    labels: &["Q1 2023", "Q2 2023", "Q3 2023", "Q4 2023", "Q1 2024"],
    series: &[12, 19, 25, 32, 45],
    palette: &[BRAND_PRIMARY, BRAND_SECONDARY, BRAND_ACCENT],
    metrics: [
        MetricCaption {
            label: "Total Revenue",
            value: "$45M",
        },
        MetricCaption {
            label: "Growth",
            value: "+275%",
        },
        MetricCaption {
            label: "Best Quarter",
            value: "Q1 2024",
        },
    ],
};

/// Side-by-side product comparison bar chart
pub const COMPARISON: ChartTemplate = ChartTemplate {
    bucket: TopicBucket::Comparison,
    title: "Performance Comparison",
    kind: ChartKind::Bar,
    dataset_label: "Score",
    labels: &["Product A", "Product B", "Product C", "Product D"],
    series: &[65, 59, 80, 41],
    palette: &[BRAND_PRIMARY, BRAND_SECONDARY, BRAND_ACCENT, BRAND_PRIMARY],
    metrics: [
        MetricCaption {
            label: "Top Performer",
            value: "Product C",
        },
        MetricCaption {
            label: "Average Score",
            value: "61.3",
        },
        MetricCaption {
            label: "Spread",
            value: "39 pts",
        },
    ],
};

/// Monthly adoption growth line chart
pub const GROWTH_TREND: ChartTemplate = ChartTemplate {
    bucket: TopicBucket::GrowthTrend,
    title: "Growth Trend",
    kind: ChartKind::Line,
    dataset_label: "Adoption",
    labels: &["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
    series: &[30, 42, 55, 68, 84, 96],
    palette: &[BRAND_SECONDARY, BRAND_PRIMARY, BRAND_ACCENT],
    metrics: [
        MetricCaption {
            label: "6-Month Growth",
            value: "+220%",
        },
        MetricCaption {
            label: "Monthly Average",
            value: "+13.2",
        },
        MetricCaption {
            label: "Current",
            value: "96",
        },
    ],
};

/// Generic category breakdown doughnut chart
pub const GENERIC: ChartTemplate = ChartTemplate {
    bucket: TopicBucket::Generic,
    title: "Overview",
    kind: ChartKind::Doughnut,
    dataset_label: "Share",
    labels: &["Category A", "Category B", "Category C"],
    series: &[44, 33, 23],
    palette: &[BRAND_PRIMARY, BRAND_SECONDARY, BRAND_ACCENT],
    metrics: [
        MetricCaption {
            label: "Largest Segment",
            value: "Category A",
        },
        MetricCaption {
            label: "Segments",
            value: "3",
        },
        MetricCaption {
            label: "Coverage",
            value: "100%",
        },
    ],
};

/// Look up the template for a bucket (pure lookup, no computation)
pub fn template_for(bucket: TopicBucket) -> &'static ChartTemplate {
    match bucket {
        TopicBucket::RevenueTrend => &REVENUE_TREND,
        TopicBucket::Comparison => &COMPARISON,
        TopicBucket::GrowthTrend => &GROWTH_TREND,
        TopicBucket::Generic => &GENERIC,
    }
}
