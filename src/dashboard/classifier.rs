//! Content classifier for fallback dashboard generation
//!
//! Inspects free-form message text and assigns exactly one topic bucket via
//! keyword matching. Buckets are checked in a fixed priority order; the
//! first match wins. The order (comparison before growth-trend) is part of
//! the observable behavior and must be preserved when editing.

use crate::models::TopicBucket;

/// Revenue-family keywords (combined with a time keyword for revenue-trend)
const REVENUE_KEYWORDS: &[&str] = &["revenue", "sales", "income"];

/// Time-family keywords
const TIME_KEYWORDS: &[&str] = &["year", "month", "quarter"];

/// Comparison keywords
const COMPARISON_KEYWORDS: &[&str] = &["vs", "compare", "versus"];

/// Growth/trend keywords
const GROWTH_KEYWORDS: &[&str] = &["growth", "increase", "trend"];

/// Classify message content into a topic bucket.
///
/// Total over all inputs: every string maps to exactly one bucket, with
/// `Generic` as the fallback (including for the empty string).
pub fn classify(content: &str) -> TopicBucket {
    let text = content.to_lowercase();

    // Revenue over time needs both a revenue keyword and a time keyword
    if contains_any(&text, REVENUE_KEYWORDS) && contains_any(&text, TIME_KEYWORDS) {
        return TopicBucket::RevenueTrend;
    }

    if contains_any(&text, COMPARISON_KEYWORDS) {
        return TopicBucket::Comparison;
    }

    if contains_any(&text, GROWTH_KEYWORDS) {
        return TopicBucket::GrowthTrend;
    }

    TopicBucket::Generic
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}
