//! Fallback metrics per intent, used when a question names no metric.

use super::intent::Intent;

const ENGAGEMENT: &[&str] = &["engagement_score", "open_rate", "click_rate"];
const ENGAGEMENT_WITH_RESPONSE: &[&str] =
    &["engagement_score", "open_rate", "click_rate", "response_time"];
const TIMING: &[&str] = &["open_time", "response_time"];
const COUNT: &[&str] = &["user_count"];

/// Ordered default metric keys for an intent
pub fn default_metrics(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::TopUsers | Intent::ContentPerformance | Intent::AudienceOverview => ENGAGEMENT,
        Intent::TimingInsights => TIMING,
        Intent::UserProfile | Intent::SpecialtyEngagement | Intent::SpecialtyComparison => {
            ENGAGEMENT_WITH_RESPONSE
        }
        Intent::UserCount => COUNT,
    }
}

/// Default metrics keyed by wire label; an unknown label gets the engagement trio.
pub fn default_metrics_for_label(label: &str) -> &'static [&'static str] {
    label
        .parse::<Intent>()
        .map(default_metrics)
        .unwrap_or(ENGAGEMENT)
}
