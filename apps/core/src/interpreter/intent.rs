//! Intent classification over normalized question text.
//!
//! An ordered cascade of lexical rules: the first rule whose condition holds
//! decides the intent and nothing after it is evaluated. Rule order is part of
//! the contract ("when are the top users most engaged" is `top_users`, not
//! `timing_insights`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::patterns::SPECIALIST_NOUNS;
use crate::error::AppError;

/// Classified purpose of an analytics question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Ranking of the most engaged users
    TopUsers,
    /// Which content or topics perform best
    ContentPerformance,
    /// When users open and respond
    TimingInsights,
    /// Aggregate view of the audience (also the fallback)
    AudienceOverview,
    /// A single user's details
    UserProfile,
    /// Engagement within a specialty
    SpecialtyEngagement,
    /// Engagement compared across specialties
    SpecialtyComparison,
    /// Size of an audience segment
    UserCount,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Intent {
    /// Every intent, in cascade order.
    pub const ALL: [Intent; 8] = [
        Intent::TopUsers,
        Intent::ContentPerformance,
        Intent::TimingInsights,
        Intent::AudienceOverview,
        Intent::UserProfile,
        Intent::SpecialtyEngagement,
        Intent::SpecialtyComparison,
        Intent::UserCount,
    ];

    /// Returns the wire label for the intent
    pub fn label(&self) -> &'static str {
        match self {
            Intent::TopUsers => "top_users",
            Intent::ContentPerformance => "content_performance",
            Intent::TimingInsights => "timing_insights",
            Intent::AudienceOverview => "audience_overview",
            Intent::UserProfile => "user_profile",
            Intent::SpecialtyEngagement => "specialty_engagement",
            Intent::SpecialtyComparison => "specialty_comparison",
            Intent::UserCount => "user_count",
        }
    }
}

impl FromStr for Intent {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intent::ALL
            .into_iter()
            .find(|intent| intent.label() == s)
            .ok_or_else(|| AppError::Validation(format!("Unknown intent label: {}", s)))
    }
}

/// One step of the cascade.
struct IntentRule {
    intent: Intent,
    matches: fn(&str) -> bool,
}

fn contains_any(text: &str, cues: &[&str]) -> bool {
    cues.iter().any(|cue| text.contains(cue))
}

fn mentions_specialty(text: &str) -> bool {
    contains_any(text, &["specialty", "specialist"]) || SPECIALIST_NOUNS.is_match(text)
}

fn is_top_users(text: &str) -> bool {
    contains_any(text, &["top", "most engaged", "highest open", "highest click"])
        && contains_any(text, &["user", "users", "who", "which"])
}

fn is_content_performance(text: &str) -> bool {
    contains_any(text, &["content", "topic", "perform", "best"])
        && !text.contains("user")
        && !text.contains("when")
}

fn is_timing_insights(text: &str) -> bool {
    contains_any(text, &["when", "time", "hour", "day", "morning", "afternoon"])
}

fn is_audience_overview(text: &str) -> bool {
    contains_any(text, &["overview", "summary", "breakdown", "demographics"])
        && contains_any(text, &["audience", "user"])
}

fn is_user_profile(text: &str) -> bool {
    contains_any(text, &["profile", "details"])
        && contains_any(text, &["@", "email", "user", "npi"])
}

fn is_specialty_engagement(text: &str) -> bool {
    mentions_specialty(text) && !text.contains("compare")
}

fn is_specialty_comparison(text: &str) -> bool {
    contains_any(text, &["compare", "vs", "versus", "difference"]) && mentions_specialty(text)
}

fn is_user_count(text: &str) -> bool {
    contains_any(text, &["how many", "count", "number of"])
        && contains_any(text, &["user", "audience"])
}

/// First-match-wins intent classifier
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Intent returned when no rule fires
    pub const FALLBACK: Intent = Intent::AudienceOverview;

    /// Create a classifier with the rules in precedence order
    pub fn new() -> Self {
        let rules = vec![
            IntentRule {
                intent: Intent::TopUsers,
                matches: is_top_users,
            },
            IntentRule {
                intent: Intent::ContentPerformance,
                matches: is_content_performance,
            },
            IntentRule {
                intent: Intent::TimingInsights,
                matches: is_timing_insights,
            },
            IntentRule {
                intent: Intent::AudienceOverview,
                matches: is_audience_overview,
            },
            IntentRule {
                intent: Intent::UserProfile,
                matches: is_user_profile,
            },
            IntentRule {
                intent: Intent::SpecialtyEngagement,
                matches: is_specialty_engagement,
            },
            IntentRule {
                intent: Intent::SpecialtyComparison,
                matches: is_specialty_comparison,
            },
            IntentRule {
                intent: Intent::UserCount,
                matches: is_user_count,
            },
        ];

        Self { rules }
    }

    /// Classify normalized text
    pub fn classify(&self, text: &str) -> Intent {
        self.classify_with_trace(text).0
    }

    /// Classify and also report which rule fired (`None` means fallback).
    pub fn classify_with_trace(&self, text: &str) -> (Intent, Option<usize>) {
        match self.rules.iter().position(|rule| (rule.matches)(text)) {
            Some(index) => {
                let intent = self.rules[index].intent;
                debug!(rule = index + 1, %intent, "Intent rule matched");
                (intent, Some(index))
            }
            None => {
                debug!(intent = %Self::FALLBACK, "No intent rule matched, using fallback");
                (Self::FALLBACK, None)
            }
        }
    }
}
