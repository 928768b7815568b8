//! Query Descriptor - Output structure of the interpreter.
//!
//! Holds the classified intent plus every entity extracted from the question.
//! Field names serialize in camelCase because dashboard and report code reads
//! them under those names.

use serde::{Deserialize, Serialize};

use super::intent::Intent;
use super::patterns::MONTHS;

/// Time window mentioned in a question.
///
/// `year` is always set once a timeframe exists: it is either the explicit
/// year or the current year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeframe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quarter: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_month: Option<String>,
}

/// Entities extracted from a question.
///
/// List fields behave as insertion-ordered sets: each canonical value appears
/// at most once, in pattern-table order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entities {
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub professions: Vec<String>,
    #[serde(default)]
    pub campaigns: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_campaigns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment: Option<u8>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<Timeframe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl Timeframe {
    /// 1-based number of `month`, if set.
    pub fn month_number(&self) -> Option<u32> {
        let month = self.month.as_deref()?;
        MONTHS
            .iter()
            .position(|m| *m == month)
            .map(|index| index as u32 + 1)
    }
}

/// Append `value` unless it is already present.
pub(crate) fn push_unique(set: &mut Vec<String>, value: &str) {
    if !set.iter().any(|existing| existing == value) {
        set.push(value.to_string());
    }
}

impl Entities {
    /// Whether any filter-bearing field is populated (everything but `metrics`).
    pub fn has_filters(&self) -> bool {
        !self.specialties.is_empty()
            || !self.professions.is_empty()
            || !self.campaigns.is_empty()
            || self.specific_campaigns.is_some()
            || self.deployment.is_some()
            || !self.topics.is_empty()
            || self.timeframe.is_some()
            || self.email.is_some()
            || self.limit.is_some()
    }
}

/// Complete interpretation of one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryDescriptor {
    /// Classified intent
    pub intent: Intent,

    /// Extracted entities
    pub entities: Entities,

    /// The question exactly as received
    pub original_query: String,
}

impl QueryDescriptor {
    /// Get a summary for logging
    pub fn summary(&self) -> String {
        let e = &self.entities;
        format!(
            "Intent: {}, Specialties: {}, Professions: {}, Campaigns: {}, Topics: {}, Metrics: [{}], Timeframe: {}, Limit: {}",
            self.intent,
            e.specialties.len(),
            e.professions.len(),
            e.campaigns.len(),
            e.topics.len(),
            e.metrics.join(", "),
            if e.timeframe.is_some() { "yes" } else { "no" },
            e.limit.map_or_else(|| "none".to_string(), |n| n.to_string()),
        )
    }
}
