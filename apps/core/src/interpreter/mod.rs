//! # Interpreter Module
//!
//! Deterministic, rule-based understanding of analytics questions.
//! Turns free text into a [`QueryDescriptor`] before any data is fetched.
//!
//! ## Components
//! - `patterns`: Pattern tables per entity category (regex, compiled once)
//! - `intent`: First-match-wins intent cascade
//! - `extract`: Entity extractors
//! - `metrics`: Default metrics per intent
//! - `descriptor`: Output data structure
//! - `clock`: Year source for timeframe defaults
//! - `analyzer`: Main orchestrator

pub mod analyzer;
pub mod clock;
pub mod descriptor;
pub mod extract;
pub mod intent;
pub mod metrics;
pub mod patterns;

pub use analyzer::{normalize, parse, QueryInterpreter};
pub use clock::{Clock, FixedClock, SystemClock};
pub use descriptor::{Entities, QueryDescriptor, Timeframe};
pub use intent::{Intent, IntentClassifier};
pub use metrics::{default_metrics, default_metrics_for_label};
pub use patterns::ProfessionValue;
