//! Query Interpreter - Main orchestrator for the interpreter module.
//!
//! Normalizes the question, classifies intent, runs every entity extractor
//! and fills default metrics when the question named none.

use std::sync::LazyLock;
use std::time::Instant;
use tracing::debug;

use super::clock::{Clock, SystemClock};
use super::descriptor::QueryDescriptor;
use super::extract::extract_all;
use super::intent::IntentClassifier;
use super::metrics::default_metrics;

/// Shared interpreter backing [`parse`]
static DEFAULT_INTERPRETER: LazyLock<QueryInterpreter> = LazyLock::new(QueryInterpreter::new);

/// Trim and lowercase; every matcher downstream sees only this form.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Interpret a question with the process-wide interpreter and the system clock.
pub fn parse(query: &str) -> QueryDescriptor {
    DEFAULT_INTERPRETER.parse(query)
}

/// Turns free-text analytics questions into [`QueryDescriptor`]s.
///
/// Holds no per-call state, so one instance can serve any number of threads.
pub struct QueryInterpreter {
    intent_classifier: IntentClassifier,
    clock: Box<dyn Clock>,
}

impl Default for QueryInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryInterpreter {
    /// Create an interpreter using the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create an interpreter whose default year comes from `clock`
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            intent_classifier: IntentClassifier::new(),
            clock: Box::new(clock),
        }
    }

    /// Interpret one question
    pub fn parse(&self, query: &str) -> QueryDescriptor {
        let start = Instant::now();
        let text = normalize(query);

        // 1. Classify intent
        let intent = self.intent_classifier.classify(&text);

        // 2. Extract entities
        let mut entities = extract_all(&text, self.clock.current_year());

        // 3. Fill default metrics (needs intent and extracted metrics first)
        if entities.metrics.is_empty() {
            entities.metrics = default_metrics(intent)
                .iter()
                .map(|m| m.to_string())
                .collect();
        }

        let descriptor = QueryDescriptor {
            intent,
            entities,
            original_query: query.to_string(),
        };

        debug!(
            elapsed_us = start.elapsed().as_micros() as u64,
            "Parsed query: {}",
            descriptor.summary()
        );

        descriptor
    }
}
