//! Interpreter configuration from environment variables.
//!
//! | Variable | Meaning |
//! |---|---|
//! | `ENGAGE_QUERY_REFERENCE_YEAR` | Pins the default year (2000-2100); unset uses the system clock |
//! | `ENGAGE_QUERY_LOG_FORMAT` | `pretty` (default) or `json` |
//!
//! `RUST_LOG` is read by the tracing filter, not here.

use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;
use validator::Validate;

use crate::error::AppError;
use crate::interpreter::{FixedClock, QueryInterpreter};
use crate::logging::LogFormat;

pub const REFERENCE_YEAR_VAR: &str = "ENGAGE_QUERY_REFERENCE_YEAR";
pub const LOG_FORMAT_VAR: &str = "ENGAGE_QUERY_LOG_FORMAT";

/// Runtime settings around the interpreter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct InterpreterConfig {
    /// Year used when a question has a timeframe cue but no explicit year.
    #[validate(range(min = 2000, max = 2100))]
    pub reference_year: Option<i32>,
    /// Log line format for the binary.
    pub log_format: LogFormat,
}

impl InterpreterConfig {
    /// Load `.env` (if present) and then read the environment.
    pub fn load() -> Result<Self, AppError> {
        if let Err(e) = dotenv::dotenv() {
            if !e.not_found() {
                warn!("Ignoring unreadable .env file: {}", e);
            }
        }
        Self::from_env()
    }

    /// Read and validate settings from the process environment only.
    pub fn from_env() -> Result<Self, AppError> {
        let reference_year = match env::var(REFERENCE_YEAR_VAR) {
            Ok(raw) if !raw.trim().is_empty() => Some(raw.trim().parse::<i32>()?),
            _ => None,
        };

        let log_format = match env::var(LOG_FORMAT_VAR) {
            Ok(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => LogFormat::default(),
        };

        let config = Self {
            reference_year,
            log_format,
        };
        config.validate()?;
        Ok(config)
    }

    /// Build an interpreter honoring `reference_year`.
    pub fn interpreter(&self) -> QueryInterpreter {
        match self.reference_year {
            Some(year) => QueryInterpreter::with_clock(FixedClock(year)),
            None => QueryInterpreter::new(),
        }
    }
}
