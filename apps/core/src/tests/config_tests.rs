//! Config Tests
//!
//! Environment-variable configuration, isolated with `temp_env`.

use crate::config::{InterpreterConfig, LOG_FORMAT_VAR, REFERENCE_YEAR_VAR};
use crate::error::AppError;
use crate::logging::LogFormat;

#[test]
fn test_defaults_when_unset() {
    temp_env::with_vars_unset([REFERENCE_YEAR_VAR, LOG_FORMAT_VAR], || {
        let config = InterpreterConfig::from_env().unwrap();
        assert_eq!(config, InterpreterConfig::default());
        assert_eq!(config.log_format, LogFormat::Pretty);
    });
}

#[test]
fn test_reads_year_and_format() {
    temp_env::with_vars(
        [(REFERENCE_YEAR_VAR, Some("2024")), (LOG_FORMAT_VAR, Some("json"))],
        || {
            let config = InterpreterConfig::from_env().unwrap();
            assert_eq!(config.reference_year, Some(2024));
            assert_eq!(config.log_format, LogFormat::Json);
        },
    );
}

#[test]
fn test_blank_values_are_ignored() {
    temp_env::with_vars(
        [(REFERENCE_YEAR_VAR, Some("  ")), (LOG_FORMAT_VAR, Some(""))],
        || {
            assert_eq!(
                InterpreterConfig::from_env().unwrap(),
                InterpreterConfig::default()
            );
        },
    );
}

#[test]
fn test_malformed_year_is_config_error() {
    temp_env::with_var(REFERENCE_YEAR_VAR, Some("next year"), || {
        let err = InterpreterConfig::from_env().unwrap_err();
        assert!(matches!(err, AppError::Config(_)), "got {:?}", err);
    });
}

#[test]
fn test_out_of_range_year_is_validation_error() {
    temp_env::with_var(REFERENCE_YEAR_VAR, Some("1999"), || {
        let err = InterpreterConfig::from_env().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "got {:?}", err);
    });
}

#[test]
fn test_unknown_log_format() {
    temp_env::with_vars(
        [(REFERENCE_YEAR_VAR, None), (LOG_FORMAT_VAR, Some("xml"))],
        || {
            assert!(InterpreterConfig::from_env().is_err());
        },
    );
}

#[test]
fn test_reference_year_reaches_interpreter() {
    let config = InterpreterConfig {
        reference_year: Some(2030),
        log_format: LogFormat::Pretty,
    };

    let descriptor = config.interpreter().parse("open rates in q4");
    let timeframe = descriptor.entities.timeframe.unwrap();
    assert_eq!(timeframe.year, 2030);
    assert_eq!(timeframe.quarter, Some(4));
}
