//! Test Module
//!
//! Cross-module tests for the engage-query crate.
//!
//! ## Test Categories
//! - `interpreter_tests`: End-to-end question interpretation
//! - `config_tests`: Environment-driven configuration

pub mod config_tests;
