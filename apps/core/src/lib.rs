//! Engage Query - turns analytics questions into structured query descriptors.
//!
//! ```
//! use engage_query::{parse, Intent};
//!
//! let descriptor = parse("who are the top 10 most engaged dermatologists in March 2025");
//! assert_eq!(descriptor.intent, Intent::TopUsers);
//! assert_eq!(descriptor.entities.limit, Some(10));
//! assert_eq!(descriptor.entities.specialties, vec!["Dermatology"]);
//! ```

pub mod config;
pub mod error;
pub mod interpreter;
pub mod logging;

pub use config::InterpreterConfig;
pub use error::AppError;
pub use interpreter::{
    parse, Clock, Entities, FixedClock, Intent, QueryDescriptor, QueryInterpreter, SystemClock,
    Timeframe,
};

#[cfg(test)]
mod tests;
