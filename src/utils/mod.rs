//! Utility modules for configuration, error handling, and numeric conversion.

pub mod config;
pub mod convert;
pub mod error;

// Re-export commonly used error types for convenience
pub use error::{OutputError, ParseError, StatsError};
