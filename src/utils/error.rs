//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use ethereum_types::U256;
use thiserror::Error;

/// Errors that can occur while folding statistics into a summary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// Total creation size does not fit the 64-bit summary field.
    /// A total that overflowed 256 bits is reported as `U256::MAX`.
    #[error("Total creation size {total} exceeds the 64-bit summary width")]
    CreationSizeOverflow { total: U256 },

    #[error("Counter overflow while summing {field}")]
    CounterOverflow { field: &'static str },
}

/// Errors that can occur during event trace parsing
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid trace format: {0}")]
    InvalidFormat(String),

    #[error("Failed to read trace: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
