//! Storage event trace parsing.
//!
//! This module handles:
//! - Parsing JSON-lines storage event traces
//! - Grouping events into per-transaction runs
//! - Converting run statistics to our report schema

pub mod event_trace;
pub mod schema;

// Re-export main types and functions
pub use event_trace::{parse_trace, read_trace_file, to_report, TraceRun};
pub use schema::{RunReport, StorageEvent, TraceRecord};
