//! Event trace parser and replay driver.
//!
//! Reads JSON-lines storage traces, groups events into runs by transaction
//! tag and replays each run into its own `StoreStats`.

use super::schema::{RunReport, StorageEvent, TraceRecord};
use crate::aggregator::StoreStats;
use crate::output::line_reader;
use crate::utils::config::{DEFAULT_RUN_LABEL, SCHEMA_VERSION};
use crate::utils::convert::count_to_u64;
use crate::utils::error::{ParseError, StatsError};
use log::{debug, info};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufRead;
use std::path::Path;

/// Events of one analysis run, in observation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceRun {
    /// Transaction tag, `None` for untagged events
    pub transaction: Option<String>,

    pub events: Vec<StorageEvent>,
}

impl TraceRun {
    /// Display label for logs and terminal output
    pub fn label(&self) -> &str {
        self.transaction.as_deref().unwrap_or(DEFAULT_RUN_LABEL)
    }

    /// Feed every event into a fresh accumulator
    ///
    /// **Public** - each run owns an independent `StoreStats`
    pub fn replay(&self) -> StoreStats {
        let mut stats = StoreStats::new();
        for event in &self.events {
            stats.apply(event);
        }
        stats
    }
}

/// Parse a JSON-lines event trace
///
/// **Public** - main entry point for parsing
///
/// Runs are returned in the order their first event appears; events keep
/// their relative order within a run. Blank lines are skipped.
///
/// # Errors
/// * `ParseError::InvalidFormat` - a line is not a valid storage event
/// * `ParseError::Io` - the reader failed
pub fn parse_trace<R: BufRead>(reader: R) -> Result<Vec<TraceRun>, ParseError> {
    let mut runs: Vec<TraceRun> = Vec::new();
    let mut run_index: HashMap<Option<String>, usize> = HashMap::new();
    let mut event_count = 0usize;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let record: TraceRecord = serde_json::from_str(trimmed).map_err(|e| {
            ParseError::InvalidFormat(format!("line {}: {}", line_no + 1, e))
        })?;

        let index = *run_index.entry(record.tx.clone()).or_insert_with(|| {
            runs.push(TraceRun {
                transaction: record.tx.clone(),
                events: Vec::new(),
            });
            runs.len() - 1
        });
        runs[index].events.push(record.event);
        event_count += 1;
    }

    debug!("Parsed {} events into {} runs", event_count, runs.len());
    Ok(runs)
}

/// Parse a trace file from disk
///
/// **Public** - convenience wrapper around `parse_trace`
///
/// Files ending in `.gz` are decompressed on the fly.
pub fn read_trace_file(path: impl AsRef<Path>) -> Result<Vec<TraceRun>, ParseError> {
    let path = path.as_ref();
    info!("Reading trace from: {}", path.display());

    let file = File::open(path)?;
    parse_trace(line_reader(path, file))
}

/// Convert run statistics to the report format
///
/// **Public** - used by the analyze command
///
/// # Errors
/// * `StatsError` - the summary could not be narrowed to report width
pub fn to_report(transaction: Option<String>, stats: &StoreStats) -> Result<RunReport, StatsError> {
    use chrono::Utc;

    Ok(RunReport {
        version: SCHEMA_VERSION.to_string(),
        transaction,
        storage: stats.to_summary()?,
        keys_observed: count_to_u64(stats.keys_observed(), "keysObserved")?,
        generated_at: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethereum_types::U256;

    #[test]
    fn test_parse_untagged_events() {
        let trace = r#"{"op":"read","key":"0x9"}
{"op":"write","key":"0x1","original":"0x0","current":"0x0","new":"0x5"}
{"op":"create","size":"0x64"}"#;

        let runs = parse_trace(trace.as_bytes()).unwrap();

        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].transaction, None);
        assert_eq!(runs[0].label(), DEFAULT_RUN_LABEL);
        assert_eq!(runs[0].events.len(), 3);
        assert_eq!(
            runs[0].events[2],
            StorageEvent::Create {
                size: U256::from(100u64)
            }
        );
    }

    #[test]
    fn test_parse_groups_by_transaction() {
        let trace = r#"{"tx":"0xaa","op":"read","key":"0x1"}
{"tx":"0xbb","op":"read","key":"0x2"}

{"tx":"0xaa","op":"create","size":"0x10"}"#;

        let runs = parse_trace(trace.as_bytes()).unwrap();

        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].label(), "0xaa");
        assert_eq!(runs[0].events.len(), 2);
        assert_eq!(runs[1].label(), "0xbb");
        assert_eq!(runs[1].events.len(), 1);
    }

    #[test]
    fn test_parse_reports_line_number() {
        let trace = "{\"op\":\"read\",\"key\":\"0x1\"}\n{\"op\":\"delete\",\"key\":\"0x1\"}";

        let err = parse_trace(trace.as_bytes()).unwrap_err();
        match err {
            ParseError::InvalidFormat(msg) => assert!(msg.starts_with("line 2:"), "{}", msg),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_replay_and_report() {
        let trace = r#"{"op":"write","key":"0x1","original":"0x0","current":"0x0","new":"0x5"}
{"op":"write","key":"0x1","original":"0x0","current":"0x5","new":"0x5"}
{"op":"create","size":"0x64"}
{"op":"create","size":"0x32"}"#;

        let runs = parse_trace(trace.as_bytes()).unwrap();
        let stats = runs[0].replay();
        let report = to_report(runs[0].transaction.clone(), &stats).unwrap();

        assert_eq!(report.version, SCHEMA_VERSION);
        assert_eq!(report.keys_observed, 1);
        assert_eq!(report.storage.writes_count, 2);
        assert_eq!(report.storage.changes_count, 1);
        assert_eq!(report.storage.storage_allocated, 1);
        assert_eq!(report.storage.creation_count, 2);
        assert_eq!(report.storage.creation_size, 150);
    }
}
