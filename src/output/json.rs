//! JSON-lines report writer and reader.
//!
//! Each run produces one compact JSON object on its own line.

use super::line_reader;
use super::sink::{with_sink, OpenMode, SinkTarget};
use crate::parser::schema::RunReport;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, Write};
use std::path::Path;

/// Write one report as a single JSON line
///
/// **Public** - works against any writable stream
///
/// # Errors
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::WriteFailed` - I/O error during write
pub fn write_report_line<W: Write>(writer: &mut W, report: &RunReport) -> Result<(), OutputError> {
    serde_json::to_writer(&mut *writer, report).map_err(OutputError::SerializationFailed)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Write all reports to a sink target
///
/// **Public** - main entry point for report output
///
/// # Returns
/// Number of records written
///
/// # Example
/// ```ignore
/// let target = SinkTarget::from_path("store-stats.jsonl");
/// write_reports(&reports, &target, OpenMode::Append)?;
/// ```
pub fn write_reports(
    reports: &[RunReport],
    target: &SinkTarget,
    mode: OpenMode,
) -> Result<usize, OutputError> {
    if let SinkTarget::File(path) = target {
        info!("Writing {} reports to: {}", reports.len(), path.display());
    }

    with_sink(target, mode, |sink| {
        for report in reports {
            write_report_line(sink, report)?;
        }
        Ok(reports.len())
    })
}

/// Read reports from a JSON-lines file
///
/// **Public** - useful for validation and testing
///
/// Blank lines are skipped. `.gz` files may hold several gzip members,
/// one per appending write.
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_reports(input_path: impl AsRef<Path>) -> Result<Vec<RunReport>, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading reports from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    let mut reports = Vec::new();
    for line in line_reader(input_path, file).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let report: RunReport =
            serde_json::from_str(&line).map_err(OutputError::SerializationFailed)?;
        reports.push(report);
    }

    debug!("Loaded {} reports", reports.len());

    Ok(reports)
}
