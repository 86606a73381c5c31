//! Output writers for run reports.
//!
//! This module handles writing data in JSON-lines form:
//! - Buffered sinks over files (append or truncate) and stdout
//! - Gzip compression for paths ending in `.gz`
//! - One compact report record per run

pub mod json;
pub mod sink;

// Re-export main functions
pub use json::{read_reports, write_report_line, write_reports};
pub use sink::{with_sink, OpenMode, OutputSink, SinkTarget};

use crate::utils::error::OutputError;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// True for paths with a `.gz` extension
pub fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Open a line reader over `file`, decoding every gzip member for `.gz` paths
pub fn line_reader(path: &Path, file: File) -> Box<dyn BufRead> {
    if is_gzip_path(path) {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    }
}

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
