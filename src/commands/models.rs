use crate::output::OpenMode;
use crate::utils::config::DEFAULT_OUTPUT_PATH;
use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// JSON-lines storage event trace
    pub trace_path: PathBuf,

    /// Report destination (`-` for stdout)
    pub output: PathBuf,

    /// Append to or replace an existing report file
    pub mode: OpenMode,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            trace_path: PathBuf::new(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            mode: OpenMode::Append,
            print_summary: false,
        }
    }
}
