use std::io::Write;
use std::path::PathBuf;
use store_stats::commands::{execute_analyze, validate_args, AnalyzeArgs};
use store_stats::output::{read_reports, OpenMode};
use tempfile::NamedTempFile;

const TRACE: &str = r#"{"tx":"0xaa","op":"write","key":"0x1","original":"0x0","current":"0x0","new":"0x5"}
{"tx":"0xaa","op":"write","key":"0x1","original":"0x0","current":"0x5","new":"0x5"}
{"tx":"0xaa","op":"create","size":"0x64"}
{"tx":"0xaa","op":"create","size":"0x32"}
{"tx":"0xbb","op":"read","key":"0x9"}
{"tx":"0xbb","op":"read","key":"0x9"}
{"tx":"0xbb","op":"read","key":"0x9"}
"#;

fn trace_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_validate_args_valid() {
    let trace = trace_file(TRACE);
    let args = AnalyzeArgs {
        trace_path: trace.path().to_path_buf(),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_empty_trace() {
    let args = AnalyzeArgs::default();
    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_missing_trace() {
    let args = AnalyzeArgs {
        trace_path: PathBuf::from("/nonexistent/trace.jsonl"),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_output_directory() {
    let trace = trace_file(TRACE);
    let temp_dir = tempfile::tempdir().unwrap();
    let args = AnalyzeArgs {
        trace_path: trace.path().to_path_buf(),
        output: temp_dir.path().to_path_buf(),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_stdout_output() {
    let trace = trace_file(TRACE);
    let args = AnalyzeArgs {
        trace_path: trace.path().to_path_buf(),
        output: PathBuf::from("-"),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_execute_analyze_writes_one_report_per_run() {
    let trace = trace_file(TRACE);
    let temp_dir = tempfile::tempdir().unwrap();
    let output = temp_dir.path().join("stats.jsonl");

    let args = AnalyzeArgs {
        trace_path: trace.path().to_path_buf(),
        output: output.clone(),
        mode: OpenMode::Truncate,
        print_summary: false,
    };

    let reports = execute_analyze(args).unwrap();
    assert_eq!(reports.len(), 2);

    let loaded = read_reports(&output).unwrap();
    assert_eq!(loaded, reports);

    let first = &loaded[0].storage;
    assert_eq!(loaded[0].transaction.as_deref(), Some("0xaa"));
    assert_eq!(first.writes_count, 2);
    assert_eq!(first.changes_count, 1);
    assert_eq!(first.storage_allocated, 1);
    assert_eq!(first.creation_count, 2);
    assert_eq!(first.creation_size, 150);

    let second = &loaded[1].storage;
    assert_eq!(loaded[1].transaction.as_deref(), Some("0xbb"));
    assert_eq!(second.reads_count, 3);
    assert_eq!(second.writes_count, 0);
    assert_eq!(second.storage_allocated, 0);
}

#[test]
fn test_execute_analyze_overflow_fails() {
    let trace = trace_file(
        r#"{"op":"create","size":"0xffffffffffffffff"}
{"op":"create","size":"0x1"}
"#,
    );
    let temp_dir = tempfile::tempdir().unwrap();
    let output = temp_dir.path().join("stats.jsonl");

    let args = AnalyzeArgs {
        trace_path: trace.path().to_path_buf(),
        output: output.clone(),
        ..Default::default()
    };

    assert!(execute_analyze(args).is_err());
    assert!(!output.exists());
}
