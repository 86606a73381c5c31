use crate::output::read_reports;
use crate::utils::config::{DEFAULT_RUN_LABEL, SCHEMA_VERSION};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Validate a report JSON-lines file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating reports: {}", file_path.display());

    let reports = read_reports(&file_path).context("Failed to read report file")?;

    println!("✓ Valid report file ({} runs)", reports.len());
    for report in &reports {
        println!(
            "  [{}] {}: {}",
            report.version,
            report.transaction.as_deref().unwrap_or(DEFAULT_RUN_LABEL),
            report.storage.summary()
        );
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Store Stats Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure (one JSON object per line):");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  transaction: string?       - Transaction tag of the run");
        println!("  storage: object            - Storage statistics");
        println!("    changesCount: u64        - Writes that changed a value");
        println!("    writesCount: u64         - All writes");
        println!("    readsCount: u64          - All reads");
        println!("    storageAllocated: i64    - Net slots allocated");
        println!("    creationCount: u64       - Creation events");
        println!("    creationSize: u64        - Sum of creation sizes");
        println!("  keysObserved: u64          - Distinct keys touched");
        println!("  generatedAt: string        - RFC 3339 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Store Stats v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Storage access profiling for ledger VM executions.");
}
