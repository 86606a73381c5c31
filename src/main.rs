//! Store Stats CLI
//!
//! Replays recorded storage event traces and writes one statistics
//! report per run.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use store_stats::commands::{
    display_schema, display_version, execute_analyze, validate_args, validate_report_file,
    AnalyzeArgs,
};
use store_stats::output::OpenMode;
use store_stats::utils::config::DEFAULT_OUTPUT_PATH;

/// Store Stats - Storage access profiling for ledger VM executions
#[derive(Parser, Debug)]
#[command(name = "store-stats")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize a storage event trace
    Analyze {
        /// JSON-lines storage event trace
        #[arg(short, long)]
        trace: PathBuf,

        /// Report output path ("-" for stdout)
        #[arg(short, long, env = "STORE_STATS_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Replace the output file instead of appending to it
        #[arg(long)]
        truncate: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a report JSON-lines file
    Validate {
        /// Path to report file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Analyze {
            trace,
            output,
            truncate,
            summary,
        } => {
            let args = AnalyzeArgs {
                trace_path: trace,
                output,
                mode: if truncate {
                    OpenMode::Truncate
                } else {
                    OpenMode::Append
                },
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_analyze(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
