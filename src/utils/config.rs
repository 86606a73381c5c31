//! Configuration and constants for the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default path for the JSON-lines report file
pub const DEFAULT_OUTPUT_PATH: &str = "store-stats.jsonl";

/// Output path meaning "write to stdout"
pub const STDOUT_PATH: &str = "-";

/// Label used for trace events that carry no transaction tag
pub const DEFAULT_RUN_LABEL: &str = "<untagged>";

// Stable summary keys, in serialization order
pub const SUMMARY_FIELDS: &[&str] = &[
    "changesCount",
    "writesCount",
    "readsCount",
    "storageAllocated",
    "creationCount",
    "creationSize",
];
