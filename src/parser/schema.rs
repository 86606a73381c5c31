//! JSON schema definitions for trace input and report output.
//!
//! Trace files are JSON lines, one storage event per line. Report files are
//! JSON lines, one `RunReport` per analysis run. The report schema is
//! versioned to allow future evolution.

use crate::aggregator::StoreSummary;
use ethereum_types::U256;
use serde::{Deserialize, Serialize};

/// A single storage side effect observed during execution
///
/// Keys, values and sizes are 0x-prefixed hex strings of 256-bit integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum StorageEvent {
    /// Slot read
    Read { key: U256 },

    /// Slot write
    Write {
        key: U256,
        /// Value before the run began
        original: U256,
        /// Value immediately before this write
        current: U256,
        /// Value being written
        new: U256,
    },

    /// Account/contract creation requesting `size`
    Create { size: U256 },
}

/// One line of a trace file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRecord {
    /// Run (transaction) the event belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx: Option<String>,

    #[serde(flatten)]
    pub event: StorageEvent,
}

/// Top-level report record written per run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Transaction tag of the run, absent for untagged traces
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction: Option<String>,

    /// Folded storage statistics
    pub storage: StoreSummary,

    /// Distinct keys read or written
    pub keys_observed: u64,

    /// Timestamp when the report was generated
    pub generated_at: String,
}
