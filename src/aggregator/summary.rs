//! Summary record produced by folding storage statistics.
//!
//! The six serialized field names are a stable compatibility contract.
//! Counters are encoded as unsigned 64-bit JSON integers and
//! `storageAllocated` as a signed 64-bit JSON integer.

use serde::{Deserialize, Serialize};

/// Aggregate storage statistics for one run
///
/// **Public** - returned from `StoreStats::to_summary`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSummary {
    /// Writes that changed a slot's current value
    pub changes_count: u64,

    /// All recorded writes
    pub writes_count: u64,

    /// All recorded reads
    pub reads_count: u64,

    /// Net slots allocated (negative when more slots were emptied)
    pub storage_allocated: i64,

    /// Number of creation events
    pub creation_count: u64,

    /// Sum of requested creation sizes
    pub creation_size: u64,
}

impl StoreSummary {
    /// Writes that left the slot's value unchanged
    pub fn redundant_writes(&self) -> u64 {
        self.writes_count.saturating_sub(self.changes_count)
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and terminal output
    pub fn summary(&self) -> String {
        format!(
            "Reads: {} | Writes: {} | Changes: {} | Redundant: {} | Allocated: {:+} | Creations: {} ({} bytes)",
            self.reads_count,
            self.writes_count,
            self.changes_count,
            self.redundant_writes(),
            self.storage_allocated,
            self.creation_count,
            self.creation_size
        )
    }
}
