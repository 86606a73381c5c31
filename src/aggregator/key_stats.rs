//! Per-key storage lifecycle tracking.

use ethereum_types::U256;

/// Lifecycle of one storage key across a single analysis run
///
/// **Public** - owned by `StoreStats`, exposed read-only for inspection
///
/// `initial_value` and `new_value` only carry meaning once
/// `initial_value_set` is true; keys that were only read keep them at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStats {
    /// True once the first write for this key has been recorded
    pub initial_value_set: bool,

    /// Value the slot held before the run, seeded by the first write
    pub initial_value: U256,

    /// Most recently written value
    pub new_value: U256,

    /// Number of recorded writes
    pub writes_count: u64,

    /// Number of writes that changed the slot's current value
    pub changes_count: u64,

    /// Number of recorded reads
    pub reads_count: u64,
}

impl KeyStats {
    /// Apply one write to this key
    ///
    /// **Public** - called by `StoreStats::record_write`
    pub fn observe_write(&mut self, original_value: U256, current_value: U256, new_value: U256) {
        if !self.initial_value_set {
            self.initial_value_set = true;
            self.initial_value = original_value;
        }
        self.new_value = new_value;
        self.writes_count += 1;
        if current_value != new_value {
            self.changes_count += 1;
        }
    }

    /// Apply one read to this key
    pub fn observe_read(&mut self) {
        self.reads_count += 1;
    }

    /// Net slot allocation caused by this key over the run
    ///
    /// +1 when an empty slot ended up occupied, -1 when an occupied slot
    /// ended up empty, 0 otherwise.
    pub fn allocation_delta(&self) -> i64 {
        match (self.initial_value.is_zero(), self.new_value.is_zero()) {
            (true, false) => 1,
            (false, true) => -1,
            _ => 0,
        }
    }
}
