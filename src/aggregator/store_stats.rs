//! Storage access accumulator for one analysis run.
//!
//! The instrumented runtime calls `record_read`, `record_write` and
//! `record_create` as side effects happen. `to_summary` folds the collected
//! state into a `StoreSummary` without mutating it.

use super::key_stats::KeyStats;
use super::summary::StoreSummary;
use crate::parser::schema::StorageEvent;
use crate::utils::convert::{checked_accumulate, count_to_u64, total_creation_size};
use crate::utils::error::StatsError;
use ethereum_types::U256;
use log::debug;
use std::collections::HashMap;

/// Per-run storage statistics
///
/// **Public** - one instance per analysis run, never shared between runs
#[derive(Debug, Clone, Default)]
pub struct StoreStats {
    /// Lifecycle of every key read or written during the run
    changes: HashMap<U256, KeyStats>,

    /// Requested sizes of creation events, in observation order
    create_calls: Vec<U256>,
}

impl StoreStats {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a write to `key`
    ///
    /// **Public** - event-source entry point
    ///
    /// # Arguments
    /// * `key` - Storage key being written
    /// * `original_value` - Slot value before the run began, only used to
    ///   seed the key's initial value on its first recorded write
    /// * `current_value` - Slot value immediately before this write
    /// * `new_value` - Value being written
    pub fn record_write(
        &mut self,
        key: U256,
        original_value: U256,
        current_value: U256,
        new_value: U256,
    ) {
        self.changes
            .entry(key)
            .or_default()
            .observe_write(original_value, current_value, new_value);
    }

    /// Record a read of `key`
    pub fn record_read(&mut self, key: U256) {
        self.changes.entry(key).or_default().observe_read();
    }

    /// Record a creation event requesting `size`
    pub fn record_create(&mut self, size: U256) {
        self.create_calls.push(size);
    }

    /// Dispatch a parsed storage event to the matching recording call
    ///
    /// **Public** - used when replaying recorded traces
    pub fn apply(&mut self, event: &StorageEvent) {
        match *event {
            StorageEvent::Read { key } => self.record_read(key),
            StorageEvent::Write {
                key,
                original,
                current,
                new,
            } => self.record_write(key, original, current, new),
            StorageEvent::Create { size } => self.record_create(size),
        }
    }

    /// Fold the collected statistics into a summary
    ///
    /// **Public** - read-only, may be called any number of times
    ///
    /// # Errors
    /// * `StatsError::CreationSizeOverflow` - creation sizes total more than
    ///   fits in 64 bits
    /// * `StatsError::CounterOverflow` - a summed counter exceeds 64 bits
    pub fn to_summary(&self) -> Result<StoreSummary, StatsError> {
        let mut summary = StoreSummary::default();

        for stats in self.changes.values() {
            summary.changes_count =
                checked_accumulate(summary.changes_count, stats.changes_count, "changesCount")?;
            summary.writes_count =
                checked_accumulate(summary.writes_count, stats.writes_count, "writesCount")?;
            summary.reads_count =
                checked_accumulate(summary.reads_count, stats.reads_count, "readsCount")?;
            // Bounded by the map size, cannot overflow i64
            summary.storage_allocated += stats.allocation_delta();
        }

        summary.creation_count = count_to_u64(self.create_calls.len(), "creationCount")?;
        summary.creation_size = total_creation_size(&self.create_calls)?;

        debug!(
            "Summarized {} keys and {} creation events",
            self.changes.len(),
            self.create_calls.len()
        );

        Ok(summary)
    }

    /// Statistics recorded for `key`, if it was observed
    pub fn key_stats(&self, key: &U256) -> Option<&KeyStats> {
        self.changes.get(key)
    }

    /// Number of distinct keys read or written
    pub fn keys_observed(&self) -> usize {
        self.changes.len()
    }

    /// Creation sizes in the order they were recorded
    pub fn create_sizes(&self) -> &[U256] {
        &self.create_calls
    }

    /// True if no event has been recorded
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.create_calls.is_empty()
    }
}
