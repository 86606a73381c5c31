//! Aggregation of storage events into per-run statistics.
//!
//! This module tracks:
//! - Per-key read/write lifecycles
//! - Creation events and their requested sizes
//! - The folded summary reported at the end of a run

pub mod key_stats;
pub mod store_stats;
pub mod summary;

// Re-export main types
pub use key_stats::KeyStats;
pub use store_stats::StoreStats;
pub use summary::StoreSummary;
