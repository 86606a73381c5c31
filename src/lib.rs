//! Store Stats
//!
//! Storage access profiling for ledger VM executions.
//!
//! The core is [`aggregator::StoreStats`]: an instrumented runtime records
//! every storage read, write and creation event of one run, then asks for a
//! [`aggregator::StoreSummary`]. The remaining modules replay recorded
//! traces and write per-run reports for the `store-stats` CLI.
//!
//! ```
//! use ethereum_types::U256;
//! use store_stats::aggregator::StoreStats;
//!
//! let mut stats = StoreStats::new();
//! stats.record_write(U256::from(1u64), U256::zero(), U256::zero(), U256::from(5u64));
//! stats.record_create(U256::from(100u64));
//!
//! let summary = stats.to_summary().unwrap();
//! assert_eq!(summary.storage_allocated, 1);
//! assert_eq!(summary.creation_size, 100);
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
