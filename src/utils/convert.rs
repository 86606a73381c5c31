//! Numeric conversions between the 256-bit storage domain and the
//! 64-bit summary counters.
//!
//! Every narrowing step here is checked. Nothing wraps silently.

use super::error::StatsError;
use ethereum_types::U256;

/// Narrow a 256-bit value to `u64`, or `None` if it does not fit.
pub fn narrow_to_u64(value: U256) -> Option<u64> {
    if value.bits() > 64 {
        None
    } else {
        Some(value.low_u64())
    }
}

/// Sum 256-bit values at full width.
///
/// Saturates at `U256::MAX`; any saturated total is already far outside the
/// 64-bit summary range, so callers still reject it when narrowing.
pub fn sum_wide<'a>(values: impl IntoIterator<Item = &'a U256>) -> U256 {
    values
        .into_iter()
        .fold(U256::zero(), |acc, value| acc.saturating_add(*value))
}

/// Sum 256-bit creation sizes and narrow the total to `u64`.
///
/// # Errors
/// * `StatsError::CreationSizeOverflow` - total does not fit in 64 bits
pub fn total_creation_size<'a>(sizes: impl IntoIterator<Item = &'a U256>) -> Result<u64, StatsError> {
    let total = sum_wide(sizes);
    narrow_to_u64(total).ok_or(StatsError::CreationSizeOverflow { total })
}

/// Add to a 64-bit counter, reporting overflow against the named field.
pub fn checked_accumulate(acc: u64, value: u64, field: &'static str) -> Result<u64, StatsError> {
    acc.checked_add(value)
        .ok_or(StatsError::CounterOverflow { field })
}

/// Convert a collection length to a 64-bit counter.
pub fn count_to_u64(len: usize, field: &'static str) -> Result<u64, StatsError> {
    u64::try_from(len).map_err(|_| StatsError::CounterOverflow { field })
}
