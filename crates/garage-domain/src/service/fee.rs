//! Parking fee computation
//!
//! Every started hour is charged in full: `fee = rate * ceil(hours)`.

use chrono::Duration;

const MILLIS_PER_HOUR: u64 = 60 * 60 * 1000;

/// Whole hours charged for a stay, rounding any started hour up
///
/// Zero or negative durations (clock skew) charge nothing.
pub fn billable_hours(elapsed: Duration) -> u64 {
    let millis = elapsed.num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    (millis as u64).div_ceil(MILLIS_PER_HOUR)
}

/// Saturates at `u64::MAX` instead of overflowing on absurd stays
pub fn compute_fee(hourly_rate: u32, elapsed: Duration) -> u64 {
    u64::from(hourly_rate).saturating_mul(billable_hours(elapsed))
}
