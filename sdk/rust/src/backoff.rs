//! Exponential backoff between attempts.

use std::time::Duration;

/// Base delay before the second attempt, in milliseconds.
pub const BASE_DELAY_MS: u64 = 1_000;

/// Ceiling on any single backoff delay, in milliseconds.
pub const MAX_DELAY_MS: u64 = 5_000;

/// Calculate the deterministic exponential backoff delay.
///
/// The delay doubles per completed attempt and is capped at `max_ms`.
pub fn calculate_backoff(attempt: u32, base_ms: u64, max_ms: u64) -> Duration {
    if attempt == 0 {
        return Duration::from_millis(0);
    }

    let exponential_base = 2u64.saturating_pow(attempt - 1);
    let delay_ms = base_ms.saturating_mul(exponential_base);

    Duration::from_millis(delay_ms.min(max_ms))
}
