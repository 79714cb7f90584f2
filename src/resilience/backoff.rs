//! Exponential backoff with optional jitter.

use rand::Rng;
use std::time::Duration;

/// Calculate the delay before retry number `retry` (0-based).
///
/// The base schedule is `base_ms * 2^retry`. A non-zero `jitter_ratio` adds
/// up to that fraction of the delay on top, never below the base schedule.
pub fn calculate_backoff(retry: u32, base_ms: u64, jitter_ratio: f64) -> Duration {
    let exponential_base = 2u64.saturating_pow(retry);
    let delay_ms = base_ms.saturating_mul(exponential_base);

    let jitter_range = (delay_ms as f64 * jitter_ratio.clamp(0.0, 1.0)) as u64;
    let jitter = if jitter_range > 0 {
        rand::thread_rng().gen_range(0..jitter_range)
    } else {
        0
    };

    Duration::from_millis(delay_ms.saturating_add(jitter))
}
