//! Retry strategy configuration.

use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

use crate::config::{RETRY_BASE, RETRY_FACTOR_MS, RETRY_MAX_DELAY_SECS};

/// Creates an exponential backoff retry strategy.
///
/// Returns a retry strategy configured with:
/// - First delay: `RETRY_BASE * RETRY_FACTOR_MS` milliseconds
/// - Each following delay multiplied by `RETRY_BASE`
/// - Maximum delay: `RETRY_MAX_DELAY_SECS` seconds
/// - At most `retries` delays, so `retries + 1` attempts in total
///
/// With `retries == 0` the iterator is empty and `tokio_retry` makes exactly one
/// attempt.
pub fn get_retry_strategy(retries: usize) -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(RETRY_BASE)
        .factor(RETRY_FACTOR_MS)
        .max_delay(Duration::from_secs(RETRY_MAX_DELAY_SECS))
        .take(retries)
}
