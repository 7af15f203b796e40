//! Progress logging utilities.

use log::info;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// Logs how many domains have been checked so far.
///
/// # Arguments
///
/// * `start_time` - The start time of checking
/// * `checked` - Counter of finished domain tasks
/// * `total` - Number of domains in the input
pub fn log_progress(start_time: Instant, checked: &AtomicUsize, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let done = checked.load(Ordering::SeqCst);
    let rate = if elapsed_secs > 0.0 {
        done as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Checked {}/{} domains in {:.2} seconds (~{:.2} domains/sec)",
        done, total, elapsed_secs, rate
    );
}
