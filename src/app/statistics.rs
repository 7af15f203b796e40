//! End-of-run statistics.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ProbeFailure, ProbeStats};

/// Logs probe totals and every non-zero failure category.
pub fn print_probe_statistics(stats: &ProbeStats) {
    info!(
        "Probes: {} issued, {} found a record, {} without a record",
        stats.issued(),
        stats.found(),
        stats.total_failures()
    );

    for failure in ProbeFailure::iter() {
        let count = stats.failure_count(failure);
        if count > 0 {
            info!("   {}: {}", failure, count);
        }
    }
}
