//! Probe statistics tracking.
//!
//! This module provides thread-safe counters for probes issued, probes that
//! found a record, and each category of unsuccessful probe.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ProbeFailure;

/// Thread-safe probe statistics tracker.
///
/// Uses atomic counters so every domain task can record outcomes through a
/// shared `Arc<ProbeStats>`. All failure categories are initialized to zero on
/// creation.
pub struct ProbeStats {
    issued: AtomicUsize,
    found: AtomicUsize,
    failures: HashMap<ProbeFailure, AtomicUsize>,
}

impl ProbeStats {
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for failure in ProbeFailure::iter() {
            failures.insert(failure, AtomicUsize::new(0));
        }

        ProbeStats {
            issued: AtomicUsize::new(0),
            found: AtomicUsize::new(0),
            failures,
        }
    }

    /// Records that a probe was sent to the resolver.
    pub fn record_issued(&self) {
        self.issued.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a probe that returned at least one answer.
    pub fn record_found(&self) {
        self.found.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment a failure counter.
    pub fn record_failure(&self, failure: ProbeFailure) {
        if let Some(counter) = self.failures.get(&failure) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment failure counter for {:?} which is not in the map. \
                 This indicates a bug in ProbeStats initialization.",
                failure
            );
        }
    }

    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::SeqCst)
    }

    pub fn found(&self) -> usize {
        self.found.load(Ordering::SeqCst)
    }

    /// Get the count for a failure category.
    pub fn failure_count(&self, failure: ProbeFailure) -> usize {
        self.failures
            .get(&failure)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn total_failures(&self) -> usize {
        self.failures
            .values()
            .map(|c| c.load(Ordering::SeqCst))
            .sum()
    }
}

impl Default for ProbeStats {
    fn default() -> Self {
        Self::new()
    }
}
