//! Error handling and probe statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, configuration, per-probe)
//! - Probe statistics tracking
//! - Retry strategy configuration
//!
//! Per-probe errors never leave the resolver client as values: they are
//! categorized, counted, and collapsed to "not found".

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::get_retry_strategy;
pub use stats::ProbeStats;
pub use types::{ConfigError, InitializationError, ProbeError, ProbeFailure};
