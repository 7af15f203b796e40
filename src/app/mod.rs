//! Run-time helpers used by `run_check`.
//!
//! This module provides progress logging, shutdown of background tasks, and
//! end-of-run statistics.

pub mod logging;
pub mod shutdown;
pub mod statistics;

// Re-export public API
pub use logging::log_progress;
pub use shutdown::shutdown_gracefully;
pub use statistics::print_probe_statistics;
