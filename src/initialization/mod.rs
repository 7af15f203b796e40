//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - Logger
//! - HTTP client for the resolver
//! - Concurrency limiter
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

use std::sync::Arc;

use tokio::sync::Semaphore;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes a semaphore for controlling concurrency.
///
/// A `count` of zero means unbounded: `None` is returned and every domain gets
/// its own task immediately.
///
/// # Arguments
///
/// * `count` - Maximum number of domains checked at once
pub fn init_semaphore(count: usize) -> Option<Arc<Semaphore>> {
    if count == 0 {
        None
    } else {
        Some(Arc::new(Semaphore::new(count)))
    }
}
