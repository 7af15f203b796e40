//! Resolver client.
//!
//! This module answers one question per call: does `domain` have at least one
//! record of `record_type`? Lookups go to a DNS-over-HTTPS resolver's JSON API
//! (`Accept: application/dns-json`).
//!
//! Every failure mode (network error, non-200 status, malformed body, non-zero
//! DNS status, empty answer) is reported as `false`.

mod client;
mod types;

use async_trait::async_trait;

// Re-export public API
pub use client::DohClient;
pub use types::{DnsAnswer, DnsJsonResponse, RecordType};

/// A source of record-existence answers.
///
/// Implemented by `DohClient` for real lookups and by stubs in tests.
#[async_trait]
pub trait RecordLookup: Send + Sync {
    /// Returns `true` if `domain` has at least one `record_type` record.
    async fn query(&self, domain: &str, record_type: RecordType) -> bool;
}
