//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including the resolver endpoint, retry timings and logging intervals.

/// Default DNS-over-HTTPS endpoint (Cloudflare JSON API).
pub const DEFAULT_RESOLVER_URL: &str = "https://cloudflare-dns.com/dns-query";

/// Media type requesting the JSON flavor of a DoH response.
pub const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

/// Default User-Agent string for resolver requests.
pub const DEFAULT_USER_AGENT: &str = concat!("domain_exists/", env!("CARGO_PKG_VERSION"));

/// Interval in seconds between progress log lines while domains are checked.
pub const LOGGING_INTERVAL: u64 = 5;

/// Resolver-level "no error" status (DNS RCODE NOERROR).
pub const DNS_STATUS_NO_ERROR: u32 = 0;

// HTTP status codes
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;

// Retry strategy
/// Base of the exponential backoff (delay n is `RETRY_BASE^n * RETRY_FACTOR_MS`).
pub const RETRY_BASE: u64 = 2;
/// Multiplier in milliseconds applied to each backoff step (first retry waits 200ms).
pub const RETRY_FACTOR_MS: u64 = 100;
/// Maximum delay between retries in seconds.
pub const RETRY_MAX_DELAY_SECS: u64 = 5;
/// Upper bound accepted for `--retries`.
pub const MAX_RETRIES: usize = 10;
