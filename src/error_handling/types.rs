//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! failure categories counted per probe.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::HTTP_STATUS_TOO_MANY_REQUESTS;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Invalid option values caught by `Config::validate`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid resolver URL {0}")]
    InvalidResolverUrl(String),

    #[error("--timeout-seconds must be greater than zero")]
    InvalidTimeout,

    #[error("--retries {requested} exceeds the maximum of {max}")]
    TooManyRetries { requested: usize, max: usize },
}

/// Why a single (domain, record type) probe did not yield a record.
///
/// Every variant collapses to "not found" at the `RecordLookup` boundary; the
/// distinction only feeds logging and statistics.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Connection, timeout or body read failure.
    #[error("resolver request failed: {0}")]
    Transport(#[from] ReqwestError),

    /// The resolver answered with something other than 200 OK.
    #[error("resolver returned HTTP {0}")]
    HttpStatus(u16),

    /// The body was not a DNS JSON document.
    #[error("malformed resolver response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The resolver reported a non-zero DNS status (e.g. 3 = NXDOMAIN).
    #[error("resolver status {0}")]
    ResolverStatus(u32),

    /// NOERROR with no answer records.
    #[error("empty answer section")]
    EmptyAnswer,
}

impl ProbeError {
    /// Failure category used for statistics.
    pub fn kind(&self) -> ProbeFailure {
        match self {
            ProbeError::Transport(e) if e.is_timeout() => ProbeFailure::Timeout,
            ProbeError::Transport(_) => ProbeFailure::Network,
            ProbeError::HttpStatus(code) if *code == HTTP_STATUS_TOO_MANY_REQUESTS => {
                ProbeFailure::RateLimited
            }
            ProbeError::HttpStatus(_) => ProbeFailure::HttpStatus,
            ProbeError::Decode(_) => ProbeFailure::MalformedBody,
            ProbeError::ResolverStatus(_) => ProbeFailure::ResolverStatus,
            ProbeError::EmptyAnswer => ProbeFailure::EmptyAnswer,
        }
    }

    /// Whether repeating the same probe might succeed.
    ///
    /// Transient network conditions, rate limiting (429) and server errors (5xx)
    /// are retriable. Definitive resolver answers and malformed bodies are not.
    pub fn is_retriable(&self) -> bool {
        match self {
            ProbeError::Transport(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            ProbeError::HttpStatus(code) => {
                *code == HTTP_STATUS_TOO_MANY_REQUESTS || (500..600).contains(code)
            }
            ProbeError::Decode(_) | ProbeError::ResolverStatus(_) | ProbeError::EmptyAnswer => {
                false
            }
        }
    }
}

/// Categories of unsuccessful probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ProbeFailure {
    Network,
    Timeout,
    RateLimited,
    HttpStatus,
    MalformedBody,
    ResolverStatus,
    EmptyAnswer,
}

impl std::fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ProbeFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeFailure::Network => "Network error",
            ProbeFailure::Timeout => "Request timeout",
            ProbeFailure::RateLimited => "Too many requests (429)",
            ProbeFailure::HttpStatus => "Non-success HTTP status",
            ProbeFailure::MalformedBody => "Malformed JSON body",
            ProbeFailure::ResolverStatus => "Non-zero resolver status",
            ProbeFailure::EmptyAnswer => "Empty answer section",
        }
    }
}
