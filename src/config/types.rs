//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_RESOLVER_URL, DEFAULT_USER_AGENT, MAX_RETRIES};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Checker configuration.
///
/// Parsed from the command line by the binary, or constructed programmatically
/// by library callers.
///
/// # Examples
///
/// ```no_run
/// use domain_exists::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("domains.txt"),
///     max_concurrency: 50,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_exists",
    version,
    about = "Reports which domains resolve to at least one A, AAAA, TXT, CNAME, NS or MX record"
)]
pub struct Config {
    /// Path to the file containing the domain list (`-` reads stdin)
    #[arg(short = 'f', long = "file")]
    pub file: PathBuf,

    /// Path to the output file (results are printed to the console when omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// DNS-over-HTTPS JSON endpoint
    #[arg(long, default_value = DEFAULT_RESOLVER_URL)]
    pub resolver_url: String,

    /// Maximum number of domains checked at once (0 = one task per domain, unbounded)
    #[arg(long, default_value_t = 0)]
    pub max_concurrency: usize,

    /// Per-request timeout in seconds (defaults to the HTTP client's own behavior)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Retries per probe for transient resolver failures (0 disables retrying)
    #[arg(long, default_value_t = 0)]
    pub retries: usize,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("domains.txt"),
            output: None,
            resolver_url: DEFAULT_RESOLVER_URL.to_string(),
            max_concurrency: 0,
            timeout_seconds: None,
            retries: 0,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks option values that clap cannot express as types.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` describing the first invalid option.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(&self.resolver_url).map_err(|e| {
            ConfigError::InvalidResolverUrl(format!("{}: {e}", self.resolver_url))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidResolverUrl(format!(
                "{}: scheme must be http or https",
                self.resolver_url
            )));
        }

        if self.timeout_seconds == Some(0) {
            return Err(ConfigError::InvalidTimeout);
        }

        if self.retries > MAX_RETRIES {
            return Err(ConfigError::TooManyRetries {
                requested: self.retries,
                max: MAX_RETRIES,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.resolver_url, "https://cloudflare-dns.com/dns-query");
        assert_eq!(config.max_concurrency, 0);
        assert_eq!(config.retries, 0);
        assert!(config.timeout_seconds.is_none());
        assert!(config.output.is_none());
        assert!(config.user_agent.starts_with("domain_exists/"));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unparseable_resolver_url() {
        let config = Config {
            resolver_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidResolverUrl(_))
        ));
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let config = Config {
            resolver_url: "ftp://dns.example/dns-query".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidResolverUrl(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            timeout_seconds: Some(0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidTimeout)));
    }

    #[test]
    fn test_validate_rejects_excessive_retries() {
        let config = Config {
            retries: MAX_RETRIES + 1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooManyRetries { .. })
        ));
    }

    #[test]
    fn test_parse_short_flags() {
        let config = Config::try_parse_from(["domain_exists", "-f", "in.txt", "-o", "out.txt"])
            .expect("short flags should parse");
        assert_eq!(config.file, PathBuf::from("in.txt"));
        assert_eq!(config.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_parse_requires_file() {
        let result = Config::try_parse_from(["domain_exists"]);
        assert!(result.is_err(), "missing -f must be rejected");
    }
}
