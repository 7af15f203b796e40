//! Tests for command-line parsing.

use clap::Parser;
use domain_exists::config::{Config, LogFormat, LogLevel, DEFAULT_RESOLVER_URL};
use std::path::PathBuf;

#[test]
fn test_cli_minimal_invocation() {
    let config = Config::try_parse_from(["domain_exists", "-f", "domains.txt"])
        .expect("Should parse with only -f");

    assert_eq!(config.file, PathBuf::from("domains.txt"));
    assert!(config.output.is_none());
    assert_eq!(config.resolver_url, DEFAULT_RESOLVER_URL);
    assert_eq!(config.max_concurrency, 0);
    assert_eq!(config.retries, 0);
    assert!(config.timeout_seconds.is_none());
    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::Info
    );
    assert!(matches!(config.log_format, LogFormat::Plain));
}

#[test]
fn test_cli_long_flags() {
    let config = Config::try_parse_from([
        "domain_exists",
        "--file",
        "in.txt",
        "--output",
        "out.txt",
        "--resolver-url",
        "https://dns.google/resolve",
        "--max-concurrency",
        "64",
        "--timeout-seconds",
        "7",
        "--retries",
        "2",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .expect("Should parse all long flags");

    assert_eq!(config.file, PathBuf::from("in.txt"));
    assert_eq!(config.output, Some(PathBuf::from("out.txt")));
    assert_eq!(config.resolver_url, "https://dns.google/resolve");
    assert_eq!(config.max_concurrency, 64);
    assert_eq!(config.timeout_seconds, Some(7));
    assert_eq!(config.retries, 2);
    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::from(LogLevel::Debug)
    );
    assert!(matches!(config.log_format, LogFormat::Json));
    assert!(config.validate().is_ok());
}

#[test]
fn test_cli_missing_file_is_an_error() {
    let err = Config::try_parse_from(["domain_exists", "-o", "out.txt"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_cli_rejects_non_numeric_concurrency() {
    let result = Config::try_parse_from([
        "domain_exists",
        "-f",
        "domains.txt",
        "--max-concurrency",
        "many",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_cli_rejects_unknown_log_level() {
    let result =
        Config::try_parse_from(["domain_exists", "-f", "domains.txt", "--log-level", "loud"]);
    assert!(result.is_err());
}
