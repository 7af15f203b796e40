// Shared test helpers for input files and checker configuration.

use std::path::PathBuf;

use domain_exists::{Config, LogFormat, LogLevel};
use tempfile::TempDir;

/// Writes `content` to `name` inside `dir` and returns the path.
#[allow(dead_code)] // Used by other test files
pub fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write test input");
    path
}

/// Minimal config pointing at a local resolver.
#[allow(dead_code)] // Used by other test files
pub fn test_config(file: PathBuf, resolver_url: String) -> Config {
    Config {
        file,
        output: None,
        resolver_url,
        max_concurrency: 0,
        timeout_seconds: Some(5),
        retries: 0,
        user_agent: "domain_exists-test/1.0".to_string(),
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
    }
}
