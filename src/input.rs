//! Domain list input.
//!
//! One domain per line. Surrounding whitespace is trimmed and lines that end up
//! empty are skipped; nothing else is validated or deduplicated.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Returns the trimmed, non-empty lines of `text` in order.
pub fn parse_domains(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(domain_from_line)
        .map(str::to_string)
        .collect()
}

/// The domain on `line`, or `None` when the line is blank.
fn domain_from_line(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Reads the whole domain list from `path`, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a line cannot be read
/// (including invalid UTF-8).
pub async fn read_domains(path: &Path) -> Result<Vec<String>> {
    let domains = if path.as_os_str() == "-" {
        info!("Reading domains from stdin");
        collect_domains(BufReader::new(tokio::io::stdin()))
            .await
            .context("Failed to read domains from stdin")?
    } else {
        let file = tokio::fs::File::open(path)
            .await
            .with_context(|| format!("Failed to open input file {}", path.display()))?;
        collect_domains(BufReader::new(file))
            .await
            .with_context(|| format!("Failed to read input file {}", path.display()))?
    };

    info!("Total domains in input: {}", domains.len());
    Ok(domains)
}

async fn collect_domains<R>(reader: R) -> std::io::Result<Vec<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut domains = Vec::new();
    while let Some(line) = lines.next_line().await? {
        if let Some(domain) = domain_from_line(&line) {
            domains.push(domain.to_string());
        }
    }
    Ok(domains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_domains_skips_blank_lines() {
        let text = "exists.example\n\n  \n\t\nnonexistent.invalid\n";
        assert_eq!(
            parse_domains(text),
            vec!["exists.example", "nonexistent.invalid"]
        );
    }

    #[test]
    fn test_parse_domains_trims_whitespace_and_crlf() {
        let text = "  example.com  \r\n\ttest.org\r\n";
        assert_eq!(parse_domains(text), vec!["example.com", "test.org"]);
    }

    #[test]
    fn test_parse_domains_keeps_duplicates_and_order() {
        let text = "b.example\na.example\nb.example\n";
        assert_eq!(
            parse_domains(text),
            vec!["b.example", "a.example", "b.example"]
        );
    }

    #[tokio::test]
    async fn test_read_domains_from_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let input = temp_dir.path().join("domains.txt");
        std::fs::write(&input, "exists.example\n\n  \nnonexistent.invalid")
            .expect("Failed to write test file");

        let domains = read_domains(&input).await.expect("file should be readable");
        assert_eq!(domains, vec!["exists.example", "nonexistent.invalid"]);
    }

    #[tokio::test]
    async fn test_read_domains_matches_parse_domains() {
        let text = "  b.example  \r\n\t\r\na.example\n\nb.example\r\n";
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let input = temp_dir.path().join("mixed.txt");
        std::fs::write(&input, text).expect("Failed to write test file");

        let domains = read_domains(&input).await.expect("file should be readable");
        assert_eq!(domains, vec!["b.example", "a.example", "b.example"]);
        assert_eq!(domains, parse_domains(text));
    }

    #[tokio::test]
    async fn test_read_domains_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let missing = temp_dir.path().join("does-not-exist.txt");

        let err = read_domains(&missing).await.unwrap_err();
        assert!(err.to_string().contains("Failed to open input file"));
    }

    #[tokio::test]
    async fn test_read_domains_rejects_invalid_utf8() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let input = temp_dir.path().join("binary.txt");
        std::fs::write(&input, [b'o', b'k', b'\n', 0xff, 0xfe, b'\n'])
            .expect("Failed to write test file");

        assert!(read_domains(&input).await.is_err());
    }
}
