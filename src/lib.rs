//! domain_exists library: bulk domain existence checking over DNS-over-HTTPS
//!
//! Given a list of domains, reports the ones that resolve to at least one A,
//! AAAA, TXT, CNAME, NS or MX record according to a public DoH resolver's JSON
//! API. Each domain is checked in its own task; record types are probed in that
//! fixed order and the first hit ends the domain's probing.
//!
//! # Example
//!
//! ```no_run
//! use domain_exists::{run_check, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("domains.txt"),
//!     max_concurrency: 100,
//!     ..Default::default()
//! };
//!
//! let report = run_check(config).await?;
//! for domain in &report.found {
//!     println!("{domain}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

mod app;
pub mod config;
pub mod dispatch;
pub mod error_handling;
pub mod initialization;
pub mod input;
pub mod output;
pub mod resolver;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use dispatch::{check_all, check_domain};
pub use resolver::{DohClient, RecordLookup, RecordType};
pub use run::{run_check, CheckReport};

// Internal run module (wires input, resolver and dispatcher together)
mod run {
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use anyhow::{Context, Result};
    use log::info;
    use tokio_util::sync::CancellationToken;

    use crate::app::{log_progress, print_probe_statistics, shutdown_gracefully};
    use crate::config::{Config, LOGGING_INTERVAL};
    use crate::dispatch::check_all;
    use crate::error_handling::ProbeStats;
    use crate::initialization::{init_client, init_semaphore};
    use crate::input::read_domains;
    use crate::resolver::DohClient;

    /// Results of a checking run.
    #[derive(Debug, Clone)]
    pub struct CheckReport {
        /// Number of domains read from the input
        pub total_domains: usize,
        /// Domains with at least one record, in input order
        pub found: Vec<String>,
        /// Requests sent to the resolver, retries included
        pub probes_issued: usize,
        /// Elapsed checking time in seconds
        pub elapsed_seconds: f64,
    }

    /// Reads the domain list and checks every domain against the resolver.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The input cannot be opened or read
    /// - The HTTP client cannot be built
    ///
    /// Resolver and network failures never surface here; they only turn the
    /// affected probes into "not found".
    pub async fn run_check(config: Config) -> Result<CheckReport> {
        let domains = read_domains(&config.file).await?;
        let total_domains = domains.len();

        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let stats = Arc::new(ProbeStats::new());
        let resolver = Arc::new(DohClient::new(
            client,
            config.resolver_url.clone(),
            config.retries,
            Arc::clone(&stats),
        ));
        let limiter = init_semaphore(config.max_concurrency);

        info!(
            "Checking {} domains against {} (concurrency: {})",
            total_domains,
            config.resolver_url,
            if config.max_concurrency == 0 {
                "unbounded".to_string()
            } else {
                config.max_concurrency.to_string()
            }
        );

        let start_time = Instant::now();
        let checked = Arc::new(AtomicUsize::new(0));

        let cancel = CancellationToken::new();
        let cancel_logging = cancel.child_token();
        let checked_for_logging = Arc::clone(&checked);
        let logging_task = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(LOGGING_INTERVAL));
            // The first tick fires immediately; nothing has been checked yet
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        log_progress(start_time, &checked_for_logging, total_domains);
                    }
                    _ = cancel_logging.cancelled() => {
                        break;
                    }
                }
            }
        }));

        let found = check_all(resolver, domains, limiter, Some(Arc::clone(&checked))).await;

        shutdown_gracefully(cancel, logging_task).await;
        log_progress(start_time, &checked, total_domains);
        print_probe_statistics(&stats);

        info!("{} of {} domains have DNS records", found.len(), total_domains);

        Ok(CheckReport {
            total_domains,
            found,
            probes_issued: stats.issued(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
