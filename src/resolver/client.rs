//! DNS-over-HTTPS JSON client.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use tokio_retry::RetryIf;

use crate::config::{DNS_JSON_CONTENT_TYPE, DNS_STATUS_NO_ERROR};
use crate::error_handling::{get_retry_strategy, ProbeError, ProbeStats};

use super::types::{DnsJsonResponse, RecordType};
use super::RecordLookup;

/// Resolver client querying a DoH endpoint's JSON API.
///
/// One instance is shared by every domain task; the underlying
/// `reqwest::Client` pools connections to the resolver.
pub struct DohClient {
    client: Arc<reqwest::Client>,
    endpoint: String,
    retries: usize,
    stats: Arc<ProbeStats>,
}

impl DohClient {
    /// Creates a client for `endpoint` (e.g. `https://cloudflare-dns.com/dns-query`).
    ///
    /// `retries` is the number of extra attempts for retriable failures; zero
    /// means every probe is sent exactly once.
    pub fn new(
        client: Arc<reqwest::Client>,
        endpoint: impl Into<String>,
        retries: usize,
        stats: Arc<ProbeStats>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            retries,
            stats,
        }
    }

    pub fn stats(&self) -> &Arc<ProbeStats> {
        &self.stats
    }

    /// Sends one probe and classifies the response.
    ///
    /// Succeeds only for HTTP 200 with a JSON body whose `Status` is 0 and whose
    /// `Answer` section has at least one record.
    ///
    /// # Errors
    ///
    /// Returns the `ProbeError` describing why the probe found nothing.
    pub async fn lookup(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<DnsJsonResponse, ProbeError> {
        self.stats.record_issued();

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("name", domain), ("type", record_type.as_str())])
            .header(ACCEPT, DNS_JSON_CONTENT_TYPE)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ProbeError::HttpStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        let parsed: DnsJsonResponse = serde_json::from_slice(&body)?;

        if parsed.status != DNS_STATUS_NO_ERROR {
            return Err(ProbeError::ResolverStatus(parsed.status));
        }
        if parsed.answer.is_empty() {
            return Err(ProbeError::EmptyAnswer);
        }

        Ok(parsed)
    }

    /// `lookup` wrapped in the configured retry policy.
    ///
    /// Only retriable failures are repeated; a definitive answer such as
    /// NXDOMAIN ends the probe immediately.
    async fn lookup_with_retry(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<DnsJsonResponse, ProbeError> {
        RetryIf::spawn(
            get_retry_strategy(self.retries),
            move || self.lookup(domain, record_type),
            move |e: &ProbeError| {
                let retriable = e.is_retriable();
                if retriable && self.retries > 0 {
                    debug!("Retrying {record_type} lookup for {domain}: {e}");
                }
                retriable
            },
        )
        .await
    }
}

#[async_trait]
impl RecordLookup for DohClient {
    async fn query(&self, domain: &str, record_type: RecordType) -> bool {
        match self.lookup_with_retry(domain, record_type).await {
            Ok(response) => {
                self.stats.record_found();
                if let Some(first) = response.answer.first() {
                    debug!("{domain} has {record_type} record {}", first.data);
                }
                true
            }
            Err(e) => {
                self.stats.record_failure(e.kind());
                debug!("No {record_type} record for {domain}: {e}");
                false
            }
        }
    }
}
