//! Record types and the DNS JSON response model.

use serde::Deserialize;
use strum_macros::{EnumIter, IntoStaticStr};

/// DNS record types probed for each domain.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum RecordType {
    A,
    AAAA,
    TXT,
    CNAME,
    NS,
    MX,
}

impl RecordType {
    /// Order in which a domain's record types are probed.
    pub const PROBE_ORDER: [RecordType; 6] = [
        RecordType::A,
        RecordType::AAAA,
        RecordType::TXT,
        RecordType::CNAME,
        RecordType::NS,
        RecordType::MX,
    ];

    /// Value sent as the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON body returned by a DoH resolver for `Accept: application/dns-json`.
///
/// Only `Status` and `Answer[].data` are read; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct DnsJsonResponse {
    #[serde(rename = "Status")]
    pub status: u32,
    #[serde(rename = "Answer", default)]
    pub answer: Vec<DnsAnswer>,
}

/// One answer record.
#[derive(Debug, Clone, Deserialize)]
pub struct DnsAnswer {
    #[serde(default)]
    pub data: String,
}
