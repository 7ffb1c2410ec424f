use serde::{Deserialize, Serialize};

/// A single DNS record row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    pub value: String,
}

/// WHOIS-style registration info used to pre-fill the domain form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhoisInfo {
    pub domain: String,
    /// `YYYY-MM-DD`.
    pub purchase_date: String,
    /// `YYYY-MM-DD`.
    pub renewal_date: String,
}
