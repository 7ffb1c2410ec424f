//! DNS and WHOIS lookups.
//!
//! The default lookups are simulated: they fabricate a plausible record set
//! after a short artificial delay, which is what the tools page shows. With
//! the `network` feature an additional live DNS path resolves real records.

use std::thread;
use std::time::Duration;

use chrono::{Months, NaiveDate};

use crate::types::errors::LookupError;
use crate::types::lookup::{DnsRecord, WhoisInfo};

/// Artificial delay before the simulated DNS records "arrive".
const DNS_DELAY: Duration = Duration::from_millis(1500);

/// Artificial delay before the simulated WHOIS response.
const WHOIS_DELAY: Duration = Duration::from_millis(1500);

/// Simulated DNS lookup. Always returns the same five-record set, with the
/// MX host derived from the queried name.
pub fn fetch_dns_records(domain: &str) -> Result<Vec<DnsRecord>, LookupError> {
    let domain = domain.trim();
    if domain.is_empty() {
        return Err(LookupError::EmptyDomain);
    }
    thread::sleep(DNS_DELAY);

    let record = |record_type: &str, value: String| DnsRecord {
        record_type: record_type.to_string(),
        value,
    };
    Ok(vec![
        record("A", "192.0.2.1".to_string()),
        record("AAAA", "2001:db8::1".to_string()),
        record("MX", format!("mail.{}", domain)),
        record("NS", "ns1.nameserver.com".to_string()),
        record("TXT", "v=spf1 include:_spf.google.com ~all".to_string()),
    ])
}

/// Simulated WHOIS fetch: registration today, renewal one year out. Used to
/// pre-fill the domain form's date fields.
pub fn fetch_whois(domain: &str, today: NaiveDate) -> Result<WhoisInfo, LookupError> {
    let domain = domain.trim();
    if domain.is_empty() {
        return Err(LookupError::EmptyDomain);
    }
    thread::sleep(WHOIS_DELAY);

    let renewal = today.checked_add_months(Months::new(12)).unwrap_or(today);
    Ok(WhoisInfo {
        domain: domain.to_string(),
        purchase_date: today.format("%Y-%m-%d").to_string(),
        renewal_date: renewal.format("%Y-%m-%d").to_string(),
    })
}

/// Live DNS resolution over the system resolver. A/AAAA records for the
/// queried name, in resolver order.
#[cfg(feature = "network")]
pub fn resolve_live(domain: &str) -> Result<Vec<DnsRecord>, LookupError> {
    use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
    use trust_dns_resolver::Resolver;

    let domain = domain.trim();
    if domain.is_empty() {
        return Err(LookupError::EmptyDomain);
    }

    let resolver = Resolver::new(ResolverConfig::default(), ResolverOpts::default())
        .map_err(|e| LookupError::Resolution(e.to_string()))?;
    let response = resolver
        .lookup_ip(domain)
        .map_err(|e| LookupError::Resolution(e.to_string()))?;

    Ok(response
        .iter()
        .map(|ip| DnsRecord {
            record_type: if ip.is_ipv4() { "A" } else { "AAAA" }.to_string(),
            value: ip.to_string(),
        })
        .collect())
}
