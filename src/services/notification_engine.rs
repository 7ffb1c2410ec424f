//! Notification engine.
//!
//! Notifications are derived from the domain collection on every refresh;
//! nothing is stored. At most five expiring-domain entries are produced.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};

use crate::services::stats_engine::{days_left, EXPIRING_THRESHOLD_DAYS};
use crate::types::domain::Domain;
use crate::types::notification::{Notification, NotificationKind};

/// Generates the expiring-domain notifications, at most five, in the
/// collection's order.
pub fn generate(domains: &[Domain], now: NaiveDateTime) -> Vec<Notification> {
    let generated_at = Utc
        .from_utc_datetime(&now)
        .to_rfc3339_opts(SecondsFormat::Secs, true);

    domains
        .iter()
        .filter_map(|d| {
            let days = days_left(&d.renewal_date, now)?;
            if days > EXPIRING_THRESHOLD_DAYS {
                return None;
            }
            Some(Notification {
                kind: NotificationKind::Expiring,
                title: "Domain Expiring Soon".to_string(),
                message: format!("{} expires in {} days", d.name, days),
                timestamp: generated_at.clone(),
            })
        })
        .take(5)
        .collect()
}

/// Formats an RFC 3339 timestamp as a relative age ("just now", "5 minutes
/// ago", ...). An unparseable timestamp comes back unchanged.
pub fn time_ago(timestamp: &str, now: DateTime<Utc>) -> String {
    let then = match DateTime::parse_from_rfc3339(timestamp) {
        Ok(t) => t.with_timezone(&Utc),
        Err(_) => return timestamp.to_string(),
    };
    let seconds = (now - then).num_seconds().max(0);

    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3600 {
        format!("{} minutes ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{} hours ago", seconds / 3600)
    } else {
        format!("{} days ago", seconds / 86_400)
    }
}
