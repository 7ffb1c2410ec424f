//! Derived-stats engine.
//!
//! Pure functions over the domain list and a reference instant. Everything
//! the dashboard shows (stat cards, urgent renewals, chart datasets) is
//! computed here, never stored.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::types::domain::{Domain, DomainStatus};
use crate::types::provider::Provider;
use crate::types::stats::{DashboardStats, MonthlyExpenses, ProviderShare, UrgentRenewal};

/// Threshold (in days) under which a renewal counts as expiring soon.
pub const EXPIRING_THRESHOLD_DAYS: i64 = 30;

/// Signed whole days until the renewal date, counted from `now` to the
/// renewal day's midnight and rounded up.
///
/// Returns `None` when the date string does not parse; validation keeps
/// malformed dates out of the store, so in practice this is total.
pub fn days_left(renewal_date: &str, now: NaiveDateTime) -> Option<i64> {
    let renewal = NaiveDate::parse_from_str(renewal_date, "%Y-%m-%d").ok()?;
    let delta = renewal.and_hms_opt(0, 0, 0)? - now;
    let seconds = delta.num_seconds();
    // Ceiling division so a partial day still counts as one day left.
    Some(seconds.div_euclid(86_400) + if seconds.rem_euclid(86_400) > 0 { 1 } else { 0 })
}

/// Renewal status of a single domain at the given instant.
pub fn domain_status(domain: &Domain, now: NaiveDateTime) -> DomainStatus {
    match days_left(&domain.renewal_date, now) {
        Some(days) => DomainStatus::from_days_left(days),
        None => DomainStatus::Active,
    }
}

/// Computes the dashboard stat-card values.
pub fn dashboard_stats(domains: &[Domain], now: NaiveDateTime) -> DashboardStats {
    let unique_providers: HashSet<&str> =
        domains.iter().map(|d| d.provider.as_str()).collect();
    let annual_cost = domains.iter().map(|d| d.price).sum();
    // Total investment falls back to the renewal price for domains whose
    // purchase price was never recorded.
    let total_investment = domains
        .iter()
        .map(|d| d.purchase_price.unwrap_or(d.price))
        .sum();
    let expiring_soon = domains
        .iter()
        .filter(|d| {
            days_left(&d.renewal_date, now)
                .map(|days| days <= EXPIRING_THRESHOLD_DAYS)
                .unwrap_or(false)
        })
        .count();

    DashboardStats {
        total_domains: domains.len(),
        unique_providers: unique_providers.len(),
        annual_cost,
        total_investment,
        expiring_soon,
    }
}

/// The five most urgent renewals: domains within the expiring threshold,
/// ordered by ascending days left. The sort is stable, so ties keep the
/// collection order.
pub fn urgent_renewals(domains: &[Domain], now: NaiveDateTime) -> Vec<UrgentRenewal> {
    let mut urgent: Vec<UrgentRenewal> = domains
        .iter()
        .filter_map(|d| {
            let days = days_left(&d.renewal_date, now)?;
            if days > EXPIRING_THRESHOLD_DAYS {
                return None;
            }
            Some(UrgentRenewal {
                id: d.id.clone(),
                name: d.name.clone(),
                renewal_date: d.renewal_date.clone(),
                days_left: days,
                status: DomainStatus::from_days_left(days),
                price: d.price,
            })
        })
        .collect();
    urgent.sort_by_key(|u| u.days_left);
    urgent.truncate(5);
    urgent
}

/// Renewal spend bucketed by renewal month, for the expenses bar chart.
pub fn monthly_expenses(domains: &[Domain]) -> MonthlyExpenses {
    let mut totals = [0.0f64; 12];
    for domain in domains {
        if let Ok(date) = NaiveDate::parse_from_str(&domain.renewal_date, "%Y-%m-%d") {
            totals[date.month0() as usize] += domain.price;
        }
    }
    MonthlyExpenses { totals }
}

/// Per-provider domain count and total spend, in provider-list order.
///
/// Domains match their provider by display name; domains pointing at a
/// provider that is not in the list are not counted.
pub fn provider_shares(providers: &[Provider], domains: &[Domain]) -> Vec<ProviderShare> {
    providers
        .iter()
        .map(|provider| {
            let owned: Vec<&Domain> = domains
                .iter()
                .filter(|d| d.provider == provider.name)
                .collect();
            ProviderShare {
                name: provider.name.clone(),
                domain_count: owned.len(),
                total_spent: owned.iter().map(|d| d.price).sum(),
            }
        })
        .collect()
}
