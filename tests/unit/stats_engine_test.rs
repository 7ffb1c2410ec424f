//! Unit tests for the derived-stats engine.

use chrono::NaiveDateTime;

use domainvault::services::stats_engine::{
    dashboard_stats, days_left, domain_status, monthly_expenses, provider_shares,
    urgent_renewals, EXPIRING_THRESHOLD_DAYS,
};
use domainvault::types::domain::{Domain, DomainStatus};
use domainvault::types::provider::Provider;

fn at(datetime: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(datetime, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn domain(id: &str, name: &str, provider: &str, renewal_date: &str, price: f64) -> Domain {
    Domain {
        id: id.to_string(),
        name: name.to_string(),
        provider: provider.to_string(),
        renewal_date: renewal_date.to_string(),
        price,
        purchase_date: None,
        purchase_price: None,
        auto_renew: false,
    }
}

fn provider(name: &str) -> Provider {
    Provider {
        id: name.to_lowercase(),
        name: name.to_string(),
        url: format!("https://{}.example", name.to_lowercase()),
        username: String::new(),
        password: String::new(),
        user_id: String::new(),
    }
}

// ─── days_left ───

#[test]
fn test_sixteen_days_across_a_year_boundary() {
    let now = at("2023-12-20 00:00:00");
    assert_eq!(days_left("2024-01-05", now), Some(16));

    let d = domain("1", "example.com", "Namecheap", "2024-01-05", 10.0);
    assert_eq!(domain_status(&d, now), DomainStatus::Expiring);
    let urgent = urgent_renewals(&[d], now);
    assert_eq!(urgent.len(), 1);
    assert_eq!(urgent[0].days_left, 16);
}

#[test]
fn test_days_left_boundaries() {
    let noon = at("2024-03-10 12:00:00");
    // Tomorrow's midnight is half a day away, ceiling keeps it at 1.
    assert_eq!(days_left("2024-03-11", noon), Some(1));
    assert_eq!(days_left("2024-03-10", noon), Some(0));
    assert_eq!(days_left("2024-03-09", noon), Some(-1));
}

#[test]
fn test_status_thresholds() {
    assert_eq!(DomainStatus::from_days_left(-1), DomainStatus::Expired);
    assert_eq!(DomainStatus::from_days_left(0), DomainStatus::Expiring);
    assert_eq!(
        DomainStatus::from_days_left(EXPIRING_THRESHOLD_DAYS),
        DomainStatus::Expiring
    );
    assert_eq!(
        DomainStatus::from_days_left(EXPIRING_THRESHOLD_DAYS + 1),
        DomainStatus::Active
    );
}

#[test]
fn test_status_labels_and_css_classes() {
    assert_eq!(DomainStatus::Expiring.label(), "Expiring Soon");
    assert_eq!(DomainStatus::Expiring.css_class(), "warning");
    assert_eq!(DomainStatus::Expired.label(), "Expired");
    assert_eq!(DomainStatus::Expired.css_class(), "expired");
    assert_eq!(DomainStatus::Active.label(), "Active");
    assert_eq!(DomainStatus::Active.css_class(), "active");
}

// ─── dashboard_stats ───

#[test]
fn test_dashboard_stats_aggregation() {
    let now = at("2024-06-01 00:00:00");
    let mut d1 = domain("1", "a.com", "Namecheap", "2024-06-15", 10.0);
    d1.purchase_price = Some(4.0);
    let d2 = domain("2", "b.com", "Namecheap", "2025-06-15", 20.0);
    let d3 = domain("3", "c.com", "GoDaddy", "2024-06-05", 30.0);

    let stats = dashboard_stats(&[d1, d2, d3], now);
    assert_eq!(stats.total_domains, 3);
    assert_eq!(stats.unique_providers, 2);
    assert_eq!(stats.annual_cost, 60.0);
    // Missing purchase price falls back to the renewal price.
    assert_eq!(stats.total_investment, 4.0 + 20.0 + 30.0);
    assert_eq!(stats.expiring_soon, 2);
}

#[test]
fn test_dashboard_stats_empty_portfolio() {
    let stats = dashboard_stats(&[], at("2024-06-01 00:00:00"));
    assert_eq!(stats.total_domains, 0);
    assert_eq!(stats.unique_providers, 0);
    assert_eq!(stats.annual_cost, 0.0);
    assert_eq!(stats.expiring_soon, 0);
}

// ─── urgent_renewals ───

#[test]
fn test_urgent_renewals_sorted_and_capped_at_five() {
    let now = at("2024-06-01 00:00:00");
    let domains: Vec<Domain> = (1..=8)
        .map(|i| {
            domain(
                &i.to_string(),
                &format!("site{}.com", i),
                "Namecheap",
                &format!("2024-06-{:02}", 30 - i * 3),
                9.0,
            )
        })
        .collect();

    let urgent = urgent_renewals(&domains, now);
    assert_eq!(urgent.len(), 5);
    for pair in urgent.windows(2) {
        assert!(pair[0].days_left <= pair[1].days_left);
    }
    // The five closest renewals survive the cap.
    assert_eq!(urgent[0].name, "site8.com");
}

#[test]
fn test_urgent_renewals_excludes_distant_domains() {
    let now = at("2024-06-01 00:00:00");
    let domains = vec![
        domain("1", "near.com", "Namecheap", "2024-06-20", 9.0),
        domain("2", "far.com", "Namecheap", "2025-06-20", 9.0),
    ];
    let urgent = urgent_renewals(&domains, now);
    assert_eq!(urgent.len(), 1);
    assert_eq!(urgent[0].name, "near.com");
}

#[test]
fn test_urgent_renewals_includes_expired_domains() {
    let now = at("2024-06-01 00:00:00");
    let domains = vec![domain("1", "lapsed.com", "Namecheap", "2024-05-01", 9.0)];
    let urgent = urgent_renewals(&domains, now);
    assert_eq!(urgent.len(), 1);
    assert!(urgent[0].days_left < 0);
    assert_eq!(urgent[0].status, DomainStatus::Expired);
}

// ─── monthly_expenses ───

#[test]
fn test_monthly_expenses_buckets_by_renewal_month() {
    let domains = vec![
        domain("1", "a.com", "Namecheap", "2024-01-10", 10.0),
        domain("2", "b.com", "Namecheap", "2024-01-20", 5.0),
        domain("3", "c.com", "GoDaddy", "2024-12-31", 7.5),
    ];
    let expenses = monthly_expenses(&domains);
    assert_eq!(expenses.totals[0], 15.0);
    assert_eq!(expenses.totals[11], 7.5);
    assert_eq!(expenses.totals[5], 0.0);
}

// ─── provider_shares ───

#[test]
fn test_provider_shares_in_provider_order() {
    let providers = vec![provider("Namecheap"), provider("GoDaddy"), provider("Cloudflare")];
    let domains = vec![
        domain("1", "a.com", "GoDaddy", "2024-06-01", 12.0),
        domain("2", "b.com", "GoDaddy", "2024-07-01", 8.0),
        domain("3", "c.com", "Namecheap", "2024-08-01", 10.0),
        domain("4", "d.com", "Unknown Registrar", "2024-09-01", 99.0),
    ];

    let shares = provider_shares(&providers, &domains);
    assert_eq!(shares.len(), 3);
    assert_eq!(shares[0].name, "Namecheap");
    assert_eq!(shares[0].domain_count, 1);
    assert_eq!(shares[1].name, "GoDaddy");
    assert_eq!(shares[1].domain_count, 2);
    assert_eq!(shares[1].total_spent, 20.0);
    // Domains pointing at an unlisted provider are not counted anywhere.
    assert_eq!(shares[2].domain_count, 0);
}
