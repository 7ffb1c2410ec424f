//! Unit tests for the HTML fragment renderers.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};

use domainvault::services::{calendar_engine, notification_engine, stats_engine};
use domainvault::types::domain::Domain;
use domainvault::types::lookup::DnsRecord;
use domainvault::types::provider::Provider;
use domainvault::ui::render;

fn at(date: &str) -> NaiveDateTime {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn domain(id: &str, name: &str, renewal_date: &str, price: f64) -> Domain {
    Domain {
        id: id.to_string(),
        name: name.to_string(),
        provider: "Namecheap".to_string(),
        renewal_date: renewal_date.to_string(),
        price,
        purchase_date: None,
        purchase_price: None,
        auto_renew: false,
    }
}

// ─── Escaping ───

#[test]
fn test_escape_covers_all_meta_characters() {
    assert_eq!(render::escape("a&b"), "a&amp;b");
    assert_eq!(render::escape("<script>"), "&lt;script&gt;");
    assert_eq!(render::escape("\"quoted\""), "&quot;quoted&quot;");
    assert_eq!(render::escape("it's"), "it&#39;s");
    assert_eq!(render::escape("plain"), "plain");
}

#[test]
fn test_domain_table_escapes_stored_values() {
    let d = domain("1", "<img src=x>.com", "2024-06-01", 10.0);
    let html = render::render_domains_table(&[d], at("2024-01-01"));
    assert!(!html.contains("<img src=x>"));
    assert!(html.contains("&lt;img src=x&gt;.com"));
}

// ─── Stats ───

#[test]
fn test_stats_cards_format_money() {
    let stats = stats_engine::dashboard_stats(
        &[domain("1", "a.com", "2024-06-01", 12.5)],
        at("2024-01-01"),
    );
    let html = render::render_stats(&stats);
    assert!(html.contains("$12.50"));
    assert!(html.contains("data-i18n=\"totalDomains\""));
    assert_eq!(html.matches("stat-card").count(), 4);
}

// ─── Domain and urgent tables ───

#[test]
fn test_domain_row_carries_badge_and_actions() {
    let html = render::render_domains_table(
        &[domain("dom-1", "soon.com", "2024-01-10", 9.99)],
        at("2024-01-01"),
    );
    assert!(html.contains("data-id=\"dom-1\""));
    assert!(html.contains("badge warning"));
    assert!(html.contains("Expiring Soon"));
    assert!(html.contains("btn-edit"));
    assert!(html.contains("btn-delete"));
    assert!(html.contains("$9.99"));
}

#[test]
fn test_urgent_table_rows() {
    let urgent = stats_engine::urgent_renewals(
        &[domain("dom-1", "soon.com", "2024-01-10", 9.99)],
        at("2024-01-01"),
    );
    let html = render::render_urgent_table(&urgent);
    assert!(html.contains("soon.com"));
    assert!(html.contains("<td>9</td>"));
}

// ─── Providers ───

#[test]
fn test_provider_cards_show_counts_and_spend() {
    let providers = vec![Provider {
        id: "1".to_string(),
        name: "Namecheap".to_string(),
        url: "https://namecheap.com".to_string(),
        username: String::new(),
        password: String::new(),
        user_id: String::new(),
    }];
    let domains = vec![
        domain("1", "a.com", "2024-06-01", 10.0),
        domain("2", "b.com", "2024-07-01", 5.0),
    ];
    let shares = stats_engine::provider_shares(&providers, &domains);
    let html = render::render_provider_cards(&shares);
    assert!(html.contains("Namecheap"));
    assert!(html.contains("2 domains"));
    assert!(html.contains("$15.00 total"));
}

// ─── Notifications ───

#[test]
fn test_notifications_render_title_and_message() {
    let notifications = notification_engine::generate(
        &[domain("1", "soon.com", "2024-01-10", 10.0)],
        at("2024-01-01"),
    );
    let html = render::render_notifications(&notifications);
    assert!(html.contains("Domain Expiring Soon"));
    assert!(html.contains("soon.com expires in 9 days"));
}

// ─── Calendar ───

#[test]
fn test_calendar_headers_blanks_and_events() {
    let grid = calendar_engine::month_grid(
        2024,
        0,
        &[domain("1", "a.com", "2024-01-15", 10.0)],
    );
    let html = render::render_calendar(&grid);

    assert_eq!(html.matches("calendar-header").count(), 7);
    assert!(html.contains(">Sun<"));
    // January 2024 opens with exactly one blank cell.
    assert_eq!(html.matches("calendar-day empty").count(), 1);
    assert_eq!(html.matches("has-events").count(), 1);
    assert!(html.contains("data-date=\"2024-01-15\""));
    assert!(html.contains("calendar-event"));
}

// ─── DNS table ───

#[test]
fn test_dns_table_rows() {
    let records = vec![DnsRecord {
        record_type: "MX".to_string(),
        value: "mail.a.com".to_string(),
    }];
    let html = render::render_dns_table(&records);
    assert_eq!(html, "<tr><td>MX</td><td>mail.a.com</td></tr>");
}

// ─── Chart payload ───

#[test]
fn test_chart_datasets_payload() {
    let domains = vec![domain("1", "a.com", "2024-03-10", 12.0)];
    let providers = vec![Provider {
        id: "1".to_string(),
        name: "Namecheap".to_string(),
        url: "https://namecheap.com".to_string(),
        username: String::new(),
        password: String::new(),
        user_id: String::new(),
    }];
    let expenses = stats_engine::monthly_expenses(&domains);
    let shares = stats_engine::provider_shares(&providers, &domains);

    let payload: serde_json::Value =
        serde_json::from_str(&render::chart_datasets(&expenses, &shares)).unwrap();
    assert_eq!(payload["expenses"]["labels"][2], "Mar");
    assert_eq!(payload["expenses"]["data"][2], 12.0);
    assert_eq!(payload["providers"]["labels"][0], "Namecheap");
    assert_eq!(payload["providers"]["data"][0], 1);
}

// ─── CSS block ───

#[test]
fn test_css_root_block_is_sorted_and_complete() {
    let mut vars = HashMap::new();
    vars.insert("--primary".to_string(), "#ff5011".to_string());
    vars.insert("--bg-primary".to_string(), "#0a0a0f".to_string());
    let css = render::css_root_block(&vars);
    assert_eq!(css, ":root{--bg-primary:#0a0a0f;--primary:#ff5011;}");
}
