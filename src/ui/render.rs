//! HTML fragment renderers.
//!
//! Pure functions projecting application state into the markup the shell
//! injects into the page. Missing or empty data renders placeholder rows;
//! nothing here panics on partial state.

use std::collections::HashMap;

use crate::types::calendar::{MonthGrid, DAY_NAMES};
use crate::types::domain::Domain;
use crate::types::lookup::DnsRecord;
use crate::types::notification::Notification;
use crate::types::stats::{DashboardStats, MonthlyExpenses, ProviderShare, UrgentRenewal};
use crate::services::stats_engine;

/// Escapes text for safe interpolation into HTML.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn money(value: f64) -> String {
    format!("${:.2}", value)
}

/// The four stat cards.
pub fn render_stats(stats: &DashboardStats) -> String {
    format!(
        concat!(
            "<div class=\"stat-card\"><span class=\"stat-value\">{}</span>",
            "<span class=\"stat-label\" data-i18n=\"totalDomains\">Total Domains</span></div>",
            "<div class=\"stat-card\"><span class=\"stat-value\">{}</span>",
            "<span class=\"stat-label\" data-i18n=\"annualCost\">Annual Cost</span></div>",
            "<div class=\"stat-card\"><span class=\"stat-value\">{}</span>",
            "<span class=\"stat-label\" data-i18n=\"totalInvestment\">Total Investment</span></div>",
            "<div class=\"stat-card\"><span class=\"stat-value\">{}</span>",
            "<span class=\"stat-label\" data-i18n=\"expiringSoon\">Expiring Soon</span></div>"
        ),
        stats.total_domains,
        money(stats.annual_cost),
        money(stats.total_investment),
        stats.expiring_soon,
    )
}

/// The all-domains table body. An empty portfolio renders one placeholder
/// row.
pub fn render_domains_table(domains: &[Domain], now: chrono::NaiveDateTime) -> String {
    if domains.is_empty() {
        return "<tr><td colspan=\"7\" class=\"text-muted text-center\">No domains yet</td></tr>"
            .to_string();
    }
    domains
        .iter()
        .map(|d| {
            let days = stats_engine::days_left(&d.renewal_date, now).unwrap_or(0);
            let status = stats_engine::domain_status(d, now);
            format!(
                concat!(
                    "<tr data-id=\"{id}\">",
                    "<td>{name}</td>",
                    "<td>{provider}</td>",
                    "<td>{renewal}</td>",
                    "<td>{days}</td>",
                    "<td>{price}</td>",
                    "<td><span class=\"badge {class}\">{label}</span></td>",
                    "<td><button class=\"btn-edit\" data-id=\"{id}\">Edit</button>",
                    "<button class=\"btn-delete\" data-id=\"{id}\">Delete</button></td>",
                    "</tr>"
                ),
                id = escape(&d.id),
                name = escape(&d.name),
                provider = escape(&d.provider),
                renewal = escape(&d.renewal_date),
                days = days,
                price = money(d.price),
                class = status.css_class(),
                label = status.label(),
            )
        })
        .collect()
}

/// The top-5 urgent renewals table body.
pub fn render_urgent_table(urgent: &[UrgentRenewal]) -> String {
    if urgent.is_empty() {
        return "<tr><td colspan=\"5\" class=\"text-muted text-center\">No urgent renewals</td></tr>"
            .to_string();
    }
    urgent
        .iter()
        .map(|u| {
            format!(
                concat!(
                    "<tr data-id=\"{id}\">",
                    "<td>{name}</td>",
                    "<td>{renewal}</td>",
                    "<td>{days}</td>",
                    "<td>{price}</td>",
                    "<td><span class=\"badge {class}\">{label}</span></td>",
                    "</tr>"
                ),
                id = escape(&u.id),
                name = escape(&u.name),
                renewal = escape(&u.renewal_date),
                days = u.days_left,
                price = money(u.price),
                class = u.status.css_class(),
                label = u.status.label(),
            )
        })
        .collect()
}

/// Provider cards with per-provider domain count and total spend.
pub fn render_provider_cards(shares: &[ProviderShare]) -> String {
    if shares.is_empty() {
        return "<p class=\"text-muted text-center\">No providers yet</p>".to_string();
    }
    shares
        .iter()
        .map(|share| {
            format!(
                concat!(
                    "<div class=\"provider-card\">",
                    "<h3>{name}</h3>",
                    "<p>{count} domains</p>",
                    "<p>{total} total</p>",
                    "</div>"
                ),
                name = escape(&share.name),
                count = share.domain_count,
                total = money(share.total_spent),
            )
        })
        .collect()
}

/// The notifications list.
pub fn render_notifications(notifications: &[Notification]) -> String {
    if notifications.is_empty() {
        return "<p class=\"text-muted text-center\">No new notifications</p>".to_string();
    }
    notifications
        .iter()
        .map(|n| {
            format!(
                concat!(
                    "<div class=\"notification-item expiring\">",
                    "<p><strong>{title}</strong><br><small>{message}</small></p>",
                    "</div>"
                ),
                title = escape(&n.title),
                message = escape(&n.message),
            )
        })
        .collect()
}

/// The calendar grid: weekday headers, leading blanks, then one cell per
/// day with its renewal events.
pub fn render_calendar(grid: &MonthGrid) -> String {
    let mut html = String::new();
    for day in DAY_NAMES {
        html.push_str(&format!("<div class=\"calendar-header\">{}</div>", day));
    }
    for _ in 0..grid.leading_blanks {
        html.push_str("<div class=\"calendar-day empty\"></div>");
    }
    for cell in &grid.days {
        let events: String = cell
            .events
            .iter()
            .map(|e| {
                format!(
                    "<span class=\"calendar-event\" title=\"{0}\">{0}</span>",
                    escape(&e.domain_name)
                )
            })
            .collect();
        let class = if cell.events.is_empty() {
            "calendar-day"
        } else {
            "calendar-day has-events"
        };
        html.push_str(&format!(
            "<div class=\"{}\" data-date=\"{}\"><span class=\"day-number\">{}</span>{}</div>",
            class, cell.date, cell.day, events
        ));
    }
    html
}

/// The DNS results table body.
pub fn render_dns_table(records: &[DnsRecord]) -> String {
    records
        .iter()
        .map(|r| {
            format!(
                "<tr><td>{}</td><td>{}</td></tr>",
                escape(&r.record_type),
                escape(&r.value)
            )
        })
        .collect()
}

/// Chart.js dataset payload for the expenses bar chart and the provider
/// doughnut, as one JSON object.
pub fn chart_datasets(expenses: &MonthlyExpenses, shares: &[ProviderShare]) -> String {
    let payload = serde_json::json!({
        "expenses": {
            "labels": ["Jan", "Feb", "Mar", "Apr", "May", "Jun",
                       "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"],
            "data": expenses.totals,
        },
        "providers": {
            "labels": shares.iter().map(|s| s.name.clone()).collect::<Vec<_>>(),
            "data": shares.iter().map(|s| s.domain_count).collect::<Vec<_>>(),
        },
    });
    payload.to_string()
}

/// Serializes the CSS variable map into a `:root` style block.
pub fn css_root_block(vars: &HashMap<String, String>) -> String {
    let mut keys: Vec<&String> = vars.keys().collect();
    keys.sort();
    let body: String = keys
        .iter()
        .map(|k| format!("{}:{};", k, vars[k.as_str()]))
        .collect();
    format!(":root{{{}}}", body)
}
