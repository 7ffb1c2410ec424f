//! First-run sample data.
//!
//! When no snapshot exists (or an existing one fails to parse) the local
//! store seeds itself with a default provider list and a dozen generated
//! domains so the dashboard has something to show.

use chrono::{Months, NaiveDate};
use rand::Rng;

use crate::types::domain::Domain;
use crate::types::provider::Provider;

/// Registrars pre-loaded on first run, credentials left blank.
pub fn default_providers() -> Vec<Provider> {
    let entry = |id: &str, name: &str, url: &str| Provider {
        id: id.to_string(),
        name: name.to_string(),
        url: url.to_string(),
        username: String::new(),
        password: String::new(),
        user_id: String::new(),
    };
    vec![
        entry("1", "Namecheap", "https://www.namecheap.com"),
        entry("2", "GoDaddy", "https://www.godaddy.com"),
        entry("3", "Google Domains", "https://domains.google"),
        entry("4", "Cloudflare", "https://www.cloudflare.com"),
    ]
}

/// Generates twelve sample domains with renewal dates spread over the next
/// year and randomized prices.
pub fn sample_domains(today: NaiveDate) -> Vec<Domain> {
    let provider_names = ["Namecheap", "GoDaddy", "Google Domains", "Cloudflare"];
    let mut rng = rand::rng();
    let mut domains = Vec::with_capacity(12);

    for i in 1..=12 {
        let months_ahead = rng.random_range(1..=12u32);
        let renewal = today
            .checked_add_months(Months::new(months_ahead))
            .unwrap_or(today);

        domains.push(Domain {
            id: i.to_string(),
            name: format!("example{}.com", i),
            provider: provider_names[rng.random_range(0..provider_names.len())].to_string(),
            renewal_date: renewal.format("%Y-%m-%d").to_string(),
            price: round_cents(rng.random_range(8.0..28.0)),
            purchase_date: Some(today.format("%Y-%m-%d").to_string()),
            purchase_price: Some(round_cents(rng.random_range(5.0..20.0))),
            auto_renew: rng.random_bool(0.5),
        });
    }
    domains
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
