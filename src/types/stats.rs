use serde::{Deserialize, Serialize};

use super::domain::DomainStatus;

/// Headline dashboard numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_domains: usize,
    pub unique_providers: usize,
    /// Sum of all renewal prices.
    pub annual_cost: f64,
    /// Sum of purchase prices, falling back to the renewal price for
    /// domains without a recorded purchase price.
    pub total_investment: f64,
    /// Domains with 30 or fewer days until renewal (including expired).
    pub expiring_soon: usize,
}

/// One row of the urgent-renewals table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrgentRenewal {
    pub id: String,
    pub name: String,
    pub renewal_date: String,
    pub days_left: i64,
    pub status: DomainStatus,
    pub price: f64,
}

/// Renewal spend bucketed by calendar month (index 0 = January), the
/// dataset behind the expenses bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyExpenses {
    pub totals: [f64; 12],
}

/// Per-provider portfolio share: the dataset behind the provider doughnut
/// chart and the provider cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderShare {
    pub name: String,
    pub domain_count: usize,
    pub total_spent: f64,
}
