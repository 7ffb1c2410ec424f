//! Calendar engine.
//!
//! Builds the renewal-calendar month grid and handles month navigation.
//! Months are 0-based throughout (0 = January) and navigation wraps across
//! year boundaries.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::types::calendar::{CalendarEvent, DayCell, MonthGrid};
use crate::types::domain::Domain;

/// Builds the grid for one month: the leading blanks equal the weekday
/// index of day 1 (Sunday = 0), then one cell per day of the month. Each
/// cell carries the domains whose renewal date string-equals the cell's
/// `YYYY-MM-DD` date.
pub fn month_grid(year: i32, month0: u32, domains: &[Domain]) -> MonthGrid {
    let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_default());
    let leading_blanks = sunday_index(first.weekday());
    let day_count = days_in_month(year, month0);

    let days = (1..=day_count)
        .map(|day| {
            let date = format!("{:04}-{:02}-{:02}", year, month0 + 1, day);
            let events = domains
                .iter()
                .filter(|d| d.renewal_date == date)
                .map(|d| CalendarEvent {
                    domain_id: d.id.clone(),
                    domain_name: d.name.clone(),
                })
                .collect();
            DayCell { day, date, events }
        })
        .collect();

    MonthGrid {
        year,
        month0,
        leading_blanks,
        days,
    }
}

/// Advances to the next month, wrapping December into January of the next
/// year.
pub fn next_month(year: i32, month0: u32) -> (i32, u32) {
    if month0 >= 11 {
        (year + 1, 0)
    } else {
        (year, month0 + 1)
    }
}

/// Steps back to the previous month, wrapping January into December of the
/// previous year.
pub fn prev_month(year: i32, month0: u32) -> (i32, u32) {
    if month0 == 0 {
        (year - 1, 11)
    } else {
        (year, month0 - 1)
    }
}

fn sunday_index(weekday: Weekday) -> u32 {
    weekday.num_days_from_sunday()
}

fn days_in_month(year: i32, month0: u32) -> u32 {
    let (next_year, next_month0) = next_month(year, month0);
    let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1);
    let next_first = NaiveDate::from_ymd_opt(next_year, next_month0 + 1, 1);
    match (first, next_first) {
        (Some(a), Some(b)) => (b - a).num_days() as u32,
        _ => 30,
    }
}
