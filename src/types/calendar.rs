use serde::{Deserialize, Serialize};

/// Month display names, indexed by 0-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday column headers, Sunday first.
pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A renewal event pinned to a calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub domain_id: String,
    pub domain_name: String,
}

/// One day cell of the month grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCell {
    /// Day of month, 1-based.
    pub day: u32,
    /// The cell's date as `YYYY-MM-DD`.
    pub date: String,
    pub events: Vec<CalendarEvent>,
}

/// A rendered month: leading blanks followed by one cell per day.
///
/// Months are 0-based (0 = January), matching the wrap-around navigation
/// arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month0: u32,
    /// Number of empty cells before day 1, equal to the weekday index of
    /// the first day (Sunday = 0).
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    /// Header label, e.g. "January 2024".
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month0 as usize], self.year)
    }
}
