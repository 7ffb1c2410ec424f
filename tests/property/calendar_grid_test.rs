//! Property-based tests for the month grid and calendar navigation.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use domainvault::services::calendar_engine::{month_grid, next_month, prev_month};

fn arb_month() -> impl Strategy<Value = (i32, u32)> {
    (1990i32..2100, 0u32..12)
}

proptest! {
    /// Grid shape: 0..=6 leading blanks, 28..=31 day cells, and the blank
    /// count equals the first day's Sunday-based weekday index.
    #[test]
    fn grid_shape((year, month0) in arb_month()) {
        let grid = month_grid(year, month0, &[]);

        prop_assert!(grid.leading_blanks <= 6);
        prop_assert!((28..=31).contains(&grid.days.len()));

        let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap();
        prop_assert_eq!(grid.leading_blanks, first.weekday().num_days_from_sunday());
    }

    /// Cells are numbered 1..=n and carry their own ISO date.
    #[test]
    fn cells_are_sequential_and_dated((year, month0) in arb_month()) {
        let grid = month_grid(year, month0, &[]);
        for (i, cell) in grid.days.iter().enumerate() {
            prop_assert_eq!(cell.day as usize, i + 1);
            let date = NaiveDate::parse_from_str(&cell.date, "%Y-%m-%d").unwrap();
            prop_assert_eq!(date.year(), year);
            prop_assert_eq!(date.month0(), month0);
            prop_assert_eq!(date.day(), cell.day);
        }
    }

    /// The grid covers the whole month: the last cell is the last day.
    #[test]
    fn last_cell_is_end_of_month((year, month0) in arb_month()) {
        let grid = month_grid(year, month0, &[]);
        let last = grid.days.last().unwrap();
        let next_day = NaiveDate::parse_from_str(&last.date, "%Y-%m-%d").unwrap()
            + chrono::Duration::days(1);
        prop_assert_eq!(next_day.day(), 1);
    }

    /// next and prev are inverse, and both stay on valid months.
    #[test]
    fn navigation_inverse((year, month0) in arb_month()) {
        let forward = next_month(year, month0);
        prop_assert!(forward.1 <= 11);
        prop_assert_eq!(prev_month(forward.0, forward.1), (year, month0));

        let back = prev_month(year, month0);
        prop_assert!(back.1 <= 11);
        prop_assert_eq!(next_month(back.0, back.1), (year, month0));
    }

    /// Twelve steps forward always land one year later, same month.
    #[test]
    fn twelve_steps_is_one_year((year, month0) in arb_month()) {
        let mut cursor = (year, month0);
        for _ in 0..12 {
            cursor = next_month(cursor.0, cursor.1);
        }
        prop_assert_eq!(cursor, (year + 1, month0));
    }
}
