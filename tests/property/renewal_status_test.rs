//! Property-based tests for days-left arithmetic and status
//! classification.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use domainvault::services::stats_engine::{days_left, EXPIRING_THRESHOLD_DAYS};
use domainvault::types::domain::DomainStatus;

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    // Any day in 2020-2032, via offset from a fixed epoch.
    (0i64..4748).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Duration::days(offset)
    })
}

fn arb_time() -> impl Strategy<Value = (u32, u32, u32)> {
    (0u32..24, 0u32..60, 0u32..60)
}

proptest! {
    /// At midnight the count is the exact calendar-day difference.
    #[test]
    fn midnight_count_is_calendar_difference(now in arb_date(), renewal in arb_date()) {
        let now_midnight = now.and_hms_opt(0, 0, 0).unwrap();
        let expected = (renewal - now).num_days();
        prop_assert_eq!(
            days_left(&renewal.format("%Y-%m-%d").to_string(), now_midnight),
            Some(expected)
        );
    }

    /// Moving later into the same day never changes the count for a
    /// future renewal: the partial day still rounds up.
    #[test]
    fn intraday_time_does_not_change_future_count(
        now in arb_date(),
        ahead in 1i64..4000,
        (h, m, s) in arb_time(),
    ) {
        let renewal = now + Duration::days(ahead);
        let renewal_str = renewal.format("%Y-%m-%d").to_string();
        let at_midnight = days_left(&renewal_str, now.and_hms_opt(0, 0, 0).unwrap());
        let later = days_left(&renewal_str, now.and_hms_opt(h, m, s).unwrap());
        prop_assert_eq!(at_midnight, later);
    }

    /// The status partition is total and matches the threshold exactly.
    #[test]
    fn status_partition(days in -4000i64..4000) {
        let status = DomainStatus::from_days_left(days);
        if days < 0 {
            prop_assert_eq!(status, DomainStatus::Expired);
        } else if days <= EXPIRING_THRESHOLD_DAYS {
            prop_assert_eq!(status, DomainStatus::Expiring);
        } else {
            prop_assert_eq!(status, DomainStatus::Active);
        }
    }

    /// Status labels and badge classes are consistent with the variant.
    #[test]
    fn status_labels_are_stable(days in -100i64..100) {
        let status = DomainStatus::from_days_left(days);
        match status {
            DomainStatus::Expired => prop_assert_eq!(status.css_class(), "expired"),
            DomainStatus::Expiring => {
                prop_assert_eq!(status.label(), "Expiring Soon");
                prop_assert_eq!(status.css_class(), "warning");
            }
            DomainStatus::Active => prop_assert_eq!(status.css_class(), "active"),
        }
    }

    /// A malformed date never classifies, it yields None.
    #[test]
    fn malformed_dates_yield_none(junk in "[a-z ]{0,12}") {
        let now = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        prop_assert_eq!(days_left(&junk, now), None);
    }
}
