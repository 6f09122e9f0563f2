//! Baseline reconciliation for migrated balances.
//!
//! An organization may adopt the system after an employee has already
//! accrued and partially used entitlement under manual tracking. The
//! baseline asserts "as of this date, exactly N days were remaining"; this
//! module reconciles that assertion against the statutory grants that
//! already existed on that date, without inventing entitlement the schedule
//! would not grant and without losing the asserted balance.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;

use crate::config::AccrualSchedule;
use crate::models::Grant;

/// Distributes a migrated baseline balance across the statutory grants.
///
/// `grants` must be the full statutory list, ordered by vesting date
/// ascending. The walk runs newest-first (LIFO): the asserted balance most
/// plausibly still belongs to the most recent grants, while anything older
/// is treated as used up by migration day. This is the opposite of the
/// oldest-first order used for consumption replay.
///
/// For each grant, walking date-descending:
/// - vested strictly after the baseline date: untouched (a future accrual
///   relative to the baseline);
/// - expired on or before the baseline date: `remaining` set to zero;
/// - window contains the baseline date: receives
///   `min(days, remaining pool)` while the pool lasts, zero afterwards.
///
/// If the asserted balance exceeds what the grants valid on the baseline
/// date can hold, the leftover becomes one synthetic baseline grant dated
/// at the baseline date with its own fresh validity window, and the list is
/// re-sorted by date (stable, so a statutory grant vested on the baseline
/// date stays ahead of the overflow grant).
///
/// # Arguments
///
/// * `grants` - The statutory grant list, date-ascending, to reconcile in place
/// * `baseline_date` - The date the asserted balance is effective
/// * `baseline_days` - The asserted remaining balance on that date
/// * `schedule` - Supplies the validity window for the overflow grant
pub fn reconcile_baseline(
    grants: &mut Vec<Grant>,
    baseline_date: NaiveDate,
    baseline_days: Decimal,
    schedule: &AccrualSchedule,
) {
    let mut remaining_baseline = baseline_days;

    for grant in grants.iter_mut().rev() {
        if grant.date > baseline_date {
            continue;
        }
        if grant.expiry_date <= baseline_date {
            grant.remaining = Decimal::ZERO;
            continue;
        }
        if remaining_baseline > Decimal::ZERO {
            let kept = grant.days.min(remaining_baseline);
            grant.remaining = kept;
            remaining_baseline -= kept;
        } else {
            grant.remaining = Decimal::ZERO;
        }
    }

    if remaining_baseline > Decimal::ZERO {
        let expiry_date = baseline_date
            .checked_add_months(Months::new(schedule.validity_months))
            .unwrap_or(NaiveDate::MAX);
        grants.push(Grant::baseline(baseline_date, remaining_baseline, expiry_date));
        grants.sort_by_key(|g| g.date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::generate_statutory_grants;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn dec(v: i64) -> Decimal {
        Decimal::from(v)
    }

    fn remaining_total(grants: &[Grant]) -> Decimal {
        grants.iter().map(|g| g.remaining).sum()
    }

    #[test]
    fn test_baseline_fills_newest_grant_first() {
        // Hired 2015-01-01; on 2023-01-01 the grants vested 2021-07-01 and
        // 2022-07-01 (20 days each) are still valid.
        let schedule = AccrualSchedule::statutory();
        let mut grants = generate_statutory_grants(date("2015-01-01"), date("2023-06-01"), &schedule);

        reconcile_baseline(&mut grants, date("2023-01-01"), dec(12), &schedule);

        let newest = grants.iter().find(|g| g.date == date("2022-07-01")).unwrap();
        assert_eq!(newest.remaining, dec(12));

        let older = grants.iter().find(|g| g.date == date("2021-07-01")).unwrap();
        assert_eq!(older.remaining, dec(0));

        assert_eq!(remaining_total(&grants), dec(12));
    }

    #[test]
    fn test_baseline_spills_into_second_newest_grant() {
        let schedule = AccrualSchedule::statutory();
        let mut grants = generate_statutory_grants(date("2015-01-01"), date("2023-06-01"), &schedule);

        reconcile_baseline(&mut grants, date("2023-01-01"), dec(25), &schedule);

        let newest = grants.iter().find(|g| g.date == date("2022-07-01")).unwrap();
        assert_eq!(newest.remaining, dec(20));

        let older = grants.iter().find(|g| g.date == date("2021-07-01")).unwrap();
        assert_eq!(older.remaining, dec(5));

        assert_eq!(remaining_total(&grants), dec(25));
    }

    #[test]
    fn test_grants_expired_before_baseline_are_zeroed() {
        let schedule = AccrualSchedule::statutory();
        let mut grants = generate_statutory_grants(date("2015-01-01"), date("2023-06-01"), &schedule);

        reconcile_baseline(&mut grants, date("2023-01-01"), dec(12), &schedule);

        for grant in grants.iter().filter(|g| g.expiry_date <= date("2023-01-01")) {
            assert_eq!(grant.remaining, dec(0));
        }
    }

    #[test]
    fn test_grants_vested_after_baseline_are_untouched() {
        let schedule = AccrualSchedule::statutory();
        let mut grants = generate_statutory_grants(date("2015-01-01"), date("2023-08-01"), &schedule);

        reconcile_baseline(&mut grants, date("2023-01-01"), dec(12), &schedule);

        let future = grants.iter().find(|g| g.date == date("2023-07-01")).unwrap();
        assert_eq!(future.remaining, future.days);
    }

    #[test]
    fn test_overflow_creates_baseline_grant() {
        // Only 40 days of statutory grants are valid on the baseline date;
        // the asserted 45 leave 5 days of overflow.
        let schedule = AccrualSchedule::statutory();
        let mut grants = generate_statutory_grants(date("2015-01-01"), date("2023-06-01"), &schedule);

        reconcile_baseline(&mut grants, date("2023-01-01"), dec(45), &schedule);

        let overflow = grants.iter().find(|g| g.is_baseline).unwrap();
        assert_eq!(overflow.date, date("2023-01-01"));
        assert_eq!(overflow.days, dec(5));
        assert_eq!(overflow.remaining, dec(5));
        assert_eq!(overflow.expiry_date, date("2025-01-01"));

        assert_eq!(remaining_total(&grants), dec(45));
    }

    #[test]
    fn test_no_overflow_grant_when_statutory_grants_suffice() {
        let schedule = AccrualSchedule::statutory();
        let mut grants = generate_statutory_grants(date("2015-01-01"), date("2023-06-01"), &schedule);

        reconcile_baseline(&mut grants, date("2023-01-01"), dec(40), &schedule);

        assert!(grants.iter().all(|g| !g.is_baseline));
        assert_eq!(remaining_total(&grants), dec(40));
    }

    #[test]
    fn test_list_stays_sorted_after_overflow_insertion() {
        let schedule = AccrualSchedule::statutory();
        let mut grants = generate_statutory_grants(date("2015-01-01"), date("2023-08-01"), &schedule);

        reconcile_baseline(&mut grants, date("2023-01-01"), dec(45), &schedule);

        for pair in grants.windows(2) {
            assert!(pair[0].date <= pair[1].date);
        }
    }

    #[test]
    fn test_baseline_on_statutory_vesting_date_sums_rather_than_merges() {
        // Documented quirk: a baseline dated exactly on a statutory vesting
        // date coexists with that grant as a separate entry; their balances
        // add up instead of being merged into one grant.
        let schedule = AccrualSchedule::statutory();
        let mut grants = generate_statutory_grants(date("2015-01-01"), date("2023-06-01"), &schedule);

        // Valid on 2022-07-01: the 2021-07-01 and 2022-07-01 grants (20
        // days each); asserting 50 leaves 10 days of overflow on the same
        // date as the 2022-07-01 statutory grant.
        reconcile_baseline(&mut grants, date("2022-07-01"), dec(50), &schedule);

        let same_day: Vec<&Grant> = grants.iter().filter(|g| g.date == date("2022-07-01")).collect();
        assert_eq!(same_day.len(), 2);
        assert!(!same_day[0].is_baseline);
        assert!(same_day[1].is_baseline);
        assert_eq!(same_day[0].remaining + same_day[1].remaining, dec(30));
        assert_eq!(remaining_total(&grants), dec(50));
    }

    #[test]
    fn test_zero_baseline_zeroes_every_matching_grant() {
        let schedule = AccrualSchedule::statutory();
        let mut grants = generate_statutory_grants(date("2015-01-01"), date("2023-06-01"), &schedule);

        reconcile_baseline(&mut grants, date("2023-01-01"), dec(0), &schedule);

        assert_eq!(remaining_total(&grants), dec(0));
        assert!(grants.iter().all(|g| !g.is_baseline));
    }
}
