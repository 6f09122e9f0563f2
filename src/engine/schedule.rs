//! Grant schedule generation.
//!
//! This module generates the statutory entitlement grants that exist for an
//! employee as of a reporting date, anchored to the hire date by the
//! accrual schedule.

use chrono::{Months, NaiveDate};

use crate::config::AccrualSchedule;
use crate::models::Grant;

/// Generates all statutory grants vested on or before the reporting date.
///
/// One grant is produced per accrual milestone: the first at
/// `hire_date + first_milestone_months`, subsequent ones at
/// `interval_months` steps, with day counts taken from the schedule's
/// milestone table (the last entry repeats for later milestones).
/// Generation stops at the first milestone strictly after `as_of`;
/// milestones in the future do not exist yet. A milestone falling exactly
/// on `as_of` is generated.
///
/// Each grant expires `validity_months` after its vesting date, using
/// calendar month arithmetic (end-of-month dates clamp, so a Feb 29
/// vesting date expires on Feb 28 in a non-leap year).
///
/// The returned grants are ordered by vesting date ascending with their
/// full balance remaining.
///
/// # Arguments
///
/// * `hire_date` - The employee's hire date anchoring the schedule
/// * `as_of` - The reporting date; later milestones are not generated
/// * `schedule` - The accrual schedule to apply
///
/// # Examples
///
/// ```
/// use leave_engine::config::AccrualSchedule;
/// use leave_engine::engine::generate_statutory_grants;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let hire = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2020, 8, 1).unwrap();
/// let grants = generate_statutory_grants(hire, as_of, &AccrualSchedule::statutory());
///
/// assert_eq!(grants.len(), 1);
/// assert_eq!(grants[0].date, NaiveDate::from_ymd_opt(2020, 7, 1).unwrap());
/// assert_eq!(grants[0].days, Decimal::from(10));
/// ```
pub fn generate_statutory_grants(
    hire_date: NaiveDate,
    as_of: NaiveDate,
    schedule: &AccrualSchedule,
) -> Vec<Grant> {
    let mut grants = Vec::new();

    for index in 0u32.. {
        // A zero interval would never advance past the first milestone.
        if index > 0 && schedule.interval_months == 0 {
            break;
        }

        let months = Months::new(schedule.milestone_months(index));
        let Some(grant_date) = hire_date.checked_add_months(months) else {
            break;
        };
        if grant_date > as_of {
            break;
        }

        let validity = Months::new(schedule.validity_months);
        let Some(expiry_date) = grant_date.checked_add_months(validity) else {
            break;
        };

        grants.push(Grant::statutory(
            grant_date,
            schedule.days_for_milestone(index as usize),
            expiry_date,
        ));
    }

    grants
}
