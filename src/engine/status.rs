//! Leave status computation.
//!
//! This module ties the pipeline together: generate the statutory grants,
//! reconcile a migrated baseline if one exists, replay the usage history,
//! and aggregate the grants still active on the reporting date.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::AccrualSchedule;
use crate::models::{Employee, Grant, LeaveRecord, LeaveStatus};

use super::{generate_statutory_grants, reconcile_baseline, replay_usage};

/// Computes the full leave status for an employee as of a reporting date.
///
/// This is the engine's single boundary operation. It is a pure function:
/// it never reads the system clock (the reporting date is always passed
/// in), never mutates its inputs, and builds a fresh grant ledger on every
/// call, so identical inputs produce identical output.
///
/// The aggregates cover only the grants still active on `as_of`
/// (`expiry > as_of`), so usage that drained an already-expired grant does
/// not appear in `total_used`; its deficit contribution, if any, does.
/// The history covers every input record, date-descending, each annotated
/// with its individual deficit.
///
/// # Arguments
///
/// * `employee` - Hire date and optional migrated baseline
/// * `records` - The full usage history, in any order
/// * `as_of` - The reporting date
/// * `schedule` - The accrual schedule to apply
///
/// # Examples
///
/// ```
/// use leave_engine::config::AccrualSchedule;
/// use leave_engine::engine::compute_leave_status;
/// use leave_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Sato Yuki".to_string(),
///     department: None,
///     hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     baseline_date: None,
///     baseline_days: None,
/// };
///
/// let status = compute_leave_status(
///     &employee,
///     &[],
///     NaiveDate::from_ymd_opt(2020, 8, 1).unwrap(),
///     &AccrualSchedule::statutory(),
/// );
/// assert_eq!(status.remaining, Decimal::from(10));
/// ```
pub fn compute_leave_status(
    employee: &Employee,
    records: &[LeaveRecord],
    as_of: NaiveDate,
    schedule: &AccrualSchedule,
) -> LeaveStatus {
    let mut grants = generate_statutory_grants(employee.hire_date, as_of, schedule);

    let baseline = employee.baseline();
    if let Some((baseline_date, baseline_days)) = baseline {
        reconcile_baseline(&mut grants, baseline_date, baseline_days, schedule);
    }

    let outcome = replay_usage(&mut grants, records, baseline.map(|(date, _)| date));

    let active: Vec<Grant> = grants
        .into_iter()
        .filter(|g| g.is_active_on(as_of))
        .collect();

    let total_granted: Decimal = active.iter().map(|g| g.days).sum();
    let remaining: Decimal = active.iter().map(|g| g.remaining).sum();

    LeaveStatus {
        total_granted,
        total_used: total_granted - remaining,
        remaining,
        deficit: outcome.total_deficit,
        grants: active,
        history: outcome.history,
    }
}
