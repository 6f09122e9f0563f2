//! Configuration type definitions.
//!
//! This module defines the [`AccrualSchedule`] describing when entitlement
//! grants vest and how large they are.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The accrual schedule anchoring entitlement grants to a hire date.
///
/// Milestone `i` vests `first_milestone_months + i * interval_months`
/// months after hire and grants `milestone_days[i]` days; milestones past
/// the end of the table grant the table's last entry. Every grant is
/// usable for `validity_months` from its vesting date.
///
/// # Example
///
/// ```
/// use leave_engine::config::AccrualSchedule;
/// use rust_decimal::Decimal;
///
/// let schedule = AccrualSchedule::statutory();
/// assert_eq!(schedule.milestone_months(0), 6);
/// assert_eq!(schedule.milestone_months(1), 18);
/// assert_eq!(schedule.days_for_milestone(0), Decimal::from(10));
/// assert_eq!(schedule.days_for_milestone(10), Decimal::from(20));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccrualSchedule {
    /// Human-readable name of the schedule.
    pub name: String,
    /// Months from hire to the first vesting milestone.
    pub first_milestone_months: u32,
    /// Months between subsequent vesting milestones.
    pub interval_months: u32,
    /// Months each grant remains usable after vesting.
    pub validity_months: u32,
    /// Day counts per milestone; the last entry repeats indefinitely.
    pub milestone_days: Vec<Decimal>,
}

impl AccrualSchedule {
    /// Returns the statutory schedule: 10 days at six months of tenure,
    /// then 11, 12, 14, 16, 18 and 20 days at yearly intervals, flat 20
    /// days thereafter, each grant valid for two years.
    pub fn statutory() -> Self {
        Self {
            name: "Statutory annual paid leave".to_string(),
            first_milestone_months: 6,
            interval_months: 12,
            validity_months: 24,
            milestone_days: [10, 11, 12, 14, 16, 18, 20]
                .iter()
                .map(|d| Decimal::from(*d))
                .collect(),
        }
    }

    /// Returns the number of months from hire to milestone `index`.
    pub fn milestone_months(&self, index: u32) -> u32 {
        self.first_milestone_months + index * self.interval_months
    }

    /// Returns the day count granted at milestone `index`.
    ///
    /// Indexes past the end of the table repeat the table's last entry.
    pub fn days_for_milestone(&self, index: usize) -> Decimal {
        self.milestone_days
            .get(index)
            .or(self.milestone_days.last())
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}

impl Default for AccrualSchedule {
    fn default() -> Self {
        Self::statutory()
    }
}
