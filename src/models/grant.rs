//! Entitlement grant model.
//!
//! This module defines the [`Grant`] struct: a quantity of leave days that
//! became available on a specific date and expires at the end of a fixed
//! validity window. Grants are derived data, rebuilt from scratch on every
//! status computation and never persisted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A quantity of entitlement days with a validity window.
///
/// The window is `[date, expiry_date)`: usage dated on the accrual date may
/// draw from the grant, usage dated on the expiry date may not.
///
/// `remaining` is consumed while replaying usage within a single status
/// computation; the working grant list is discarded afterwards.
///
/// # Example
///
/// ```
/// use leave_engine::models::Grant;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let grant = Grant::statutory(
///     NaiveDate::from_ymd_opt(2020, 7, 1).unwrap(),
///     Decimal::from(10),
///     NaiveDate::from_ymd_opt(2022, 7, 1).unwrap(),
/// );
/// assert!(grant.is_valid_on(NaiveDate::from_ymd_opt(2020, 7, 1).unwrap()));
/// assert!(!grant.is_valid_on(NaiveDate::from_ymd_opt(2022, 7, 1).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grant {
    /// The date the grant became available.
    pub date: NaiveDate,
    /// The number of days originally granted.
    pub days: Decimal,
    /// The number of days still unconsumed. Always in `[0, days]`.
    pub remaining: Decimal,
    /// True for the synthetic baseline-overflow grant, false for statutory.
    pub is_baseline: bool,
    /// The first date on which the grant is no longer usable.
    pub expiry_date: NaiveDate,
}

impl Grant {
    /// Creates a statutory grant with its full balance remaining.
    pub fn statutory(date: NaiveDate, days: Decimal, expiry_date: NaiveDate) -> Self {
        Self {
            date,
            days,
            remaining: days,
            is_baseline: false,
            expiry_date,
        }
    }

    /// Creates a baseline-overflow grant with its full balance remaining.
    pub fn baseline(date: NaiveDate, days: Decimal, expiry_date: NaiveDate) -> Self {
        Self {
            date,
            days,
            remaining: days,
            is_baseline: true,
            expiry_date,
        }
    }

    /// Returns true if usage dated `date` may draw from this grant.
    ///
    /// The lower bound is inclusive, the upper bound exclusive.
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.date <= date && date < self.expiry_date
    }

    /// Returns true if the grant is still active on the reporting date.
    pub fn is_active_on(&self, as_of: NaiveDate) -> bool {
        self.expiry_date > as_of
    }
}
