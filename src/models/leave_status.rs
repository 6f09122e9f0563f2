//! Leave status result models.
//!
//! This module contains the [`LeaveStatus`] type and its associated
//! structures that capture the output of a status computation: aggregate
//! balances, the active grant ledger, and the annotated usage history.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Grant, LeaveRecord};

/// A usage record annotated with its individual deficit contribution.
///
/// `deficit_days` is the portion of the record that could not be covered by
/// any grant valid at the time of usage; it is always in `[0, days]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The original usage record, unchanged.
    #[serde(flatten)]
    pub record: LeaveRecord,
    /// The portion of this record that was unfunded.
    pub deficit_days: Decimal,
}

/// The complete result of a leave status computation.
///
/// Aggregates are taken over the grants still active on the as-of date;
/// `deficit` accumulates over the whole replayed history. All fields are
/// recomputed from scratch on every call.
///
/// # Example
///
/// ```
/// use leave_engine::models::LeaveStatus;
/// use rust_decimal::Decimal;
///
/// let status = LeaveStatus {
///     total_granted: Decimal::from(10),
///     total_used: Decimal::from(3),
///     remaining: Decimal::from(7),
///     deficit: Decimal::from(2),
///     grants: vec![],
///     history: vec![],
/// };
/// assert_eq!(status.net_balance(), Decimal::from(5));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveStatus {
    /// Total days granted by currently-active grants.
    pub total_granted: Decimal,
    /// Total days used from currently-active grants.
    pub total_used: Decimal,
    /// Net remaining balance across currently-active grants.
    pub remaining: Decimal,
    /// Total usage that no valid grant could cover.
    pub deficit: Decimal,
    /// The currently-active grants with their remaining balances.
    pub grants: Vec<Grant>,
    /// The full usage history, date-descending, with per-record deficits.
    pub history: Vec<HistoryEntry>,
}

impl LeaveStatus {
    /// Returns the balance net of deficit (`remaining - deficit`).
    ///
    /// A negative value is a reportable business state (unfunded usage
    /// exceeds the current balance), not an error.
    pub fn net_balance(&self) -> Decimal {
        self.remaining - self.deficit
    }
}
