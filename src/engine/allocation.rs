//! Usage allocation and deficit replay.
//!
//! This module replays the usage history chronologically against the grant
//! ledger. Each paid record draws from the oldest grant valid at the time
//! the usage occurred (FIFO: oldest grants expire soonest, so consuming
//! them first minimizes forfeited balance). Whatever a record cannot draw
//! from any valid grant is its deficit.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Grant, HistoryEntry, LeaveRecord};

/// The outcome of a usage replay: the annotated history and the total
/// unfunded usage.
#[derive(Debug, Clone)]
pub struct ReplayOutcome {
    /// Every input record, date-descending, annotated with its deficit.
    pub history: Vec<HistoryEntry>,
    /// The sum of all per-record deficits.
    pub total_deficit: Decimal,
}

/// Replays the usage history against the grant ledger.
///
/// Records are processed in chronological order (stable: same-day records
/// keep their input order). For each record:
/// - non-paid kinds bypass allocation entirely and are recorded with a
///   deficit of zero;
/// - paid records dated strictly before the baseline date are recorded
///   with a deficit of zero and skip allocation; pre-migration usage is
///   assumed settled by the baseline assertion;
/// - every other paid record draws from the grants whose validity window
///   contains its date, oldest first; the unfunded remainder is the
///   record's deficit.
///
/// Records dated in the future relative to any reporting date are NOT
/// filtered here; callers distinguish planned usage for display only.
///
/// # Arguments
///
/// * `grants` - The reconciled grant ledger, date-ascending; consumed in place
/// * `records` - The full usage history, in any order
/// * `baseline_date` - The migration cutoff, if a baseline exists
pub fn replay_usage(
    grants: &mut [Grant],
    records: &[LeaveRecord],
    baseline_date: Option<NaiveDate>,
) -> ReplayOutcome {
    let mut ordered: Vec<&LeaveRecord> = records.iter().collect();
    ordered.sort_by_key(|r| r.date);

    let mut history = Vec::with_capacity(ordered.len());
    let mut total_deficit = Decimal::ZERO;

    for record in ordered {
        let deficit_days = if !record.kind.consumes_entitlement() {
            Decimal::ZERO
        } else if baseline_date.is_some_and(|cutoff| record.date < cutoff) {
            Decimal::ZERO
        } else {
            allocate(grants, record.date, record.days)
        };

        total_deficit += deficit_days;
        history.push(HistoryEntry {
            record: record.clone(),
            deficit_days,
        });
    }

    // Most recent first for display; stable, so same-day records keep
    // their chronological-pass order.
    history.sort_by(|a, b| b.record.date.cmp(&a.record.date));

    ReplayOutcome {
        history,
        total_deficit,
    }
}

/// Draws `days` from the oldest grants valid on `date`, returning the
/// unfunded remainder.
fn allocate(grants: &mut [Grant], date: NaiveDate, days: Decimal) -> Decimal {
    let mut needed = days;

    for grant in grants.iter_mut() {
        if needed <= Decimal::ZERO {
            break;
        }
        if grant.is_valid_on(date) && grant.remaining > Decimal::ZERO {
            let deduct = grant.remaining.min(needed);
            grant.remaining -= deduct;
            needed -= deduct;
        }
    }

    needed
}
