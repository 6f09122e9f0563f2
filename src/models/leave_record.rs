//! Leave usage record model and related types.
//!
//! This module defines the LeaveRecord struct and LeaveKind enum for
//! representing individual leave-usage events in an employee's history.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the category of a leave record.
///
/// Only [`LeaveKind::Paid`] consumes statutory entitlement; the other kinds
/// are recorded for the history but never deducted from any grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveKind {
    /// Statutory paid leave. Deducted from entitlement grants.
    Paid,
    /// Special leave (e.g. bereavement, jury duty). Informational only.
    Special,
    /// Any other absence kind. Informational only.
    Other,
}

impl LeaveKind {
    /// Returns true if this kind consumes entitlement.
    pub fn consumes_entitlement(&self) -> bool {
        matches!(self, LeaveKind::Paid)
    }
}

/// Represents a single leave-usage event.
///
/// Quantities are in days and support half-day granularity (any
/// non-negative multiple of 0.5).
///
/// # Example
///
/// ```
/// use leave_engine::models::{LeaveKind, LeaveRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = LeaveRecord {
///     id: "rec_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 8, 13).unwrap(),
///     days: Decimal::new(5, 1), // 0.5
///     kind: LeaveKind::Paid,
///     note: Some("Afternoon off".to_string()),
/// };
/// assert!(record.kind.consumes_entitlement());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// Unique identifier for the record.
    #[serde(default)]
    pub id: String,
    /// The employee this record belongs to.
    #[serde(default)]
    pub employee_id: String,
    /// The calendar date of the leave.
    pub date: NaiveDate,
    /// The quantity in days (0.5 granularity).
    pub days: Decimal,
    /// The category of the leave.
    #[serde(rename = "type")]
    pub kind: LeaveKind,
    /// Optional free-text note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_paid_record() {
        let json = r#"{
            "id": "rec_001",
            "employee_id": "emp_001",
            "date": "2024-08-13",
            "days": "1",
            "type": "paid",
            "note": "Summer break"
        }"#;

        let record: LeaveRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "rec_001");
        assert_eq!(record.employee_id, "emp_001");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 8, 13).unwrap());
        assert_eq!(record.days, dec("1"));
        assert_eq!(record.kind, LeaveKind::Paid);
        assert_eq!(record.note.as_deref(), Some("Summer break"));
    }

    #[test]
    fn test_deserialize_half_day_record() {
        let json = r#"{
            "id": "rec_002",
            "employee_id": "emp_001",
            "date": "2024-09-02",
            "days": "0.5",
            "type": "paid"
        }"#;

        let record: LeaveRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.days, dec("0.5"));
        assert!(record.note.is_none());
    }

    #[test]
    fn test_deserialize_without_ids_defaults_to_empty() {
        // The pure /status endpoint accepts records without identity fields.
        let json = r#"{"date": "2024-09-02", "days": "1", "type": "special"}"#;

        let record: LeaveRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "");
        assert_eq!(record.employee_id, "");
        assert_eq!(record.kind, LeaveKind::Special);
    }

    #[test]
    fn test_kind_serialization() {
        assert_eq!(serde_json::to_string(&LeaveKind::Paid).unwrap(), "\"paid\"");
        assert_eq!(
            serde_json::to_string(&LeaveKind::Special).unwrap(),
            "\"special\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveKind::Other).unwrap(),
            "\"other\""
        );
    }

    #[test]
    fn test_kind_field_serializes_as_type() {
        let record = LeaveRecord {
            id: "rec_001".to_string(),
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 8, 13).unwrap(),
            days: dec("1"),
            kind: LeaveKind::Other,
            note: None,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"type\":\"other\""));
        assert!(!json.contains("\"kind\""));
    }

    #[test]
    fn test_only_paid_consumes_entitlement() {
        assert!(LeaveKind::Paid.consumes_entitlement());
        assert!(!LeaveKind::Special.consumes_entitlement());
        assert!(!LeaveKind::Other.consumes_entitlement());
    }

    #[test]
    fn test_serialize_round_trip() {
        let record = LeaveRecord {
            id: "rec_003".to_string(),
            employee_id: "emp_002".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            days: dec("1.5"),
            kind: LeaveKind::Paid,
            note: Some("Moving day".to_string()),
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: LeaveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
