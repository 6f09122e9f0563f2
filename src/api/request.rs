//! Request types for the Leave Entitlement Engine API.
//!
//! This module defines the JSON request structures for the API endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, LeaveKind, LeaveRecord};

/// Request body for the `POST /status` endpoint.
///
/// Carries everything the pure computation needs; identity fields on the
/// employee and records are optional here. When `as_of` is omitted the
/// handler substitutes the current date; the engine itself never reads
/// the clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusRequest {
    /// The employee's hire data and optional migrated baseline.
    pub employee: Employee,
    /// The usage history to replay.
    #[serde(default)]
    pub records: Vec<LeaveRecord>,
    /// The reporting date; defaults to today at the API edge.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Request body for creating or replacing an employee.
///
/// The server assigns the id on creation; on update the path id wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// The employee's display name.
    pub name: String,
    /// Optional department or team label.
    #[serde(default)]
    pub department: Option<String>,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// The date at which a migrated manual balance is effective.
    #[serde(default)]
    pub baseline_date: Option<NaiveDate>,
    /// How many days were remaining on the baseline date.
    #[serde(default)]
    pub baseline_days: Option<Decimal>,
}

impl EmployeeRequest {
    /// Builds the stored employee with the given id.
    pub fn into_employee(self, id: String) -> Employee {
        Employee {
            id,
            name: self.name,
            department: self.department,
            hire_date: self.hire_date,
            baseline_date: self.baseline_date,
            baseline_days: self.baseline_days,
        }
    }
}

/// Request body for creating a leave record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordRequest {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The calendar date of the leave.
    pub date: NaiveDate,
    /// The quantity in days (0.5 granularity).
    pub days: Decimal,
    /// The category of the leave.
    #[serde(rename = "type")]
    pub kind: LeaveKind,
    /// Optional free-text note.
    #[serde(default)]
    pub note: Option<String>,
}

impl RecordRequest {
    /// Builds the stored record with the given id.
    pub fn into_record(self, id: String) -> LeaveRecord {
        LeaveRecord {
            id,
            employee_id: self.employee_id,
            date: self.date,
            days: self.days,
            kind: self.kind,
            note: self.note,
        }
    }
}

/// Query parameters for store-backed status lookups.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusQuery {
    /// The reporting date; defaults to today at the API edge.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}
