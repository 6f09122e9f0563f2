//! Employee model.
//!
//! This module defines the Employee struct for representing workers whose
//! leave entitlement is tracked by the engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee whose leave entitlement is tracked.
///
/// The `baseline_date`/`baseline_days` pair migrates a pre-existing manual
/// balance into the system: "as of this date, exactly N days were
/// remaining". Both fields are required together; a partial baseline is
/// ignored (see [`Employee::baseline`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    #[serde(default)]
    pub id: String,
    /// The employee's display name.
    #[serde(default)]
    pub name: String,
    /// Optional department or team label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// The date the employee was hired. Anchors the accrual schedule.
    pub hire_date: NaiveDate,
    /// The date at which a migrated manual balance is effective.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_date: Option<NaiveDate>,
    /// How many days were remaining on the baseline date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_days: Option<Decimal>,
}

impl Employee {
    /// Returns the migrated baseline, if one is fully specified.
    ///
    /// Both `baseline_date` and `baseline_days` are required together; a
    /// date without a day-count (or vice versa) is treated as "no baseline"
    /// rather than an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::Employee;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let mut employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Sato Yuki".to_string(),
    ///     department: None,
    ///     hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
    ///     baseline_date: Some(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()),
    ///     baseline_days: None,
    /// };
    /// assert!(employee.baseline().is_none());
    ///
    /// employee.baseline_days = Some(Decimal::from(12));
    /// assert!(employee.baseline().is_some());
    /// ```
    pub fn baseline(&self) -> Option<(NaiveDate, Decimal)> {
        match (self.baseline_date, self.baseline_days) {
            (Some(date), Some(days)) => Some((date, days)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee() -> Employee {
        Employee {
            id: "emp_001".to_string(),
            name: "Sato Yuki".to_string(),
            department: Some("Engineering".to_string()),
            hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            baseline_date: None,
            baseline_days: None,
        }
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": "emp_001",
            "name": "Sato Yuki",
            "department": "Engineering",
            "hire_date": "2020-01-01"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(employee.name, "Sato Yuki");
        assert_eq!(employee.department.as_deref(), Some("Engineering"));
        assert_eq!(
            employee.hire_date,
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
        assert!(employee.baseline_date.is_none());
        assert!(employee.baseline_days.is_none());
    }

    #[test]
    fn test_deserialize_employee_with_baseline() {
        let json = r#"{
            "id": "emp_002",
            "name": "Tanaka Rin",
            "hire_date": "2015-01-01",
            "baseline_date": "2023-01-01",
            "baseline_days": "12"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(
            employee.baseline(),
            Some((
                NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                Decimal::from(12)
            ))
        );
    }

    #[test]
    fn test_deserialize_without_identity_defaults_to_empty() {
        // The pure /status endpoint accepts an employee without identity
        // fields; they default to empty strings.
        let json = r#"{"hire_date": "2020-01-01"}"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "");
        assert_eq!(employee.name, "");
    }

    #[test]
    fn test_serialize_employee_round_trip() {
        let employee = create_test_employee();
        let json = serde_json::to_string(&employee).unwrap();

        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }

    #[test]
    fn test_serialize_skips_absent_baseline() {
        let employee = create_test_employee();
        let json = serde_json::to_string(&employee).unwrap();

        assert!(!json.contains("baseline_date"));
        assert!(!json.contains("baseline_days"));
    }

    #[test]
    fn test_baseline_requires_both_fields() {
        let mut employee = create_test_employee();
        assert!(employee.baseline().is_none());

        employee.baseline_date = Some(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert!(employee.baseline().is_none());

        employee.baseline_date = None;
        employee.baseline_days = Some(Decimal::from(12));
        assert!(employee.baseline().is_none());

        employee.baseline_date = Some(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(
            employee.baseline(),
            Some((
                NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                Decimal::from(12)
            ))
        );
    }

    #[test]
    fn test_baseline_supports_half_days() {
        let mut employee = create_test_employee();
        employee.baseline_date = Some(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        employee.baseline_days = Some(Decimal::new(105, 1)); // 10.5

        let (_, days) = employee.baseline().unwrap();
        assert_eq!(days, Decimal::new(105, 1));
    }
}
