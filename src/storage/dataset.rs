//! Whole-store export/import document.

use serde::{Deserialize, Serialize};

use crate::models::{Employee, LeaveRecord};

/// The full dataset as one JSON-serializable document.
///
/// Used for file-based export and import: an import replaces the entire
/// store with the document's collections.
///
/// # Example
///
/// ```
/// use leave_engine::storage::Dataset;
///
/// let dataset: Dataset = serde_json::from_str(r#"{"employees": [], "records": []}"#).unwrap();
/// assert!(dataset.employees.is_empty());
/// assert!(dataset.records.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// All employees in the store.
    pub employees: Vec<Employee>,
    /// All leave records in the store.
    pub records: Vec<LeaveRecord>,
}
