//! File-backed keyed JSON store.
//!
//! The store keeps two collections (employees and leave records), each as
//! one JSON file under a root directory. Every mutation path in the API
//! loads the full collection, applies the change, and saves it back; there
//! is no partial update and no caching.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, LeaveRecord};

use super::Dataset;

const EMPLOYEES_FILE: &str = "employees.json";
const RECORDS_FILE: &str = "records.json";

/// A directory-backed store holding the employee and record collections.
///
/// # Example
///
/// ```no_run
/// use leave_engine::storage::JsonStore;
///
/// let store = JsonStore::open("./data")?;
/// let employees = store.load_employees()?;
/// println!("{} employees", employees.len());
/// # Ok::<(), leave_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Opens a store rooted at the given directory, creating it if needed.
    pub fn open<P: Into<PathBuf>>(root: P) -> EngineResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| EngineError::StoreIo {
            path: root.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { root })
    }

    /// Loads all employees. A store with no employees file yet is empty,
    /// not an error.
    pub fn load_employees(&self) -> EngineResult<Vec<Employee>> {
        self.load_collection(&self.root.join(EMPLOYEES_FILE))
    }

    /// Loads all leave records. A store with no records file yet is empty,
    /// not an error.
    pub fn load_records(&self) -> EngineResult<Vec<LeaveRecord>> {
        self.load_collection(&self.root.join(RECORDS_FILE))
    }

    /// Saves the full employee collection, replacing the previous file.
    pub fn save_employees(&self, employees: &[Employee]) -> EngineResult<()> {
        self.save_collection(&self.root.join(EMPLOYEES_FILE), employees)
    }

    /// Saves the full record collection, replacing the previous file.
    pub fn save_records(&self, records: &[LeaveRecord]) -> EngineResult<()> {
        self.save_collection(&self.root.join(RECORDS_FILE), records)
    }

    /// Exports the entire store as one dataset document.
    pub fn export(&self) -> EngineResult<Dataset> {
        Ok(Dataset {
            employees: self.load_employees()?,
            records: self.load_records()?,
        })
    }

    /// Replaces the entire store with the given dataset.
    pub fn import(&self, dataset: &Dataset) -> EngineResult<()> {
        self.save_employees(&dataset.employees)?;
        self.save_records(&dataset.records)
    }

    fn load_collection<T: DeserializeOwned>(&self, path: &Path) -> EngineResult<Vec<T>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path).map_err(|e| EngineError::StoreIo {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| EngineError::StoreParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn save_collection<T: Serialize>(&self, path: &Path, items: &[T]) -> EngineResult<()> {
        let content = serde_json::to_string_pretty(items).map_err(|e| EngineError::StoreParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        fs::write(path, content).map_err(|e| EngineError::StoreIo {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LeaveKind;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn temp_store() -> JsonStore {
        let root = std::env::temp_dir().join(format!("leave-engine-store-{}", Uuid::new_v4()));
        JsonStore::open(root).unwrap()
    }

    fn create_test_employee(id: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: "Sato Yuki".to_string(),
            department: Some("Engineering".to_string()),
            hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            baseline_date: None,
            baseline_days: None,
        }
    }

    fn create_test_record(id: &str, employee_id: &str) -> LeaveRecord {
        LeaveRecord {
            id: id.to_string(),
            employee_id: employee_id.to_string(),
            date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            days: Decimal::new(5, 1),
            kind: LeaveKind::Paid,
            note: Some("Half day".to_string()),
        }
    }

    #[test]
    fn test_fresh_store_is_empty() {
        let store = temp_store();
        assert!(store.load_employees().unwrap().is_empty());
        assert!(store.load_records().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_employees() {
        let store = temp_store();
        let employees = vec![create_test_employee("emp_001"), create_test_employee("emp_002")];

        store.save_employees(&employees).unwrap();

        assert_eq!(store.load_employees().unwrap(), employees);
    }

    #[test]
    fn test_save_and_load_records() {
        let store = temp_store();
        let records = vec![create_test_record("rec_001", "emp_001")];

        store.save_records(&records).unwrap();

        assert_eq!(store.load_records().unwrap(), records);
    }

    #[test]
    fn test_save_replaces_previous_contents() {
        let store = temp_store();
        store
            .save_employees(&[create_test_employee("emp_001")])
            .unwrap();
        store
            .save_employees(&[create_test_employee("emp_002")])
            .unwrap();

        let loaded = store.load_employees().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "emp_002");
    }

    #[test]
    fn test_export_import_round_trip() {
        let source = temp_store();
        source
            .save_employees(&[create_test_employee("emp_001")])
            .unwrap();
        source
            .save_records(&[create_test_record("rec_001", "emp_001")])
            .unwrap();

        let dataset = source.export().unwrap();

        let target = temp_store();
        target.import(&dataset).unwrap();

        assert_eq!(target.export().unwrap(), dataset);
    }

    #[test]
    fn test_corrupt_file_yields_parse_error() {
        let store = temp_store();
        store.save_employees(&[create_test_employee("emp_001")]).unwrap();

        let employees_file = store.root.join(EMPLOYEES_FILE);
        fs::write(&employees_file, "{not json").unwrap();

        match store.load_employees() {
            Err(EngineError::StoreParse { path, .. }) => {
                assert!(path.contains("employees.json"));
            }
            other => panic!("Expected StoreParse, got {:?}", other),
        }
    }
}
