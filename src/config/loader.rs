//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the accrual
//! schedule from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::AccrualSchedule;

/// Loads and provides access to the accrual schedule configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/leave/
/// └── schedule.yaml   # Accrual milestones and validity window
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/leave").unwrap();
/// let schedule = loader.schedule();
/// println!("Schedule: {}", schedule.name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    schedule: AccrualSchedule,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/leave")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The schedule file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - The milestone table is empty (`InvalidDocument`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use leave_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/leave")?;
    /// # Ok::<(), leave_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let schedule_path = path.as_ref().join("schedule.yaml");
        let schedule = Self::load_yaml::<AccrualSchedule>(&schedule_path)?;

        if schedule.milestone_days.is_empty() {
            return Err(EngineError::InvalidDocument {
                message: format!(
                    "{}: milestone_days must not be empty",
                    schedule_path.display()
                ),
            });
        }

        Ok(Self { schedule })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded accrual schedule.
    pub fn schedule(&self) -> &AccrualSchedule {
        &self.schedule
    }
}
