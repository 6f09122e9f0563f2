//! Configuration loading and management for the Leave Entitlement Engine.
//!
//! This module provides functionality to load the accrual schedule from a
//! YAML file. The statutory schedule is also compiled in as
//! [`AccrualSchedule::statutory`] so the engine can run without any files
//! on disk.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/leave").unwrap();
//! println!("Loaded schedule: {}", config.schedule().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::AccrualSchedule;
