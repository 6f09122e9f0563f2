//! Core data models for the Leave Entitlement Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod grant;
mod leave_record;
mod leave_status;

pub use employee::Employee;
pub use grant::Grant;
pub use leave_record::{LeaveKind, LeaveRecord};
pub use leave_status::{HistoryEntry, LeaveStatus};
