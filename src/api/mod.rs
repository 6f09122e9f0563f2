//! HTTP API module for the Leave Entitlement Engine.
//!
//! This module provides the REST endpoints the tracking application is
//! built on: pure status computation, employee and record management,
//! and whole-dataset export/import.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeRequest, RecordRequest, StatusRequest};
pub use response::{ApiError, ImportSummary};
pub use state::AppState;
