//! Entitlement computation logic for the Leave Entitlement Engine.
//!
//! This module contains the full status computation pipeline: statutory
//! grant-schedule generation, baseline reconciliation for migrated
//! balances, chronological usage allocation with deficit tracking, and
//! active-grant aggregation for reporting.
//!
//! The whole pipeline is a pure, synchronous computation. It mutates only
//! its own freshly-generated grant list, never its inputs, and reads no
//! ambient state (the reporting date is always passed in).

mod allocation;
mod baseline;
mod schedule;
mod status;

pub use allocation::{ReplayOutcome, replay_usage};
pub use baseline::reconcile_baseline;
pub use schedule::generate_statutory_grants;
pub use status::compute_leave_status;
