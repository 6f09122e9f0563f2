//! Statutory Paid-Leave Entitlement Engine
//!
//! This crate tracks statutory paid-leave entitlement under a labor-law
//! accrual schedule. It generates entitlement grants from an employee's hire
//! date, reconciles migrated baseline balances, replays historical usage
//! against the grants that were valid at the time of each usage, and reports
//! the current balance together with any unfunded ("deficit") usage.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod storage;
