//! Persistence for the surrounding application.
//!
//! This module provides the keyed JSON store the application keeps its
//! employees and leave records in, plus the [`Dataset`] document used for
//! whole-store export and import. The engine itself never touches storage;
//! everything here is a thin wrapper the API layer calls with data it owns.

mod dataset;
mod store;

pub use dataset::Dataset;
pub use store::JsonStore;
