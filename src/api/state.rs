//! Application state for the Leave Entitlement Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::AccrualSchedule;
use crate::storage::JsonStore;

/// Shared application state.
///
/// Contains the accrual schedule and the store. The store is guarded by a
/// mutex so that concurrent mutations see a consistent load-modify-save
/// sequence; the engine itself needs no synchronization.
#[derive(Clone)]
pub struct AppState {
    schedule: Arc<AccrualSchedule>,
    store: Arc<Mutex<JsonStore>>,
}

impl AppState {
    /// Creates a new application state from a schedule and an open store.
    pub fn new(schedule: AccrualSchedule, store: JsonStore) -> Self {
        Self {
            schedule: Arc::new(schedule),
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Returns the accrual schedule.
    pub fn schedule(&self) -> &AccrualSchedule {
        &self.schedule
    }

    /// Locks and returns the store for a load-modify-save sequence.
    pub fn store(&self) -> MutexGuard<'_, JsonStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
