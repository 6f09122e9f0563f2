//! Error types for the Leave Entitlement Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur around the entitlement engine.
//! The engine computation itself is total over well-formed input and never
//! returns an error; everything fallible lives in the configuration,
//! storage, and API layers.

use thiserror::Error;

/// The main error type for the Leave Entitlement Engine.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A store file could not be read or written.
    #[error("Store I/O failure at '{path}': {message}")]
    StoreIo {
        /// The path that failed.
        path: String,
        /// A description of the I/O error.
        message: String,
    },

    /// A store file contained data that could not be parsed.
    #[error("Failed to parse store file '{path}': {message}")]
    StoreParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No employee with the given id exists in the store.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: String,
    },

    /// No leave record with the given id exists in the store.
    #[error("Leave record not found: {id}")]
    RecordNotFound {
        /// The record id that was not found.
        id: String,
    },

    /// An imported or loaded document was structurally invalid.
    #[error("Invalid document: {message}")]
    InvalidDocument {
        /// A description of what made the document invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
