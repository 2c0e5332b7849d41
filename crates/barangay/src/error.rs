//! Error types for barangay.
//!
//! This module defines all error types used throughout the barangay crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for barangay operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Record Errors ===
    /// One or more required fields were left empty on record creation.
    ///
    /// The store is left untouched when this is returned.
    #[error("missing information for {kind}: please fill in {}", .missing.join(", "))]
    Validation {
        /// The record kind being created.
        kind: &'static str,
        /// Names of the required fields that were empty.
        missing: Vec<&'static str>,
    },

    /// Two records in the same store share an id.
    #[error("duplicate {kind} id {id}")]
    DuplicateId {
        /// The record kind.
        kind: &'static str,
        /// The repeated id.
        id: u32,
    },

    /// No record with the given id exists in the store.
    #[error("{kind} not found: {id}")]
    RecordNotFound {
        /// The record kind.
        kind: &'static str,
        /// The id that was looked up.
        id: u32,
    },

    /// A label could not be parsed into one of the known values.
    #[error("unknown {what} '{value}', expected one of: {expected}")]
    UnknownValue {
        /// What was being parsed (e.g. "ayuda type").
        what: &'static str,
        /// The rejected input.
        value: String,
        /// Comma-separated list of accepted labels.
        expected: String,
    },

    // === Report Errors ===
    /// No report type was selected.
    #[error("report type required: please select a report type first")]
    ReportTypeRequired,

    /// The report date range is reversed.
    #[error("invalid date range: {from} is after {to}")]
    InvalidDateRange {
        /// Start of the range.
        from: chrono::NaiveDate,
        /// End of the range.
        to: chrono::NaiveDate,
    },

    /// A download name that is not a bare file name.
    #[error("invalid file name '{name}': must not contain path components")]
    InvalidFileName {
        /// The rejected name.
        name: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for barangay operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a validation error for the given record kind.
    #[must_use]
    pub fn validation(kind: &'static str, missing: Vec<&'static str>) -> Self {
        Self::Validation { kind, missing }
    }

    /// Create an unknown value error listing the accepted labels.
    #[must_use]
    pub fn unknown_value(what: &'static str, value: impl Into<String>, expected: &[&str]) -> Self {
        Self::UnknownValue {
            what,
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    /// Check if this error is a missing-field validation failure.
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// The missing field names, if this is a validation failure.
    #[must_use]
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            Self::Validation { missing, .. } => missing,
            _ => &[],
        }
    }
}
