//! Error types for the timecard auditor.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur while loading configuration, reading
//! timecards, or writing the compliance report.

use thiserror::Error;

/// The main error type for the timecard auditor.
///
/// # Example
///
/// ```
/// use timecard_audit::error::AuditError;
///
/// let error = AuditError::ConfigNotFound {
///     path: "/missing/audit.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/audit.yaml");
/// ```
#[derive(Debug, Error)]
pub enum AuditError {
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

    /// Configuration parsed but holds inconsistent values.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the inconsistency.
        message: String,
    },

    /// The timecard file could not be opened or read.
    #[error("Error reading file '{path}': {message}")]
    InputUnreadable {
        /// The input path.
        path: String,
        /// The underlying I/O error.
        message: String,
    },

    /// A line has fewer fields than a required column needs.
    #[error("Missing field '{column}' at index {index} (line has {found} fields)")]
    MissingField {
        /// The column name.
        column: &'static str,
        /// The configured column index.
        index: usize,
        /// The number of fields actually present.
        found: usize,
    },

    /// A timestamp field does not match the configured format.
    #[error("Error parsing date in '{column}' ({value:?}): {message}")]
    InvalidTimestamp {
        /// The column name.
        column: &'static str,
        /// The raw field value.
        value: String,
        /// The parser's explanation.
        message: String,
    },

    /// The report destination could not be written.
    #[error("Error writing to file '{path}': {message}")]
    OutputUnwritable {
        /// The output path.
        path: String,
        /// The underlying I/O or serialization error.
        message: String,
    },
}

/// A type alias for Results that return AuditError.
pub type AuditResult<T> = Result<T, AuditError>;
