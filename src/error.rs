//! Error types for the payroll and forecast engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Note that the calculation functions themselves are total and never return
//! errors; only configuration loading and request validation do.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll and forecast engine.
///
/// # Example
///
/// ```
/// use forecast_engine::error::EngineError;
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

    /// No PAYG tax schedule was in effect for the given date.
    #[error("No tax schedule in effect on date {date}")]
    TaxScheduleNotFound {
        /// The date for which a schedule was requested.
        date: NaiveDate,
    },

    /// A payroll settings field was invalid.
    #[error("Invalid payroll settings field '{field}': {message}")]
    InvalidSettings {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
