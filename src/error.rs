//! Error types for the calculator
//!
//! The rate and compounding functions never fail. Errors come from input
//! validation, date overflow and the export/config boundary.

use chrono::NaiveDate;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the calculator.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Date out of range: {days} days after {anchor}")]
    DateOutOfRange { anchor: NaiveDate, days: u32 },

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export produced invalid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Validation errors for user input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Value is empty")]
    Empty,

    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    #[error("Unknown day-count convention '{0}' (expected calendar or business)")]
    UnknownConvention(String),
}
