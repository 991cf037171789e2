//! Core error types for stride-core.
//!
//! A thiserror-based hierarchy: `CoreError` at the top with `#[from]`
//! conversions from the more specific `ConfigError` and `ValidationError`
//! enums. The analytics functions themselves never fail; errors originate
//! at the entry boundaries where caller input is parsed and validated.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for stride-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed date or time input
    #[error("Date parse error: {0}")]
    DateParse(#[from] chrono::ParseError),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key in a get/set request
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to access the data directory
    #[error("Failed to access data directory: {0}")]
    DataDirError(String),
}

/// Validation errors raised when snapshot input violates the data model.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// start_date must not be after end_date
    #[error("Invalid date range for task '{task}': start_date ({start}) is after end_date ({end})")]
    InvalidDateRange {
        task: String,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    /// start_time must be a 24-hour HH:mm string
    #[error("Invalid start_time '{value}': expected HH:mm")]
    InvalidStartTime { value: String },

    /// Task duration must be positive
    #[error("Invalid duration for task '{task}': must be greater than zero")]
    InvalidDuration { task: String },

    /// Repeat type outside daily/weekly/monthly/yearly
    #[error("Unknown repeat type: {0}")]
    UnknownRepeatType(String),

    /// Weekly config entry that is not a weekday name
    #[error("Invalid weekday name: {0}")]
    InvalidWeekday(String),

    /// Monthly config entry outside 1..=31
    #[error("Invalid day of month '{0}': expected 1..=31")]
    InvalidDayOfMonth(String),

    /// Yearly config entry that is not a valid MM-DD pair
    #[error("Invalid month-day '{0}': expected MM-DD")]
    InvalidMonthDay(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
