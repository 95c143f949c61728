//! Error handling for the job-insights library.

pub mod util;

use std::path::PathBuf;

use arrow::error::ArrowError;
use thiserror::Error;

/// Specialized error type for job-market analysis operations
#[derive(Debug, Error)]
pub enum JobInsightsError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error reading or decoding CSV data
    #[error("CSV error: {0}")]
    Csv(#[from] ArrowError),

    /// A source file does not exist or is not a regular file
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// A column required by an analysis is missing from the dataset
    #[error("column '{0}' not found in dataset")]
    MissingColumn(String),

    /// A categorical column carried a value outside its declared domain
    #[error("invalid value '{value}' for column '{column}' at row {row}")]
    InvalidCategory {
        /// Name of the offending column
        column: String,
        /// The raw value found in the file
        value: String,
        /// Zero-based row index in the source file
        row: usize,
    },

    /// A salary value was negative or non-finite
    #[error("invalid salary {value} at row {row}: must be a non-negative finite number")]
    InvalidSalary {
        /// The raw value found in the file
        value: f64,
        /// Zero-based row index in the source file
        row: usize,
    },

    /// Too few observations to compute a statistic
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// An argument outside its valid range (e.g. confidence level)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Error serializing results
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Wrapped error with additional context
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type for job-insights operations
pub type Result<T> = std::result::Result<T, JobInsightsError>;
