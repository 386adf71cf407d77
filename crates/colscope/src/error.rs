//! Error types for the colscope library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for profiling operations.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error opening or reading a spreadsheet workbook.
    #[error("Workbook error: {0}")]
    Workbook(String),

    /// File format not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Input that cannot be interpreted as a table.
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    /// Empty file or no columns to profile.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Columns with unequal lengths or duplicate names.
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for colscope operations.
pub type Result<T> = std::result::Result<T, ProfileError>;
