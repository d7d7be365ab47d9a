//! Error types for loading the mobility dataset
use thiserror::Error;

/// Fatal errors raised while loading the dataset. None of these are
/// recoverable; the dashboard refuses to start.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The dataset file could not be read
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV itself is malformed
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A `Date` cell could not be parsed as a calendar date
    #[error("Failed to parse date {value:?} on line {line}")]
    DateParse { line: u64, value: String },

    /// The file has a header but no data rows
    #[error("Dataset contains no rows")]
    EmptyDataset,
}

/// Type alias for Results using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;
