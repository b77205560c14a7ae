//! Common error types for chordon

use thiserror::Error;

/// Common result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal error conditions for the batch run
///
/// Per-row conditions (degree-lookup misses, empty token sequences, an
/// empty artist match) are absorbed into the data and never surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read or write error (wraps csv::Error)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Required column absent from an input table
    #[error("Missing required column '{column}' in {table}")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    /// Mapping-table row whose literal fields cannot be parsed
    #[error("Malformed mapping entry for '{chord}': {reason}")]
    MalformedMapping { chord: String, reason: String },
}
