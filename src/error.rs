//! Error types for biotab operations

use thiserror::Error;

/// Main error type for biotab operations
#[derive(Error, Debug)]
pub enum BiotabError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Column not found: {0}")]
    Column(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for biotab operations
pub type BiotabResult<T> = Result<T, BiotabError>;

impl From<csv::Error> for BiotabError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(io_err) => BiotabError::Io(io_err),
                _ => unreachable!(),
            }
        } else {
            BiotabError::Parse(err.to_string())
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for BiotabError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        BiotabError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for BiotabError {
    fn from(err: serde_json::Error) -> Self {
        BiotabError::Serialization(err.to_string())
    }
}
