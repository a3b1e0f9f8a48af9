//! Error types for hexfield.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HexFieldError>;

#[derive(Debug, Error)]
pub enum HexFieldError {
    /// Inconsistent parameters or a boundary source that did not yield
    /// exactly one region. Aborts the run.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The distance field has no occupied cell to measure against.
    #[error("No occupied cells at resolution {resolution}")]
    EmptyOccupiedSet { resolution: u8 },

    /// A single point record could not be parsed. Ingest skips these.
    #[error("Malformed point record at line {line}: {reason}")]
    MalformedPoint { line: usize, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Hexagonal index error: {0}")]
    Hex(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for HexFieldError {
    fn from(err: serde_json::Error) -> Self {
        HexFieldError::Serialization(err.to_string())
    }
}

impl From<h3o::error::InvalidLatLng> for HexFieldError {
    fn from(err: h3o::error::InvalidLatLng) -> Self {
        HexFieldError::InvalidInput(err.to_string())
    }
}

impl From<h3o::error::InvalidResolution> for HexFieldError {
    fn from(err: h3o::error::InvalidResolution) -> Self {
        HexFieldError::Hex(err.to_string())
    }
}

impl From<h3o::error::InvalidCellIndex> for HexFieldError {
    fn from(err: h3o::error::InvalidCellIndex) -> Self {
        HexFieldError::Hex(err.to_string())
    }
}
