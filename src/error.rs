use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse schedule input JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Failed to write schedule export: {0}")]
    ExportError(#[from] csv::Error),

    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),

    #[error("Index out of range: {0}")]
    OutOfRange(String),

    #[error("Assignment rejected: {0}")]
    AssignmentRejected(String),
}

pub type Result<T> = std::result::Result<T, Error>;
