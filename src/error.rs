use thiserror::Error;

/// Errors that can occur while emitting a report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
