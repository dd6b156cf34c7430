use thiserror::Error;

/// Errors that abort a whole batch call.
///
/// Per-record failures (missing field, type mismatch, failing check) are
/// never errors; they only flip that record's outcome to false.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// A record or rule spec had a shape the engine cannot accept.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Allocation failed while sizing a batch-proportional buffer.
    #[error("resource exhausted: {0}")]
    ResourceExhausted(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ValidateError>;
