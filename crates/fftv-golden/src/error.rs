//! Golden-model error types

use thiserror::Error;

/// Result type for golden-model operations
pub type GoldenResult<T> = Result<T, GoldenError>;

/// Errors that can occur in the golden model
///
/// Every variant is a configuration mistake caught before any numeric
/// work starts. Numeric disagreement between golden and observed data is
/// never an error here; it is reported through
/// [`CompareReport`](crate::validator::CompareReport).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoldenError {
    /// Buffer length does not match the configured transform length
    #[error("Buffer length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// log2 transform length outside the supported range
    #[error("log2 transform length {log_len} exceeds maximum {max}")]
    LogLenOutOfRange { log_len: u32, max: u32 },
}
