//! Harness error types

use fftv_golden::GoldenError;
use thiserror::Error;

/// Result type for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Errors that can occur while driving an accelerator run
///
/// All variants are raised before or around the computation. An
/// out-of-tolerance spectrum is a reported verdict, not an error.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// Invalid run configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Job outside the accelerator's advertised capabilities
    #[error("Unsupported by accelerator: {0}")]
    Unsupported(String),

    /// Accelerator exchanged a buffer of the wrong size
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Golden-model precondition failure
    #[error("Golden model error: {0}")]
    Golden(#[from] GoldenError),
}

impl HarnessError {
    /// Check if this error points at the run configuration rather than
    /// the accelerator
    pub fn is_config_error(&self) -> bool {
        matches!(self, HarnessError::Config(_) | HarnessError::Golden(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_errors_convert() {
        let golden = GoldenError::LengthMismatch {
            expected: 8,
            actual: 6,
        };
        let harness: HarnessError = golden.into();
        assert!(harness.is_config_error());
        assert!(harness.to_string().contains("length mismatch"));
    }
}
