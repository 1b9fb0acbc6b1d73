//! # Tolerance Validator
//!
//! Grades an observed buffer against the golden reference, element by
//! element. Two thresholds with different jobs:
//!
//! - [`Tolerance`] decides whether a single value errs: relative
//!   deviation against a nonzero reference, absolute magnitude where the
//!   reference is exactly zero (relative deviation is undefined there).
//! - The caller's maximum error fraction decides the overall verdict
//!   from [`CompareReport::error_fraction`]. Both live in floating
//!   point; the per-element and aggregate thresholds are deliberately
//!   separate values with separate names.
//!
//! Numeric disagreement is data, not an error: `compare` only fails on
//! mismatched buffer lengths.
//!
//! ## Example
//!
//! ```rust
//! use fftv_golden::validator::{compare, Tolerance, DEFAULT_MAX_ERROR_FRACTION};
//!
//! let golden = vec![1.0, 0.0, -2.0, 0.5];
//! let observed = vec![1.01, 0.0, -2.04, 0.5];
//! let report = compare(&golden, &observed, &Tolerance::default()).unwrap();
//! assert_eq!(report.errors, 0);
//! assert!(report.passes(DEFAULT_MAX_ERROR_FRACTION));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{GoldenError, GoldenResult};

/// Default per-element relative tolerance.
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 0.05;

/// Default absolute bound used where the reference value is exactly zero.
pub const DEFAULT_ABSOLUTE_TOLERANCE: f64 = 1e-6;

/// Default cap on the erring fraction of compared values.
pub const DEFAULT_MAX_ERROR_FRACTION: f64 = 0.001;

/// Per-element comparison thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Allowed |golden - observed| / |golden| for nonzero references
    pub relative: f64,
    /// Allowed |observed| where the reference is exactly zero
    pub absolute: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            relative: DEFAULT_RELATIVE_TOLERANCE,
            absolute: DEFAULT_ABSOLUTE_TOLERANCE,
        }
    }
}

/// One erring element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    /// Flat index into the compared buffers
    pub index: usize,
    /// Golden value at that index
    pub expected: f64,
    /// Observed value at that index
    pub actual: f64,
    /// Relative deviation, or the absolute observed magnitude where the
    /// reference is zero, or infinity for non-finite observed values
    pub deviation: f64,
}

/// Element-wise comparison statistics for one run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompareReport {
    /// Number of values compared
    pub total: usize,
    /// Number of values outside tolerance
    pub errors: usize,
    /// Lowest-index erring element
    pub first_mismatch: Option<Mismatch>,
    /// Erring element with the largest deviation
    pub worst: Option<Mismatch>,
}

impl CompareReport {
    /// Erring fraction of the compared values, in [0, 1].
    pub fn error_fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.errors as f64 / self.total as f64
        }
    }

    /// Verdict against an aggregate threshold chosen by the caller.
    pub fn passes(&self, max_error_fraction: f64) -> bool {
        self.error_fraction() <= max_error_fraction
    }
}

/// Deviation of one observed value, or `None` when it is within
/// tolerance.
fn element_deviation(expected: f64, actual: f64, tol: &Tolerance) -> Option<f64> {
    if !actual.is_finite() {
        return Some(f64::INFINITY);
    }
    if expected == 0.0 {
        let deviation = actual.abs();
        if deviation > tol.absolute {
            return Some(deviation);
        }
        return None;
    }
    let deviation = (expected - actual).abs() / expected.abs();
    if deviation > tol.relative {
        Some(deviation)
    } else {
        None
    }
}

/// Compare an observed buffer against the golden reference.
///
/// Both slices must have the same length; the flat layout means
/// interleaved real and imaginary parts are graded as independent
/// values, the same way the accelerator's memory is read back.
pub fn compare(
    golden: &[f64],
    observed: &[f64],
    tol: &Tolerance,
) -> GoldenResult<CompareReport> {
    if golden.len() != observed.len() {
        return Err(GoldenError::LengthMismatch {
            expected: golden.len(),
            actual: observed.len(),
        });
    }

    let mut report = CompareReport {
        total: golden.len(),
        ..Default::default()
    };

    for (index, (&expected, &actual)) in golden.iter().zip(observed.iter()).enumerate() {
        if let Some(deviation) = element_deviation(expected, actual, tol) {
            report.errors += 1;
            let mismatch = Mismatch {
                index,
                expected,
                actual,
                deviation,
            };
            if report.first_mismatch.is_none() {
                report.first_mismatch = Some(mismatch);
            }
            let is_new_worst = match report.worst {
                Some(ref worst) => deviation > worst.deviation,
                None => true,
            };
            if is_new_worst {
                report.worst = Some(mismatch);
            }
        }
    }
    Ok(report)
}
