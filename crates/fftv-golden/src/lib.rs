//! # Golden-Model FFT Verification Primitives
//!
//! Software reference implementations used to verify hardware FFT
//! accelerators: a seedable uniform stimulus generator, an in-place
//! radix-2 decimation-in-time transform with explicit bit-reversal
//! control, and a tolerance validator that grades an observed spectrum
//! against the reference.
//!
//! All buffers use the accelerator's memory layout: `N = 2^log_len`
//! complex samples stored as `2 * N` interleaved `f64` values
//! (re, im, re, im, ...). Everything here is synchronous, allocation
//! light, and free of I/O; the crate computes, the harness around it
//! drives devices and draws verdicts.
//!
//! ## Verification Flow
//!
//! ```text
//!                   ┌─> transform (software) ──> golden ──┐
//! generator ─ input ┤                                     ├─> compare ─> report
//!                   └─> accelerator under test ─ observed ┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use fftv_golden::{compare, transform, Direction, SampleGenerator, Tolerance};
//!
//! let log_len = 6;
//! let mut generator = SampleGenerator::with_seed(7);
//! let input = generator.generate(2 << log_len);
//!
//! // Golden spectrum, natural-order input and output.
//! let mut golden = input.clone();
//! transform(&mut golden, log_len, Direction::Forward, true).unwrap();
//!
//! // A perfect accelerator reproduces the reference exactly.
//! let report = compare(&golden, &golden, &Tolerance::default()).unwrap();
//! assert_eq!(report.errors, 0);
//! ```

pub mod error;
pub mod fft;
pub mod generator;
pub mod spectrum;
pub mod validator;

// Re-export main types
pub use error::{GoldenError, GoldenResult};
pub use fft::{bit_reverse, transform, Direction, MAX_LOG_LEN};
pub use generator::{SampleGenerator, SAMPLE_HI, SAMPLE_LO};
pub use spectrum::{from_complex, magnitudes, peak_bin, to_complex, Peak};
pub use validator::{
    compare, CompareReport, Mismatch, Tolerance, DEFAULT_ABSOLUTE_TOLERANCE,
    DEFAULT_MAX_ERROR_FRACTION, DEFAULT_RELATIVE_TOLERANCE,
};
