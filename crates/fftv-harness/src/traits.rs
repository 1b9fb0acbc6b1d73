//! Accelerator trait definition

use crate::error::HarnessResult;
use crate::types::{AcceleratorCaps, AcceleratorInfo, FftJob};

/// Trait for FFT accelerator backends under verification
///
/// The harness talks to every backend through this interface: flat
/// interleaved (re, im) buffers in and out, plus a capability handshake
/// up front. Word widths, bus packing, and register maps stay on the
/// implementation's side of the boundary.
///
/// # Example
///
/// ```rust
/// use fftv_harness::{FftAccelerator, FftJob, SimAccelerator};
///
/// let mut accel = SimAccelerator::new();
/// assert!(accel.is_available());
///
/// let job = FftJob::forward(4);
/// let input = vec![0.5; job.buffer_len()];
/// let spectrum = accel.execute(&job, &input).unwrap();
/// assert_eq!(spectrum.len(), input.len());
/// ```
pub trait FftAccelerator {
    /// Identify the backend
    fn info(&self) -> AcceleratorInfo;

    /// Advertised limits
    fn capabilities(&self) -> AcceleratorCaps;

    /// Whether the backend can execute jobs right now
    fn is_available(&self) -> bool {
        true
    }

    /// Run one transform and return the interleaved spectrum in natural
    /// order
    ///
    /// `input.len()` must equal `job.buffer_len()`. Jobs outside the
    /// advertised capabilities are rejected before any computation.
    fn execute(&mut self, job: &FftJob, input: &[f64]) -> HarnessResult<Vec<f64>>;
}
