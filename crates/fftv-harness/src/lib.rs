//! # FFT Accelerator Verification Harness
//!
//! Drives hardware (or simulated) FFT accelerators through randomized
//! verification runs against the golden model in `fftv-golden`:
//!
//! - **Accelerator boundary**: the [`FftAccelerator`] trait exchanges
//!   flat interleaved (re, im) buffers plus a capability handshake
//! - **Simulated backend**: [`SimAccelerator`], an independent
//!   `rustfft`-based tile with optional fixed-point, noise, and fault
//!   impairments
//! - **Pipeline**: [`verify`] runs generate, golden transform,
//!   accelerator execute, compare, verdict as one synchronous call
//!
//! # Example
//!
//! ```rust
//! use fftv_harness::{verify, SimAccelerator, VerifyConfig};
//!
//! let mut accel = SimAccelerator::new();
//! let config = VerifyConfig {
//!     log_len: 8,
//!     seed: Some(7),
//!     ..Default::default()
//! };
//!
//! let report = verify(&mut accel, &config).unwrap();
//! assert!(report.passed);
//! assert_eq!(report.comparison.errors, 0);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod runner;
pub mod sim;
pub mod traits;
pub mod types;

// Re-export main types
pub use config::VerifyConfig;
pub use error::{HarnessError, HarnessResult};
pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};
pub use runner::{verify, VerifyReport};
pub use sim::{QFormat, SimAccelerator};
pub use traits::FftAccelerator;
pub use types::{AcceleratorCaps, AcceleratorInfo, AcceleratorKind, FftJob};

/// Create the default accelerator backend.
///
/// Hardware discovery lives behind the same boundary when a platform
/// backend is linked in; without one this hands back the simulated
/// tile.
pub fn create_default() -> Box<dyn FftAccelerator> {
    Box::new(SimAccelerator::new())
}
