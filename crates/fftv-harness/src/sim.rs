//! Simulated FFT accelerator
//!
//! Software stand-in for a hardware FFT tile, used to exercise the
//! verification pipeline without a device. The transform comes from
//! `rustfft`, an implementation independent of the golden model, so a
//! clean run demonstrates agreement between two separate codebases.
//! Optional impairments model datapath effects: fixed-point quantization
//! of the bus words, seeded Gaussian noise, and dead output bins for
//! driving the failing verdict on purpose.

use fftv_golden::bit_reverse;
use fftv_golden::spectrum::{from_complex, to_complex};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rustfft::FftPlanner;

use crate::error::{HarnessError, HarnessResult};
use crate::traits::FftAccelerator;
use crate::types::{AcceleratorCaps, AcceleratorInfo, AcceleratorKind, FftJob};

/// Two's-complement fixed-point format of a modeled datapath.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QFormat {
    /// Total word width in bits
    pub word_bits: u32,
    /// Integer bits, sign included
    pub int_bits: u32,
}

impl QFormat {
    /// Fractional bits in this format.
    pub fn frac_bits(&self) -> u32 {
        self.word_bits.saturating_sub(self.int_bits)
    }

    /// Round a value to the representable grid, saturating at the rails.
    pub fn quantize(&self, value: f64) -> f64 {
        let scale = 2f64.powi(self.frac_bits() as i32);
        let top = 2f64.powi(self.word_bits as i32 - 1);
        let raw = (value * scale).round().clamp(-top, top - 1.0);
        raw / scale
    }
}

impl Default for QFormat {
    /// 32-bit bus words with 12 integer bits, the modeled tile's native
    /// format.
    fn default() -> Self {
        Self {
            word_bits: 32,
            int_bits: 12,
        }
    }
}

/// Simulated accelerator backend
///
/// Byte-exact behavior knobs stack through the builder methods:
///
/// - plain [`SimAccelerator::new`] is an ideal double-precision tile;
/// - [`SimAccelerator::fixed_point`] quantizes words entering and
///   leaving the tile;
/// - [`with_noise`](SimAccelerator::with_noise) perturbs every output
///   value with seeded Gaussian noise;
/// - [`with_broken_bins`](SimAccelerator::with_broken_bins) zeroes the
///   leading output bins, a deterministic hardware fault.
pub struct SimAccelerator {
    caps: AcceleratorCaps,
    format: Option<QFormat>,
    noise_std: f64,
    broken_bins: usize,
    rng: StdRng,
    planner: FftPlanner<f64>,
}

impl SimAccelerator {
    /// Create an ideal simulated tile with default capabilities.
    pub fn new() -> Self {
        Self {
            caps: AcceleratorCaps::default(),
            format: None,
            noise_std: 0.0,
            broken_bins: 0,
            rng: StdRng::seed_from_u64(0),
            planner: FftPlanner::new(),
        }
    }

    /// Model a fixed-point datapath: words are quantized entering and
    /// leaving the tile.
    pub fn fixed_point(format: QFormat) -> Self {
        let mut sim = Self::new();
        sim.format = Some(format);
        sim
    }

    /// Add Gaussian noise with the given standard deviation to every
    /// output value. Seeded, so runs stay reproducible.
    pub fn with_noise(mut self, std_dev: f64, seed: u64) -> Self {
        self.noise_std = std_dev;
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Zero the first `bins` output pairs.
    pub fn with_broken_bins(mut self, bins: usize) -> Self {
        self.broken_bins = bins;
        self
    }

    /// Override the advertised capabilities.
    pub fn with_capabilities(mut self, caps: AcceleratorCaps) -> Self {
        self.caps = caps;
        self
    }
}

impl Default for SimAccelerator {
    fn default() -> Self {
        Self::new()
    }
}

impl FftAccelerator for SimAccelerator {
    fn info(&self) -> AcceleratorInfo {
        AcceleratorInfo {
            kind: AcceleratorKind::Simulated,
            name: "fft-sim".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    fn capabilities(&self) -> AcceleratorCaps {
        self.caps
    }

    fn execute(&mut self, job: &FftJob, input: &[f64]) -> HarnessResult<Vec<f64>> {
        if job.log_len > self.caps.max_log_len {
            return Err(HarnessError::Unsupported(format!(
                "log2 length {} exceeds tile limit {}",
                job.log_len, self.caps.max_log_len
            )));
        }
        if job.inverse && !self.caps.inverse {
            return Err(HarnessError::Unsupported(
                "inverse transforms disabled for this tile".to_string(),
            ));
        }
        if input.len() != job.buffer_len() {
            return Err(HarnessError::SizeMismatch {
                expected: job.buffer_len(),
                actual: input.len(),
            });
        }

        let mut working = input.to_vec();
        if let Some(format) = self.format {
            for value in working.iter_mut() {
                *value = format.quantize(*value);
            }
        }

        // A tile without a reorder stage is handed bit-reversed input;
        // undo the permutation so the planner sees natural order.
        if job.bit_reversed_input {
            bit_reverse(&mut working, job.log_len)?;
        }

        let mut samples = to_complex(&working);
        let fft = if job.inverse {
            self.planner.plan_fft_inverse(samples.len())
        } else {
            self.planner.plan_fft_forward(samples.len())
        };
        fft.process(&mut samples);

        let mut output = from_complex(&samples);
        if let Some(format) = self.format {
            for value in output.iter_mut() {
                *value = format.quantize(*value);
            }
        }
        if self.noise_std > 0.0 {
            let noise = Normal::new(0.0, self.noise_std)
                .map_err(|e| HarnessError::Config(format!("noise std_dev: {e}")))?;
            for value in output.iter_mut() {
                *value += noise.sample(&mut self.rng);
            }
        }
        for value in output.iter_mut().take(2 * self.broken_bins) {
            *value = 0.0;
        }

        Ok(output)
    }
}
