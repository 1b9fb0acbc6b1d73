//! # Reference FFT Engine
//!
//! In-place radix-2 decimation-in-time transform over interleaved
//! (re, im) sample buffers, plus the bit-reversal permutation that
//! hardware FFT pipelines either perform themselves or expect the host
//! to apply. This is the "golden" implementation an accelerator under
//! test is graded against, so it favors the textbook dataflow over
//! vectorized tricks.
//!
//! Buffers hold `N = 2^log_len` complex samples as `2 * N` consecutive
//! `f64` values: index `2k` is the real part and `2k + 1` the imaginary
//! part of sample `k`. The inverse transform is not normalized;
//! `inverse(forward(x))` yields `N * x`.
//!
//! ## Example
//!
//! ```rust
//! use fftv_golden::fft::{transform, Direction};
//!
//! // Unit impulse: all spectral bins come out as (1, 0).
//! let mut data = vec![0.0; 16];
//! data[0] = 1.0;
//! transform(&mut data, 3, Direction::Forward, true).unwrap();
//! for bin in data.chunks_exact(2) {
//!     assert!((bin[0] - 1.0).abs() < 1e-12 && bin[1].abs() < 1e-12);
//! }
//! ```

use crate::error::{GoldenError, GoldenResult};

/// Largest supported log2 transform length (2^26 complex samples).
pub const MAX_LOG_LEN: u32 = 26;

/// Transform direction, expressed as the sign of the twiddle exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Time to frequency, exponent sign -1
    Forward,
    /// Frequency to time, exponent sign +1 (unnormalized)
    Inverse,
}

impl Direction {
    /// Sign applied to the twiddle angle for this direction.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }
}

/// Validate a buffer/log_len pair, returning the complex sample count.
fn checked_len(data: &[f64], log_len: u32) -> GoldenResult<usize> {
    if log_len > MAX_LOG_LEN {
        return Err(GoldenError::LogLenOutOfRange {
            log_len,
            max: MAX_LOG_LEN,
        });
    }
    let n = 1usize << log_len;
    if data.len() != 2 * n {
        return Err(GoldenError::LengthMismatch {
            expected: 2 * n,
            actual: data.len(),
        });
    }
    Ok(n)
}

/// Apply the bit-reversal permutation to `2^log_len` interleaved complex
/// samples, in place.
///
/// Sample `k` trades places with the sample at `k`'s bit-reversed index;
/// each pair is swapped exactly once, so applying the permutation twice
/// restores the original order. A single-sample buffer (`log_len == 0`)
/// is left untouched.
pub fn bit_reverse(data: &mut [f64], log_len: u32) -> GoldenResult<()> {
    let n = checked_len(data, log_len)?;
    if log_len == 0 {
        return Ok(());
    }

    let shift = u32::BITS - log_len;
    for k in 0..n {
        let r = ((k as u32).reverse_bits() >> shift) as usize;
        if k < r {
            data.swap(2 * k, 2 * r);
            data.swap(2 * k + 1, 2 * r + 1);
        }
    }
    Ok(())
}

/// Compute an in-place radix-2 decimation-in-time DFT over `log_len`
/// butterfly stages.
///
/// With `reorder == true` the input is taken in natural order and
/// [`bit_reverse`] runs first; with `reorder == false` the caller has
/// already applied the permutation (the usual arrangement when the
/// accelerator under test lacks a hardware reorder stage and the harness
/// pre-reverses the shared input block). Output is in natural order
/// either way.
///
/// Twiddle factors are advanced per stage by a trigonometric recurrence
/// rather than recomputed per butterfly, matching the accelerator's own
/// reference dataflow.
pub fn transform(
    data: &mut [f64],
    log_len: u32,
    direction: Direction,
    reorder: bool,
) -> GoldenResult<()> {
    let n = checked_len(data, log_len)?;
    if reorder {
        bit_reverse(data, log_len)?;
    }

    let sign = direction.sign();
    let mut half_size = 1usize;

    for _stage in 0..log_len {
        let theta = sign * std::f64::consts::PI / half_size as f64;
        let s = theta.sin();
        let half_sin = (0.5 * theta).sin();
        let s2 = 2.0 * half_sin * half_sin;

        let mut w_re = 1.0_f64;
        let mut w_im = 0.0_f64;

        for a in 0..half_size {
            let mut b = a;
            while b < n {
                let i = b;
                let j = b + half_size;

                let z_re = data[2 * j];
                let z_im = data[2 * j + 1];

                let t_re = w_re * z_re - w_im * z_im;
                let t_im = w_re * z_im + w_im * z_re;

                data[2 * j] = data[2 * i] - t_re;
                data[2 * j + 1] = data[2 * i + 1] - t_im;
                data[2 * i] += t_re;
                data[2 * i + 1] += t_im;

                b += 2 * half_size;
            }

            // Advance the running twiddle: w *= e^(i*sign*pi/half_size),
            // with cos(theta) rewritten as 1 - 2*sin^2(theta/2).
            let next_re = w_re - (s * w_im + s2 * w_re);
            let next_im = w_im + (s * w_re - s2 * w_im);
            w_re = next_re;
            w_im = next_im;
        }

        half_size *= 2;
    }
    Ok(())
}
