//! Interleaved-spectrum helpers
//!
//! Small conversions and measurements over the flat (re, im) layout:
//! complex-vector views for code that talks to FFT libraries, magnitude
//! extraction, and the dominant-bin search used by peak-checking runs.

use num_complex::Complex64;

/// Dominant spectral bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Complex bin index
    pub bin: usize,
    /// Squared magnitude at that bin
    pub power: f64,
}

/// View an interleaved buffer as complex samples.
///
/// `data` holds consecutive (re, im) pairs; a trailing unpaired value
/// would indicate a caller bug and is ignored.
pub fn to_complex(data: &[f64]) -> Vec<Complex64> {
    data.chunks_exact(2)
        .map(|pair| Complex64::new(pair[0], pair[1]))
        .collect()
}

/// Flatten complex samples back into the interleaved layout.
pub fn from_complex(samples: &[Complex64]) -> Vec<f64> {
    let mut data = Vec::with_capacity(2 * samples.len());
    for sample in samples {
        data.push(sample.re);
        data.push(sample.im);
    }
    data
}

/// Magnitude of every complex bin.
pub fn magnitudes(data: &[f64]) -> Vec<f64> {
    data.chunks_exact(2)
        .map(|pair| (pair[0] * pair[0] + pair[1] * pair[1]).sqrt())
        .collect()
}

/// Find the bin with the most energy. Ties resolve to the lowest index;
/// an empty buffer has no peak.
pub fn peak_bin(data: &[f64]) -> Option<Peak> {
    let mut best: Option<Peak> = None;
    for (bin, pair) in data.chunks_exact(2).enumerate() {
        let power = pair[0] * pair[0] + pair[1] * pair[1];
        let replace = match best {
            Some(ref peak) => power > peak.power,
            None => true,
        };
        if replace {
            best = Some(Peak { bin, power });
        }
    }
    best
}
