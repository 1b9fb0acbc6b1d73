//! Shared types for the accelerator boundary

use fftv_golden::MAX_LOG_LEN;

/// Kind of backend sitting behind the trait object
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceleratorKind {
    /// Software simulation backend
    Simulated,
    /// Memory-mapped hardware tile
    Hardware { part: String },
}

/// Descriptive information reported by an accelerator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceleratorInfo {
    /// Backend kind
    pub kind: AcceleratorKind,
    /// Human-readable backend name
    pub name: String,
    /// Backend or driver version
    pub version: String,
}

/// Capability limits advertised by an accelerator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceleratorCaps {
    /// Largest supported log2 transform length
    pub max_log_len: u32,
    /// Tile contains its own bit-reversal stage and expects
    /// natural-order input
    pub hw_bit_reversal: bool,
    /// Inverse transforms supported
    pub inverse: bool,
}

impl Default for AcceleratorCaps {
    fn default() -> Self {
        Self {
            max_log_len: 14,
            hw_bit_reversal: true,
            inverse: true,
        }
    }
}

impl AcceleratorCaps {
    /// Capabilities of an unconstrained software backend.
    pub fn unlimited() -> Self {
        Self {
            max_log_len: MAX_LOG_LEN,
            ..Default::default()
        }
    }
}

/// One transform request handed to an accelerator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FftJob {
    /// log2 of the transform length
    pub log_len: u32,
    /// Run the inverse (unnormalized) transform
    pub inverse: bool,
    /// Input arrives already bit-reversed; output must still come back
    /// in natural order
    pub bit_reversed_input: bool,
}

impl FftJob {
    /// Forward transform over natural-order input.
    pub fn forward(log_len: u32) -> Self {
        Self {
            log_len,
            inverse: false,
            bit_reversed_input: false,
        }
    }

    /// Number of complex samples in this job.
    pub fn num_samples(&self) -> usize {
        1 << self.log_len
    }

    /// Length of the flat interleaved buffer for this job.
    pub fn buffer_len(&self) -> usize {
        2 << self.log_len
    }
}
