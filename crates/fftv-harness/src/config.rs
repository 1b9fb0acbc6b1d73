//! Run configuration

use fftv_golden::{Tolerance, DEFAULT_MAX_ERROR_FRACTION, MAX_LOG_LEN};
use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, HarnessResult};

/// Configuration for one verification run.
///
/// One immutable value per run; the pipeline never mutates it. All
/// fields have serde defaults, so a partial document deserializes into
/// a runnable configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    /// log2 of the transform length
    pub log_len: u32,
    /// Accelerator applies its own bit-reversal stage; when false the
    /// harness pre-reverses the input block in software
    pub do_bitrev: bool,
    /// Additionally require golden and observed dominant bins to agree
    pub do_peak: bool,
    /// Explicit stimulus seed; `None` draws one from the OS
    pub seed: Option<u64>,
    /// Per-element comparison thresholds
    pub tolerance: Tolerance,
    /// Largest acceptable erring fraction of compared values
    pub max_error_fraction: f64,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            log_len: 10,
            do_bitrev: true,
            do_peak: false,
            seed: None,
            tolerance: Tolerance::default(),
            max_error_fraction: DEFAULT_MAX_ERROR_FRACTION,
        }
    }
}

impl VerifyConfig {
    /// Check the configuration before any buffers are allocated.
    pub fn validate(&self) -> HarnessResult<()> {
        if self.log_len > MAX_LOG_LEN {
            return Err(HarnessError::Config(format!(
                "log_len {} exceeds supported maximum {}",
                self.log_len, MAX_LOG_LEN
            )));
        }
        if !self.tolerance.relative.is_finite() || self.tolerance.relative < 0.0 {
            return Err(HarnessError::Config(format!(
                "relative tolerance must be finite and non-negative, got {}",
                self.tolerance.relative
            )));
        }
        if !self.tolerance.absolute.is_finite() || self.tolerance.absolute < 0.0 {
            return Err(HarnessError::Config(format!(
                "absolute tolerance must be finite and non-negative, got {}",
                self.tolerance.absolute
            )));
        }
        if !(0.0..=1.0).contains(&self.max_error_fraction) {
            return Err(HarnessError::Config(format!(
                "max_error_fraction must be within [0, 1], got {}",
                self.max_error_fraction
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = VerifyConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.log_len, 10);
        assert!(config.do_bitrev);
        assert!(!config.do_peak);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let mut config = VerifyConfig {
            log_len: MAX_LOG_LEN + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.log_len = 8;
        config.max_error_fraction = 1.5;
        assert!(config.validate().is_err());

        config.max_error_fraction = 0.001;
        config.tolerance.relative = f64::NAN;
        assert!(config.validate().is_err());

        config.tolerance.relative = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let config: VerifyConfig =
            serde_json::from_str(r#"{ "log_len": 12, "seed": 99 }"#).unwrap();
        assert_eq!(config.log_len, 12);
        assert_eq!(config.seed, Some(99));
        assert!(config.do_bitrev, "unstated fields take their defaults");
        assert_eq!(config.max_error_fraction, DEFAULT_MAX_ERROR_FRACTION);
        assert!(config.validate().is_ok());
    }
}
