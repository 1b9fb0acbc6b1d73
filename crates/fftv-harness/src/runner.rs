//! Verification pipeline
//!
//! Drives one accelerator run end to end: draw a pseudo-random stimulus
//! block, compute the software golden spectrum, execute the same block
//! on the accelerator under test, and grade the observed output. The
//! whole sequence is synchronous and single-threaded; buffers live for
//! exactly one run.
//!
//! ```text
//! validate config ─> generate ─> [pre-bit-reverse] ─> golden transform
//!                                      │
//!                                      └────> accelerator (timed)
//!                                                   │
//!                              compare + peak check <┘ ─> VerifyReport
//! ```

use std::time::{Duration, Instant};

use fftv_golden::{
    bit_reverse, compare, peak_bin, transform, CompareReport, Direction, Peak, SampleGenerator,
};
use tracing::{debug, info, warn};

use crate::config::VerifyConfig;
use crate::error::{HarnessError, HarnessResult};
use crate::traits::FftAccelerator;
use crate::types::FftJob;

/// Outcome of one verification run.
#[derive(Debug, Clone)]
pub struct VerifyReport {
    /// Per-element comparison statistics
    pub comparison: CompareReport,
    /// Golden and observed dominant bins, when peak checking was
    /// requested
    pub peaks: Option<(Peak, Peak)>,
    /// Stimulus seed actually used; replays the run when fed back
    /// through [`VerifyConfig::seed`]
    pub seed: u64,
    /// Wall-clock time spent inside the accelerator call
    pub accel_time: Duration,
    /// Final verdict
    pub passed: bool,
}

/// Run one verification pass against an accelerator.
///
/// Returns `Err` only for configuration and transport problems caught
/// around the computation; an out-of-tolerance spectrum comes back as
/// `Ok` with `passed == false` and the full comparison attached.
pub fn verify(
    accel: &mut dyn FftAccelerator,
    config: &VerifyConfig,
) -> HarnessResult<VerifyReport> {
    config.validate()?;

    let caps = accel.capabilities();
    if config.log_len > caps.max_log_len {
        return Err(HarnessError::Unsupported(format!(
            "log_len {} exceeds accelerator limit {}",
            config.log_len, caps.max_log_len
        )));
    }
    if config.do_bitrev && !caps.hw_bit_reversal {
        return Err(HarnessError::Unsupported(
            "accelerator has no bit-reversal stage; run with do_bitrev = false".to_string(),
        ));
    }
    if !accel.is_available() {
        return Err(HarnessError::Unsupported(format!(
            "accelerator '{}' is not available",
            accel.info().name
        )));
    }

    let len = 1usize << config.log_len;
    // Every run gets a concrete seed so a failure can be replayed.
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        log_len = config.log_len,
        len,
        do_bitrev = config.do_bitrev,
        do_peak = config.do_peak,
        seed,
        "starting verification run"
    );

    let mut generator = SampleGenerator::with_seed(seed);
    let mut input = generator.generate(2 * len);

    // A tile without a hardware reorder stage takes bit-reversed input.
    // The permutation is cheap in software, and the golden transform
    // then skips its own reorder pass; both sides see the same block.
    if !config.do_bitrev {
        bit_reverse(&mut input, config.log_len)?;
    }

    let mut golden = input.clone();
    transform(
        &mut golden,
        config.log_len,
        Direction::Forward,
        config.do_bitrev,
    )?;
    debug!("golden spectrum ready");

    let job = FftJob {
        log_len: config.log_len,
        inverse: false,
        bit_reversed_input: !config.do_bitrev,
    };
    let started = Instant::now();
    let observed = accel.execute(&job, &input)?;
    let accel_time = started.elapsed();
    debug!(elapsed_us = accel_time.as_micros() as u64, "accelerator done");

    if observed.len() != golden.len() {
        return Err(HarnessError::SizeMismatch {
            expected: golden.len(),
            actual: observed.len(),
        });
    }

    let comparison = compare(&golden, &observed, &config.tolerance)?;
    let mut passed = comparison.passes(config.max_error_fraction);

    let peaks = if config.do_peak {
        // Both buffers are non-empty here, so both peaks exist.
        let pair = peak_bin(&golden).zip(peak_bin(&observed));
        if let Some((golden_peak, observed_peak)) = pair {
            if golden_peak.bin != observed_peak.bin {
                warn!(
                    golden_bin = golden_peak.bin,
                    observed_bin = observed_peak.bin,
                    "dominant bins disagree"
                );
                passed = false;
            }
        }
        pair
    } else {
        None
    };

    if passed {
        info!(
            errors = comparison.errors,
            total = comparison.total,
            "verification PASSED"
        );
    } else {
        warn!(
            errors = comparison.errors,
            total = comparison.total,
            error_fraction = comparison.error_fraction(),
            "verification FAILED"
        );
    }

    Ok(VerifyReport {
        comparison,
        peaks,
        seed,
        accel_time,
        passed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{QFormat, SimAccelerator};
    use crate::types::{AcceleratorCaps, AcceleratorInfo};

    fn seeded_config(log_len: u32) -> VerifyConfig {
        VerifyConfig {
            log_len,
            seed: Some(2024),
            ..Default::default()
        }
    }

    #[test]
    fn test_ideal_tile_passes_with_hw_bit_reversal() {
        let mut sim = SimAccelerator::new();
        let report = verify(&mut sim, &seeded_config(10)).unwrap();
        assert!(report.passed);
        assert_eq!(report.comparison.errors, 0);
        assert_eq!(report.comparison.total, 2048);
        assert_eq!(report.seed, 2024);
        assert!(report.peaks.is_none());
    }

    #[test]
    fn test_ideal_tile_passes_with_software_bit_reversal() {
        let mut sim = SimAccelerator::new();
        let config = VerifyConfig {
            do_bitrev: false,
            ..seeded_config(10)
        };
        let report = verify(&mut sim, &config).unwrap();
        assert!(report.passed, "pre-reversed run failed: {:?}", report.comparison.worst);
        assert_eq!(report.comparison.errors, 0);
    }

    #[test]
    fn test_peak_check_passes_on_ideal_tile() {
        let mut sim = SimAccelerator::new();
        let config = VerifyConfig {
            do_peak: true,
            ..seeded_config(9)
        };
        let report = verify(&mut sim, &config).unwrap();
        assert!(report.passed);
        let (golden_peak, observed_peak) = report.peaks.expect("peaks recorded");
        assert_eq!(golden_peak.bin, observed_peak.bin);
    }

    #[test]
    fn test_fixed_point_tile_passes_end_to_end() {
        let mut sim = SimAccelerator::fixed_point(QFormat::default());
        let report = verify(&mut sim, &seeded_config(10)).unwrap();
        assert!(
            report.passed,
            "{} of {} values err",
            report.comparison.errors, report.comparison.total
        );
    }

    #[test]
    fn test_broken_tile_fails_the_verdict() {
        let mut sim = SimAccelerator::new().with_broken_bins(4);
        let report = verify(&mut sim, &seeded_config(10)).unwrap();
        assert!(!report.passed);
        // Real and imaginary parts of each dead bin err.
        assert_eq!(report.comparison.errors, 8);
        assert_eq!(report.comparison.first_mismatch.map(|m| m.index), Some(0));
        assert!(report.comparison.error_fraction() > 0.001);
    }

    #[test]
    fn test_runs_replay_with_the_reported_seed() {
        let mut sim = SimAccelerator::new().with_broken_bins(2);
        let config = VerifyConfig {
            seed: None,
            ..seeded_config(8)
        };
        let first = verify(&mut sim, &config).unwrap();

        let replay = VerifyConfig {
            seed: Some(first.seed),
            ..config
        };
        let second = verify(&mut sim, &replay).unwrap();
        assert_eq!(
            first.comparison, second.comparison,
            "replaying the reported seed must reproduce the comparison"
        );
    }

    #[test]
    fn test_rejects_invalid_configs_before_compute() {
        let mut sim = SimAccelerator::new();

        let config = VerifyConfig {
            max_error_fraction: 2.0,
            ..seeded_config(8)
        };
        assert!(matches!(
            verify(&mut sim, &config),
            Err(HarnessError::Config(_))
        ));

        let config = seeded_config(sim.capabilities().max_log_len + 1);
        assert!(matches!(
            verify(&mut sim, &config),
            Err(HarnessError::Unsupported(_))
        ));

        let mut no_reorder = SimAccelerator::new().with_capabilities(AcceleratorCaps {
            hw_bit_reversal: false,
            ..AcceleratorCaps::default()
        });
        assert!(matches!(
            verify(&mut no_reorder, &seeded_config(8)),
            Err(HarnessError::Unsupported(_))
        ));
        // The software-reversal mode still works on such a tile.
        let config = VerifyConfig {
            do_bitrev: false,
            ..seeded_config(8)
        };
        assert!(verify(&mut no_reorder, &config).unwrap().passed);
    }

    // Delegates to the ideal tile, then swaps the dominant bin with its
    // neighbor: few values change, but the peak moves.
    struct PeakShifter {
        inner: SimAccelerator,
    }

    impl FftAccelerator for PeakShifter {
        fn info(&self) -> AcceleratorInfo {
            self.inner.info()
        }

        fn capabilities(&self) -> AcceleratorCaps {
            self.inner.capabilities()
        }

        fn execute(&mut self, job: &FftJob, input: &[f64]) -> HarnessResult<Vec<f64>> {
            let mut out = self.inner.execute(job, input)?;
            if let Some(peak) = peak_bin(&out) {
                let next = (peak.bin + 1) % job.num_samples();
                out.swap(2 * peak.bin, 2 * next);
                out.swap(2 * peak.bin + 1, 2 * next + 1);
            }
            Ok(out)
        }
    }

    #[test]
    fn test_moved_peak_fails_only_the_peak_check() {
        let mut shifter = PeakShifter {
            inner: SimAccelerator::new(),
        };

        // Large enough that four changed values stay under the error
        // fraction; without the peak check the run passes.
        let config = seeded_config(12);
        let without_peak = verify(&mut shifter, &config).unwrap();
        assert!(without_peak.passed);

        let with_peak = VerifyConfig {
            do_peak: true,
            ..config
        };
        let report = verify(&mut shifter, &with_peak).unwrap();
        assert!(!report.passed, "moved dominant bin must fail the verdict");
        let (golden_peak, observed_peak) = report.peaks.expect("peaks recorded");
        assert_ne!(golden_peak.bin, observed_peak.bin);
    }
}
