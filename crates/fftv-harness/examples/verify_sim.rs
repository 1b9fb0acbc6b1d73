//! Run the verification pipeline against the simulated tile.
//!
//! Run with: cargo run -p fftv-harness --example verify_sim

use fftv_harness::{
    init_logging, verify, FftAccelerator, LogConfig, QFormat, SimAccelerator, VerifyConfig,
};

fn run(name: &str, accel: &mut dyn FftAccelerator, config: &VerifyConfig) {
    match verify(accel, config) {
        Ok(report) => {
            let verdict = if report.passed { "PASS" } else { "FAIL" };
            println!(
                "{:<28} {}  errors {}/{}  seed {}  accel {:?}",
                name,
                verdict,
                report.comparison.errors,
                report.comparison.total,
                report.seed,
                report.accel_time
            );
        }
        Err(err) => println!("{:<28} ERROR  {}", name, err),
    }
}

fn main() {
    init_logging(&LogConfig::default());

    let config = VerifyConfig {
        log_len: 10,
        seed: Some(42),
        ..Default::default()
    };

    // Ideal tile, hardware bit-reversal.
    let mut ideal = SimAccelerator::new();
    run("ideal / hw bit-reversal", &mut ideal, &config);

    // Same tile, harness-side bit-reversal.
    let sw_reorder = VerifyConfig {
        do_bitrev: false,
        ..config.clone()
    };
    run("ideal / sw bit-reversal", &mut ideal, &sw_reorder);

    // Fixed-point datapath with peak checking.
    let mut quantized = SimAccelerator::fixed_point(QFormat::default());
    let with_peak = VerifyConfig {
        do_peak: true,
        ..config.clone()
    };
    run("fixed-point / peak check", &mut quantized, &with_peak);

    // A faulty tile: the leading bins come back dead.
    let mut broken = SimAccelerator::new().with_broken_bins(4);
    run("broken bins", &mut broken, &config);
}
