//! Golden Transform Benchmarks
//!
//! Run with: cargo bench -p fftv-golden --bench golden_fft

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fftv_golden::{bit_reverse, transform, Direction, SampleGenerator};
use rustfft::num_complex::Complex64;
use rustfft::FftPlanner;

fn bench_bit_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit_reverse");

    for log_len in [8u32, 10, 12].iter() {
        let n = 1usize << log_len;
        let data = SampleGenerator::with_seed(1).generate(2 * n);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(log_len),
            log_len,
            |b, &log_len| {
                b.iter(|| {
                    let mut buf = data.clone();
                    bit_reverse(black_box(&mut buf), log_len).unwrap();
                    buf
                })
            },
        );
    }

    group.finish();
}

fn bench_golden_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("golden_transform");

    for log_len in [8u32, 10, 12].iter() {
        let n = 1usize << log_len;
        let data = SampleGenerator::with_seed(2).generate(2 * n);

        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("golden", log_len), log_len, |b, &log_len| {
            b.iter(|| {
                let mut buf = data.clone();
                transform(black_box(&mut buf), log_len, Direction::Forward, true).unwrap();
                buf
            })
        });

        // Baseline: same input through rustfft for scale.
        group.bench_with_input(BenchmarkId::new("rustfft", log_len), log_len, |b, _| {
            let fft = FftPlanner::new().plan_fft_forward(n);
            let samples: Vec<Complex64> = data
                .chunks_exact(2)
                .map(|p| Complex64::new(p[0], p[1]))
                .collect();
            b.iter(|| {
                let mut buf = samples.clone();
                fft.process(black_box(&mut buf));
                buf
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_bit_reverse, bench_golden_transform);
criterion_main!(benches);
