//! Criterion benchmarks for SynthSeries hot paths.
//!
//! Benchmarks:
//! 1. Vectorized dispatch (sinusoid + white noise)
//! 2. Sequential dispatch (AR(2) + red noise)
//! 3. Irregular time sampling

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;

use synthseries_core::noise::{GaussianNoise, RedNoise};
use synthseries_core::signals::{AutoRegressive, Sinusoidal};
use synthseries_core::{sample, Generator, SamplingMode, SeriesRng, TimeSampler};

fn make_times(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 * 0.01).collect()
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    for &n in &[1_000usize, 10_000, 100_000] {
        let times = make_times(n);

        group.bench_with_input(BenchmarkId::new("vectorized", n), &times, |b, times| {
            let mut signal = Sinusoidal::new(1.0, 2.0).unwrap();
            let mut noise = GaussianNoise::new(0.0, 0.1, SeriesRng::seed_from_u64(1)).unwrap();
            b.iter(|| sample(black_box(times), &mut signal, Some(&mut noise)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("sequential", n), &times, |b, times| {
            let mut signal =
                AutoRegressive::new(vec![0.6, 0.2], 0.5, None, SeriesRng::seed_from_u64(1))
                    .unwrap();
            let mut noise =
                RedNoise::new(0.0, 1.0, 0.2, 0.0, SeriesRng::seed_from_u64(2)).unwrap();
            b.iter(|| {
                signal.reset();
                noise.reset();
                sample(black_box(times), &mut signal, Some(&mut noise)).unwrap()
            });
        });
    }
    group.finish();
}

fn bench_time_sampler(c: &mut Criterion) {
    let mut sampler = TimeSampler::seeded(0.0, 1_000.0, 7).unwrap();
    c.bench_function("irregular_100k_keep_60", |b| {
        b.iter(|| {
            sampler
                .sample_time(Some(100_000), None, 60, SamplingMode::Irregular)
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_dispatch, bench_time_sampler);
criterion_main!(benches);
