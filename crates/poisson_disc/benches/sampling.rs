mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use poisson_disc::config::SamplerConfig;
use poisson_disc::sampler::PoissonDiscSampler;
use poisson_disc::sampling::{PoissonDiscSampling, PositionSampling};
use rand::rngs::StdRng;
use rand::SeedableRng;

const MIN_DISTANCES: [f32; 5] = [30.0, 15.0, 8.0, 4.0, 2.0];
const SAMPLE_LIMITS: [usize; 4] = [5, 10, 30, 60];

fn sampling_min_distance_benches(c: &mut Criterion) {
    let (width, height) = common::CANVAS;
    let mut group = c.benchmark_group("sampling/poisson_disc/min_distance");

    for &r in &MIN_DISTANCES {
        let sampler = PoissonDiscSampler::new(SamplerConfig::new(width, height, r));
        let mut rng_est = StdRng::seed_from_u64(0xBEEF_u64 ^ (r as u64));
        let expected = sampler.generate(&mut rng_est).len();
        group.throughput(common::points_throughput(expected));

        let mut rng = StdRng::seed_from_u64(0xC0FFEE_u64 ^ (r as u64));
        group.bench_with_input(BenchmarkId::from_parameter(r), &r, |b, _| {
            b.iter(|| {
                let pts = sampler.generate(&mut rng);
                black_box(pts.len());
            });
        });
    }

    group.finish();
}

fn sampling_sample_limit_benches(c: &mut Criterion) {
    let (width, height) = common::CANVAS;
    let mut group = c.benchmark_group("sampling/poisson_disc/sample_limit");

    for &k in &SAMPLE_LIMITS {
        let strategy = PoissonDiscSampling::new(8.0).with_sample_limit(k);
        let extent = Vec2::new(width, height);
        let mut rng_est = StdRng::seed_from_u64(0xA11CE_u64 ^ k as u64);
        let expected = strategy.generate(extent.into(), &mut rng_est).len();
        group.throughput(common::points_throughput(expected));

        let mut rng = StdRng::seed_from_u64(0xE57_u64 ^ k as u64);
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, _| {
            b.iter(|| {
                let pts = strategy.generate(extent.into(), &mut rng);
                black_box(pts.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = sampling_min_distance_benches, sampling_sample_limit_benches
}
criterion_main!(benches);
