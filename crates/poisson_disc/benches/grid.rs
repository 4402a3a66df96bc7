mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use poisson_disc::config::SamplerConfig;
use poisson_disc::grid::SpatialGrid;
use poisson_disc::sampler::PoissonDiscSampler;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn grid_neighbor_query_benches(c: &mut Criterion) {
    let (width, height) = common::CANVAS;
    let config = SamplerConfig::new(width, height, 15.0);
    let mut rng = StdRng::seed_from_u64(7);
    let run = PoissonDiscSampler::new(config.clone()).run(&mut rng);
    let probes = PoissonDiscSampler::new(config.clone()).generate(&mut rng);

    let mut group = c.benchmark_group("grid/is_far_from_all");
    group.throughput(common::points_throughput(probes.len()));
    group.bench_function("saturated_canvas", |b| {
        b.iter(|| {
            let far = probes
                .iter()
                .filter(|p| {
                    run.grid
                        .is_far_from_all(**p, config.min_distance, &run.points, None)
                })
                .count();
            black_box(far);
        });
    });
    group.finish();

    let mut group = c.benchmark_group("grid/insert");
    group.throughput(common::points_throughput(run.points.len()));
    group.bench_function("fill_from_run", |b| {
        b.iter(|| {
            let mut grid = SpatialGrid::for_config(&config);
            for (i, p) in run.points.iter().enumerate() {
                grid.insert(*p, poisson_disc::grid::PointId(i));
            }
            black_box(grid.occupied_count());
        });
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = grid_neighbor_query_benches
}
criterion_main!(benches);
