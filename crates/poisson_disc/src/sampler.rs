//! Poisson-disc driver: seeds the grid, grows the frontier, and collects output.
use glam::Vec2;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::candidate::CandidateGenerator;
use crate::config::SamplerConfig;
use crate::error::Result;
use crate::events::{EventSink, SamplerEvent, SamplerEventKind};
use crate::frontier::Frontier;
use crate::grid::{PointId, SpatialGrid};
use crate::random::random_below;

/// Counters collected over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleStats {
    /// Accepted points, seed included.
    pub points: usize,
    /// Frontier picks, one per accepted candidate or retired base.
    pub iterations: usize,
    /// Candidates drawn across all picks.
    pub candidates_tried: usize,
    /// Candidates that failed the bounds or distance check.
    pub candidates_rejected: usize,
    /// Bases removed from the frontier after exhausting their attempts.
    pub bases_retired: usize,
}

/// Output of a run together with the final grid state.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct SampleRun {
    /// Accepted points in acceptance order, seed first.
    pub points: Vec<Vec2>,
    /// Occupancy grid; handles index into `points`.
    pub grid: SpatialGrid,
    /// Counters for the run.
    pub stats: SampleStats,
}

/// Bridson-style Poisson-disc sampler over a `[0, width) x [0, height)` canvas.
///
/// The sampler itself is immutable; every call allocates fresh grid, frontier
/// and output state, so independent calls may run concurrently.
#[derive(Debug, Clone)]
pub struct PoissonDiscSampler {
    config: SamplerConfig,
}

impl PoissonDiscSampler {
    pub fn try_new(config: SamplerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates a sampler without validating `config`.
    ///
    /// Only debug builds assert on bad input. In release builds a non-positive
    /// `min_distance` never rejects a candidate and the run does not
    /// terminate; use [`Self::try_new`] for untrusted configurations.
    pub fn new(config: SamplerConfig) -> Self {
        debug_assert!(
            config.width > 0.0 && config.height > 0.0,
            "width and height must be > 0"
        );
        debug_assert!(config.min_distance > 0.0, "min_distance must be > 0");
        debug_assert!(config.sample_limit > 0, "sample_limit must be > 0");
        debug_assert!(config.dimension > 0, "dimension must be >= 1");

        Self { config }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Runs to completion and returns the accepted points, seed first.
    pub fn generate(&self, rng: &mut impl Rng) -> Vec<Vec2> {
        self.run(rng).points
    }

    /// Runs to completion, returning points, grid, and counters.
    pub fn run(&self, rng: &mut impl Rng) -> SampleRun {
        self.run_with_events(rng, &mut ())
    }

    pub fn run_with_events(&self, rng: &mut impl Rng, sink: &mut dyn EventSink) -> SampleRun {
        run_internal(&self.config, rng, sink)
    }
}

/// Generates a point set for the given canvas with the default dimension.
pub fn generate(
    width: f32,
    height: f32,
    min_distance: f32,
    sample_limit: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Vec2>> {
    let config = SamplerConfig::new(width, height, min_distance).with_sample_limit(sample_limit);
    let sampler = PoissonDiscSampler::try_new(config)?;
    Ok(sampler.generate(rng))
}

/// Seed point: the configured one, or a uniform draw floored to whole units.
fn seed_point(config: &SamplerConfig, rng: &mut dyn Rng) -> Vec2 {
    if let Some(seed) = config.seed_point {
        return seed;
    }
    let x = random_below(rng, config.width).floor();
    let y = random_below(rng, config.height).floor();
    Vec2::new(x, y)
}

pub(crate) fn run_internal(
    config: &SamplerConfig,
    rng: &mut dyn Rng,
    sink: &mut dyn EventSink,
) -> SampleRun {
    let bounds = config.bounds();
    let generator = CandidateGenerator::for_config(config);
    let mut grid = SpatialGrid::for_config(config);
    let mut frontier = Frontier::new();
    let mut points: Vec<Vec2> = Vec::new();
    let mut stats = SampleStats::default();

    debug!(
        "Poisson-disc run: {}x{} canvas, r = {}, k = {}, grid {}x{} (cell {}).",
        config.width,
        config.height,
        config.min_distance,
        config.sample_limit,
        grid.grid_width(),
        grid.grid_height(),
        grid.cell_size(),
    );
    if config.min_distance >= bounds.diagonal() {
        warn!(
            "min_distance {} is not smaller than the canvas diagonal {}; only the seed can be placed.",
            config.min_distance,
            bounds.diagonal()
        );
    }
    if !config.grid_is_exact() {
        warn!(
            "dimension {} makes the grid check inexact; some points may be closer than {}.",
            config.dimension, config.min_distance
        );
    }
    if sink.wants(SamplerEventKind::RunStarted) {
        sink.send(SamplerEvent::RunStarted {
            config: config.clone(),
            grid_width: grid.grid_width(),
            grid_height: grid.grid_height(),
        });
    }

    let seed = seed_point(config, rng);
    let seed_id = PointId(0);
    points.push(seed);
    grid.insert(seed, seed_id);
    frontier.push(seed_id);
    if sink.wants(SamplerEventKind::SeedPlaced) {
        sink.send(SamplerEvent::SeedPlaced {
            id: seed_id,
            point: seed,
        });
    }

    while let Some((slot, base_id)) = frontier.pick(rng) {
        stats.iterations += 1;
        let base = points[base_id.index()];
        let (candidate, attempts) = generator.propose_counted(base, &grid, &points, rng);
        stats.candidates_tried += attempts;

        match candidate {
            Some(point) => {
                stats.candidates_rejected += attempts - 1;
                let id = PointId(points.len());
                points.push(point);
                grid.insert(point, id);
                frontier.push(id);
                if sink.wants(SamplerEventKind::CandidateAccepted) {
                    sink.send(SamplerEvent::CandidateAccepted {
                        id,
                        base: base_id,
                        point,
                        attempts,
                    });
                }
            }
            None => {
                stats.candidates_rejected += attempts;
                stats.bases_retired += 1;
                frontier.retire(slot);
                if sink.wants(SamplerEventKind::BaseRetired) {
                    sink.send(SamplerEvent::BaseRetired {
                        id: base_id,
                        remaining: frontier.len(),
                    });
                }
            }
        }
    }

    stats.points = points.len();
    info!(
        "Poisson-disc run finished: {} points | {} iterations | {} candidates ({} rejected).",
        stats.points, stats.iterations, stats.candidates_tried, stats.candidates_rejected,
    );
    if sink.wants(SamplerEventKind::RunFinished) {
        sink.send(SamplerEvent::RunFinished { stats });
    }

    SampleRun {
        points,
        grid,
        stats,
    }
}
