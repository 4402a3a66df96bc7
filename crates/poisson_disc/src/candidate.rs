//! Candidate generation around a frontier base.
use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::bounds::Bounds;
use crate::config::SamplerConfig;
use crate::grid::SpatialGrid;
use crate::random::random_range;

/// Draws annulus candidates around a base point and validates them.
#[derive(Debug, Clone, Copy)]
pub struct CandidateGenerator {
    /// Canvas the candidate must fall inside.
    pub bounds: Bounds,
    /// Minimum distance to every accepted point; also the inner annulus radius.
    pub min_distance: f32,
    /// Attempts before giving up on a base.
    pub sample_limit: usize,
}

impl CandidateGenerator {
    pub fn new(bounds: Bounds, min_distance: f32, sample_limit: usize) -> Self {
        Self {
            bounds,
            min_distance,
            sample_limit,
        }
    }

    pub fn for_config(config: &SamplerConfig) -> Self {
        Self::new(config.bounds(), config.min_distance, config.sample_limit)
    }

    /// Returns the first acceptable candidate around `base`, if any.
    pub fn propose(
        &self,
        base: Vec2,
        grid: &SpatialGrid,
        points: &[Vec2],
        rng: &mut dyn Rng,
    ) -> Option<Vec2> {
        self.propose_counted(base, grid, points, rng).0
    }

    /// Like [`Self::propose`], also reporting how many candidates were drawn.
    pub fn propose_counted(
        &self,
        base: Vec2,
        grid: &SpatialGrid,
        points: &[Vec2],
        rng: &mut dyn Rng,
    ) -> (Option<Vec2>, usize) {
        for attempt in 1..=self.sample_limit {
            let candidate = self.draw(base, rng);
            if self.accepts(candidate, grid, points) {
                return (Some(candidate), attempt);
            }
        }

        (None, self.sample_limit)
    }

    /// Uniform angle in [0, 2pi), uniform radius in [r, 2r).
    #[inline]
    fn draw(&self, base: Vec2, rng: &mut dyn Rng) -> Vec2 {
        let angle = random_range(rng, 0.0, TAU);
        let radius = random_range(rng, self.min_distance, 2.0 * self.min_distance);
        base + radius * Vec2::from_angle(angle)
    }

    #[inline]
    fn accepts(&self, candidate: Vec2, grid: &SpatialGrid, points: &[Vec2]) -> bool {
        self.bounds.contains(candidate)
            && grid.is_far_from_all(candidate, self.min_distance, points, None)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::grid::PointId;
    use crate::random::tests::FixedRng;

    fn setup(base: Vec2) -> (SpatialGrid, Vec<Vec2>, CandidateGenerator) {
        let config = SamplerConfig::new(100.0, 100.0, 5.0);
        let mut grid = SpatialGrid::for_config(&config);
        let points = vec![base];
        grid.insert(base, PointId(0));
        (grid, points, CandidateGenerator::for_config(&config))
    }

    #[test]
    fn accepted_candidate_lies_in_annulus() {
        let base = Vec2::new(50.0, 50.0);
        let (grid, points, generator) = setup(base);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let candidate = generator
                .propose(base, &grid, &points, &mut rng)
                .expect("open canvas always accepts");
            let d = candidate.distance(base);
            assert!(d > 5.0 && d < 10.0 + 1e-4, "distance {d}");
            assert!(generator.bounds.contains(candidate));
        }
    }

    #[test]
    fn zero_draws_place_candidate_on_positive_x_axis() {
        let base = Vec2::new(50.0, 50.0);
        let config = SamplerConfig::new(100.0, 100.0, 5.0);
        let grid = SpatialGrid::for_config(&config);
        let generator = CandidateGenerator::for_config(&config);
        let mut rng = FixedRng { value: 0 };

        let (candidate, attempts) = generator.propose_counted(base, &grid, &[], &mut rng);
        assert_eq!(candidate, Some(Vec2::new(55.0, 50.0)));
        assert_eq!(attempts, 1);
    }

    #[test]
    fn out_of_bounds_candidates_exhaust_the_limit() {
        // Angle 0 with radius r always lands at base.x + r, past the right edge.
        let base = Vec2::new(97.0, 50.0);
        let config = SamplerConfig::new(100.0, 100.0, 5.0).with_sample_limit(4);
        let grid = SpatialGrid::for_config(&config);
        let generator = CandidateGenerator::for_config(&config);
        let mut rng = FixedRng { value: 0 };

        let (candidate, attempts) = generator.propose_counted(base, &grid, &[], &mut rng);
        assert!(candidate.is_none());
        assert_eq!(attempts, 4);
    }

    #[test]
    fn crowded_neighborhood_yields_none() {
        let base = Vec2::new(50.0, 50.0);
        let (mut grid, mut points, generator) = setup(base);
        // Nine blockers 40 degrees apart: more than one cell diagonal from each
        // other, yet every annulus point is within r of one of them.
        for i in 0..9 {
            let p = base + 7.5 * Vec2::from_angle(i as f32 * TAU / 9.0);
            let id = PointId(points.len());
            points.push(p);
            grid.insert(p, id);
        }
        let mut rng = StdRng::seed_from_u64(3);
        assert!(generator.propose(base, &grid, &points, &mut rng).is_none());
    }
}
