//! Object-safe sampling seam for callers that swap point distributions.
//!
//! [`PositionSampling`] takes and returns `mint` vectors so consumers are not
//! tied to `glam`.
use mint::Vector2;
use rand::Rng;
use tracing::warn;

use crate::config::{SamplerConfig, DEFAULT_SAMPLE_LIMIT};
use crate::sampler::run_internal;

/// Trait for position sampling over a `[0, x) x [0, y)` domain.
pub trait PositionSampling: Send + Sync {
    fn generate(&self, domain_extent: Vector2<f32>, rng: &mut dyn Rng) -> Vec<Vector2<f32>>;
}

/// Poisson-disc sampling strategy.
#[derive(Debug, Clone)]
pub struct PoissonDiscSampling {
    /// Minimum distance between samples in world units.
    pub radius: f32,
    /// Candidate attempts per active point.
    pub sample_limit: usize,
}

impl PoissonDiscSampling {
    /// Create a new PoissonDiscSampling with specified radius and the default limit.
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            sample_limit: DEFAULT_SAMPLE_LIMIT,
        }
    }

    pub fn with_sample_limit(mut self, sample_limit: usize) -> Self {
        self.sample_limit = sample_limit;
        self
    }
}

impl PositionSampling for PoissonDiscSampling {
    /// Returns an empty set when the radius, limit, or extent is invalid.
    fn generate(&self, domain_extent: Vector2<f32>, rng: &mut dyn Rng) -> Vec<Vector2<f32>> {
        let config = SamplerConfig::new(domain_extent.x, domain_extent.y, self.radius)
            .with_sample_limit(self.sample_limit);
        if let Err(e) = config.validate() {
            warn!("Skipping Poisson-disc sampling: {}.", e);
            return Vec::new();
        }

        run_internal(&config, rng, &mut ())
            .points
            .into_iter()
            .map(Into::into)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn trait_object_generates_spaced_points() {
        let strategy: Box<dyn PositionSampling> = Box::new(PoissonDiscSampling::new(0.3));
        let mut rng = StdRng::seed_from_u64(123);
        let points = strategy.generate(Vec2::new(4.0, 3.0).into(), &mut rng);

        assert!(points.len() > 1);
        for (i, a) in points.iter().enumerate() {
            assert!(a.x >= 0.0 && a.x < 4.0 && a.y >= 0.0 && a.y < 3.0);
            for b in &points[i + 1..] {
                assert!(Vec2::from(*a).distance(Vec2::from(*b)) >= 0.3);
            }
        }
    }

    #[test]
    fn invalid_parameters_return_no_points() {
        let mut rng = StdRng::seed_from_u64(1);
        let zero_radius = PoissonDiscSampling::new(0.0);
        assert!(zero_radius
            .generate(Vec2::new(1.0, 1.0).into(), &mut rng)
            .is_empty());

        let zero_limit = PoissonDiscSampling::new(0.1).with_sample_limit(0);
        assert!(zero_limit
            .generate(Vec2::new(1.0, 1.0).into(), &mut rng)
            .is_empty());

        let valid = PoissonDiscSampling::new(0.1);
        assert!(valid
            .generate(Vec2::new(-1.0, 1.0).into(), &mut rng)
            .is_empty());
    }
}
