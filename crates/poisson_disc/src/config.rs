//! Sampler configuration and validation.
use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::error::{Error, Result};
use crate::grid::SpatialGrid;

/// Default number of candidate attempts per frontier base (`k`).
pub const DEFAULT_SAMPLE_LIMIT: usize = 30;

/// Default sample dimension used in the cell size formula.
pub const DEFAULT_DIMENSION: u32 = 2;

/// Largest dimension for which the 5x5 neighbor window still reaches every
/// point within `min_distance`.
pub const MAX_EXACT_DIMENSION: u32 = 4;

/// Configuration for a single Poisson-disc run.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SamplerConfig {
    /// Canvas extent along X.
    pub width: f32,
    /// Canvas extent along Y.
    pub height: f32,
    /// Minimum distance `r` between any two accepted points.
    pub min_distance: f32,
    /// Candidate attempts per base before it leaves the frontier (`k`).
    pub sample_limit: usize,
    /// Dimension `n`; only affects `cell_size = r / sqrt(n)`.
    pub dimension: u32,
    /// Fixed seed point. When `None`, the seed is drawn from the random source.
    pub seed_point: Option<Vec2>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            min_distance: 0.0,
            sample_limit: DEFAULT_SAMPLE_LIMIT,
            dimension: DEFAULT_DIMENSION,
            seed_point: None,
        }
    }
}

impl SamplerConfig {
    /// Creates a new [`SamplerConfig`] for the given canvas and minimum distance.
    pub fn new(width: f32, height: f32, min_distance: f32) -> Self {
        Self {
            width,
            height,
            min_distance,
            ..Default::default()
        }
    }

    /// Sets the per-base candidate limit.
    pub fn with_sample_limit(mut self, sample_limit: usize) -> Self {
        self.sample_limit = sample_limit;
        self
    }

    /// Sets the dimension used for the cell size.
    pub fn with_dimension(mut self, dimension: u32) -> Self {
        self.dimension = dimension;
        self
    }

    /// Pins the seed point instead of drawing it at random.
    pub fn with_seed_point(mut self, seed_point: Vec2) -> Self {
        self.seed_point = Some(seed_point);
        self
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    /// Edge length of one grid cell, `min_distance / sqrt(dimension)`.
    pub fn cell_size(&self) -> f32 {
        self.min_distance / (self.dimension as f32).sqrt()
    }

    /// Whether the grid check is exact for this dimension.
    ///
    /// With `dimension == 1` two points farther than `min_distance` apart can
    /// share a cell, and the later one replaces the earlier in the grid. Above
    /// [`MAX_EXACT_DIMENSION`] close neighbors can sit outside the 5x5 window.
    /// Either way some output pairs may end up closer than `min_distance`.
    pub fn grid_is_exact(&self) -> bool {
        (2..=MAX_EXACT_DIMENSION).contains(&self.dimension)
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(Error::InvalidConfig(
                "width and height must be finite and > 0".into(),
            ));
        }
        if !self.min_distance.is_finite() || self.min_distance <= 0.0 {
            return Err(Error::InvalidConfig(
                "min_distance must be finite and > 0".into(),
            ));
        }
        if self.sample_limit == 0 {
            return Err(Error::InvalidConfig("sample_limit must be > 0".into()));
        }
        if self.dimension == 0 {
            return Err(Error::InvalidConfig("dimension must be >= 1".into()));
        }
        if SpatialGrid::dimensions_for(self.bounds(), self.cell_size()).is_none() {
            return Err(Error::InvalidConfig(format!(
                "a {}x{} canvas with min_distance {} needs more grid cells than can be allocated",
                self.width, self.height, self.min_distance
            )));
        }
        if let Some(seed) = self.seed_point {
            if !self.bounds().contains(seed) {
                return Err(Error::InvalidConfig(format!(
                    "seed_point ({}, {}) lies outside the canvas",
                    seed.x, seed.y
                )));
            }
        }

        Ok(())
    }
}
