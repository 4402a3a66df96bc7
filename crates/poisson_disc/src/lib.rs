#![forbid(unsafe_code)]
//! poisson_disc: blue-noise point sets via grid-accelerated Poisson-disc sampling.
//!
//! Modules:
//! - sampler: the driver that seeds, grows, and drains the frontier
//! - grid, frontier, candidate: the spatial grid, active list, and annulus candidate generator
//! - config, error: run configuration with validation and the crate error type
//! - events: observation hooks for individual runs
//! - sampling: the object-safe [`sampling::PositionSampling`] seam
//! - debug: stand-in points for empty grid cells
//!
//! For examples, see the `poisson_disc_examples` crate.
pub mod bounds;
pub mod candidate;
pub mod config;
pub mod debug;
pub mod error;
pub mod events;
pub mod frontier;
pub mod grid;
pub mod random;
pub mod sampler;
pub mod sampling;

/// Convenient re-exports for common types. Import with `use poisson_disc::prelude::*;`.
pub mod prelude {
    pub use crate::bounds::Bounds;
    pub use crate::candidate::CandidateGenerator;
    pub use crate::config::{
        SamplerConfig, DEFAULT_DIMENSION, DEFAULT_SAMPLE_LIMIT, MAX_EXACT_DIMENSION,
    };
    pub use crate::debug::{cell_footprint, fill_empty_cells, CellFill};
    pub use crate::error::{Error, Result};
    pub use crate::events::{
        EventSink, FnSink, SamplerEvent, SamplerEventKind, VecSink,
    };
    pub use crate::frontier::Frontier;
    pub use crate::grid::{PointId, SpatialGrid};
    pub use crate::sampler::{generate, PoissonDiscSampler, SampleRun, SampleStats};
    pub use crate::sampling::{PoissonDiscSampling, PositionSampling};
}
