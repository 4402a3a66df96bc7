//! Uniform background grid used to accelerate neighbor queries.
//!
//! Cells are `min_distance / sqrt(dimension)` wide, so at most one accepted
//! point can ever fall into a cell and every point within `min_distance` of a
//! candidate lies inside the 5x5 window around the candidate's cell.
use glam::Vec2;

use crate::bounds::Bounds;
use crate::config::SamplerConfig;

/// Cells scanned on each side of the candidate's cell.
pub const SEARCH_RADIUS: isize = 2;

/// Stable handle to an accepted point: its index in the output sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub usize);

impl PointId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Fixed-size occupancy grid covering the whole canvas.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cell_size: f32,
    grid_width: usize,
    grid_height: usize,
    cells: Vec<Option<PointId>>,
}

impl SpatialGrid {
    /// Allocates an empty grid with `ceil(extent / cell_size)` cells per axis.
    ///
    /// # Panics
    ///
    /// If the cell array cannot be addressed; see [`Self::dimensions_for`].
    /// [`SamplerConfig::validate`] rejects such configurations up front.
    pub fn new(bounds: Bounds, cell_size: f32) -> Self {
        debug_assert!(cell_size > 0.0);
        let (grid_width, grid_height, len) = Self::dimensions_for(bounds, cell_size)
            .expect("grid cell count overflows the address space");

        Self {
            cell_size,
            grid_width,
            grid_height,
            cells: vec![None; len],
        }
    }

    /// Columns, rows and total cells needed to cover `bounds`.
    ///
    /// `None` when the cell count or its byte size overflows.
    pub fn dimensions_for(bounds: Bounds, cell_size: f32) -> Option<(usize, usize, usize)> {
        let grid_width = ((bounds.width / cell_size).ceil() as usize).max(1);
        let grid_height = ((bounds.height / cell_size).ceil() as usize).max(1);
        let len = grid_width.checked_mul(grid_height)?;
        len.checked_mul(std::mem::size_of::<Option<PointId>>())
            .filter(|bytes| *bytes <= isize::MAX as usize)?;
        Some((grid_width, grid_height, len))
    }

    pub fn for_config(config: &SamplerConfig) -> Self {
        Self::new(config.bounds(), config.cell_size())
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn grid_width(&self) -> usize {
        self.grid_width
    }

    pub fn grid_height(&self) -> usize {
        self.grid_height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Raw occupancy, row-major.
    pub fn cells(&self) -> &[Option<PointId>] {
        &self.cells
    }

    pub fn occupant(&self, index: usize) -> Option<PointId> {
        self.cells.get(index).copied().flatten()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Column and row of a cell index.
    #[inline]
    pub fn cell_coords(&self, index: usize) -> (usize, usize) {
        (index % self.grid_width, index / self.grid_width)
    }

    /// Column and row containing `point`.
    ///
    /// Clamped to the last column/row so points just below the upper canvas
    /// edge never map past the grid through float rounding.
    #[inline]
    pub fn cell_of(&self, point: Vec2) -> (usize, usize) {
        let x = ((point.x / self.cell_size).floor() as isize)
            .clamp(0, self.grid_width as isize - 1) as usize;
        let y = ((point.y / self.cell_size).floor() as isize)
            .clamp(0, self.grid_height as isize - 1) as usize;
        (x, y)
    }

    /// Row-major cell index containing `point`.
    #[inline]
    pub fn cell_index_of(&self, point: Vec2) -> usize {
        let (x, y) = self.cell_of(point);
        y * self.grid_width + x
    }

    /// Records `id` as the occupant of the cell containing `point`.
    ///
    /// Any previous occupant is overwritten.
    pub fn insert(&mut self, point: Vec2, id: PointId) {
        let idx = self.cell_index_of(point);
        self.cells[idx] = Some(id);
    }

    /// Returns false if any occupant in the 5x5 window around `candidate` other
    /// than `skip` lies within `min_distance` (inclusive).
    ///
    /// Window cells with a negative column or row are skipped, as are those past
    /// the last column or row.
    pub fn is_far_from_all(
        &self,
        candidate: Vec2,
        min_distance: f32,
        points: &[Vec2],
        skip: Option<PointId>,
    ) -> bool {
        let (cx, cy) = self.cell_of(candidate);
        let (cx, cy) = (cx as isize, cy as isize);

        for dy in -SEARCH_RADIUS..=SEARCH_RADIUS {
            let y = cy + dy;
            if y < 0 || y >= self.grid_height as isize {
                continue;
            }
            for dx in -SEARCH_RADIUS..=SEARCH_RADIUS {
                let x = cx + dx;
                if x < 0 || x >= self.grid_width as isize {
                    continue;
                }

                let idx = y as usize * self.grid_width + x as usize;
                let Some(id) = self.cells[idx] else {
                    continue;
                };
                if Some(id) == skip {
                    continue;
                }
                if candidate.distance(points[id.index()]) <= min_distance {
                    return false;
                }
            }
        }

        true
    }
}
