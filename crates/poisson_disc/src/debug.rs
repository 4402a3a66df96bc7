//! Debug helpers that visualize grid occupancy.
//!
//! These synthesize stand-in points for empty cells so a renderer can show
//! where the sampler left gaps. They never touch the sampling state.
use glam::Vec2;
use rand::Rng;

use crate::bounds::Bounds;
use crate::grid::SpatialGrid;
use crate::random::random_below;

/// Where the stand-in point is placed inside an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFill {
    /// Geometric center of the cell.
    Center,
    /// Random whole-unit offset inside the cell.
    Random,
}

/// Size of one cell when the canvas is divided evenly among the grid's cells.
///
/// Slightly smaller than [`SpatialGrid::cell_size`] whenever the canvas is not
/// an exact multiple of it.
pub fn cell_footprint(grid: &SpatialGrid, bounds: Bounds) -> Vec2 {
    Vec2::new(
        bounds.width / grid.grid_width() as f32,
        bounds.height / grid.grid_height() as f32,
    )
}

/// Returns one point per unoccupied cell, in row-major cell order.
pub fn fill_empty_cells(
    grid: &SpatialGrid,
    bounds: Bounds,
    fill: CellFill,
    rng: &mut dyn Rng,
) -> Vec<Vec2> {
    let footprint = cell_footprint(grid, bounds);
    let mut out = Vec::with_capacity(grid.len() - grid.occupied_count());

    for (index, cell) in grid.cells().iter().enumerate() {
        if cell.is_some() {
            continue;
        }
        let (col, row) = grid.cell_coords(index);
        let origin = Vec2::new(col as f32, row as f32) * footprint;
        let offset = match fill {
            CellFill::Center => footprint * 0.5,
            CellFill::Random => Vec2::new(
                random_below(rng, footprint.x).floor(),
                random_below(rng, footprint.y).floor(),
            ),
        };
        out.push(origin + offset);
    }

    out
}
