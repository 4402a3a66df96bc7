//! Active list of points still eligible to spawn candidates.
use rand::Rng;

use crate::grid::PointId;
use crate::random::random_index;

/// Unordered set of active point handles.
///
/// Retiring a point only revokes its spawn eligibility; it stays in the grid.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    active: Vec<PointId>,
}

impl Frontier {
    pub fn new() -> Self {
        Self { active: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            active: Vec::with_capacity(cap),
        }
    }

    pub fn push(&mut self, id: PointId) {
        self.active.push(id);
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<PointId> {
        self.active.get(slot).copied()
    }

    pub fn as_slice(&self) -> &[PointId] {
        &self.active
    }

    /// Picks a uniformly random slot, returning it with its handle.
    pub fn pick(&self, rng: &mut dyn Rng) -> Option<(usize, PointId)> {
        if self.active.is_empty() {
            return None;
        }
        let slot = random_index(rng, self.active.len());
        Some((slot, self.active[slot]))
    }

    /// Removes the handle at `slot`. The order of the remaining entries may change.
    pub fn retire(&mut self, slot: usize) -> PointId {
        self.active.swap_remove(slot)
    }
}
