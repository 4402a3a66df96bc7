//! Rectangular canvas bounds anchored at the origin.
use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Half-open canvas `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    /// Canvas extent along X.
    pub width: f32,
    /// Canvas extent along Y.
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns true if `point` lies inside the half-open canvas.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x < self.width && point.y >= 0.0 && point.y < self.height
    }

    /// Length of the canvas diagonal.
    pub fn diagonal(&self) -> f32 {
        self.extent().length()
    }

    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let bounds = Bounds::new(710.0, 400.0);
        assert!(bounds.contains(Vec2::ZERO));
        assert!(bounds.contains(Vec2::new(709.9, 399.9)));
        assert!(!bounds.contains(Vec2::new(710.0, 10.0)));
        assert!(!bounds.contains(Vec2::new(10.0, 400.0)));
        assert!(!bounds.contains(Vec2::new(-0.001, 10.0)));
        assert!(!bounds.contains(Vec2::new(10.0, -0.001)));
    }

    #[test]
    fn diagonal_matches_pythagoras() {
        let bounds = Bounds::new(3.0, 4.0);
        assert_eq!(bounds.diagonal(), 5.0);
        assert_eq!(bounds.extent(), Vec2::new(3.0, 4.0));
    }
}
