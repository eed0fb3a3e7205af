//! Axis-aligned rectangular containment region.

use crate::float::Float;
use crate::vec::Vec2;

/// The simulation's containment rectangle, immutable during a run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Boundary<F: Float> {
    pub position: Vec2<F>,
    pub size: Vec2<F>,
}

impl<F: Float> Boundary<F> {
    pub fn new(position: Vec2<F>, size: Vec2<F>) -> Self {
        Boundary { position, size }
    }

    /// Lower-left corner.
    pub fn min(&self) -> Vec2<F> {
        self.position
    }

    /// Upper-right corner.
    pub fn max(&self) -> Vec2<F> {
        self.position + self.size
    }

    /// Whether a point lies inside the rectangle (inclusive edges).
    pub fn contains(&self, point: Vec2<F>) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}
