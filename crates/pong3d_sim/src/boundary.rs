//! Axis-aligned bounce boundary

use serde::{Deserialize, Serialize};

use crate::body::Body;

/// World axis a boundary is measured along
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// A hard-coded threshold on one axis
///
/// A positive `limit` is an upper wall, a negative one a lower wall. A body
/// that has reached the wall while still moving toward it has that velocity
/// component reversed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    pub axis: Axis,
    pub limit: f32,
}

impl Boundary {
    pub fn new(axis: Axis, limit: f32) -> Self {
        Self { axis, limit }
    }

    /// Check whether `body` has crossed the wall
    pub fn is_crossed(&self, body: &Body) -> bool {
        let (pos, vel) = self.components(body);
        if self.limit >= 0.0 {
            pos >= self.limit && vel > 0.0
        } else {
            pos <= self.limit && vel < 0.0
        }
    }

    /// Reverse the body's velocity on this axis if it crossed the wall
    ///
    /// Returns true if the velocity was flipped.
    pub fn reflect(&self, body: &mut Body) -> bool {
        if !self.is_crossed(body) {
            return false;
        }
        match self.axis {
            Axis::X => body.velocity.x = -body.velocity.x,
            Axis::Y => body.velocity.y = -body.velocity.y,
        }
        true
    }

    fn components(&self, body: &Body) -> (f32, f32) {
        match self.axis {
            Axis::X => (body.position.x, body.velocity.x),
            Axis::Y => (body.position.y, body.velocity.y),
        }
    }
}
