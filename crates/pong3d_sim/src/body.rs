//! Moving bodies (paddles and the ball)

use pong3d_math::Vec2;

/// A body moving linearly in the XY plane
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    /// Position in world units
    pub position: Vec2,
    /// Velocity in world units per second
    pub velocity: Vec2,
}

impl Body {
    /// Create a body at rest
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
        }
    }

    /// Set the velocity of this body
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Integrate velocity into position over `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
}
