//! The pong world and its per-tick update

use crate::body::Body;
use crate::boundary::{Axis, Boundary};
use pong3d_math::Vec2;

/// Y coordinate at which the left paddle turns around
pub const DEFAULT_BOUNCE_LIMIT: f32 = 0.7;

/// Which paddle an action refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Two paddles and a ball
///
/// Only the left paddle is checked against the boundary; the right paddle
/// and the ball move freely.
#[derive(Clone, Debug)]
pub struct PongWorld {
    pub left_paddle: Body,
    pub right_paddle: Body,
    pub ball: Body,
    pub boundary: Boundary,
    ticks: u64,
}

impl Default for PongWorld {
    fn default() -> Self {
        Self::new(
            Body::new(Vec2::new(-0.9, 0.0)).with_velocity(Vec2::new(0.0, 0.3)),
            Body::new(Vec2::new(0.9, 0.0)).with_velocity(Vec2::new(0.0, -0.3)),
            Body::new(Vec2::ZERO).with_velocity(Vec2::new(-0.4, 0.3)),
            Boundary::new(Axis::Y, DEFAULT_BOUNCE_LIMIT),
        )
    }
}

impl PongWorld {
    pub fn new(left_paddle: Body, right_paddle: Body, ball: Body, boundary: Boundary) -> Self {
        Self {
            left_paddle,
            right_paddle,
            ball,
            boundary,
            ticks: 0,
        }
    }

    /// Advance the simulation by one tick of `dt` seconds
    ///
    /// 1. Integrate every body's velocity into its position
    /// 2. Reflect the left paddle off the boundary
    pub fn step(&mut self, dt: f32) {
        self.left_paddle.advance(dt);
        self.right_paddle.advance(dt);
        self.ball.advance(dt);

        if self.boundary.reflect(&mut self.left_paddle) {
            log::debug!(
                "Left paddle bounced at {:.3} (tick {})",
                self.left_paddle.position.y,
                self.ticks
            );
        }

        self.ticks += 1;
    }

    /// Reverse the vertical velocity of a paddle
    pub fn flip_paddle(&mut self, side: Side) {
        let paddle = self.paddle_mut(side);
        paddle.velocity.y = -paddle.velocity.y;
    }

    /// Get a paddle by side
    pub fn paddle(&self, side: Side) -> &Body {
        match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        }
    }

    fn paddle_mut(&mut self, side: Side) -> &mut Body {
        match side {
            Side::Left => &mut self.left_paddle,
            Side::Right => &mut self.right_paddle,
        }
    }

    /// Number of ticks simulated so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
