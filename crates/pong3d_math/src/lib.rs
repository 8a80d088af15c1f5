//! Small math library for the pong3d demo
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector for body positions and velocities
//! - [`Mat4`] - column-major 4x4 matrix for model, view and projection transforms

mod vec2;
pub mod mat4;

pub use vec2::Vec2;
pub use mat4::Mat4;
