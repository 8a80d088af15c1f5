//! Paddle and ball simulation for pong3d
//!
//! This crate provides:
//! - Bodies that move linearly by velocity
//! - A single axis-aligned bounce boundary
//! - The pong world with its per-tick update
//! - A fixed timestep accumulator for decoupling simulation from frame rate

pub mod body;
pub mod boundary;
pub mod timestep;
pub mod world;

// Re-export commonly used types
pub use body::Body;
pub use boundary::{Axis, Boundary};
pub use timestep::{FixedTimestep, DEFAULT_MAX_FRAME_TIME, DEFAULT_MAX_STEPS, DEFAULT_TIMESTEP};
pub use world::{PongWorld, Side, DEFAULT_BOUNCE_LIMIT};
