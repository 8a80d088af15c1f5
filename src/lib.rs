//! pong3d - two paddles and a ball drawn as shaded cuboids
//!
//! The binary in `main.rs` drives these modules from the winit event loop.

pub mod config;
pub mod input;
pub mod systems;
