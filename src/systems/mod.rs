//! Application systems
//!
//! The per-frame work split into window, simulation and render pieces.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem, SetupError};
pub use simulation::SimulationSystem;
pub use window::{WindowError, WindowSystem};
