//! Rendering for the pong3d demo
//!
//! This crate wires a winit window to wgpu and draws coloured cuboids.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`shader`] - Loading WGSL stages from disk and compiling them
//! - [`pipeline::ScenePipeline`] - Depth-tested pipeline drawing [`mesh::Mesh`]es
//! - [`geometry::cuboid`] - Interleaved position + color cuboid vertices
//! - [`camera::Camera`] - Fixed look-at camera with perspective projection

pub mod camera;
pub mod context;
pub mod geometry;
pub mod mesh;
pub mod pipeline;
pub mod shader;

pub use camera::Camera;
pub use context::{ContextError, RenderContext};
pub use geometry::{cuboid, FaceColors};
pub use mesh::Mesh;
pub use pipeline::{CameraUniforms, ColorVertex, ModelBinding, ModelUniforms, ScenePipeline};
pub use shader::{ShaderError, ShaderStage};
