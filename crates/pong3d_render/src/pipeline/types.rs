//! GPU-compatible data types for the scene pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use pong3d_math::mat4::{self, Mat4};

/// Interleaved vertex: position then RGBA color
///
/// 7 floats, 28 bytes. Matches `VertexInput` in `shaders/vertex.wgsl`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    /// Position in model space (x, y, z)
    pub position: [f32; 3],
    /// RGBA color
    pub color: [f32; 4],
}

impl ColorVertex {
    pub const fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Camera uniforms shared by every draw (bind group 0)
/// Layout: 128 bytes total
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CameraUniforms {
    /// View matrix (64 bytes)
    pub view_matrix: Mat4,
    /// Projection matrix (64 bytes)
    pub projection_matrix: Mat4,
}

impl Default for CameraUniforms {
    fn default() -> Self {
        Self {
            view_matrix: mat4::IDENTITY,
            projection_matrix: mat4::IDENTITY,
        }
    }
}

/// Per-object uniforms (bind group 1)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ModelUniforms {
    pub model_matrix: Mat4,
}

impl Default for ModelUniforms {
    fn default() -> Self {
        Self {
            model_matrix: mat4::IDENTITY,
        }
    }
}

impl ModelUniforms {
    /// Uniforms placing an object at `translation`
    pub fn from_translation(translation: [f32; 3]) -> Self {
        Self {
            model_matrix: mat4::translation(translation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_color_vertex_size() {
        // 3 floats position + 4 floats color = 28 bytes
        assert_eq!(size_of::<ColorVertex>(), 28);
    }

    #[test]
    fn test_camera_uniforms_size() {
        assert_eq!(size_of::<CameraUniforms>(), 128);
    }

    #[test]
    fn test_model_uniforms_size() {
        assert_eq!(size_of::<ModelUniforms>(), 64);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<ColorVertex>(), 4);
        assert_eq!(std::mem::align_of::<CameraUniforms>(), 4);
        assert_eq!(std::mem::align_of::<ModelUniforms>(), 4);
    }

    #[test]
    fn test_vertex_bytes_are_interleaved() {
        let v = ColorVertex::new([1.0, 2.0, 3.0], [0.0, 1.0, 0.0, 1.0]);
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&v));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_model_from_translation() {
        let m = ModelUniforms::from_translation([0.9, -0.2, 0.0]);
        assert_eq!(m.model_matrix[3], [0.9, -0.2, 0.0, 1.0]);
    }
}
