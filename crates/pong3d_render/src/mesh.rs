//! Static vertex buffers

use wgpu::util::DeviceExt;

use crate::pipeline::ColorVertex;

/// A vertex buffer uploaded once and drawn as a triangle list
pub struct Mesh {
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl Mesh {
    /// Upload `vertices` into a new vertex buffer
    pub fn upload(device: &wgpu::Device, label: &str, vertices: &[ColorVertex]) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        log::info!("Uploaded {} vertices for {}", vertices.len(), label);

        Self {
            buffer,
            vertex_count: vertices.len() as u32,
        }
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}
