use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        }],
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: [x, y, z],
        }
    }
}

/// Top, right and left corners of the demo triangle, in model space.
pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex::new(0.0, 1.0, 0.0),
    Vertex::new(1.0, 0.0, 0.0),
    Vertex::new(-1.0, 0.0, 0.0),
];

/// Uploads `vertices` into a static vertex buffer.
pub fn create_vbo(device: &wgpu::Device, vertices: &[Vertex]) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Vertex Buffer"),
        contents: bytemuck::cast_slice(vertices),
        usage: wgpu::BufferUsages::VERTEX,
    })
}

/// A non-indexed vertex buffer.
pub struct Mesh {
    pub vertex_buffer: wgpu::Buffer,
    pub vertex_count: u32,
}

impl Mesh {
    pub fn from_vertices(device: &wgpu::Device, vertices: &[Vertex]) -> Self {
        Self {
            vertex_buffer: create_vbo(device, vertices),
            vertex_count: vertices.len() as u32,
        }
    }

    pub fn triangle(device: &wgpu::Device) -> Self {
        Self::from_vertices(device, &TRIANGLE_VERTICES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_three_packed_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), 12);
        assert_eq!(Vertex::LAYOUT.array_stride, 12);
        assert_eq!(Vertex::LAYOUT.attributes.len(), 1);
    }

    #[test]
    fn triangle_bytes_match_flat_positions() {
        let flat: [f32; 9] = [0.0, 1.0, 0.0, 1.0, 0.0, 0.0, -1.0, 0.0, 0.0];
        let bytes: &[u8] = bytemuck::cast_slice(&TRIANGLE_VERTICES[..]);
        assert_eq!(bytes, bytemuck::cast_slice::<f32, u8>(&flat));
    }
}
