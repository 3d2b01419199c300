//! WebGPU Rendering module
//!
//! GPU context, shader compilation and linking, the triangle vertex buffer,
//! and the renderer that draws it with a single MVP uniform.

pub mod camera;
pub mod context;
pub mod mesh;
pub mod pipeline;
pub mod shader;
pub mod triangle;

#[cfg(test)]
mod test_gpu;

pub use camera::Camera;
pub use context::{create_depth_view, GpuContext, DEPTH_FORMAT};
pub use mesh::{create_vbo, Mesh, Vertex, TRIANGLE_VERTICES};
pub use pipeline::{link_program, Program, Uniforms};
pub use shader::{compile_shader, CompiledShader, ShaderSource, ShaderStage};
pub use triangle::TriangleRenderer;
