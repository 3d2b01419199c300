use wgpu::util::DeviceExt;

use super::context::DEPTH_FORMAT;
use super::mesh::Mesh;
use super::pipeline::{link_program, Program, Uniforms};
use super::shader::{compile_shader, ShaderSource};
use crate::error::Result;
use crate::math::Matrix4;

/// Draws a single triangle with one MVP uniform.
pub struct TriangleRenderer {
    program: Program,
    mesh: Mesh,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    pub clear_color: wgpu::Color,
}

impl TriangleRenderer {
    /// Builds the renderer from the bundled shaders for a `color_format` target.
    pub async fn new(device: &wgpu::Device, color_format: wgpu::TextureFormat) -> Result<Self> {
        Self::with_shaders(
            device,
            color_format,
            &ShaderSource::default_vertex(),
            &ShaderSource::default_fragment(),
        )
        .await
    }

    /// Compiles and links caller-supplied shader text.
    pub async fn with_shaders(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        vertex: &ShaderSource,
        fragment: &ShaderSource,
    ) -> Result<Self> {
        let vs = compile_shader(device, vertex).await?;
        let fs = compile_shader(device, fragment).await?;
        let program = link_program(device, &vs, &fs, color_format, DEPTH_FORMAT).await?;

        let mesh = Mesh::triangle(device);

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Uniform Buffer"),
            contents: bytemuck::bytes_of(&Uniforms::new(&Matrix4::IDENTITY)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Uniform Bind Group"),
            layout: &program.bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Ok(Self {
            program,
            mesh,
            uniform_buffer,
            bind_group,
            clear_color: wgpu::Color::BLACK,
        })
    }

    /// Uploads the combined transform to the `mvp_matrix` uniform.
    pub fn set_mvp(&self, queue: &wgpu::Queue, mvp: &Matrix4) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&Uniforms::new(mvp)));
    }

    /// Clears `view` and `depth_view`, then issues the single draw call.
    ///
    /// `depth_view` must be a [`DEPTH_FORMAT`] attachment the size of `view`.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        depth_view: &wgpu::TextureView,
    ) {
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.program.pipeline);
            render_pass.set_bind_group(0, &self.bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.mesh.vertex_buffer.slice(..));
            render_pass.draw(0..self.mesh.vertex_count, 0..1);
        }

        queue.submit(std::iter::once(encoder.finish()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math;
    use crate::render::camera::Camera;
    use crate::render::context::create_depth_view;
    use crate::render::test_gpu::headless_device;

    const SIZE: u32 = 64;
    const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;
    // 64 px * 4 bytes already meets COPY_BYTES_PER_ROW_ALIGNMENT.
    const BYTES_PER_ROW: u32 = SIZE * 4;

    fn draw_offscreen(device: &wgpu::Device, queue: &wgpu::Queue, mvp: &Matrix4) -> Vec<u8> {
        let extent = wgpu::Extent3d {
            width: SIZE,
            height: SIZE,
            depth_or_array_layers: 1,
        };
        let target = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Offscreen Target"),
            size: extent,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = target.create_view(&wgpu::TextureViewDescriptor::default());
        let depth_view = create_depth_view(device, SIZE, SIZE);

        let renderer = pollster::block_on(TriangleRenderer::new(device, FORMAT))
            .expect("bundled shaders build a renderer");
        renderer.set_mvp(queue, mvp);
        renderer.render(device, queue, &view, &depth_view);

        let readback = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Readback"),
            size: (BYTES_PER_ROW * SIZE) as u64,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Readback Encoder"),
        });
        encoder.copy_texture_to_buffer(
            wgpu::TexelCopyTextureInfo {
                texture: &target,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::TexelCopyBufferInfo {
                buffer: &readback,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(BYTES_PER_ROW),
                    rows_per_image: Some(SIZE),
                },
            },
            extent,
        );
        queue.submit(std::iter::once(encoder.finish()));

        let slice = readback.slice(..);
        let (tx, rx) = std::sync::mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });
        device.poll(wgpu::Maintain::Wait);
        rx.recv()
            .expect("map callback ran")
            .expect("readback buffer mapped");

        let pixels = slice.get_mapped_range().to_vec();
        readback.unmap();
        pixels
    }

    fn pixel(pixels: &[u8], x: u32, y: u32) -> [u8; 4] {
        let at = (y * BYTES_PER_ROW + x * 4) as usize;
        [pixels[at], pixels[at + 1], pixels[at + 2], pixels[at + 3]]
    }

    #[test]
    fn reference_scene_draws_white_triangle_on_black() {
        let Some((device, queue)) = headless_device() else {
            return;
        };
        let mut camera = Camera::default();
        camera.set_aspect(1.0);
        let mut model = math::create();
        math::identity(&mut model);

        let pixels = draw_offscreen(&device, &queue, &camera.model_view_projection(&model));

        // The triangle spans NDC y 0..1/3 around x = 0, i.e. rows 21..32.
        assert_eq!(pixel(&pixels, 32, 28), [255, 255, 255, 255]);
        assert_eq!(pixel(&pixels, 0, 0), [0, 0, 0, 255]);
        assert_eq!(pixel(&pixels, 32, 40), [0, 0, 0, 255]);
    }

    #[test]
    fn geometry_behind_the_eye_is_clipped() {
        let Some((device, queue)) = headless_device() else {
            return;
        };
        let mut camera = Camera::default();
        camera.set_aspect(1.0);
        camera.target = [0.0, 1.0, 6.0];

        let mvp = camera.model_view_projection(&Matrix4::IDENTITY);
        let pixels = draw_offscreen(&device, &queue, &mvp);

        assert!(pixels.chunks_exact(4).all(|p| p == [0, 0, 0, 255]));
    }
}
