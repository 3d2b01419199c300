use bytemuck::{Pod, Zeroable};

use super::mesh::Vertex;
use super::shader::{CompiledShader, ShaderStage};
use crate::error::{RenderError, Result};
use crate::math::{self, Matrix4};

/// Maps OpenGL clip depth (`-w..w`) onto wgpu's `0..w` via `z' = 0.5 z + 0.5 w`.
pub const GL_TO_WGPU_DEPTH: Matrix4 = Matrix4([
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 0.5, 0.0, //
    0.0, 0.0, 0.5, 1.0,
]);

/// Uniform block read by the vertex stage at `@group(0) @binding(0)`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Uniforms {
    pub mvp_matrix: [[f32; 4]; 4],
}

impl Uniforms {
    /// Packs an OpenGL-convention MVP, remapping its depth for wgpu.
    pub fn new(mvp: &Matrix4) -> Self {
        let mut corrected = *mvp;
        math::premultiply_assign(&GL_TO_WGPU_DEPTH, &mut corrected);
        Self {
            mvp_matrix: corrected.to_cols_array_2d(),
        }
    }
}

/// A linked vertex + fragment pipeline and the layout of its uniform group.
pub struct Program {
    pub pipeline: wgpu::RenderPipeline,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

fn expect_stage(shader: &CompiledShader, stage: ShaderStage) -> Result<()> {
    if shader.stage == stage {
        Ok(())
    } else {
        Err(RenderError::ProgramLink {
            message: format!(
                "`{}` is a {} shader, expected {}",
                shader.label, shader.stage, stage
            ),
        })
    }
}

/// Links two compiled stages into a render pipeline for `color_format`.
///
/// Interface mismatches between the stages, missing entry points or a
/// uniform layout the vertex stage does not accept are reported as
/// [`RenderError::ProgramLink`].
pub async fn link_program(
    device: &wgpu::Device,
    vertex: &CompiledShader,
    fragment: &CompiledShader,
    color_format: wgpu::TextureFormat,
    depth_format: wgpu::TextureFormat,
) -> Result<Program> {
    expect_stage(vertex, ShaderStage::Vertex)?;
    expect_stage(fragment, ShaderStage::Fragment)?;

    device.push_error_scope(wgpu::ErrorFilter::Validation);

    let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Uniform Bind Group Layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: wgpu::BufferSize::new(std::mem::size_of::<Uniforms>() as u64),
            },
            count: None,
        }],
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Pipeline Layout"),
        bind_group_layouts: &[&bind_group_layout],
        push_constant_ranges: &[],
    });

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Triangle Pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &vertex.module,
            entry_point: Some(ShaderStage::Vertex.entry_point()),
            buffers: &[Vertex::LAYOUT],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &fragment.module,
            entry_point: Some(ShaderStage::Fragment.entry_point()),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: depth_format,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    });

    if let Some(err) = device.pop_error_scope().await {
        log::error!(
            "linking `{}` with `{}` failed",
            vertex.label,
            fragment.label
        );
        return Err(RenderError::ProgramLink {
            message: err.to_string(),
        });
    }

    log::debug!("linked `{}` + `{}`", vertex.label, fragment.label);
    Ok(Program {
        pipeline,
        bind_group_layout,
    })
}
