use thiserror::Error;

use crate::render::ShaderStage;

/// Failures surfaced by the GPU setup layer.
///
/// The transform math never fails; everything here comes from talking to wgpu.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter found")]
    NoAdapter,

    #[error("failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported formats for this adapter")]
    IncompatibleSurface,

    #[error("surface has zero size ({width}x{height})")]
    ZeroSizedSurface { width: u32, height: u32 },

    #[error("{stage} shader `{label}` failed to compile:\n{message}")]
    ShaderCompile {
        stage: ShaderStage,
        label: String,
        message: String,
    },

    #[error("program link failed:\n{message}")]
    ProgramLink { message: String },
}

pub type Result<T> = std::result::Result<T, RenderError>;
