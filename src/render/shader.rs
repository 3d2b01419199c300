use std::borrow::Cow;
use std::fmt;

use crate::error::{RenderError, Result};

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn entry_point(self) -> &'static str {
        match self {
            ShaderStage::Vertex => VERTEX_ENTRY,
            ShaderStage::Fragment => FRAGMENT_ENTRY,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// WGSL text for one shader stage, supplied by the caller.
#[derive(Debug, Clone)]
pub struct ShaderSource {
    pub stage: ShaderStage,
    pub label: String,
    pub code: Cow<'static, str>,
}

impl ShaderSource {
    pub fn new(
        stage: ShaderStage,
        label: impl Into<String>,
        code: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            stage,
            label: label.into(),
            code: code.into(),
        }
    }

    /// Bundled vertex stage: transforms `position` by the `mvp_matrix` uniform.
    pub fn default_vertex() -> Self {
        Self::new(
            ShaderStage::Vertex,
            "triangle.vert",
            include_str!("shaders/triangle.vert.wgsl"),
        )
    }

    /// Bundled fragment stage: flat white.
    pub fn default_fragment() -> Self {
        Self::new(
            ShaderStage::Fragment,
            "triangle.frag",
            include_str!("shaders/triangle.frag.wgsl"),
        )
    }
}

/// A successfully validated shader module and the stage it was compiled for.
pub struct CompiledShader {
    pub stage: ShaderStage,
    pub label: String,
    pub module: wgpu::ShaderModule,
}

/// Compiles `source`, returning the validator's diagnostics on failure.
pub async fn compile_shader(
    device: &wgpu::Device,
    source: &ShaderSource,
) -> Result<CompiledShader> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(source.label.as_str()),
        source: wgpu::ShaderSource::Wgsl(source.code.clone()),
    });

    if let Some(err) = device.pop_error_scope().await {
        log::error!("{} shader `{}` rejected", source.stage, source.label);
        return Err(RenderError::ShaderCompile {
            stage: source.stage,
            label: source.label.clone(),
            message: err.to_string(),
        });
    }

    log::debug!("compiled {} shader `{}`", source.stage, source.label);
    Ok(CompiledShader {
        stage: source.stage,
        label: source.label.clone(),
        module,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_gpu::headless_device;

    #[test]
    fn bundled_sources_declare_entry_points() {
        let vs = ShaderSource::default_vertex();
        let fs = ShaderSource::default_fragment();
        assert_eq!(vs.stage, ShaderStage::Vertex);
        assert_eq!(fs.stage, ShaderStage::Fragment);
        assert!(vs.code.contains(&format!("fn {}(", vs.stage.entry_point())));
        assert!(fs.code.contains(&format!("fn {}(", fs.stage.entry_point())));
    }

    #[test]
    fn vertex_source_reads_mvp_uniform() {
        let vs = ShaderSource::default_vertex();
        assert!(vs.code.contains("mvp_matrix: mat4x4<f32>"));
        assert!(vs.code.contains("@group(0) @binding(0)"));
    }

    #[test]
    fn caller_supplied_text_is_kept() {
        let src = ShaderSource::new(ShaderStage::Fragment, "custom", String::from("// nothing"));
        assert_eq!(src.label, "custom");
        assert_eq!(src.code, "// nothing");
    }

    #[test]
    fn compile_error_message_names_stage() {
        let err = RenderError::ShaderCompile {
            stage: ShaderStage::Vertex,
            label: "broken".into(),
            message: "expected `;`".into(),
        };
        let text = err.to_string();
        assert!(text.starts_with("vertex shader `broken`"));
        assert!(text.contains("expected `;`"));
    }

    #[test]
    fn bundled_sources_compile() {
        let Some((device, _queue)) = headless_device() else {
            return;
        };
        for source in [ShaderSource::default_vertex(), ShaderSource::default_fragment()] {
            let compiled = pollster::block_on(compile_shader(&device, &source));
            let compiled = compiled.expect("bundled shader compiles");
            assert_eq!(compiled.stage, source.stage);
            assert_eq!(compiled.label, source.label);
        }
    }

    #[test]
    fn invalid_wgsl_reports_shader_compile() {
        let Some((device, _queue)) = headless_device() else {
            return;
        };
        let broken = ShaderSource::new(
            ShaderStage::Vertex,
            "broken.vert",
            "@vertex\nfn vs_main() -> @builtin(position) vec4<f32> {\n    return vec4<f32>(0.0)\n",
        );

        match pollster::block_on(compile_shader(&device, &broken)) {
            Err(RenderError::ShaderCompile {
                stage,
                label,
                message,
            }) => {
                assert_eq!(stage, ShaderStage::Vertex);
                assert_eq!(label, "broken.vert");
                assert!(!message.is_empty());
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("broken WGSL compiled"),
        }
    }
}
