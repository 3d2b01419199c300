//! # mvp-webgpu
//!
//! A small hand-rolled 4x4 transform library and the WebGPU glue needed to
//! draw one triangle with it.
//!
//! ## Features
//! - Column-major `Matrix4` that uploads directly as a `mat4x4<f32>` uniform
//! - `look_at`, `perspective`, `ortho`, `multiply` and friends as free functions
//! - Shader compile/link failures returned as [`RenderError`] values
//! - Cross-platform: Native + WASM support
//!
//! ## Example
//! ```rust
//! use mvp_webgpu::math;
//!
//! let mut m = math::create();
//! let mut v = math::create();
//! let mut p = math::create();
//! let mut mvp = math::create();
//! math::identity(&mut m);
//! math::look_at([0.0, 1.0, 3.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0], &mut v);
//! math::perspective(90.0, 500.0 / 300.0, 0.1, 100.0, &mut p);
//! math::multiply(&p, &v, &mut mvp);
//! math::multiply_assign(&mut mvp, &m);
//!
//! let clip = math::transform_point(&mvp, [0.0, 1.0, 0.0, 1.0]);
//! assert!((clip[0] / clip[3]).abs() <= 1.0);
//! assert!((clip[1] / clip[3]).abs() <= 1.0);
//! ```

pub mod error;
pub mod math;
pub mod render;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::RenderError;
pub use math::{Matrix4, Transform, Vector3};
pub use render::{Camera, GpuContext, TriangleRenderer};
