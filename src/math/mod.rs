//! Transform math module
//!
//! Column-major 4x4 matrices and the operations needed to build a
//! model-view-projection transform. Every operation writes into a
//! caller-owned destination and returns it for chaining.

mod mat4;
mod projection;
mod transform;
mod vec3;

pub use mat4::{
    create, identity, inverse, multiply, multiply_assign, premultiply_assign, transform_point,
    transpose, Matrix4,
};
pub use projection::{look_at, ortho, perspective};
pub use transform::{rotate, scale, translate, Transform};
pub use vec3::Vector3;
