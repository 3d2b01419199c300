use super::mat4::Matrix4;
use super::vec3::{self, Vector3};

/// Writes a view matrix placing the camera at `eye` and looking at `target`.
///
/// The camera looks down its local -Z axis with `up` approximating local +Y.
/// `eye == target` or `up` parallel to the view direction leave the basis
/// undefined and fill `dst` with NaN.
pub fn look_at<'d>(
    eye: Vector3,
    target: Vector3,
    up: Vector3,
    dst: &'d mut Matrix4,
) -> &'d mut Matrix4 {
    let forward = vec3::normalize(vec3::sub(eye, target));
    let right = vec3::normalize(vec3::cross(up, forward));
    let true_up = vec3::cross(forward, right);

    dst.0 = [
        right[0],
        true_up[0],
        forward[0],
        0.0,
        right[1],
        true_up[1],
        forward[1],
        0.0,
        right[2],
        true_up[2],
        forward[2],
        0.0,
        -vec3::dot(right, eye),
        -vec3::dot(true_up, eye),
        -vec3::dot(forward, eye),
        1.0,
    ];
    dst
}

/// Writes a right-handed perspective projection with OpenGL depth range.
///
/// Points at `z = -near` map to NDC depth -1 and `z = -far` to +1. Expects
/// `near > 0`, `far > near`, `aspect > 0` and `0 < fovy_degrees < 180`;
/// nothing is checked.
pub fn perspective(
    fovy_degrees: f32,
    aspect: f32,
    near: f32,
    far: f32,
    dst: &mut Matrix4,
) -> &mut Matrix4 {
    let top = near * (fovy_degrees.to_radians() * 0.5).tan();
    let right = top * aspect;
    let depth = far - near;

    dst.0 = [
        near / right,
        0.0,
        0.0,
        0.0,
        0.0,
        near / top,
        0.0,
        0.0,
        0.0,
        0.0,
        -(far + near) / depth,
        -1.0,
        0.0,
        0.0,
        -(far * near * 2.0) / depth,
        0.0,
    ];
    dst
}

/// Writes an orthographic projection with OpenGL depth range.
pub fn ortho(
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    near: f32,
    far: f32,
    dst: &mut Matrix4,
) -> &mut Matrix4 {
    let h = right - left;
    let v = top - bottom;
    let d = far - near;

    dst.0 = [
        2.0 / h,
        0.0,
        0.0,
        0.0,
        0.0,
        2.0 / v,
        0.0,
        0.0,
        0.0,
        0.0,
        -2.0 / d,
        0.0,
        -(left + right) / h,
        -(top + bottom) / v,
        -(far + near) / d,
        1.0,
    ];
    dst
}
