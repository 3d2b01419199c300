/// A position or direction in 3D space.
pub type Vector3 = [f32; 3];

pub(crate) fn sub(a: Vector3, b: Vector3) -> Vector3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub(crate) fn dot(a: Vector3, b: Vector3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub(crate) fn cross(a: Vector3, b: Vector3) -> Vector3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub(crate) fn length(v: Vector3) -> f32 {
    dot(v, v).sqrt()
}

/// Scales `v` to unit length. A zero vector yields NaN components.
pub(crate) fn normalize(v: Vector3) -> Vector3 {
    let inv = 1.0 / length(v);
    [v[0] * inv, v[1] * inv, v[2] * inv]
}
