use super::mat4::{create, identity, multiply, Matrix4};
use super::vec3::{self, Vector3};

/// Computes `dst = m * T(v)`.
pub fn translate<'d>(m: &Matrix4, v: Vector3, dst: &'d mut Matrix4) -> &'d mut Matrix4 {
    let mut t = Matrix4::IDENTITY;
    t[12] = v[0];
    t[13] = v[1];
    t[14] = v[2];
    multiply(m, &t, dst)
}

/// Computes `dst = m * S(v)`.
pub fn scale<'d>(m: &Matrix4, v: Vector3, dst: &'d mut Matrix4) -> &'d mut Matrix4 {
    let mut s = Matrix4::IDENTITY;
    s[0] = v[0];
    s[5] = v[1];
    s[10] = v[2];
    multiply(m, &s, dst)
}

/// Computes `dst = m * R`, where `R` rotates `angle` radians counter-clockwise
/// about `axis`.
///
/// Returns `None` and leaves `dst` untouched if `axis` has zero length.
pub fn rotate<'d>(
    m: &Matrix4,
    angle: f32,
    axis: Vector3,
    dst: &'d mut Matrix4,
) -> Option<&'d mut Matrix4> {
    if vec3::length(axis) == 0.0 {
        return None;
    }
    let [x, y, z] = vec3::normalize(axis);
    let (s, c) = angle.sin_cos();
    let t = 1.0 - c;

    let r = Matrix4([
        x * x * t + c,
        y * x * t + z * s,
        z * x * t - y * s,
        0.0,
        x * y * t - z * s,
        y * y * t + c,
        z * y * t + x * s,
        0.0,
        x * z * t + y * s,
        y * z * t - x * s,
        z * z * t + c,
        0.0,
        0.0,
        0.0,
        0.0,
        1.0,
    ]);
    Some(multiply(m, &r, dst))
}

/// Translation, axis-angle rotation and scale composed as `T * R * S`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3,
    pub axis: Vector3,
    pub angle: f32,
    pub scale: Vector3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: [0.0; 3],
        axis: [0.0, 1.0, 0.0],
        angle: 0.0,
        scale: [1.0; 3],
    };

    pub fn from_position(position: Vector3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn to_matrix(&self) -> Matrix4 {
        let mut base = create();
        identity(&mut base);

        let mut translated = create();
        translate(&base, self.position, &mut translated);

        let mut rotated = translated;
        if self.angle != 0.0 {
            rotate(&translated, self.angle, self.axis, &mut rotated);
        }

        let mut out = create();
        scale(&rotated, self.scale, &mut out);
        out
    }
}
