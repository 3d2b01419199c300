use bytemuck::{Pod, Zeroable};
use std::ops::{Index, IndexMut, Mul};

/// A 4x4 `f32` matrix stored column-major, ready for upload as a `mat4x4<f32>`.
///
/// Element `[col * 4 + row]` holds row `row` of column `col`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Matrix4(pub [f32; 16]);

impl Matrix4 {
    pub const ZERO: Self = Self([0.0; 16]);

    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    pub fn from_cols_array(m: [f32; 16]) -> Self {
        Self(m)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn to_cols_array(&self) -> [f32; 16] {
        self.0
    }

    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        let m = &self.0;
        [
            [m[0], m[1], m[2], m[3]],
            [m[4], m[5], m[6], m[7]],
            [m[8], m[9], m[10], m[11]],
            [m[12], m[13], m[14], m[15]],
        ]
    }

    /// Returns the element at `row`, `col`.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.0[col * 4 + row]
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<usize> for Matrix4 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.0[index]
    }
}

impl IndexMut<usize> for Matrix4 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.0[index]
    }
}

impl Mul for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: Matrix4) -> Matrix4 {
        let mut out = create();
        multiply(&self, &rhs, &mut out);
        out
    }
}

/// Allocates a zero-filled matrix.
pub fn create() -> Matrix4 {
    Matrix4::ZERO
}

/// Overwrites `dst` with the identity matrix.
pub fn identity(dst: &mut Matrix4) -> &mut Matrix4 {
    *dst = Matrix4::IDENTITY;
    dst
}

fn product(a: &Matrix4, b: &Matrix4) -> [f32; 16] {
    let mut out = [0.0; 16];
    for col in 0..4 {
        for row in 0..4 {
            out[col * 4 + row] = a[row] * b[col * 4]
                + a[4 + row] * b[col * 4 + 1]
                + a[8 + row] * b[col * 4 + 2]
                + a[12 + row] * b[col * 4 + 3];
        }
    }
    out
}

/// Computes `dst = a * b`.
///
/// The full product is formed in a temporary before `dst` is written.
pub fn multiply<'d>(a: &Matrix4, b: &Matrix4, dst: &'d mut Matrix4) -> &'d mut Matrix4 {
    dst.0 = product(a, b);
    dst
}

/// Computes `dst = dst * b` in place.
pub fn multiply_assign<'d>(dst: &'d mut Matrix4, b: &Matrix4) -> &'d mut Matrix4 {
    dst.0 = product(dst, b);
    dst
}

/// Computes `dst = a * dst` in place.
pub fn premultiply_assign<'d>(a: &Matrix4, dst: &'d mut Matrix4) -> &'d mut Matrix4 {
    dst.0 = product(a, dst);
    dst
}

pub fn transpose<'d>(m: &Matrix4, dst: &'d mut Matrix4) -> &'d mut Matrix4 {
    let src = m.0;
    for col in 0..4 {
        for row in 0..4 {
            dst.0[row * 4 + col] = src[col * 4 + row];
        }
    }
    dst
}

/// Writes the inverse of `m` into `dst`.
///
/// A singular `m` produces non-finite elements.
pub fn inverse<'d>(m: &Matrix4, dst: &'d mut Matrix4) -> &'d mut Matrix4 {
    let [a, b, c, d, e, f, g, h, i, j, k, l, mm, n, o, p] = m.0;

    let q = a * f - b * e;
    let r = a * g - c * e;
    let s = a * h - d * e;
    let t = b * g - c * f;
    let u = b * h - d * f;
    let v = c * h - d * g;
    let w = i * n - j * mm;
    let x = i * o - k * mm;
    let y = i * p - l * mm;
    let z = j * o - k * n;
    let aa = j * p - l * n;
    let bb = k * p - l * o;

    let inv_det = 1.0 / (q * bb - r * aa + s * z + t * y - u * x + v * w);

    dst.0 = [
        (f * bb - g * aa + h * z) * inv_det,
        (-b * bb + c * aa - d * z) * inv_det,
        (n * v - o * u + p * t) * inv_det,
        (-j * v + k * u - l * t) * inv_det,
        (-e * bb + g * y - h * x) * inv_det,
        (a * bb - c * y + d * x) * inv_det,
        (-mm * v + o * s - p * r) * inv_det,
        (i * v - k * s + l * r) * inv_det,
        (e * aa - f * y + h * w) * inv_det,
        (-a * aa + b * y - d * w) * inv_det,
        (mm * u - n * s + p * q) * inv_det,
        (-i * u + j * s - l * q) * inv_det,
        (-e * z + f * x - g * w) * inv_det,
        (a * z - b * x + c * w) * inv_det,
        (-mm * t + n * r - o * q) * inv_det,
        (i * t - j * r + k * q) * inv_det,
    ];
    dst
}

/// Applies `m` to the homogeneous point `p`.
pub fn transform_point(m: &Matrix4, p: [f32; 4]) -> [f32; 4] {
    let mut out = [0.0; 4];
    for (row, slot) in out.iter_mut().enumerate() {
        *slot = m[row] * p[0] + m[4 + row] * p[1] + m[8 + row] * p[2] + m[12 + row] * p[3];
    }
    out
}
