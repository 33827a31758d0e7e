//! Canonical homogeneous matrices for the elementary transforms.

use super::Matrix3;

/// Identity matrix.
#[inline]
pub fn identity() -> Matrix3 {
    Matrix3::IDENTITY
}

/// Rotation about the origin by `theta` radians.
///
/// ```text
/// | cos θ  -sin θ  0 |
/// | sin θ   cos θ  0 |
/// |   0       0    1 |
/// ```
pub fn rotation(theta: f64) -> Matrix3 {
    let (s, c) = theta.sin_cos();
    Matrix3([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
}

/// Translation by `(tx, ty)`.
pub fn translation(tx: f64, ty: f64) -> Matrix3 {
    Matrix3([[1.0, 0.0, tx], [0.0, 1.0, ty], [0.0, 0.0, 1.0]])
}

/// Scaling about the origin by `sx` horizontally and `sy` vertically.
pub fn scale(sx: f64, sy: f64) -> Matrix3 {
    Matrix3([[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]])
}

/// Flip rows top↔bottom within `[0, height - 1]`.
///
/// The offset is `height - 1`, not `height`: this mirrors the discrete pixel
/// grid, so row 0 maps to row `height - 1` and back.
pub fn reflect_horizontal_axis(height: f64) -> Matrix3 {
    Matrix3([[1.0, 0.0, 0.0], [0.0, -1.0, height - 1.0], [0.0, 0.0, 1.0]])
}

/// Flip columns left↔right within `[0, width - 1]`.
pub fn reflect_vertical_axis(width: f64) -> Matrix3 {
    Matrix3([[-1.0, 0.0, width - 1.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
}
