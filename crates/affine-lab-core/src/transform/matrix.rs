//! 3×3 homogeneous matrices and the points they act on.
//!
//! A 2D point `(x, y)` is treated as the column vector `[x, y, 1]^T`, which lets
//! translation share the same multiplication as rotation and scaling.
//!
//! ```text
//! |x'|   |a b c| |x|
//! |y'| = |d e f| |y|
//! |1 |   |0 0 1| |1|
//! ```

use std::ops::Mul;

use serde::{Deserialize, Serialize};

/// A point in pixel space, implicitly extended to `(x, y, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Round both coordinates to the nearest pixel index.
    ///
    /// Halves round up (`-0.5` lands on pixel 0, `2.5` on pixel 3). Values
    /// outside the `i64` range saturate and NaN maps to 0.
    #[inline]
    pub fn rounded(self) -> (i64, i64) {
        ((self.x + 0.5).floor() as i64, (self.y + 0.5).floor() as i64)
    }

    /// The homogeneous column vector `[x, y, 1]`.
    #[inline]
    pub fn homogeneous(self) -> [f64; 3] {
        [self.x, self.y, 1.0]
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A row-major 3×3 matrix in homogeneous coordinates.
///
/// Every builder in this crate produces an affine matrix, so the bottom row
/// is always `[0, 0, 1]`. Values are plain data: build a fresh one whenever
/// the parameters change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix3(pub [[f64; 3]; 3]);

impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix3 {
    pub const IDENTITY: Matrix3 = Matrix3([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self(rows)
    }

    #[inline]
    pub fn rows(&self) -> &[[f64; 3]; 3] {
        &self.0
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.0[row][col]
    }

    /// The nine entries flattened in row-major order.
    pub fn to_row_major(&self) -> [f64; 9] {
        let m = &self.0;
        [
            m[0][0], m[0][1], m[0][2], m[1][0], m[1][1], m[1][2], m[2][0], m[2][1], m[2][2],
        ]
    }

    /// Whether the bottom row is exactly `[0, 0, 1]`.
    pub fn is_affine(&self) -> bool {
        self.0[2] == [0.0, 0.0, 1.0]
    }

    /// Multiply `self · rhs`.
    ///
    /// The result applied to a point is `rhs` first, then `self`.
    pub fn compose(&self, rhs: &Matrix3) -> Matrix3 {
        let a = &self.0;
        let b = &rhs.0;
        let mut r = [[0.0; 3]; 3];
        for (i, row) in r.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
            }
        }
        Matrix3(r)
    }

    /// Apply the matrix to a point.
    ///
    /// Only the first two rows are evaluated; for the affine matrices built
    /// here the third output coordinate is always 1. No rounding is done.
    #[inline]
    pub fn apply(&self, p: Point2) -> Point2 {
        let m = &self.0;
        Point2 {
            x: m[0][0] * p.x + m[0][1] * p.y + m[0][2],
            y: m[1][0] * p.x + m[1][1] * p.y + m[1][2],
        }
    }
}

impl Mul for Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: Matrix3) -> Matrix3 {
        self.compose(&rhs)
    }
}

impl Mul<Point2> for Matrix3 {
    type Output = Point2;

    fn mul(self, rhs: Point2) -> Point2 {
        self.apply(rhs)
    }
}

/// Multiply two matrices; `b` is applied first.
#[inline]
pub fn compose(a: &Matrix3, b: &Matrix3) -> Matrix3 {
    a.compose(b)
}

/// Apply `m` to `p`, returning unrounded coordinates.
#[inline]
pub fn apply(m: &Matrix3, p: Point2) -> Point2 {
    m.apply(p)
}
