//! Text rendering of matrices and vectors for the explanation panel.
//!
//! Trigonometry leaves residue like `6.1e-17` or `-0.0` where the learner
//! expects `0`. Everything here goes through [`clean`] first.

use serde::{Deserialize, Serialize};

use crate::transform::{Matrix3, Point2};

/// Magnitudes below this are shown as zero.
pub const NEAR_ZERO: f64 = 1e-12;

/// Default number of decimals for matrix entries.
pub const MATRIX_PRECISION: usize = 3;

/// Snap near-zero values (including `-0.0`) to `0.0`.
#[inline]
pub fn clean(v: f64) -> f64 {
    if v.abs() < NEAR_ZERO {
        0.0
    } else {
        v
    }
}

/// `v` with exactly `precision` decimals, after [`clean`].
pub fn fixed(v: f64, precision: usize) -> String {
    format!("{:.*}", precision, clean(v))
}

/// The three rows of `m`, e.g. `[1.000  0.000  5.000]`.
pub fn matrix_rows(m: &Matrix3, precision: usize) -> [String; 3] {
    m.0.map(|row| {
        format!(
            "[{}  {}  {}]",
            fixed(row[0], precision),
            fixed(row[1], precision),
            fixed(row[2], precision)
        )
    })
}

/// A point as a homogeneous column vector: `p = [x, y, 1]^T`.
pub fn vector_text(p: Point2, precision: usize, label: &str) -> String {
    format!(
        "{} = [{}, {}, 1]^T",
        label,
        fixed(p.x, precision),
        fixed(p.y, precision)
    )
}

/// The two dot products behind `apply`, written out term by term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DotBreakdown {
    /// `x' = a·x + b·y + c·1 = result`
    pub x_line: String,
    /// `y' = d·x + e·y + f·1 = result`
    pub y_line: String,
    /// The transformed point, unrounded.
    pub result: Point2,
}

impl DotBreakdown {
    pub fn new(m: &Matrix3, p: Point2) -> Self {
        let result = m.apply(p);
        let line = |name: &str, row: &[f64; 3], value: f64| {
            format!(
                "{} = {}·{} + {}·{} + {}·1 = {}",
                name,
                fixed(row[0], MATRIX_PRECISION),
                p.x,
                fixed(row[1], MATRIX_PRECISION),
                p.y,
                fixed(row[2], MATRIX_PRECISION),
                fixed(value, 2)
            )
        };
        let rows = m.rows();
        Self {
            x_line: line("x'", &rows[0], result.x),
            y_line: line("y'", &rows[1], result.y),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{rotate_around_center, rotation, translation};

    #[test]
    fn test_clean() {
        assert_eq!(clean(1e-13), 0.0);
        assert_eq!(clean(-1e-13), 0.0);
        assert!(clean(-0.0).is_sign_positive());
        assert_eq!(clean(0.5), 0.5);
        assert!(clean(f64::NAN).is_nan());
    }

    #[test]
    fn test_fixed_hides_negative_zero() {
        assert_eq!(fixed(-0.0, 3), "0.000");
        assert_eq!(fixed(-1e-17, 2), "0.00");
        assert_eq!(fixed(1.23456, 3), "1.235");
        assert_eq!(fixed(-2.0, 1), "-2.0");
    }

    #[test]
    fn test_matrix_rows_quarter_turn() {
        let rows = matrix_rows(&rotation(std::f64::consts::FRAC_PI_2), MATRIX_PRECISION);
        assert_eq!(rows[0], "[0.000  -1.000  0.000]");
        assert_eq!(rows[1], "[1.000  0.000  0.000]");
        assert_eq!(rows[2], "[0.000  0.000  1.000]");
    }

    #[test]
    fn test_matrix_rows_full_turn_is_clean() {
        let rows = matrix_rows(&rotate_around_center(100.0, 100.0, 360.0), 3);
        assert_eq!(rows[0], "[1.000  0.000  0.000]");
        assert_eq!(rows[1], "[0.000  1.000  0.000]");
    }

    #[test]
    fn test_vector_text() {
        assert_eq!(
            vector_text(Point2::new(12.0, 7.0), 0, "p"),
            "p = [12, 7, 1]^T"
        );
        assert_eq!(
            vector_text(Point2::new(1.5, -2.25), 2, "p'"),
            "p' = [1.50, -2.25, 1]^T"
        );
    }

    #[test]
    fn test_dot_breakdown_translation() {
        let b = DotBreakdown::new(&translation(5.0, -3.0), Point2::new(10.0, 10.0));
        assert_eq!(b.x_line, "x' = 1.000·10 + 0.000·10 + 5.000·1 = 15.00");
        assert_eq!(b.y_line, "y' = 0.000·10 + 1.000·10 + -3.000·1 = 7.00");
        assert_eq!(b.result, Point2::new(15.0, 7.0));
    }
}
