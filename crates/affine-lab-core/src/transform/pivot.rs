//! Rotation and scaling about the image center.
//!
//! A pivoted transform is `T(+c) · X · T(-c)`: move the pivot to the origin,
//! apply `X`, move it back. Reading right to left is the order the point sees.

use super::builders::{rotation, scale, translation};
use super::Matrix3;

/// The pivot used for an image of the given size: `(width / 2, height / 2)`.
///
/// Uses real division, so odd sizes land between two pixels.
#[inline]
pub fn image_center(width: f64, height: f64) -> (f64, f64) {
    (width / 2.0, height / 2.0)
}

/// Sandwich `m` between translations to and from the image center.
fn around_center(width: f64, height: f64, m: &Matrix3) -> Matrix3 {
    let (cx, cy) = image_center(width, height);
    let to_origin = translation(-cx, -cy);
    let back = translation(cx, cy);
    back.compose(&m.compose(&to_origin))
}

/// Rotation by `degrees` about the image center.
///
/// Positive angles follow the textbook orientation of [`rotation`]; with the
/// y axis pointing down on screen this appears clockwise.
pub fn rotate_around_center(width: f64, height: f64, degrees: f64) -> Matrix3 {
    around_center(width, height, &rotation(degrees.to_radians()))
}

/// Scaling by `(sx, sy)` about the image center.
pub fn scale_around_center(width: f64, height: f64, sx: f64, sy: f64) -> Matrix3 {
    around_center(width, height, &scale(sx, sy))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::transform::{compose, Point2};
    use proptest::prelude::*;

    fn dimensions_strategy() -> impl Strategy<Value = (f64, f64)> {
        (1u32..=2000, 1u32..=2000).prop_map(|(w, h)| (w as f64, h as f64))
    }

    fn point_strategy() -> impl Strategy<Value = Point2> {
        (-2000.0f64..2000.0, -2000.0f64..2000.0).prop_map(|(x, y)| Point2::new(x, y))
    }

    proptest! {
        /// Property: rotating by θ then by -θ returns the original point.
        #[test]
        fn prop_rotation_inverse(
            (w, h) in dimensions_strategy(),
            degrees in -720.0f64..720.0,
            p in point_strategy(),
        ) {
            let fwd = rotate_around_center(w, h, degrees);
            let back = rotate_around_center(w, h, -degrees);
            let q = compose(&back, &fwd).apply(p);
            prop_assert!((q.x - p.x).abs() < 1e-9 && (q.y - p.y).abs() < 1e-9);
        }

        /// Property: a full turn leaves every point in place.
        #[test]
        fn prop_full_turn(
            (w, h) in dimensions_strategy(),
            p in point_strategy(),
        ) {
            let q = rotate_around_center(w, h, 360.0).apply(p);
            prop_assert!((q.x - p.x).abs() < 1e-9 && (q.y - p.y).abs() < 1e-9);
        }

        /// Property: unit scale leaves every point in place.
        #[test]
        fn prop_unit_scale(
            (w, h) in dimensions_strategy(),
            p in point_strategy(),
        ) {
            let q = scale_around_center(w, h, 1.0, 1.0).apply(p);
            prop_assert_eq!(q, p);
        }

        /// Property: rotation preserves distance to the center.
        #[test]
        fn prop_rotation_preserves_radius(
            (w, h) in dimensions_strategy(),
            degrees in -360.0f64..360.0,
            p in point_strategy(),
        ) {
            let (cx, cy) = image_center(w, h);
            let q = rotate_around_center(w, h, degrees).apply(p);
            let before = (p.x - cx).hypot(p.y - cy);
            let after = (q.x - cx).hypot(q.y - cy);
            prop_assert!((before - after).abs() < 1e-7);
        }
    }
}
