//! Geometric transforms in homogeneous coordinates.
//!
//! Every geometric operation of the visualizer is a single 3×3 matrix:
//! the elementary builders live in `builders`, the center-pivoted variants in
//! `pivot`, and `matrix` holds the type plus composition and application.
//!
//! # Composition Order
//!
//! `compose(a, b)` is the product `a · b`. Applied to a point, `b` acts first.
//! Pivoted transforms therefore read `T(+c) · X · T(-c)`.
//!
//! # Coordinate System
//!
//! - Origin is the top-left pixel, x grows right, y grows down
//! - Reflections mirror the discrete grid `[0, dimension - 1]`
//! - Rotation angles for the pivoted builder are in degrees

mod builders;
mod matrix;
mod pivot;

pub use builders::{
    identity, reflect_horizontal_axis, reflect_vertical_axis, rotation, scale, translation,
};
pub use matrix::{apply, compose, Matrix3, Point2};
pub use pivot::{image_center, rotate_around_center, scale_around_center};
