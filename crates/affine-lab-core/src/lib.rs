//! Affine Lab Core - homogeneous transforms and color filters
//!
//! This crate provides the computation behind the Affine Lab visualizer:
//! 3×3 matrices for rotation, scaling, translation and reflection, their
//! composition and application to pixel coordinates, the grayscale and
//! negative filters, and the guided five-step walkthrough that explains them.

pub mod decode;
pub mod filter;
pub mod format;
pub mod kind;
pub mod sweep;
pub mod transform;
pub mod wizard;

pub use decode::{decode_image, DecodeError, DecodedImage};
pub use filter::{grayscale, luminance, negative, to_channel, ColorFilter, Rgb};
pub use kind::{KindError, TransformKind, TransformParams};
pub use sweep::{apply_filter, apply_geometry, RowSweep, SweepConfig, SweepOp, SweepProgress};
pub use transform::{
    apply, compose, identity, reflect_horizontal_axis, reflect_vertical_axis,
    rotate_around_center, rotation, scale, scale_around_center, translation, Matrix3, Point2,
};
pub use wizard::{AnimationConfig, StepOutcome, Wizard, WizardStep};
