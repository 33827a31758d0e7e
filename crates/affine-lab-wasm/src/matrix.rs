//! WASM bindings for the matrix builders.
//!
//! Every function returns a fresh [`JsMatrix3`]; rebuild it whenever the user
//! changes a parameter.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const m = rotate_around_center(image.width, image.height, 30);
//! const [x, y] = m.apply(120, 45);
//! panel.textContent = m.rows(3).join("\n");
//! ```

use crate::types::JsMatrix3;
use affine_lab_core::format;
use affine_lab_core::kind::{TransformKind, TransformParams};
use affine_lab_core::transform::{self, Point2};
use wasm_bindgen::prelude::*;

/// Rotation about the origin by `theta` radians.
#[wasm_bindgen]
pub fn rotation(theta: f64) -> JsMatrix3 {
    transform::rotation(theta).into()
}

/// Translation by `(tx, ty)` pixels.
#[wasm_bindgen]
pub fn translation(tx: f64, ty: f64) -> JsMatrix3 {
    transform::translation(tx, ty).into()
}

/// Scaling about the origin.
#[wasm_bindgen]
pub fn scale(sx: f64, sy: f64) -> JsMatrix3 {
    transform::scale(sx, sy).into()
}

/// Mirror columns left↔right within `[0, width - 1]`.
#[wasm_bindgen]
pub fn reflect_x(width: f64) -> JsMatrix3 {
    transform::reflect_vertical_axis(width).into()
}

/// Mirror rows top↔bottom within `[0, height - 1]`.
#[wasm_bindgen]
pub fn reflect_y(height: f64) -> JsMatrix3 {
    transform::reflect_horizontal_axis(height).into()
}

/// Rotation by `degrees` about the image center.
#[wasm_bindgen]
pub fn rotate_around_center(width: f64, height: f64, degrees: f64) -> JsMatrix3 {
    transform::rotate_around_center(width, height, degrees).into()
}

/// Scaling by `(sx, sy)` about the image center.
#[wasm_bindgen]
pub fn scale_around_center(width: f64, height: f64, sx: f64, sy: f64) -> JsMatrix3 {
    transform::scale_around_center(width, height, sx, sy).into()
}

/// A point as homogeneous column text, e.g. `p' = [15.00, 7.00, 1]^T`.
#[wasm_bindgen]
pub fn vector_text(x: f64, y: f64, precision: usize, label: &str) -> String {
    format::vector_text(Point2::new(x, y), precision, label)
}

/// The matrix for a selector tag and raw input strings.
///
/// Malformed numbers fall back to their defaults (0° angle, scale 1, offset 0).
/// Returns `undefined` for filter tags.
///
/// # Errors
///
/// Returns an error for a tag that names no operation.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn matrix_for_kind(
    tag: &str,
    width: u32,
    height: u32,
    angle: &str,
    scale_x: &str,
    scale_y: &str,
    tx: &str,
    ty: &str,
) -> Result<Option<JsMatrix3>, JsValue> {
    let params = TransformParams {
        angle: angle.to_string(),
        scale_x: scale_x.to_string(),
        scale_y: scale_y.to_string(),
        tx: tx.to_string(),
        ty: ty.to_string(),
    };
    let kind =
        TransformKind::from_tag(tag, &params).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(kind.matrix(width, height).map(JsMatrix3::from))
}
