//! WASM-compatible wrapper types for images and matrices.
//!
//! This module provides JavaScript-friendly types that wrap the core types,
//! handling the conversion between Rust and JavaScript data representations.

use affine_lab_core::decode::DecodedImage;
use affine_lab_core::format::matrix_rows;
use affine_lab_core::transform::{Matrix3, Point2};
use wasm_bindgen::prelude::*;

/// A decoded image wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. `pixels()` and `rgba()` copy it
/// to JavaScript memory as a `Uint8Array`.
#[wasm_bindgen]
pub struct JsDecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsDecodedImage {
    /// Create a new JsDecodedImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    ///
    /// # Errors
    ///
    /// Returns an error unless `pixels` holds exactly `width * height * 3` bytes.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsDecodedImage, JsValue> {
        DecodedImage::from_rgb(width, height, pixels)
            .map(Self::from_decoded)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3 for RGB)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Returns RGBA pixel data with opaque alpha, ready for `new ImageData(...)`.
    pub fn rgba(&self) -> Vec<u8> {
        self.to_decoded().to_rgba()
    }

    /// The `[r, g, b]` color at `(x, y)`, empty outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Vec<u8> {
        self.to_decoded()
            .pixel(x, y)
            .map(|px| px.to_vec())
            .unwrap_or_default()
    }

    /// A `size × size` block around `(x, y)` as packed RGB, edges repeated.
    pub fn neighborhood(&self, x: u32, y: u32, size: u32) -> Vec<u8> {
        self.to_decoded()
            .neighborhood(x, y, size)
            .into_iter()
            .flatten()
            .collect()
    }
}

impl JsDecodedImage {
    /// Create a JsDecodedImage from a core DecodedImage.
    pub(crate) fn from_decoded(img: DecodedImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert back to a core DecodedImage.
    ///
    /// Note: This clones the pixel data.
    pub(crate) fn to_decoded(&self) -> DecodedImage {
        DecodedImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// A 3×3 homogeneous matrix for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsMatrix3 {
    inner: Matrix3,
}

#[wasm_bindgen]
impl JsMatrix3 {
    /// The identity matrix.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsMatrix3 {
        Self::from(Matrix3::IDENTITY)
    }

    /// Build from nine row-major values. Returns `undefined` for any other length.
    pub fn from_values(values: &[f64]) -> Option<JsMatrix3> {
        let v: &[f64; 9] = values.try_into().ok()?;
        Some(Self::from(Matrix3([
            [v[0], v[1], v[2]],
            [v[3], v[4], v[5]],
            [v[6], v[7], v[8]],
        ])))
    }

    /// The nine entries in row-major order (`Float64Array`).
    pub fn values(&self) -> Vec<f64> {
        self.inner.to_row_major().to_vec()
    }

    /// Entry at `(row, col)`; `NaN` when out of range.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        if row < 3 && col < 3 {
            self.inner.get(row, col)
        } else {
            f64::NAN
        }
    }

    /// `self · other`: `other` is applied first.
    pub fn compose(&self, other: &JsMatrix3) -> JsMatrix3 {
        Self::from(self.inner.compose(&other.inner))
    }

    /// Transform `(x, y)`, returning `[x', y']` unrounded.
    pub fn apply(&self, x: f64, y: f64) -> Vec<f64> {
        let p = self.inner.apply(Point2::new(x, y));
        vec![p.x, p.y]
    }

    /// The three rows as display strings with `precision` decimals.
    pub fn rows(&self, precision: usize) -> Vec<String> {
        matrix_rows(&self.inner, precision).to_vec()
    }
}

impl Default for JsMatrix3 {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Matrix3> for JsMatrix3 {
    fn from(inner: Matrix3) -> Self {
        Self { inner }
    }
}

impl JsMatrix3 {
    pub(crate) fn inner(&self) -> &Matrix3 {
        &self.inner
    }
}
