//! Color filter WASM bindings.
//!
//! Single-pixel functions return plain arrays so the explanation panel can
//! show the arithmetic; [`apply_filter`] processes a whole image at once.

use crate::types::JsDecodedImage;
use affine_lab_core::filter::{self, ColorFilter};
use affine_lab_core::sweep;
use wasm_bindgen::prelude::*;

/// Parse a filter selector tag (`"grayscale"` or `"negative"`).
pub(crate) fn filter_from_tag(tag: &str) -> Option<ColorFilter> {
    match tag {
        "grayscale" => Some(ColorFilter::Grayscale),
        "negative" => Some(ColorFilter::Negative),
        _ => None,
    }
}

/// Grayscale of one pixel: `[I, I, I]` with `I = 0.3·R + 0.59·G + 0.11·B`, unrounded.
#[wasm_bindgen]
pub fn grayscale(r: u8, g: u8, b: u8) -> Vec<f64> {
    filter::grayscale([r, g, b]).to_vec()
}

/// Negative of one pixel: `[255 - R, 255 - G, 255 - B]`.
#[wasm_bindgen]
pub fn negative(r: u8, g: u8, b: u8) -> Vec<u8> {
    filter::negative([r, g, b]).to_vec()
}

/// Apply a filter by tag to every pixel of an image.
///
/// # Errors
///
/// Returns an error if `tag` is not a filter.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const gray = apply_filter(sourceImage, "grayscale");
/// ctx.putImageData(new ImageData(new Uint8ClampedArray(gray.rgba()), gray.width), 0, 0);
/// ```
#[wasm_bindgen]
pub fn apply_filter(image: &JsDecodedImage, tag: &str) -> Result<JsDecodedImage, JsValue> {
    let filter = filter_from_tag(tag)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown filter: {}", tag)))?;
    let result = sweep::apply_filter(&image.to_decoded(), filter);
    Ok(JsDecodedImage::from_decoded(result))
}


/// WASM-specific tests that require JsValue.
///
/// Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_apply_filter_unknown_tag() {
        let img = JsDecodedImage::new(1, 1, vec![1, 2, 3]).unwrap();
        assert!(apply_filter(&img, "sepia").is_err());
    }
}
