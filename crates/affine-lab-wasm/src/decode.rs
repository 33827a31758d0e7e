//! Image loading WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, image_from_rgba } from '@affine-lab/wasm';
//!
//! // From a dropped file
//! const image = decode_image(new Uint8Array(await file.arrayBuffer()));
//!
//! // Or straight from a canvas
//! const data = ctx.getImageData(0, 0, canvas.width, canvas.height);
//! const same = image_from_rgba(data.width, data.height, new Uint8Array(data.data.buffer));
//! ```

use crate::types::JsDecodedImage;
use affine_lab_core::decode::{self, DecodedImage};
use wasm_bindgen::prelude::*;

/// Decode a PNG or JPEG file from bytes.
///
/// # Errors
///
/// Returns an error if the format is not recognized or the data is corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsDecodedImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Wrap an RGBA buffer (canvas `ImageData`), dropping alpha.
///
/// # Errors
///
/// Returns an error if the buffer length is not `width * height * 4`.
#[wasm_bindgen]
pub fn image_from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<JsDecodedImage, JsValue> {
    DecodedImage::from_rgba(width, height, rgba)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
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
    fn test_decode_invalid_bytes() {
        assert!(decode_image(&[0, 1, 2, 3]).is_err());
    }

    #[wasm_bindgen_test]
    fn test_image_from_rgba() {
        let img = image_from_rgba(1, 1, &[9, 8, 7, 255]).unwrap();
        assert_eq!(img.pixels(), vec![9, 8, 7]);
        assert!(image_from_rgba(2, 2, &[0; 3]).is_err());
    }
}
