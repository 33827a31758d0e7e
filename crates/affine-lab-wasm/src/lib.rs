//! Affine Lab WASM - WebAssembly bindings for Affine Lab
//!
//! This crate exposes the affine-lab-core matrices, filters and walkthrough
//! to the browser page.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrappers for images and matrices
//! - `decode` - Image decoding bindings (PNG, JPEG, canvas RGBA)
//! - `matrix` - Matrix builders and selector-driven construction
//! - `filter` - Grayscale and negative filters
//! - `sweep` - Progressive row-by-row application
//! - `wizard` - The five-step guided walkthrough
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, JsWizard } from '@affine-lab/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const wizard = new JsWizard(image.width, image.height);
//! wizard.set_kind("reflectX", "", "", "", "", "");
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod filter;
mod matrix;
mod sweep;
mod types;
mod wizard;

// Re-export public types
pub use decode::{decode_image, image_from_rgba};
pub use filter::{apply_filter, grayscale, negative};
pub use matrix::{
    matrix_for_kind, reflect_x, reflect_y, rotate_around_center, rotation, scale,
    scale_around_center, translation, vector_text,
};
pub use sweep::JsRowSweep;
pub use types::{JsDecodedImage, JsMatrix3};
pub use wizard::JsWizard;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&format!("affine-lab-wasm {} ready", version()).into());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_version_matches_package() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }
}
