//! Progressive sweep WASM bindings.
//!
//! A sweep processes a few rows per `tick()`. Drive it from whatever scheduler
//! the page uses:
//!
//! ```typescript
//! const sweep = JsRowSweep.geometry(image, matrix, 4);
//! const timer = setInterval(() => {
//!   sweep.tick();
//!   draw(sweep.image());
//!   status.textContent = `Row ${sweep.rows_done} of ${sweep.total_rows}`;
//!   if (sweep.is_finished) clearInterval(timer);
//! }, 28);
//! ```

use crate::filter::filter_from_tag;
use crate::types::{JsDecodedImage, JsMatrix3};
use affine_lab_core::sweep::{RowSweep, SweepOp};
use wasm_bindgen::prelude::*;

/// A resumable whole-image sweep.
#[wasm_bindgen]
pub struct JsRowSweep {
    inner: RowSweep,
}

#[wasm_bindgen]
impl JsRowSweep {
    /// Forward-map every pixel through `matrix`.
    pub fn geometry(image: &JsDecodedImage, matrix: &JsMatrix3, rows_per_tick: u32) -> JsRowSweep {
        let op = SweepOp::Geometry(*matrix.inner());
        Self::from(RowSweep::new(image.to_decoded(), op, rows_per_tick))
    }

    /// Filter every pixel with the filter named by `tag`.
    ///
    /// # Errors
    ///
    /// Returns an error if `tag` is not a filter.
    pub fn filter(
        image: &JsDecodedImage,
        tag: &str,
        rows_per_tick: u32,
    ) -> Result<JsRowSweep, JsValue> {
        let filter = filter_from_tag(tag)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown filter: {}", tag)))?;
        let op = SweepOp::Filter(filter);
        Ok(Self::from(RowSweep::new(image.to_decoded(), op, rows_per_tick)))
    }

    /// Process the next rows; returns the number of rows done so far.
    pub fn tick(&mut self) -> u32 {
        self.inner.tick().rows_done
    }

    /// Process every remaining row.
    pub fn run_to_end(&mut self) {
        self.inner.run_to_end();
    }

    #[wasm_bindgen(getter)]
    pub fn rows_done(&self) -> u32 {
        self.inner.progress().rows_done
    }

    #[wasm_bindgen(getter)]
    pub fn total_rows(&self) -> u32 {
        self.inner.progress().total_rows
    }

    #[wasm_bindgen(getter)]
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }

    /// Snapshot of the output processed so far.
    pub fn image(&self) -> JsDecodedImage {
        JsDecodedImage::from_decoded(self.inner.output().clone())
    }
}

impl From<RowSweep> for JsRowSweep {
    fn from(inner: RowSweep) -> Self {
        Self { inner }
    }
}
