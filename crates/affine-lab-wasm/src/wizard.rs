//! Guided walkthrough WASM bindings.
//!
//! `JsWizard` holds the walkthrough state so the page keeps no globals of
//! its own. Each step is rendered from the plain object `explain()` returns:
//!
//! ```typescript
//! const wizard = new JsWizard(image.width, image.height);
//! wizard.set_kind("rotate", angleInput.value, "", "", "", "");
//! wizard.next();
//! const outcome = wizard.explain(image); // { type: "matrix", matrix: [[...], ...] }
//! ```

use crate::sweep::JsRowSweep;
use crate::types::{JsDecodedImage, JsMatrix3};
use affine_lab_core::kind::{TransformKind, TransformParams};
use affine_lab_core::sweep::SweepConfig;
use affine_lab_core::wizard::{AnimationConfig, Wizard};
use wasm_bindgen::prelude::*;

/// Helper struct for deserializing the form state via serde.
///
/// `{ kind: "scale", scale_x: "2", scale_y: "0.5" }`; missing inputs read as empty.
#[derive(serde::Deserialize)]
struct KindInput {
    kind: String,
    #[serde(flatten)]
    params: TransformParams,
}

/// Walkthrough state for one loaded image.
#[wasm_bindgen]
pub struct JsWizard {
    inner: Wizard,
    sweep_config: SweepConfig,
    animation: AnimationConfig,
}

#[wasm_bindgen]
impl JsWizard {
    /// Start on step 0 with the image center selected and a 0° rotation.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> JsWizard {
        let animation = AnimationConfig::default();
        JsWizard {
            inner: Wizard::new(width, height, TransformKind::default()).with_animation(animation),
            sweep_config: SweepConfig::default(),
            animation,
        }
    }

    /// Select the operation by tag, reading its parameters from raw inputs.
    ///
    /// Malformed numbers fall back to their defaults. Restarts at step 0.
    ///
    /// # Errors
    ///
    /// Returns an error for a tag that names no operation.
    pub fn set_kind(
        &mut self,
        tag: &str,
        angle: &str,
        scale_x: &str,
        scale_y: &str,
        tx: &str,
        ty: &str,
    ) -> Result<(), JsValue> {
        let params = TransformParams {
            angle: angle.to_string(),
            scale_x: scale_x.to_string(),
            scale_y: scale_y.to_string(),
            tx: tx.to_string(),
            ty: ty.to_string(),
        };
        let kind = TransformKind::from_tag(tag, &params)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner.set_kind(kind);
        Ok(())
    }

    /// Like [`JsWizard::set_kind`], reading the tag and inputs from one object.
    ///
    /// # Errors
    ///
    /// Returns an error if the object is malformed or names no operation.
    pub fn set_kind_from(&mut self, input: JsValue) -> Result<(), JsValue> {
        let input: KindInput = serde_wasm_bindgen::from_value(input)
            .map_err(|e| JsValue::from_str(&format!("Invalid kind input: {}", e)))?;
        let kind = TransformKind::from_tag(&input.kind, &input.params)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner.set_kind(kind);
        Ok(())
    }

    /// The selector tag of the current operation.
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> String {
        self.inner.kind().tag().to_string()
    }

    /// Current step index (0 to 4).
    #[wasm_bindgen(getter)]
    pub fn step(&self) -> usize {
        self.inner.step().index()
    }

    #[wasm_bindgen(getter)]
    pub fn can_go_back(&self) -> bool {
        self.inner.can_go_back()
    }

    pub fn next(&mut self) -> usize {
        self.inner.next().index()
    }

    pub fn prev(&mut self) -> usize {
        self.inner.prev().index()
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Select the pixel under a click (canvas coordinates), clamped to the
    /// image. Returns `[x, y]` and restarts at step 0.
    pub fn select_pixel(&mut self, x: f64, y: f64) -> Vec<u32> {
        let (sx, sy) = self.inner.select_pixel(x.floor() as i64, y.floor() as i64);
        vec![sx, sy]
    }

    /// The selected pixel as `[x, y]`.
    pub fn selected(&self) -> Vec<u32> {
        let (x, y) = self.inner.selected();
        vec![x, y]
    }

    /// The current matrix, `undefined` for filters.
    pub fn matrix(&self) -> Option<JsMatrix3> {
        self.inner.matrix().map(JsMatrix3::from)
    }

    /// The current step as a plain object tagged by `type`.
    ///
    /// # Errors
    ///
    /// Returns an error if the outcome cannot be converted to a JS value.
    pub fn explain(&self, image: &JsDecodedImage) -> Result<JsValue, JsValue> {
        let outcome = self.inner.explain(&image.to_decoded());
        serde_wasm_bindgen::to_value(&outcome).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The sweep for the current step, `undefined` when the step has none.
    pub fn sweep(&self, image: &JsDecodedImage) -> Option<JsRowSweep> {
        self.inner
            .sweep(&image.to_decoded(), &self.sweep_config)
            .map(JsRowSweep::from)
    }

    /// Suggested delay between sweep ticks in milliseconds.
    #[wasm_bindgen(getter)]
    pub fn tick_interval_ms(&self) -> u32 {
        self.sweep_config.tick_interval_ms
    }

    /// Suggested delay between animation frames in milliseconds.
    #[wasm_bindgen(getter)]
    pub fn frame_interval_ms(&self) -> u32 {
        self.animation.frame_interval_ms
    }
}
