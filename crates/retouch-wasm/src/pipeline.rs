//! Pixel pipeline WASM bindings.
//!
//! The preview and the export both call [`process_image`] with the same
//! parameter objects, so the downloaded file matches what the user saw.
//!
//! Parameter objects use camelCase keys. Missing keys take their defaults,
//! and `undefined`/`null` stands for "all defaults":
//!
//! ```typescript
//! const adjustments = { brightness: 1.0, contrastLevel: 0, saturation: 1.0, filter: 'none' };
//! const background = { targetColor: '#ffffff', tolerancePercent: 10, edgesOnly: true };
//! ```

use retouch_core::{
    process_copy, AdjustmentParams, BackgroundRemovalParams, ExportFormat, PixelBuffer,
    ProcessError, ProcessOutcome, Rgb,
};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use crate::to_js_error;
use crate::types::JsPixelBuffer;

/// Result of a pipeline run: the processed image plus its transparency report.
#[wasm_bindgen]
pub struct JsProcessResult {
    image: PixelBuffer,
    outcome: ProcessOutcome,
}

#[wasm_bindgen]
impl JsProcessResult {
    /// The processed image (copied out of the result).
    #[wasm_bindgen(getter)]
    pub fn image(&self) -> JsPixelBuffer {
        JsPixelBuffer::from_buffer(self.image.clone())
    }

    /// True if background removal ran and left transparent pixels.
    /// The exporter must then write PNG.
    #[wasm_bindgen(getter)]
    pub fn had_transparency(&self) -> bool {
        self.outcome.had_transparency
    }

    /// Number of pixels made transparent by this run.
    #[wasm_bindgen(getter)]
    pub fn cleared_pixels(&self) -> usize {
        self.outcome.cleared_pixels
    }

    /// Whether background removal was requested at all.
    #[wasm_bindgen(getter)]
    pub fn masking_applied(&self) -> bool {
        self.outcome.masking_applied
    }
}

/// Apply adjustments, filter and background removal to an image.
///
/// The source image is left untouched so the preview can re-run on every
/// slider change.
///
/// # Errors
///
/// Throws an `Error` if a parameter object cannot be read, a value is out of
/// range (e.g. `contrastLevel >= 255`, `tolerancePercent > 100`) or
/// `targetColor` is not `#RRGGBB`.
#[wasm_bindgen]
pub fn process_image(
    image: &JsPixelBuffer,
    adjustments: JsValue,
    background: JsValue,
) -> Result<JsProcessResult, JsValue> {
    let adjustments: AdjustmentParams = params_from_js(adjustments, "adjustments")?;
    let background: BackgroundRemovalParams = params_from_js(background, "background")?;
    run(image.buffer(), &adjustments, &background).map_err(to_js_error)
}

/// Parse a `#RRGGBB` color into `[r, g, b]`.
#[wasm_bindgen]
pub fn parse_hex_color(hex: &str) -> Result<Vec<u8>, JsValue> {
    let color = Rgb::from_hex(hex).map_err(to_js_error)?;
    Ok(vec![color.r, color.g, color.b])
}

/// Pick the format to encode with: PNG when the image gained transparency,
/// the requested format (`png`, `jpeg`/`jpg`, `webp`) otherwise.
#[wasm_bindgen]
pub fn resolve_export_format(requested: &str, had_transparency: bool) -> Result<String, JsValue> {
    resolve_format(requested, had_transparency)
        .map(|format| format.extension().to_string())
        .map_err(to_js_error)
}

fn run(
    source: &PixelBuffer,
    adjustments: &AdjustmentParams,
    background: &BackgroundRemovalParams,
) -> Result<JsProcessResult, ProcessError> {
    let (image, outcome) = process_copy(source, adjustments, background)?;
    Ok(JsProcessResult { image, outcome })
}

fn resolve_format(requested: &str, had_transparency: bool) -> Result<ExportFormat, ProcessError> {
    Ok(requested.parse::<ExportFormat>()?.resolve(had_transparency))
}

/// Deserialize a parameter object, treating `undefined`/`null` as defaults.
fn params_from_js<T: DeserializeOwned + Default>(value: JsValue, what: &str) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        JsValue::from(js_sys::Error::new(&format!("Invalid {} parameters: {}", what, e)))
    })
}
