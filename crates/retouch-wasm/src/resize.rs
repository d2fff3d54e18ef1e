//! Resize WASM bindings.

use retouch_core::resize::{output_dimensions, resize, ResampleFilter, ResizeRequest};
use wasm_bindgen::prelude::*;

use crate::to_js_error;
use crate::types::JsPixelBuffer;

/// Compute the export size from the editor's sizing controls.
///
/// `request` is `{ width?, height?, scalePercent?, keepAspect? }`; a scale
/// other than 100 wins over explicit dimensions. Returns `[width, height]`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const [w, h] = compute_output_dimensions(img.width, img.height, { width: 800, keepAspect: true });
/// ```
#[wasm_bindgen]
pub fn compute_output_dimensions(
    src_width: u32,
    src_height: u32,
    request: JsValue,
) -> Result<Vec<u32>, JsValue> {
    let request: ResizeRequest = if request.is_undefined() || request.is_null() {
        ResizeRequest::default()
    } else {
        serde_wasm_bindgen::from_value(request).map_err(|e| {
            JsValue::from(js_sys::Error::new(&format!("Invalid resize request: {}", e)))
        })?
    };
    let (width, height) = output_dimensions(src_width, src_height, &request).map_err(to_js_error)?;
    Ok(vec![width, height])
}

/// Resize an image to exact dimensions.
///
/// # Arguments
///
/// * `image` - Source image
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
/// * `filter` - 0 = Nearest, 1 = Bilinear, 2 = Lanczos3 (other values: Bilinear)
#[wasm_bindgen]
pub fn resize_image(
    image: &JsPixelBuffer,
    width: u32,
    height: u32,
    filter: u8,
) -> Result<JsPixelBuffer, JsValue> {
    resize(image.buffer(), width, height, filter_from_u8(filter))
        .map(JsPixelBuffer::from_buffer)
        .map_err(to_js_error)
}

/// Convert a u8 filter value to the core ResampleFilter enum.
///
/// Any value other than 0 or 2 defaults to Bilinear.
fn filter_from_u8(value: u8) -> ResampleFilter {
    match value {
        0 => ResampleFilter::Nearest,
        2 => ResampleFilter::Lanczos3,
        _ => ResampleFilter::Bilinear,
    }
}
