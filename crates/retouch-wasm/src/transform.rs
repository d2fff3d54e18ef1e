//! WASM bindings for geometric buffer operations.
//!
//! These apply the crop box and orientation chosen in the editor before the
//! image goes through the pixel pipeline.

use retouch_core::transform::{crop, flip, rotate, CropRect, FlipAxis, QuarterTurn};
use wasm_bindgen::prelude::*;

use crate::to_js_error;
use crate::types::JsPixelBuffer;

/// Crop an image to a pixel rectangle.
///
/// # Errors
///
/// Throws if the rectangle is empty or extends past the image.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const { x, y, width, height } = cropper.getData(true);
/// const cropped = crop_image(image, x, y, width, height);
/// ```
#[wasm_bindgen]
pub fn crop_image(
    image: &JsPixelBuffer,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Result<JsPixelBuffer, JsValue> {
    crop(image.buffer(), CropRect::new(x, y, width, height))
        .map(JsPixelBuffer::from_buffer)
        .map_err(to_js_error)
}

/// Rotate an image clockwise by a multiple of 90 degrees.
///
/// Negative angles rotate counter-clockwise (`-90` equals `270`).
#[wasm_bindgen]
pub fn rotate_image(image: &JsPixelBuffer, degrees: i32) -> Result<JsPixelBuffer, JsValue> {
    rotate(image.buffer(), QuarterTurn::from(degrees))
        .map(JsPixelBuffer::from_buffer)
        .map_err(to_js_error)
}

/// Mirror an image horizontally (`true`) or vertically (`false`).
#[wasm_bindgen]
pub fn flip_image(image: &JsPixelBuffer, horizontal: bool) -> Result<JsPixelBuffer, JsValue> {
    flip(image.buffer(), axis_from_bool(horizontal))
        .map(JsPixelBuffer::from_buffer)
        .map_err(to_js_error)
}

fn axis_from_bool(horizontal: bool) -> FlipAxis {
    if horizontal {
        FlipAxis::Horizontal
    } else {
        FlipAxis::Vertical
    }
}
