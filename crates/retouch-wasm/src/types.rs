//! WASM-compatible wrapper types for image data.
//!
//! This module provides a JavaScript-friendly wrapper around the core
//! `PixelBuffer`, handling the conversion between Rust and JavaScript data
//! representations.

use retouch_core::PixelBuffer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::Clamped;

use crate::to_js_error;

/// An RGBA pixel buffer wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`. For the preview loop, prefer
/// `to_image_data()`, which hands the canvas an `ImageData` in one step.
#[wasm_bindgen]
pub struct JsPixelBuffer {
    inner: PixelBuffer,
}

#[wasm_bindgen]
impl JsPixelBuffer {
    /// Create a new JsPixelBuffer from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order), as
    ///   returned by `CanvasRenderingContext2D.getImageData`
    ///
    /// # Errors
    /// Throws if `pixels.length != width * height * 4` or a dimension is zero.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsPixelBuffer, JsValue> {
        PixelBuffer::new(width, height, pixels)
            .map(Self::from_buffer)
            .map_err(to_js_error)
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels().len()
    }

    /// Returns RGBA pixel data as Uint8Array (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels().to_vec()
    }

    /// Build an `ImageData` ready for `putImageData`.
    pub fn to_image_data(&self) -> Result<web_sys::ImageData, JsValue> {
        web_sys::ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(self.inner.pixels()),
            self.inner.width(),
            self.inner.height(),
        )
    }

    /// Check whether any pixel is fully transparent.
    pub fn has_transparency(&self) -> bool {
        self.inner.has_transparency()
    }
}

impl JsPixelBuffer {
    pub(crate) fn from_buffer(inner: PixelBuffer) -> Self {
        Self { inner }
    }

    pub(crate) fn buffer(&self) -> &PixelBuffer {
        &self.inner
    }
}
