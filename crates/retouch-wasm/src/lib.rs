//! Retouch WASM - WebAssembly bindings for Retouch
//!
//! This crate exposes the retouch-core pixel pipeline to the browser editor.
//! The editor decodes files, draws the crop box and encodes the download;
//! everything between a decoded RGBA buffer and the final pixels runs here.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for RGBA pixel buffers
//! - `pipeline` - Adjustments, filters and background removal
//! - `transform` - Crop, quarter-turn rotation and flips
//! - `resize` - Output sizing and resampling
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsPixelBuffer, process_image, resolve_export_format } from '@retouch/wasm';
//!
//! await init();
//!
//! const data = ctx.getImageData(0, 0, canvas.width, canvas.height);
//! const image = new JsPixelBuffer(data.width, data.height, new Uint8Array(data.data.buffer));
//!
//! const result = process_image(
//!   image,
//!   { brightness: 1.2, contrastLevel: 40, saturation: 1.0, filter: 'sepia' },
//!   { targetColor: '#ffffff', tolerancePercent: 10, edgesOnly: true },
//! );
//! ctx.putImageData(result.image.to_image_data(), 0, 0);
//! const format = resolve_export_format('jpeg', result.had_transparency);
//! ```

use retouch_core::ProcessError;
use wasm_bindgen::prelude::*;

mod pipeline;
mod resize;
mod transform;
mod types;

// Re-export public types
pub use pipeline::{parse_hex_color, process_image, resolve_export_format, JsProcessResult};
pub use resize::{compute_output_dimensions, resize_image};
pub use transform::{crop_image, flip_image, rotate_image};
pub use types::JsPixelBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed, e.g. on a second init
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("retouch-wasm {} ready", version());
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Convert a core error into a JavaScript `Error`.
pub(crate) fn to_js_error(err: ProcessError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
