//! Image cropping in pixel coordinates.

use serde::{Deserialize, Serialize};

use crate::buffer::{PixelBuffer, CHANNELS};
use crate::error::{ProcessError, Result};

/// A crop region in source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Copy the region `rect` out of `buffer`.
///
/// # Errors
///
/// `InvalidParameter` if the rectangle is empty or extends past the buffer.
/// Rectangles are never clamped.
pub fn crop(buffer: &PixelBuffer, rect: CropRect) -> Result<PixelBuffer> {
    if rect.width == 0 || rect.height == 0 {
        return Err(ProcessError::invalid_parameter(
            "crop",
            0.0,
            "width and height must be at least 1",
        ));
    }
    let right = rect.x as u64 + rect.width as u64;
    let bottom = rect.y as u64 + rect.height as u64;
    if right > buffer.width() as u64 {
        return Err(ProcessError::invalid_parameter(
            "crop.x + crop.width",
            right as f64,
            "extends past the image width",
        ));
    }
    if bottom > buffer.height() as u64 {
        return Err(ProcessError::invalid_parameter(
            "crop.y + crop.height",
            bottom as f64,
            "extends past the image height",
        ));
    }

    // Fast path: full crop returns a clone
    if rect.width == buffer.width() && rect.height == buffer.height() {
        return Ok(buffer.clone());
    }

    let row_bytes = rect.width as usize * CHANNELS;
    let mut output = Vec::with_capacity(row_bytes * rect.height as usize);

    // Copy pixel data row by row
    for y in rect.y..rect.y + rect.height {
        let start = buffer.index_of(rect.x, y);
        output.extend_from_slice(&buffer.pixels()[start..start + row_bytes]);
    }

    PixelBuffer::new(rect.width, rect.height, output)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
