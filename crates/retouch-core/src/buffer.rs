//! RGBA8 pixel buffer handed between the editor and the pipeline.

use crate::color::Rgb;
use crate::error::{ProcessError, Result};

/// Bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// A decoded image with RGBA pixel data.
///
/// The buffer is validated on construction: both dimensions are non-zero and
/// the data holds exactly `width * height * 4` bytes in row-major R,G,B,A order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap RGBA pixel data, rejecting a length that does not match the dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        check_dimensions(width, height, pixels.len())?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a buffer filled with a single opaque color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self> {
        let count = expected_len(width, height).ok_or(ProcessError::InvalidDimensions {
            width,
            height,
            len: 0,
        })? / CHANNELS;
        let mut pixels = Vec::with_capacity(count * CHANNELS);
        for _ in 0..count {
            pixels.extend_from_slice(&[color.r, color.g, color.b, 255]);
        }
        Self::new(width, height, pixels)
    }

    /// Create from an `image::RgbaImage`.
    pub fn from_rgba_image(img: image::RgbaImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }

    /// Convert to an `image::RgbaImage` for resampling and orientation changes.
    pub fn to_rgba_image(&self) -> Result<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .ok_or_else(|| ProcessError::Resample("Failed to create RgbaImage".to_string()))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.pixels.len() / CHANNELS
    }

    /// Byte offset of the pixel at `(x, y)`.
    #[inline]
    pub fn index_of(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// RGB of the pixel at `(x, y)`.
    #[inline]
    pub fn rgb_at(&self, x: u32, y: u32) -> Rgb {
        let idx = self.index_of(x, y);
        Rgb::new(self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2])
    }

    /// Alpha of the pixel at `(x, y)`.
    #[inline]
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.pixels[self.index_of(x, y) + 3]
    }

    /// Check for any fully transparent pixel.
    pub fn has_transparency(&self) -> bool {
        self.pixels.chunks_exact(CHANNELS).any(|px| px[3] == 0)
    }
}

/// `width * height * 4`, or `None` on a zero dimension or overflow.
fn expected_len(width: u32, height: u32) -> Option<usize> {
    if width == 0 || height == 0 {
        return None;
    }
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(CHANNELS)
}

/// Validate that `len` bytes describe a `width x height` RGBA image.
pub fn check_dimensions(width: u32, height: u32, len: usize) -> Result<()> {
    match expected_len(width, height) {
        Some(expected) if expected == len => Ok(()),
        _ => Err(ProcessError::InvalidDimensions { width, height, len }),
    }
}
