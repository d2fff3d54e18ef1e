//! Retouch Core - Pixel pipeline for the Retouch image editor
//!
//! This crate provides the pixel-level processing behind the editor:
//! brightness/contrast/saturation adjustments, stylistic filters, background
//! removal by color, and the buffer operations around them (crop, rotate,
//! flip, resize).
//!
//! The live preview and the final export call the same [`pipeline::process`]
//! function with the same parameters, so both produce identical pixels.

pub mod adjustments;
pub mod buffer;
pub mod color;
pub mod error;
pub mod export;
pub mod mask;
pub mod pipeline;
pub mod resize;
pub mod transform;

pub use buffer::PixelBuffer;
pub use color::{is_color_similar, Rgb};
pub use error::{ProcessError, Result};
pub use export::ExportFormat;
pub use pipeline::{process, process_copy, ProcessOutcome};

use serde::{Deserialize, Serialize};

/// Largest contrast level accepted from the editor. The contrast factor is
/// singular at 259.
pub const MAX_CONTRAST_LEVEL: f32 = 254.0;

/// Smallest contrast level accepted (factor 0, every channel collapses to 128).
pub const MIN_CONTRAST_LEVEL: f32 = -255.0;

/// Stylistic filter applied after the tonal adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    None,
    Grayscale,
    Sepia,
    Invert,
}

/// Tonal adjustments applied to every pixel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdjustmentParams {
    /// Brightness multiplier (0.0 = black, 1.0 = unchanged)
    pub brightness: f32,
    /// Contrast level (0 = neutral, -255 to 254)
    pub contrast_level: f32,
    /// Saturation multiplier (0.0 = gray, 1.0 = unchanged)
    pub saturation: f32,
    /// Filter applied after brightness, contrast and saturation
    pub filter: Filter,
}

impl Default for AdjustmentParams {
    fn default() -> Self {
        Self {
            brightness: 1.0,
            contrast_level: 0.0,
            saturation: 1.0,
            filter: Filter::None,
        }
    }
}

impl AdjustmentParams {
    /// Create adjustments with identity values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if applying these adjustments leaves every pixel unchanged
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Reject values outside their accepted ranges.
    pub fn validate(&self) -> Result<()> {
        non_negative("brightness", self.brightness)?;
        non_negative("saturation", self.saturation)?;

        let level = self.contrast_level;
        if !level.is_finite() {
            return Err(ProcessError::invalid_parameter(
                "contrastLevel",
                level,
                "must be finite",
            ));
        }
        if level > MAX_CONTRAST_LEVEL {
            return Err(ProcessError::invalid_parameter(
                "contrastLevel",
                level,
                "must be <= 254 (contrast factor is singular at 259)",
            ));
        }
        if level < MIN_CONTRAST_LEVEL {
            return Err(ProcessError::invalid_parameter(
                "contrastLevel",
                level,
                "must be >= -255",
            ));
        }
        Ok(())
    }
}

/// Background removal settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackgroundRemovalParams {
    /// Color to cut out
    pub target_color: Rgb,
    /// Similarity tolerance (0 to 100)
    pub tolerance_percent: f32,
    /// Only remove matching regions connected to the image border
    pub edges_only: bool,
}

impl Default for BackgroundRemovalParams {
    fn default() -> Self {
        Self {
            target_color: Rgb::WHITE,
            tolerance_percent: 0.0,
            edges_only: true,
        }
    }
}

impl BackgroundRemovalParams {
    pub fn new(target_color: Rgb, tolerance_percent: f32, edges_only: bool) -> Self {
        Self {
            target_color,
            tolerance_percent,
            edges_only,
        }
    }

    /// Whether the editor has asked for background removal at all.
    ///
    /// Masking runs when the color differs from white or the tolerance is
    /// above zero. White with a positive tolerance still masks.
    pub fn is_enabled(&self) -> bool {
        self.target_color != Rgb::WHITE || self.tolerance_percent > 0.0
    }

    /// Reject a tolerance outside 0..=100.
    pub fn validate(&self) -> Result<()> {
        let tol = self.tolerance_percent;
        if !tol.is_finite() || !(0.0..=100.0).contains(&tol) {
            return Err(ProcessError::invalid_parameter(
                "tolerancePercent",
                tol,
                "must be between 0 and 100",
            ));
        }
        Ok(())
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ProcessError::invalid_parameter(
            name,
            value,
            "must be a finite value >= 0",
        ));
    }
    Ok(())
}
