//! The pixel pipeline shared by the live preview and the export.
//!
//! # Stage Order
//!
//! 1. Validate the buffer and all parameters (nothing is mutated on failure)
//! 2. Color adjustments on every pixel
//! 3. Background removal, once, if requested
//!
//! The pipeline holds no state between calls. Calling it twice with the same
//! buffer and parameters produces byte-identical output, which is what keeps
//! the preview and the exported file in agreement.

use serde::{Deserialize, Serialize};

use crate::adjustments::apply_adjustments;
use crate::buffer::{check_dimensions, PixelBuffer};
use crate::error::Result;
use crate::mask::remove_background;
use crate::{AdjustmentParams, BackgroundRemovalParams};

/// What a pipeline run did to the alpha channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessOutcome {
    /// Background removal ran (color not white, or tolerance above zero)
    pub masking_applied: bool,
    /// Pixels whose alpha this run changed to 0
    pub cleared_pixels: usize,
    /// Background removal ran and the output has at least one transparent pixel
    pub had_transparency: bool,
}

/// Run the full pipeline on `buffer` in place.
///
/// # Errors
///
/// - `InvalidDimensions` if the buffer no longer matches its dimensions
/// - `InvalidParameter` for any out-of-range adjustment or tolerance
pub fn process(
    buffer: &mut PixelBuffer,
    adjustments: &AdjustmentParams,
    background: &BackgroundRemovalParams,
) -> Result<ProcessOutcome> {
    check_dimensions(buffer.width(), buffer.height(), buffer.pixels().len())?;
    adjustments.validate()?;
    background.validate()?;

    apply_adjustments(buffer, adjustments);

    if !background.is_enabled() {
        log::debug!("background removal disabled, alpha left untouched");
        return Ok(ProcessOutcome::default());
    }

    let cleared_pixels = remove_background(buffer, background);
    Ok(ProcessOutcome {
        masking_applied: true,
        cleared_pixels,
        had_transparency: buffer.has_transparency(),
    })
}

/// Run the pipeline on a copy, leaving `source` untouched.
///
/// Used by the preview, which re-renders from the same source on every
/// parameter change.
pub fn process_copy(
    source: &PixelBuffer,
    adjustments: &AdjustmentParams,
    background: &BackgroundRemovalParams,
) -> Result<(PixelBuffer, ProcessOutcome)> {
    let mut output = source.clone();
    let outcome = process(&mut output, adjustments, background)?;
    Ok((output, outcome))
}
