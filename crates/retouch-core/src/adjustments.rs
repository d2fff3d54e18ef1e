//! Per-pixel color adjustment algorithms
//!
//! Applies the tonal adjustments and the selected filter to RGBA pixel data.
//! Alpha is never touched.
//!
//! ## Adjustment Order
//! 1. Brightness
//! 2. Contrast
//! 3. Saturation
//! 4. Filter (grayscale, sepia or invert)
//!
//! Every stage computes in `f64` and writes its result back as an 8-bit
//! channel: clamped to 0-255 and rounded half-to-even, the same store a
//! canvas `Uint8ClampedArray` performs. The next stage reads the quantized
//! values. Changing the order changes the output.

use crate::buffer::{PixelBuffer, CHANNELS};
use crate::color::Rgb;
use crate::{AdjustmentParams, Filter};

type Channels = (f64, f64, f64);

/// Apply the adjustments to every pixel of the buffer in place.
///
/// The caller validates `params` first; a contrast level at 259 has no
/// defined factor.
pub fn apply_adjustments(buffer: &mut PixelBuffer, params: &AdjustmentParams) {
    // Early exit if no adjustments
    if params.is_identity() {
        return;
    }

    let factor = contrast_factor(params.contrast_level);

    for chunk in buffer.pixels_mut().chunks_exact_mut(CHANNELS) {
        let adjusted = adjust_rgb(Rgb::new(chunk[0], chunk[1], chunk[2]), params, factor);
        chunk[0] = adjusted.r;
        chunk[1] = adjusted.g;
        chunk[2] = adjusted.b;
    }
}

/// Adjust a single RGB value.
pub fn adjust_pixel(pixel: Rgb, params: &AdjustmentParams) -> Rgb {
    adjust_rgb(pixel, params, contrast_factor(params.contrast_level))
}

/// Contrast multiplier for a contrast level.
///
/// Formula: `259 * (level + 255) / (255 * (259 - level))`.
/// Level 0 gives exactly 1.0.
#[inline]
pub fn contrast_factor(level: f32) -> f64 {
    let level = f64::from(level);
    (259.0 * (level + 255.0)) / (255.0 * (259.0 - level))
}

#[inline]
fn adjust_rgb(pixel: Rgb, params: &AdjustmentParams, contrast: f64) -> Rgb {
    let rgb = (f64::from(pixel.r), f64::from(pixel.g), f64::from(pixel.b));
    let rgb = quantize3(apply_brightness(rgb, f64::from(params.brightness)));
    let rgb = quantize3(apply_contrast(rgb, contrast));
    let rgb = quantize3(apply_saturation(rgb, f64::from(params.saturation)));
    let (r, g, b) = quantize3(apply_filter(rgb, params.filter));
    Rgb::new(r as u8, g as u8, b as u8)
}

/// Formula: `output = input * brightness`
#[inline]
fn apply_brightness((r, g, b): Channels, brightness: f64) -> Channels {
    (r * brightness, g * brightness, b * brightness)
}

/// Formula: `output = factor * (input - 128) + 128`
#[inline]
fn apply_contrast((r, g, b): Channels, factor: f64) -> Channels {
    let midpoint = 128.0;
    (
        factor * (r - midpoint) + midpoint,
        factor * (g - midpoint) + midpoint,
        factor * (b - midpoint) + midpoint,
    )
}

/// Luma used as the saturation pivot.
#[inline]
fn calculate_luma((r, g, b): Channels) -> f64 {
    0.2989 * r + 0.587 * g + 0.114 * b
}

/// Formula: `output = luma + saturation * (input - luma)`
#[inline]
fn apply_saturation(rgb: Channels, saturation: f64) -> Channels {
    let luma = calculate_luma(rgb);
    let (r, g, b) = rgb;
    (
        luma + saturation * (r - luma),
        luma + saturation * (g - luma),
        luma + saturation * (b - luma),
    )
}

#[inline]
fn apply_filter((r, g, b): Channels, filter: Filter) -> Channels {
    match filter {
        Filter::None => (r, g, b),
        Filter::Grayscale => {
            let avg = (r + g + b) / 3.0;
            (avg, avg, avg)
        }
        // Sepia output can exceed 255; quantization clamps it
        Filter::Sepia => (
            0.393 * r + 0.769 * g + 0.189 * b,
            0.349 * r + 0.686 * g + 0.168 * b,
            0.272 * r + 0.534 * g + 0.131 * b,
        ),
        Filter::Invert => (255.0 - r, 255.0 - g, 255.0 - b),
    }
}

#[inline]
fn quantize3((r, g, b): Channels) -> Channels {
    (quantize(r), quantize(g), quantize(b))
}

/// Store a channel as 8 bits: clamp to 0-255, round half to even.
#[inline]
fn quantize(value: f64) -> f64 {
    value.clamp(0.0, 255.0).round_ties_even()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(brightness: f32, contrast_level: f32, saturation: f32, filter: Filter) -> AdjustmentParams {
        AdjustmentParams {
            brightness,
            contrast_level,
            saturation,
            filter,
        }
    }

    fn adjust(r: u8, g: u8, b: u8, p: &AdjustmentParams) -> Rgb {
        adjust_pixel(Rgb::new(r, g, b), p)
    }

    // ===== Identity Tests =====

    #[test]
    fn test_identity_leaves_pixels_unchanged() {
        let p = AdjustmentParams::default();
        for &(r, g, b) in &[(0, 0, 0), (255, 255, 255), (200, 128, 100), (1, 254, 77)] {
            assert_eq!(adjust(r, g, b, &p), Rgb::new(r, g, b));
        }
    }

    #[test]
    fn test_contrast_factor_neutral() {
        assert_eq!(contrast_factor(0.0), 1.0);
        assert!(contrast_factor(100.0) > 1.0);
        assert!(contrast_factor(-100.0) < 1.0);
        assert_eq!(contrast_factor(-255.0), 0.0);
    }

    // ===== Brightness Tests =====

    #[test]
    fn test_brightness_zero_is_black() {
        let p = params(0.0, 0.0, 1.0, Filter::None);
        assert_eq!(adjust(200, 100, 50, &p), Rgb::BLACK);
    }

    #[test]
    fn test_brightness_zero_then_low_contrast_lifts_black() {
        // Contrast still runs on the zeroed values
        let p = params(0.0, -255.0, 1.0, Filter::None);
        assert_eq!(adjust(200, 100, 50, &p), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_brightness_doubles_and_clamps() {
        let p = params(2.0, 0.0, 1.0, Filter::None);
        assert_eq!(adjust(100, 200, 10, &p), Rgb::new(200, 255, 20));
    }

    // ===== Contrast Tests =====

    #[test]
    fn test_contrast_increase_spreads_from_midpoint() {
        let p = params(1.0, 100.0, 1.0, Filter::None);
        let dark = adjust(60, 60, 60, &p);
        let bright = adjust(200, 200, 200, &p);
        assert!(dark.r < 60);
        assert!(bright.r > 200);
        assert_eq!(adjust(128, 128, 128, &p), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_contrast_decrease_pulls_to_midpoint() {
        let p = params(1.0, -100.0, 1.0, Filter::None);
        let result = adjust(0, 128, 255, &p);
        assert!(result.r > 0);
        assert_eq!(result.g, 128);
        assert!(result.b < 255);
    }

    // ===== Saturation Tests =====

    #[test]
    fn test_saturation_zero_is_gray() {
        let p = params(1.0, 0.0, 0.0, Filter::None);
        let result = adjust(200, 128, 100, &p);
        assert_eq!(result.r, result.g);
        assert_eq!(result.g, result.b);
        // Luma of (200, 128, 100)
        assert_eq!(result.r, 146);
    }

    #[test]
    fn test_saturation_increase() {
        let p = params(1.0, 0.0, 2.0, Filter::None);
        let result = adjust(200, 128, 100, &p);
        let new_diff = result.r as i32 - result.b as i32;
        assert!(new_diff > 100, "Color difference should increase");
    }

    // ===== Filter Tests =====

    #[test]
    fn test_grayscale_averages() {
        let p = params(1.0, 0.0, 1.0, Filter::Grayscale);
        assert_eq!(adjust(30, 60, 90, &p), Rgb::new(60, 60, 60));
    }

    #[test]
    fn test_sepia_clamps_white() {
        let p = params(1.0, 0.0, 1.0, Filter::Sepia);
        // R and G sums exceed 255 for white
        let result = adjust(255, 255, 255, &p);
        assert_eq!(result.r, 255);
        assert_eq!(result.g, 255);
        assert_eq!(result.b, 239);
    }

    #[test]
    fn test_sepia_black_stays_black() {
        let p = params(1.0, 0.0, 1.0, Filter::Sepia);
        assert_eq!(adjust(0, 0, 0, &p), Rgb::BLACK);
    }

    #[test]
    fn test_invert() {
        let p = params(1.0, 0.0, 1.0, Filter::Invert);
        assert_eq!(adjust(0, 100, 255, &p), Rgb::new(255, 155, 0));
    }

    #[test]
    fn test_filter_runs_after_tonal_stages() {
        // Brightness first zeroes the pixel, invert then makes it white
        let p = params(0.0, 0.0, 1.0, Filter::Invert);
        assert_eq!(adjust(10, 20, 30, &p), Rgb::WHITE);
    }

    // ===== Quantization Tests =====

    #[test]
    fn test_each_stage_stores_rounded_channels() {
        // Contrast 30 stores (0, 2, 36); the average of those is 12.67 -> 13.
        // Averaging the unrounded (0, 1.59, 35.72) would give 12.
        let p = params(1.0, 30.0, 1.0, Filter::Grayscale);
        assert_eq!(adjust(0, 28, 55, &p), Rgb::new(13, 13, 13));
    }

    #[test]
    fn test_halves_round_to_even() {
        let p = params(0.5, 0.0, 1.0, Filter::None);
        assert_eq!(adjust(5, 7, 1, &p), Rgb::new(2, 4, 0));
    }

    #[test]
    fn test_brightness_result_quantized_before_filter() {
        // 2.5 is stored as 2, so invert yields 253 rather than 252.5
        let p = params(0.5, 0.0, 1.0, Filter::Invert);
        assert_eq!(adjust(5, 5, 5, &p), Rgb::new(253, 253, 253));
    }

    // ===== Buffer Tests =====

    #[test]
    fn test_apply_adjustments_preserves_alpha() {
        let mut buf = PixelBuffer::new(2, 1, vec![10, 20, 30, 77, 40, 50, 60, 0]).unwrap();
        apply_adjustments(&mut buf, &params(1.0, 0.0, 1.0, Filter::Invert));
        assert_eq!(buf.pixels(), &[245, 235, 225, 77, 215, 205, 195, 0]);
    }

    #[test]
    fn test_apply_adjustments_matches_adjust_pixel() {
        let p = params(1.3, 40.0, 0.7, Filter::Sepia);
        let mut buf = PixelBuffer::new(2, 1, vec![12, 200, 90, 255, 250, 3, 128, 255]).unwrap();
        apply_adjustments(&mut buf, &p);
        assert_eq!(buf.rgb_at(0, 0), adjust(12, 200, 90, &p));
        assert_eq!(buf.rgb_at(1, 0), adjust(250, 3, 128, &p));
    }

    #[test]
    fn test_apply_adjustments_identity_is_noop() {
        let original = vec![1, 2, 3, 4, 250, 251, 252, 253];
        let mut buf = PixelBuffer::new(2, 1, original.clone()).unwrap();
        apply_adjustments(&mut buf, &AdjustmentParams::default());
        assert_eq!(buf.pixels(), original.as_slice());
    }
}
