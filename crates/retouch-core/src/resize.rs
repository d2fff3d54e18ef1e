//! Output sizing and resampling.
//!
//! The editor lets the user pick an export size as a scale percentage or as
//! an explicit width and/or height, optionally keeping the aspect ratio.
//! [`output_dimensions`] turns those inputs into pixel dimensions and
//! [`resize`] resamples the buffer with the `image` crate.

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::error::{ProcessError, Result};

/// Filter type for resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResampleFilter {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl ResampleFilter {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            ResampleFilter::Nearest => image::imageops::FilterType::Nearest,
            ResampleFilter::Bilinear => image::imageops::FilterType::Triangle,
            ResampleFilter::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Requested output size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResizeRequest {
    /// Target width in pixels
    pub width: Option<u32>,
    /// Target height in pixels
    pub height: Option<u32>,
    /// Scale in percent; any value other than 100 overrides width/height
    pub scale_percent: Option<f32>,
    /// Derive a missing width or height from the source aspect ratio
    pub keep_aspect: bool,
}

impl Default for ResizeRequest {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            scale_percent: None,
            keep_aspect: true,
        }
    }
}

impl ResizeRequest {
    /// Scale both dimensions by a percentage.
    pub fn scale(percent: f32) -> Self {
        Self {
            scale_percent: Some(percent),
            ..Self::default()
        }
    }
}

/// Largest output, in pixels, that sizing will produce (1 GiB of RGBA).
pub const MAX_OUTPUT_PIXELS: u64 = 1 << 28;

/// Compute the output size for a `src_width x src_height` image.
///
/// # Rules
///
/// 1. A scale percent other than 100 scales both dimensions.
/// 2. Otherwise explicit width/height are used. With `keep_aspect`, a single
///    given dimension determines the other; without it, the missing one stays
///    at the source size.
/// 3. With nothing requested, the source size is returned.
///
/// Results are rounded and never below 1.
///
/// # Errors
///
/// `InvalidParameter` for a zero dimension, a non-positive scale, or an
/// output larger than [`MAX_OUTPUT_PIXELS`].
pub fn output_dimensions(src_width: u32, src_height: u32, request: &ResizeRequest) -> Result<(u32, u32)> {
    if src_width == 0 || src_height == 0 {
        return Err(ProcessError::InvalidDimensions {
            width: src_width,
            height: src_height,
            len: 0,
        });
    }
    if request.width == Some(0) {
        return Err(ProcessError::invalid_parameter("width", 0.0, "must be at least 1"));
    }
    if request.height == Some(0) {
        return Err(ProcessError::invalid_parameter("height", 0.0, "must be at least 1"));
    }

    let src_w = src_width as f64;
    let src_h = src_height as f64;

    if let Some(percent) = request.scale_percent {
        if !percent.is_finite() || percent <= 0.0 {
            return Err(ProcessError::invalid_parameter(
                "scalePercent",
                percent,
                "must be a finite value > 0",
            ));
        }
        if percent != 100.0 {
            let scale = percent as f64 / 100.0;
            return check_area(
                (src_w * scale, src_h * scale),
                "scalePercent",
                percent as f64,
            );
        }
    }

    let ratio = src_w / src_h;
    match (request.width, request.height) {
        (Some(w), Some(h)) => check_area((w as f64, h as f64), "width", w as f64),
        (Some(w), None) if request.keep_aspect => {
            check_area((w as f64, w as f64 / ratio), "width", w as f64)
        }
        (None, Some(h)) if request.keep_aspect => {
            check_area((h as f64 * ratio, h as f64), "height", h as f64)
        }
        (Some(w), None) => check_area((w as f64, src_h), "width", w as f64),
        (None, Some(h)) => check_area((src_w, h as f64), "height", h as f64),
        (None, None) => Ok((src_width, src_height)),
    }
}

/// Round a computed size and reject it if it cannot be allocated.
fn check_area((width, height): (f64, f64), name: &'static str, value: f64) -> Result<(u32, u32)> {
    let width = width.round().max(1.0);
    let height = height.round().max(1.0);
    if width * height > MAX_OUTPUT_PIXELS as f64 {
        return Err(ProcessError::invalid_parameter(
            name,
            value,
            "output image would be too large",
        ));
    }
    Ok((width as u32, height as u32))
}

/// Resize a buffer to exact dimensions.
///
/// Returns a clone when the dimensions already match. Outputs above
/// [`MAX_OUTPUT_PIXELS`] are rejected.
pub fn resize(buffer: &PixelBuffer, width: u32, height: u32, filter: ResampleFilter) -> Result<PixelBuffer> {
    if width == 0 || height == 0 {
        return Err(ProcessError::InvalidDimensions {
            width,
            height,
            len: 0,
        });
    }
    if width as u64 * height as u64 > MAX_OUTPUT_PIXELS {
        return Err(ProcessError::invalid_parameter(
            "width",
            width,
            "output image would be too large",
        ));
    }

    // Fast path: if dimensions match, just clone
    if buffer.width() == width && buffer.height() == height {
        return Ok(buffer.clone());
    }

    let rgba = buffer.to_rgba_image()?;
    let resized = image::imageops::resize(&rgba, width, height, filter.to_image_filter());
    PixelBuffer::from_rgba_image(resized)
}

/// Resize a buffer according to a [`ResizeRequest`].
pub fn resize_to_request(
    buffer: &PixelBuffer,
    request: &ResizeRequest,
    filter: ResampleFilter,
) -> Result<PixelBuffer> {
    let (width, height) = output_dimensions(buffer.width(), buffer.height(), request)?;
    resize(buffer, width, height, filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn create_test_image(width: u32, height: u32) -> PixelBuffer {
        // Create a simple gradient image for testing
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8); // R
                pixels.push(((y * 255) / height.max(1)) as u8); // G
                pixels.push(128); // B
                pixels.push(255); // A
            }
        }
        PixelBuffer::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_scale_percent() {
        let req = ResizeRequest::scale(50.0);
        assert_eq!(output_dimensions(1000, 600, &req).unwrap(), (500, 300));
    }

    #[test]
    fn test_scale_percent_overrides_explicit_size() {
        let req = ResizeRequest {
            width: Some(10),
            height: Some(10),
            scale_percent: Some(200.0),
            keep_aspect: false,
        };
        assert_eq!(output_dimensions(30, 20, &req).unwrap(), (60, 40));
    }

    #[test]
    fn test_scale_100_falls_through_to_explicit_size() {
        let req = ResizeRequest {
            width: Some(300),
            scale_percent: Some(100.0),
            ..ResizeRequest::default()
        };
        assert_eq!(output_dimensions(600, 400, &req).unwrap(), (300, 200));
    }

    #[test]
    fn test_keep_aspect_from_width() {
        let req = ResizeRequest {
            width: Some(2560),
            ..ResizeRequest::default()
        };
        assert_eq!(output_dimensions(6000, 4000, &req).unwrap(), (2560, 1707));
    }

    #[test]
    fn test_keep_aspect_from_height() {
        let req = ResizeRequest {
            height: Some(2560),
            ..ResizeRequest::default()
        };
        assert_eq!(output_dimensions(4000, 6000, &req).unwrap(), (1707, 2560));
    }

    #[test]
    fn test_without_aspect_missing_dimension_kept() {
        let req = ResizeRequest {
            width: Some(100),
            keep_aspect: false,
            ..ResizeRequest::default()
        };
        assert_eq!(output_dimensions(400, 300, &req).unwrap(), (100, 300));
    }

    #[test]
    fn test_both_dimensions_used_as_given() {
        let req = ResizeRequest {
            width: Some(64),
            height: Some(32),
            ..ResizeRequest::default()
        };
        assert_eq!(output_dimensions(100, 100, &req).unwrap(), (64, 32));
    }

    #[test]
    fn test_no_request_keeps_source() {
        assert_eq!(
            output_dimensions(123, 45, &ResizeRequest::default()).unwrap(),
            (123, 45)
        );
    }

    #[test]
    fn test_tiny_scale_clamps_to_one() {
        assert_eq!(
            output_dimensions(10, 10, &ResizeRequest::scale(1.0)).unwrap(),
            (1, 1)
        );
    }

    #[test]
    fn test_invalid_requests() {
        assert!(output_dimensions(10, 10, &ResizeRequest::scale(0.0)).is_err());
        assert!(output_dimensions(10, 10, &ResizeRequest::scale(-20.0)).is_err());
        assert!(output_dimensions(10, 10, &ResizeRequest::scale(f32::NAN)).is_err());
        let zero_width = ResizeRequest {
            width: Some(0),
            ..ResizeRequest::default()
        };
        assert!(output_dimensions(10, 10, &zero_width).is_err());
    }

    #[test]
    fn test_huge_scale_rejected() {
        let err = output_dimensions(1000, 1000, &ResizeRequest::scale(1.0e9)).unwrap_err();
        assert!(matches!(
            err,
            ProcessError::InvalidParameter {
                name: "scalePercent",
                ..
            }
        ));
    }

    #[test]
    fn test_huge_explicit_size_rejected() {
        let req = ResizeRequest {
            width: Some(u32::MAX),
            ..ResizeRequest::default()
        };
        assert!(matches!(
            output_dimensions(100, 100, &req),
            Err(ProcessError::InvalidParameter { name: "width", .. })
        ));
        assert!(resize_to_request(&create_test_image(10, 10), &req, ResampleFilter::Nearest).is_err());
    }

    #[test]
    fn test_output_at_pixel_limit_accepted() {
        let req = ResizeRequest {
            width: Some(1 << 14),
            height: Some(1 << 14),
            ..ResizeRequest::default()
        };
        assert_eq!(output_dimensions(10, 10, &req).unwrap(), (1 << 14, 1 << 14));
    }

    #[test]
    fn test_resize_basic() {
        let img = create_test_image(100, 50);
        let resized = resize(&img, 50, 25, ResampleFilter::Bilinear).unwrap();

        assert_eq!(resized.width(), 50);
        assert_eq!(resized.height(), 25);
        assert_eq!(resized.pixels().len(), 50 * 25 * 4);
    }

    #[test]
    fn test_resize_same_dimensions() {
        let img = create_test_image(100, 50);
        let resized = resize(&img, 100, 50, ResampleFilter::Bilinear).unwrap();
        assert_eq!(resized, img);
    }

    #[test]
    fn test_resize_zero_dimensions_error() {
        let img = create_test_image(100, 50);

        assert!(resize(&img, 0, 50, ResampleFilter::Bilinear).is_err());
        assert!(resize(&img, 50, 0, ResampleFilter::Bilinear).is_err());
    }

    #[test]
    fn test_resize_oversized_error() {
        let img = create_test_image(4, 4);
        assert!(resize(&img, u32::MAX, u32::MAX, ResampleFilter::Nearest).is_err());
    }

    #[test]
    fn test_resize_keeps_alpha_channel() {
        let mut img = PixelBuffer::filled(8, 8, Rgb::WHITE).unwrap();
        for px in img.pixels_mut().chunks_exact_mut(4) {
            px[3] = 0;
        }
        let resized = resize(&img, 4, 4, ResampleFilter::Nearest).unwrap();
        assert!(resized.pixels().chunks_exact(4).all(|px| px[3] == 0));
    }

    #[test]
    fn test_resize_to_request() {
        let img = create_test_image(40, 20);
        let resized =
            resize_to_request(&img, &ResizeRequest::scale(25.0), ResampleFilter::Lanczos3).unwrap();
        assert_eq!((resized.width(), resized.height()), (10, 5));
    }

    #[test]
    fn test_all_filter_types() {
        let img = create_test_image(100, 50);

        for filter in [
            ResampleFilter::Nearest,
            ResampleFilter::Bilinear,
            ResampleFilter::Lanczos3,
        ] {
            let resized = resize(&img, 50, 25, filter).unwrap();
            assert_eq!(resized.width(), 50);
            assert_eq!(resized.height(), 25);
        }
    }
}
