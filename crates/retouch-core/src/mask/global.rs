//! Global color removal: every matching pixel, no connectivity requirement.

use crate::buffer::{PixelBuffer, CHANNELS};
use crate::color::{is_color_similar, Rgb};

/// Clear the alpha of every pixel within `tolerance_percent` of `target`.
///
/// Returns the number of pixels whose alpha changed to 0.
pub fn remove_matching(buffer: &mut PixelBuffer, target: Rgb, tolerance_percent: f32) -> usize {
    let mut cleared = 0;
    for px in buffer.pixels_mut().chunks_exact_mut(CHANNELS) {
        if is_color_similar(target, Rgb::new(px[0], px[1], px[2]), tolerance_percent) {
            if px[3] != 0 {
                cleared += 1;
            }
            px[3] = 0;
        }
    }
    log::debug!("global background removal cleared {cleared} pixels");
    cleared
}
