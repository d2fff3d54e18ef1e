//! Background removal by color.
//!
//! Pixels that match a target color within a tolerance get their alpha set
//! to 0. Two policies are available:
//!
//! - **Global**: every matching pixel in the image is cleared, including
//!   isolated interior regions.
//! - **Edge flood**: only matching pixels connected to the image border
//!   through a 4-connected chain of matching pixels are cleared. A white
//!   shirt in front of a white backdrop survives.
//!
//! Matching uses [`is_color_similar`](crate::color::is_color_similar) against
//! the buffer's current RGB, so it sees the output of the color adjustments.

mod edge_flood;
mod global;

pub use edge_flood::remove_edge_connected;
pub use global::remove_matching;

use crate::buffer::PixelBuffer;
use crate::BackgroundRemovalParams;

/// Run the policy selected by `params.edges_only`.
///
/// Returns the number of pixels whose alpha this call changed to 0.
pub fn remove_background(buffer: &mut PixelBuffer, params: &BackgroundRemovalParams) -> usize {
    if params.edges_only {
        remove_edge_connected(buffer, params.target_color, params.tolerance_percent)
    } else {
        remove_matching(buffer, params.target_color, params.tolerance_percent)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::buffer::PixelBuffer;
    use crate::color::Rgb;

    /// Build a buffer from a grid of characters: `W` white, `B` black, `G` light gray.
    pub fn from_grid(rows: &[&str]) -> PixelBuffer {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for row in rows {
            for ch in row.chars() {
                let color = match ch {
                    'W' => Rgb::WHITE,
                    'G' => Rgb::new(240, 240, 240),
                    _ => Rgb::BLACK,
                };
                pixels.extend_from_slice(&[color.r, color.g, color.b, 255]);
            }
        }
        PixelBuffer::new(width, height, pixels).unwrap()
    }

    /// Render the alpha channel back to a grid: `.` transparent, `#` opaque.
    pub fn alpha_grid(buffer: &PixelBuffer) -> Vec<String> {
        (0..buffer.height())
            .map(|y| {
                (0..buffer.width())
                    .map(|x| if buffer.alpha_at(x, y) == 0 { '.' } else { '#' })
                    .collect()
            })
            .collect()
    }
}
