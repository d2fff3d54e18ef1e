//! Quarter-turn rotation and mirroring.

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::error::Result;

/// Clockwise rotation in 90-degree steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuarterTurn {
    #[default]
    None,
    Cw90,
    Cw180,
    Cw270,
}

impl From<i32> for QuarterTurn {
    /// Map a clockwise angle in degrees. Only multiples of 90 are meaningful;
    /// the angle is snapped down to the previous quarter turn.
    fn from(degrees: i32) -> Self {
        match degrees.rem_euclid(360) / 90 {
            1 => QuarterTurn::Cw90,
            2 => QuarterTurn::Cw180,
            3 => QuarterTurn::Cw270,
            _ => QuarterTurn::None,
        }
    }
}

/// Mirror axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipAxis {
    /// Mirror left to right
    Horizontal,
    /// Mirror top to bottom
    Vertical,
}

/// Rotate a buffer clockwise.
pub fn rotate(buffer: &PixelBuffer, turn: QuarterTurn) -> Result<PixelBuffer> {
    if turn == QuarterTurn::None {
        return Ok(buffer.clone());
    }

    let img = buffer.to_rgba_image()?;
    let rotated = match turn {
        QuarterTurn::None => img,
        QuarterTurn::Cw90 => image::imageops::rotate90(&img),
        QuarterTurn::Cw180 => image::imageops::rotate180(&img),
        QuarterTurn::Cw270 => image::imageops::rotate270(&img),
    };
    PixelBuffer::from_rgba_image(rotated)
}

/// Mirror a buffer along `axis`.
pub fn flip(buffer: &PixelBuffer, axis: FlipAxis) -> Result<PixelBuffer> {
    let img = buffer.to_rgba_image()?;
    let flipped = match axis {
        FlipAxis::Horizontal => image::imageops::flip_horizontal(&img),
        FlipAxis::Vertical => image::imageops::flip_vertical(&img),
    };
    PixelBuffer::from_rgba_image(flipped)
}
