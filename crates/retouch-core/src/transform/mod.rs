//! Geometric buffer operations: cropping, quarter-turn rotation and flips.
//!
//! These run before the pixel pipeline. The editor picks the crop rectangle
//! and orientation interactively; this module only applies the result.
//!
//! # Coordinate System
//!
//! - Crop coordinates are in pixels of the source buffer
//! - Origin is top-left corner
//! - Rotation is clockwise in 90-degree steps

mod crop;
mod orientation;

pub use crop::{crop, CropRect};
pub use orientation::{flip, rotate, FlipAxis, QuarterTurn};
