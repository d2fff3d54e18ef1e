//! Edge-connected background removal using breadth-first flood fill.
//!
//! # Algorithm
//!
//! 1. Seed: every border pixel (top row, bottom row, left column, right
//!    column) that matches the target color is marked visited and queued.
//! 2. Pop from the front of the queue, set the pixel's alpha to 0, then test
//!    its 4 neighbors (up, down, left, right). Each unvisited matching
//!    neighbor is marked visited and queued.
//! 3. Stop when the queue is empty.
//!
//! A pixel is color-tested once, when it is considered for the queue, and
//! cleared once, when it is popped. Marking and queueing happen together, so
//! every queued pixel is cleared exactly once and total work is
//! O(width * height).

use std::collections::VecDeque;

use crate::buffer::PixelBuffer;
use crate::color::{is_color_similar, Rgb};

/// Clear the alpha of matching pixels reachable from the image border.
///
/// Returns the number of pixels whose alpha changed to 0.
pub fn remove_edge_connected(
    buffer: &mut PixelBuffer,
    target: Rgb,
    tolerance_percent: f32,
) -> usize {
    let width = buffer.width();
    let height = buffer.height();
    let mut fill = FloodFill {
        visited: vec![false; width as usize * height as usize],
        queue: VecDeque::new(),
        target,
        tolerance_percent,
    };

    // Top and bottom rows
    for x in 0..width {
        fill.queue_if_match(buffer, x, 0);
        fill.queue_if_match(buffer, x, height - 1);
    }
    // Left and right columns, corners already handled
    for y in 1..height.saturating_sub(1) {
        fill.queue_if_match(buffer, 0, y);
        fill.queue_if_match(buffer, width - 1, y);
    }
    log::debug!("edge flood fill seeded with {} border pixels", fill.queue.len());

    let mut cleared = 0;
    while let Some((x, y)) = fill.queue.pop_front() {
        let idx = buffer.index_of(x, y) + 3;
        let pixels = buffer.pixels_mut();
        if pixels[idx] != 0 {
            cleared += 1;
        }
        pixels[idx] = 0;

        if y > 0 {
            fill.queue_if_match(buffer, x, y - 1);
        }
        if y + 1 < height {
            fill.queue_if_match(buffer, x, y + 1);
        }
        if x > 0 {
            fill.queue_if_match(buffer, x - 1, y);
        }
        if x + 1 < width {
            fill.queue_if_match(buffer, x + 1, y);
        }
    }

    log::debug!("edge flood fill cleared {cleared} pixels");
    cleared
}

/// Traversal state for a single flood fill.
struct FloodFill {
    visited: Vec<bool>,
    queue: VecDeque<(u32, u32)>,
    target: Rgb,
    tolerance_percent: f32,
}

impl FloodFill {
    /// Mark and queue `(x, y)` if it is unvisited and matches the target.
    /// Coordinates must be in bounds.
    #[inline]
    fn queue_if_match(&mut self, buffer: &PixelBuffer, x: u32, y: u32) {
        let visited_idx = y as usize * buffer.width() as usize + x as usize;
        if self.visited[visited_idx] {
            return;
        }
        if is_color_similar(self.target, buffer.rgb_at(x, y), self.tolerance_percent) {
            self.visited[visited_idx] = true;
            self.queue.push_back((x, y));
        }
    }
}
