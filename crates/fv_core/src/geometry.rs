//! Pixel-space geometry helpers shared by the event detectors.
//!
//! All coordinates are in frame pixels with the origin at the top-left
//! corner, as delivered by the upstream object detector.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in pixel coordinates (x1,y1 = top-left,
/// x2,y2 = bottom-right; x1 <= x2 and y1 <= y2).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl BoundingBox {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Midpoint of the box corners.
    pub fn center(&self) -> (f32, f32) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }
}

/// Euclidean distance between two pixel positions.
pub fn distance(p1: (f32, f32), p2: (f32, f32)) -> f32 {
    let dx = p1.0 - p2.0;
    let dy = p1.1 - p2.1;
    (dx * dx + dy * dy).sqrt()
}

/// Static penalty-area approximation: a rectangle horizontally centered
/// in the frame and anchored to the bottom edge. Assumes a single goal
/// at the bottom of the frame; does not adapt to camera angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenaltyArea {
    x_min: f32,
    x_max: f32,
    y_min: f32,
    y_max: f32,
}

impl PenaltyArea {
    /// Build the zone from frame dimensions and the configured
    /// width/height fractions (defaults 0.4 and 0.2).
    pub fn from_frame(
        frame_width: u32,
        frame_height: u32,
        width_frac: f32,
        height_frac: f32,
    ) -> Self {
        let w = frame_width as f32;
        let h = frame_height as f32;
        let box_width = w * width_frac;
        let box_height = h * height_frac;
        let x_min = (w - box_width) / 2.0;
        Self {
            x_min,
            x_max: x_min + box_width,
            y_min: h - box_height,
            y_max: h,
        }
    }

    /// Inclusive containment test.
    pub fn contains(&self, pos: (f32, f32)) -> bool {
        let (x, y) = pos;
        self.x_min <= x && x <= self.x_max && self.y_min <= y && y <= self.y_max
    }
}
