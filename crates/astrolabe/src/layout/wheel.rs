//! Longitude/radius to canvas coordinates.

use crate::angle::{cos, normalize, sin};
use crate::layout::types::Point;
use serde::{Deserialize, Serialize};

/// Ring offset of the seven-governors wheel: the 戌 palace (Aries) spans
/// canvas angles -30..0.
pub const GOVERNORS_OFFSET: f64 = -30.0;

/// Center and rotation shared by every ring of one drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelFrame {
    pub cx: f64,
    pub cy: f64,
    /// Added to a longitude to get the canvas angle (0 = three o'clock, counterclockwise)
    pub offset: f64,
}

impl WheelFrame {
    pub fn new(cx: f64, cy: f64, offset: f64) -> Self {
        Self { cx, cy, offset }
    }

    /// Square image of side `size` with the seven-governors rotation.
    pub fn seven_governors(size: f64) -> Self {
        Self::new(size / 2.0, size / 2.0, GOVERNORS_OFFSET)
    }

    /// Square image of side `size` with the ascendant at nine o'clock.
    pub fn western(size: f64, ascendant: f64) -> Self {
        Self::new(size / 2.0, size / 2.0, 180.0 - ascendant)
    }

    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    /// Canvas angle of a longitude, in [0, 360).
    pub fn angle_of(&self, longitude: f64) -> f64 {
        normalize(longitude + self.offset)
    }

    /// Point at a raw canvas angle.
    pub fn point_at_angle(&self, angle: f64, radius: f64) -> Point {
        Point::new(self.cx + radius * cos(angle), self.cy - radius * sin(angle))
    }

    /// Point at ecliptic `longitude` on the circle of `radius`.
    pub fn point(&self, longitude: f64, radius: f64) -> Point {
        self.point_at_angle(longitude + self.offset, radius)
    }
}
