use crate::chart::{Body, ChartSettings};
use serde::{Deserialize, Serialize};

/// Canvas point, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Point at parameter `t` on the line from `self` (t = 0) to `other` (t = 1).
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

/// A circular band between two radii.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub name: String,
    pub inner: f64,
    pub outer: f64,
}

impl Ring {
    pub fn new(name: &str, inner: f64, outer: f64) -> Self {
        Self {
            name: name.to_string(),
            inner,
            outer,
        }
    }

    pub fn mid(&self) -> f64 {
        (self.inner + self.outer) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.outer - self.inner
    }
}

/// Free text placed at an absolute canvas point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub text: String,
    pub at: Point,
}

impl TextLabel {
    pub fn new(text: impl Into<String>, at: Point) -> Self {
        Self {
            text: text.into(),
            at,
        }
    }
}

/// Color state of a plotted body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyState {
    Direct,
    Retrograde,
    Stationary,
}

impl BodyState {
    /// Stationary wins over retrograde.
    pub fn of(body: &Body) -> Self {
        if body.is_stationary {
            BodyState::Stationary
        } else if body.speed < 0.0 {
            BodyState::Retrograde
        } else {
            BodyState::Direct
        }
    }

    pub fn color<'a>(&self, settings: &'a ChartSettings) -> &'a str {
        match self {
            BodyState::Direct => &settings.color_default,
            BodyState::Retrograde => &settings.color_retrograde,
            BodyState::Stationary => &settings.color_stationary,
        }
    }
}

/// A body label after de-confliction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPlacement {
    pub body: Body,
    /// De-conflicted angle on the canvas circle, ring offset included
    pub display_angle: f64,
    pub label: Point,
    /// True-longitude point on the band boundary
    pub anchor: Point,
    /// From the clip circle near the label to the anchor
    pub indicator: Line,
    pub state: BodyState,
    pub color: String,
}

/// One division of a banded ring (house, mansion or moving-toward year).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcSegment {
    pub start: f64,
    pub end: f64,
    pub width: f64,
    /// Longitude of the label, half way along the arc
    pub mid: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_lerp_and_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(a.lerp(&b, 0.5), Point::new(1.5, 2.0));
        assert_eq!(Line::new(a, b).length(), 5.0);
    }

    #[test]
    fn test_body_state_precedence() {
        let direct = Body::new("Sun", 0.0).with_speed(1.0);
        let retro = Body::new("Mars", 0.0).with_speed(-0.3);
        let both = Body::new("Mercury", 0.0).with_speed(-0.01).stationary();
        assert_eq!(BodyState::of(&direct), BodyState::Direct);
        assert_eq!(BodyState::of(&retro), BodyState::Retrograde);
        assert_eq!(BodyState::of(&both), BodyState::Stationary);

        let settings = ChartSettings::default();
        assert_eq!(BodyState::Direct.color(&settings), "#28a745");
        assert_eq!(BodyState::Retrograde.color(&settings), "#dc3545");
        assert_eq!(BodyState::Stationary.color(&settings), "#ffc107");
    }

    #[test]
    fn test_ring_mid() {
        let ring = Ring::new("xiu", 160.0, 200.0);
        assert_eq!(ring.mid(), 180.0);
        assert_eq!(ring.width(), 40.0);
    }
}
