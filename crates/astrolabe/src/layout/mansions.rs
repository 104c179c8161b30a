//! Lunar-mansion (xiu) band.

use crate::angle::normalize;
use crate::layout::types::{ArcSegment, Line, Point};
use crate::layout::wheel::WheelFrame;
use crate::qizheng::MansionBoundary;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MansionSegment {
    pub boundary: MansionBoundary,
    pub arc: ArcSegment,
    pub label: Point,
    /// Drawn at the boundary longitude, inset from both band edges
    pub separator: Line,
}

/// Arc from one boundary to the next, running in increasing longitude.
pub fn forward_arc(start: f64, end: f64) -> ArcSegment {
    let width = normalize(end - start);
    ArcSegment {
        start: normalize(start),
        end: normalize(end),
        width,
        mid: normalize(width / 2.0 + start),
    }
}

/// Lay out the mansion band between `inner` and `outer`.
///
/// Boundaries close into a full circle: the last mansion runs up to the
/// first boundary. Fewer than two boundaries yield no segments.
pub fn layout_mansions(
    boundaries: &[MansionBoundary],
    frame: &WheelFrame,
    inner: f64,
    outer: f64,
    outer_inset: f64,
    inner_inset: f64,
) -> Vec<MansionSegment> {
    if boundaries.len() < 2 {
        return Vec::new();
    }

    let label_radius = (inner + outer) / 2.0;
    boundaries
        .iter()
        .enumerate()
        .map(|(index, boundary)| {
            let next = &boundaries[(index + 1) % boundaries.len()];
            let arc = forward_arc(boundary.long, next.long);
            MansionSegment {
                boundary: *boundary,
                label: frame.point(arc.mid, label_radius),
                separator: Line::new(
                    frame.point(boundary.long, outer - outer_inset),
                    frame.point(boundary.long, inner + inner_inset),
                ),
                arc,
            }
        })
        .collect()
}
