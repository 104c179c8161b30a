//! Moving-toward (dong-wei) band.
//!
//! The yearly boundaries run retrograde, so every arc is measured from the
//! next boundary up to the current one.

use crate::angle::normalize;
use crate::chart::MovingToward;
use crate::layout::types::{ArcSegment, Line, Point};
use crate::layout::wheel::WheelFrame;
use serde::{Deserialize, Serialize};

/// The span between two consecutive birthdays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSegment {
    /// Years since birth at the start of the segment
    pub year: usize,
    pub arc: ArcSegment,
    pub label: Point,
    pub separator: Line,
}

/// Highlighted position at the process date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentMarker {
    pub long: f64,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MovingTowardBand {
    pub years: Vec<YearSegment>,
    pub current: Option<CurrentMarker>,
}

/// Arc from `start` back to `end`, running in decreasing longitude.
pub fn retrograde_arc(start: f64, end: f64) -> ArcSegment {
    let width = normalize(start - end);
    ArcSegment {
        start: normalize(start),
        end: normalize(end),
        width,
        mid: normalize(width / 2.0 + end),
    }
}

/// Lay out the band between `inner` and `outer`.
///
/// The last yearly boundary only closes the previous segment. The current
/// marker overshoots both band edges by `overhang`.
pub fn layout_moving_toward(
    moving: &MovingToward,
    frame: &WheelFrame,
    inner: f64,
    outer: f64,
    overhang: f64,
) -> MovingTowardBand {
    let label_radius = (inner + outer) / 2.0;
    let years = moving
        .long_of_per_year
        .windows(2)
        .enumerate()
        .map(|(year, pair)| {
            let arc = retrograde_arc(pair[0], pair[1]);
            YearSegment {
                year,
                label: frame.point(arc.mid, label_radius),
                separator: Line::new(frame.point(pair[0], outer), frame.point(pair[0], inner)),
                arc,
            }
        })
        .collect();

    let current = CurrentMarker {
        long: normalize(moving.long),
        line: Line::new(
            frame.point(moving.long, outer + overhang),
            frame.point(moving.long, inner - overhang),
        ),
    };

    MovingTowardBand {
        years,
        current: Some(current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qizheng::Mansion;

    fn moving(longs: Vec<f64>, long: f64) -> MovingToward {
        MovingToward {
            long_of_per_year: longs,
            long,
            xiu: Mansion::Horn,
            xiu_degree: 1.0,
        }
    }

    #[test]
    fn test_retrograde_arc_takes_short_way() {
        let arc = retrograde_arc(5.0, 355.0);
        assert_eq!(arc.width, 10.0);
        assert_eq!(arc.mid, 0.0);
        // the forward formula would pick the long arc
        assert_eq!(normalize(355.0 - 5.0), 350.0);
    }

    #[test]
    fn test_year_segments() {
        let frame = WheelFrame::seven_governors(800.0);
        let band = layout_moving_toward(&moving(vec![100.0, 90.0, 75.0, 70.0], 80.0), &frame, 240.0, 260.0, 4.0);
        assert_eq!(band.years.len(), 3);
        let widths: Vec<f64> = band.years.iter().map(|y| y.arc.width).collect();
        assert_eq!(widths, vec![10.0, 15.0, 5.0]);
        assert_eq!(band.years[1].year, 1);
        assert_eq!(band.years[1].arc.mid, 82.5);
    }

    #[test]
    fn test_current_marker_is_separate() {
        let frame = WheelFrame::seven_governors(800.0);
        let band = layout_moving_toward(&moving(vec![100.0, 90.0], 95.0), &frame, 240.0, 260.0, 4.0);
        assert_eq!(band.years.len(), 1);
        let marker = band.current.unwrap();
        let center = frame.center();
        assert_eq!(marker.long, 95.0);
        assert!((marker.line.start.distance_to(&center) - 264.0).abs() < 1e-9);
        assert!((marker.line.end.distance_to(&center) - 236.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_year_list() {
        let frame = WheelFrame::seven_governors(800.0);
        let band = layout_moving_toward(&moving(vec![], 10.0), &frame, 240.0, 260.0, 4.0);
        assert!(band.years.is_empty());
        assert!(band.current.is_some());
    }
}
