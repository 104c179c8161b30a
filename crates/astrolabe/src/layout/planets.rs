//! Planet band layout: label de-confliction and indicator lines.

use crate::angle::normalize;
use crate::chart::{Body, ChartSettings};
use crate::layout::anchor::clip_to_circle;
use crate::layout::types::{BodyState, LabelPlacement, Line};
use crate::layout::wheel::WheelFrame;
use serde::{Deserialize, Serialize};

/// Radii used to place one band of body labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetBand {
    /// Text anchor radius of the labels
    pub label_radius: f64,
    /// Indicator lines start where they cross this circle
    pub clip_radius: f64,
    /// True-longitude end of the indicator line
    pub anchor_radius: f64,
}

impl PlanetBand {
    /// Band whose indicator lines point outward to `outer` (natal bodies).
    pub fn toward_outer(inner: f64, outer: f64) -> Self {
        let third = (outer - inner) / 3.0;
        Self {
            label_radius: inner + third,
            clip_radius: inner + 2.0 * third,
            anchor_radius: outer,
        }
    }

    /// Band whose indicator lines point inward to `inner` (transit and process bodies).
    pub fn toward_inner(inner: f64, outer: f64) -> Self {
        let third = (outer - inner) / 3.0;
        Self {
            label_radius: inner + 2.0 * third,
            clip_radius: inner + third,
            anchor_radius: inner,
        }
    }
}

/// Spread circularly sorted angles so that neighbours sit at least `gap`
/// degrees apart.
///
/// For each label `i` the smallest count `n` is found such that the label
/// `n` places ahead is at least `n·gap` away (the full lap back to `i`
/// counts as 360°); the labels in between are then pushed to `i + j·gap`.
/// When even the full lap is too short the labels are left where they are.
pub fn spread_angles(angles: &mut [f64], gap: f64) {
    let count = angles.len();
    if count < 2 {
        return;
    }

    for i in 0..count {
        let room = (1..=count).find(|&j| {
            let span = if j == count {
                360.0
            } else {
                normalize(angles[(i + j) % count] - angles[i])
            };
            span >= gap * j as f64
        });

        if let Some(n) = room {
            for j in 1..n {
                angles[(i + j) % count] = normalize(angles[i] + j as f64 * gap);
            }
        }
    }
}

/// Lay out one band of bodies.
///
/// Bodies are sorted by longitude; the output follows that order.
pub fn layout_planets(
    bodies: &[Body],
    frame: &WheelFrame,
    band: PlanetBand,
    settings: &ChartSettings,
) -> Vec<LabelPlacement> {
    let mut sorted: Vec<&Body> = bodies.iter().collect();
    sorted.sort_by(|a, b| normalize(a.longitude).total_cmp(&normalize(b.longitude)));

    let mut angles: Vec<f64> = sorted.iter().map(|b| frame.angle_of(b.longitude)).collect();
    spread_angles(&mut angles, settings.label_gap);

    let center = frame.center();
    sorted
        .into_iter()
        .zip(angles)
        .map(|(body, display_angle)| {
            let label = frame.point_at_angle(display_angle, band.label_radius);
            let anchor = frame.point(body.longitude, band.anchor_radius);

            let start = match clip_to_circle(label, anchor, center, band.clip_radius) {
                Ok(point) => point,
                Err(e) => {
                    log::warn!("Indicator line for {} left unclipped: {}", body.name, e);
                    label
                }
            };

            let state = BodyState::of(body);
            LabelPlacement {
                body: body.clone(),
                display_angle,
                label,
                anchor,
                indicator: Line::new(start, anchor),
                state,
                color: state.color(settings).to_string(),
            }
        })
        .collect()
}
