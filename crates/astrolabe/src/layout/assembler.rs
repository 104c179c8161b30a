//! Builds one `ChartLayout` from a `ChartInput`, whatever the chart kind.

use crate::chart::{ChartInput, ChartKind, ChartSettings};
use crate::layout::aspect_grid::{layout_aspect_grid, AspectGrid};
use crate::layout::frame::{governors_frame, western_frame, GovernorsFrame, WesternFrame};
use crate::layout::mansions::{layout_mansions, MansionSegment};
use crate::layout::moving_toward::{layout_moving_toward, MovingTowardBand};
use crate::layout::planets::{layout_planets, PlanetBand};
use crate::layout::rings::{GovernorRadii, WesternRadii};
use crate::layout::types::{LabelPlacement, Ring};
use crate::layout::wheel::WheelFrame;
use crate::tooltip::{Entity, HoverTarget};
use serde::{Deserialize, Serialize};

/// Kind-specific parts of a laid-out wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum WheelParts {
    Western(WesternFrame),
    SevenGovernors {
        frame: GovernorsFrame,
        mansions: Vec<MansionSegment>,
        moving_toward: MovingTowardBand,
    },
}

/// Everything a canvas needs to paint one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub id: String,
    pub kind: ChartKind,
    pub size: f64,
    pub font_size: f64,
    pub frame: WheelFrame,
    pub rings: Vec<Ring>,
    /// Native bodies
    pub labels: Vec<LabelPlacement>,
    /// Transit, comparison or process bodies
    pub outer_labels: Vec<LabelPlacement>,
    pub parts: WheelParts,
    pub aspects: AspectGrid,
    pub tooltips: Vec<HoverTarget>,
}

/// Lay out `input` on a square image of side `size`.
///
/// Pure function of its inputs: every call rebuilds the whole drawing.
pub fn layout_chart(
    input: &ChartInput,
    size: f64,
    font_size: f64,
    settings: &ChartSettings,
) -> ChartLayout {
    log::debug!(
        "Laying out {:?} chart: {} bodies, {} outer bodies, size {}",
        input.kind,
        input.bodies.len(),
        input.outer_bodies.len(),
        size
    );

    let mut layout = match input.kind {
        ChartKind::SevenGovernors => layout_seven_governors(input, size, settings),
        _ => layout_western(input, size, settings),
    };
    layout.font_size = font_size;
    layout.aspects = layout_aspect_grid(&input.aspects, settings.aspect_cell);
    layout
}

/// Lay out `input` at the configured size for its kind.
pub fn layout_chart_default(input: &ChartInput, settings: &ChartSettings) -> ChartLayout {
    layout_chart(input, settings.size_for(input.kind), settings.font_size, settings)
}

fn layout_western(input: &ChartInput, size: f64, settings: &ChartSettings) -> ChartLayout {
    let ascendant = input.house_cusps.first().copied().unwrap_or(0.0);
    let frame = WheelFrame::western(size, ascendant);
    let radii = WesternRadii::new(input.kind, size, settings.western_margin);

    let native = &radii.native_planet;
    let labels = layout_planets(
        &input.bodies,
        &frame,
        PlanetBand::toward_outer(native.inner, native.outer),
        settings,
    );

    let outer_labels = match &radii.outer_planet {
        Some(outer) => layout_planets(
            &input.outer_bodies,
            &frame,
            PlanetBand::toward_inner(outer.inner, outer.outer),
            settings,
        ),
        None => {
            if !input.outer_bodies.is_empty() {
                log::debug!(
                    "{:?} is a single wheel, ignoring {} outer bodies",
                    input.kind,
                    input.outer_bodies.len()
                );
            }
            Vec::new()
        }
    };

    let wheel = western_frame(&frame, &radii, &input.house_cusps);

    let mut tooltips: Vec<HoverTarget> = labels
        .iter()
        .chain(outer_labels.iter())
        .map(|p| HoverTarget::new(p.label, Entity::WesternBody(&p.body)))
        .collect();
    tooltips.extend(wheel.houses.iter().map(|house| {
        HoverTarget::new(
            house.label,
            Entity::Cusp {
                number: house.number,
                longitude: house.arc.start,
            },
        )
    }));

    ChartLayout {
        id: uuid::Uuid::new_v4().to_string(),
        kind: input.kind,
        size,
        font_size: settings.font_size,
        frame,
        rings: radii.rings(),
        labels,
        outer_labels,
        parts: WheelParts::Western(wheel),
        aspects: AspectGrid::default(),
        tooltips,
    }
}

fn layout_seven_governors(input: &ChartInput, size: f64, settings: &ChartSettings) -> ChartLayout {
    let frame = WheelFrame::seven_governors(size);
    let radii = GovernorRadii::new(size, &settings.governor_rings);

    let labels = layout_planets(
        &input.bodies,
        &frame,
        PlanetBand::toward_outer(radii.house, radii.native_planet),
        settings,
    );
    let outer_labels = layout_planets(
        &input.outer_bodies,
        &frame,
        PlanetBand::toward_inner(radii.xiu, radii.process_planet),
        settings,
    );

    let mansions = layout_mansions(
        &input.mansions,
        &frame,
        radii.native_planet,
        radii.xiu,
        settings.separator_outer_inset,
        settings.separator_inner_inset,
    );

    let moving_toward = input
        .moving_toward
        .as_ref()
        .map(|moving| {
            layout_moving_toward(
                moving,
                &frame,
                radii.process_planet,
                radii.dong_wei,
                settings.marker_overhang,
            )
        })
        .unwrap_or_default();

    let wheel = governors_frame(&frame, &radii, &input.houses, input.asc.as_ref());

    let mut tooltips: Vec<HoverTarget> = labels
        .iter()
        .chain(outer_labels.iter())
        .map(|p| HoverTarget::new(p.label, Entity::Body(&p.body)))
        .collect();
    tooltips.extend(
        wheel
            .palaces
            .iter()
            .map(|palace| HoverTarget::new(palace.label, Entity::House(&palace.house))),
    );
    tooltips.extend(mansions.iter().map(|segment| {
        HoverTarget::new(
            segment.label,
            Entity::Mansion {
                boundary: &segment.boundary,
                width: segment.arc.width,
            },
        )
    }));
    if let Some(asc) = &input.asc {
        tooltips.push(HoverTarget::new(frame.center(), Entity::Ascendant(asc)));
    }
    if let (Some(moving), Some(marker)) = (&input.moving_toward, &moving_toward.current) {
        tooltips.push(HoverTarget::new(marker.line.start, Entity::MovingToward(moving)));
    }

    ChartLayout {
        id: uuid::Uuid::new_v4().to_string(),
        kind: input.kind,
        size,
        font_size: settings.font_size,
        frame,
        rings: radii.rings(),
        labels,
        outer_labels,
        parts: WheelParts::SevenGovernors {
            frame: wheel,
            mansions,
            moving_toward,
        },
        aspects: AspectGrid::default(),
        tooltips,
    }
}
