//! Static parts of the wheels: sign sectors, houses, palaces and dividers.

use crate::chart::{AscHouse, House};
use crate::layout::mansions::forward_arc;
use crate::layout::rings::{GovernorRadii, WesternRadii};
use crate::layout::types::{ArcSegment, Line, Point, TextLabel};
use crate::layout::wheel::WheelFrame;
use crate::qizheng::BRANCHES;
use crate::western::Sign;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignSector {
    pub sign: Sign,
    pub glyph: String,
    pub arc: ArcSegment,
    pub label: Point,
    /// Boundary at the start of the sign, across the zodiac band
    pub divider: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseSector {
    /// 1-based house number
    pub number: usize,
    pub arc: ArcSegment,
    pub label: Point,
    pub cusp_line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WesternFrame {
    pub signs: Vec<SignSector>,
    pub houses: Vec<HouseSector>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalaceLabel {
    pub house: House,
    pub label: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovernorsFrame {
    pub dividers: Vec<Line>,
    pub branches: Vec<TextLabel>,
    pub palaces: Vec<PalaceLabel>,
    /// Life-palace mansion and degree, drawn at the center
    pub asc: Option<TextLabel>,
}

/// Zodiac sectors and house cusps of a western wheel.
pub fn western_frame(frame: &WheelFrame, radii: &WesternRadii, cusps: &[f64]) -> WesternFrame {
    let zodiac = &radii.zodiac;
    let signs = Sign::ALL
        .iter()
        .map(|sign| {
            let start = sign.start_longitude();
            let arc = forward_arc(start, start + 30.0);
            SignSector {
                sign: *sign,
                glyph: sign.glyph().to_string(),
                label: frame.point(arc.mid, zodiac.mid()),
                divider: Line::new(frame.point(start, zodiac.inner), frame.point(start, zodiac.outer)),
                arc,
            }
        })
        .collect();

    let houses = if cusps.len() < 2 {
        Vec::new()
    } else {
        cusps
            .iter()
            .enumerate()
            .map(|(index, cusp)| {
                let arc = forward_arc(*cusp, cusps[(index + 1) % cusps.len()]);
                HouseSector {
                    number: index + 1,
                    label: frame.point(arc.mid, radii.house.mid()),
                    cusp_line: Line::new(
                        frame.point(*cusp, radii.cusp_inner),
                        frame.point(*cusp, radii.cusp_outer),
                    ),
                    arc,
                }
            })
            .collect()
    };

    WesternFrame { signs, houses }
}

/// Text at the center of the seven-governors wheel: mansion and whole degrees.
pub fn asc_text(asc: &AscHouse) -> String {
    format!("{}{}度", asc.xiu, asc.xiu_degree.floor())
}

/// Palace grid, branch names and the central ascendant text.
pub fn governors_frame(
    frame: &WheelFrame,
    radii: &GovernorRadii,
    houses: &[House],
    asc: Option<&AscHouse>,
) -> GovernorsFrame {
    // Fixed grid: canvas angles, not longitudes
    let dividers = (0..12)
        .map(|i| {
            let angle = 30.0 * i as f64;
            Line::new(
                frame.point_at_angle(angle, radii.house),
                frame.point_at_angle(angle, radii.asc_house),
            )
        })
        .collect();

    let branch_radius = (radii.zodiac + radii.asc_house) / 2.0;
    let branches = BRANCHES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            TextLabel::new(*name, frame.point_at_angle(30.0 * i as f64 - 15.0, branch_radius))
        })
        .collect();

    let palace_radius = (radii.zodiac + radii.house) / 2.0;
    let palaces = houses
        .iter()
        .map(|house| PalaceLabel {
            house: house.clone(),
            label: frame.point(house.long + 15.0, palace_radius),
        })
        .collect();

    GovernorsFrame {
        dividers,
        branches,
        palaces,
        asc: asc.map(|asc| TextLabel::new(asc_text(asc), frame.center())),
    }
}
