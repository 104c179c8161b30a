//! The 28 lunar mansions (xiu) of the seven-governors wheel.
//!
//! Unlike nakshatras, mansion widths are uneven: each mansion runs from its
//! determinative star to the next one, so boundaries come from the
//! calculation service and are looked up here rather than derived.

use crate::angle::normalize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compass group of seven mansions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quarter {
    East,
    North,
    West,
    South,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mansion {
    #[serde(rename = "角")]
    Horn,
    #[serde(rename = "亢")]
    Neck,
    #[serde(rename = "氐")]
    Root,
    #[serde(rename = "房")]
    Room,
    #[serde(rename = "心")]
    Heart,
    #[serde(rename = "尾")]
    Tail,
    #[serde(rename = "箕")]
    Basket,
    #[serde(rename = "斗")]
    Dipper,
    #[serde(rename = "牛")]
    Ox,
    #[serde(rename = "女")]
    Girl,
    #[serde(rename = "虚")]
    Emptiness,
    #[serde(rename = "危")]
    Rooftop,
    #[serde(rename = "室")]
    Encampment,
    #[serde(rename = "壁")]
    Wall,
    #[serde(rename = "奎")]
    Legs,
    #[serde(rename = "娄")]
    Bond,
    #[serde(rename = "胃")]
    Stomach,
    #[serde(rename = "昴")]
    HairyHead,
    #[serde(rename = "毕")]
    Net,
    #[serde(rename = "觜")]
    TurtleBeak,
    #[serde(rename = "参")]
    ThreeStars,
    #[serde(rename = "井")]
    Well,
    #[serde(rename = "鬼")]
    Ghost,
    #[serde(rename = "柳")]
    Willow,
    #[serde(rename = "星")]
    Star,
    #[serde(rename = "张")]
    ExtendedNet,
    #[serde(rename = "翼")]
    Wings,
    #[serde(rename = "轸")]
    Chariot,
}

// (mansion, display name)
const MANSION_ORDER: [(Mansion, &str); 28] = [
    (Mansion::Horn, "角"),
    (Mansion::Neck, "亢"),
    (Mansion::Root, "氐"),
    (Mansion::Room, "房"),
    (Mansion::Heart, "心"),
    (Mansion::Tail, "尾"),
    (Mansion::Basket, "箕"),
    (Mansion::Dipper, "斗"),
    (Mansion::Ox, "牛"),
    (Mansion::Girl, "女"),
    (Mansion::Emptiness, "虚"),
    (Mansion::Rooftop, "危"),
    (Mansion::Encampment, "室"),
    (Mansion::Wall, "壁"),
    (Mansion::Legs, "奎"),
    (Mansion::Bond, "娄"),
    (Mansion::Stomach, "胃"),
    (Mansion::HairyHead, "昴"),
    (Mansion::Net, "毕"),
    (Mansion::TurtleBeak, "觜"),
    (Mansion::ThreeStars, "参"),
    (Mansion::Well, "井"),
    (Mansion::Ghost, "鬼"),
    (Mansion::Willow, "柳"),
    (Mansion::Star, "星"),
    (Mansion::ExtendedNet, "张"),
    (Mansion::Wings, "翼"),
    (Mansion::Chariot, "轸"),
];

impl Mansion {
    pub fn all() -> impl Iterator<Item = Mansion> {
        MANSION_ORDER.iter().map(|(m, _)| *m)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        MANSION_ORDER[self.index()].1
    }

    pub fn quarter(self) -> Quarter {
        match self.index() / 7 {
            0 => Quarter::East,
            1 => Quarter::North,
            2 => Quarter::West,
            _ => Quarter::South,
        }
    }
}

impl fmt::Display for Mansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ecliptic longitude of a mansion's determinative star.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MansionBoundary {
    pub mansion: Mansion,
    pub long: f64,
}

/// A longitude expressed as degrees into a mansion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MansionPlacement {
    pub mansion: Mansion,
    pub degree: f64,
}

/// Return the mansion containing `longitude` and the degrees entered into it.
///
/// Boundaries are walked in the given order; `None` when fewer than two
/// boundaries are supplied.
pub fn locate_mansion(longitude: f64, boundaries: &[MansionBoundary]) -> Option<MansionPlacement> {
    if boundaries.len() < 2 {
        return None;
    }

    boundaries.iter().enumerate().find_map(|(index, boundary)| {
        let next = &boundaries[(index + 1) % boundaries.len()];
        let width = normalize(next.long - boundary.long);
        let entered = normalize(longitude - boundary.long);
        (entered < width).then_some(MansionPlacement {
            mansion: boundary.mansion,
            degree: entered,
        })
    })
}
