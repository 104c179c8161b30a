//! Branch and palace label tables for the seven-governors wheel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Earthly-branch names of the twelve signs, starting from Aries and
/// running in zodiac order.
pub const BRANCHES: [&str; 12] = [
    "戌", "酉", "申", "未", "午", "巳", "辰", "卯", "寅", "丑", "子", "亥",
];

/// Branch name of the sign containing `longitude`.
pub fn branch_of(longitude: f64) -> &'static str {
    let index = (crate::angle::normalize(longitude) / 30.0).floor() as usize % 12;
    BRANCHES[index]
}

/// The twelve palaces, counted from the life palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Palace {
    #[serde(rename = "命")]
    Life,
    #[serde(rename = "财")]
    Wealth,
    #[serde(rename = "兄")]
    Siblings,
    #[serde(rename = "田")]
    Property,
    #[serde(rename = "子")]
    Children,
    #[serde(rename = "奴")]
    Servants,
    #[serde(rename = "妻")]
    Spouse,
    #[serde(rename = "疾")]
    Health,
    #[serde(rename = "迁")]
    Travel,
    #[serde(rename = "官")]
    Career,
    #[serde(rename = "福")]
    Fortune,
    #[serde(rename = "相")]
    Appearance,
}

impl Palace {
    pub const ALL: [Palace; 12] = [
        Palace::Life,
        Palace::Wealth,
        Palace::Siblings,
        Palace::Property,
        Palace::Children,
        Palace::Servants,
        Palace::Spouse,
        Palace::Health,
        Palace::Travel,
        Palace::Career,
        Palace::Fortune,
        Palace::Appearance,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Palace::Life => "命",
            Palace::Wealth => "财",
            Palace::Siblings => "兄",
            Palace::Property => "田",
            Palace::Children => "子",
            Palace::Servants => "奴",
            Palace::Spouse => "妻",
            Palace::Health => "疾",
            Palace::Travel => "迁",
            Palace::Career => "官",
            Palace::Fortune => "福",
            Palace::Appearance => "相",
        }
    }
}

impl fmt::Display for Palace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
