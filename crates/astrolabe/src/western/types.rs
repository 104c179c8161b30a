//! Western astrology types shared by the dignity tables and the tooltips.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bodies the dignity tables know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
    SouthNode,
}

impl Planet {
    pub fn name(self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
            Planet::Pluto => "Pluto",
            Planet::NorthNode => "North Node",
            Planet::SouthNode => "South Node",
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = ();

    /// Accepts English ids in any case and the single-character
    /// seven-governors names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sun" | "日" => Ok(Planet::Sun),
            "moon" | "月" => Ok(Planet::Moon),
            "mercury" | "水" => Ok(Planet::Mercury),
            "venus" | "金" => Ok(Planet::Venus),
            "mars" | "火" => Ok(Planet::Mars),
            "jupiter" | "木" => Ok(Planet::Jupiter),
            "saturn" | "土" => Ok(Planet::Saturn),
            "uranus" => Ok(Planet::Uranus),
            "neptune" => Ok(Planet::Neptune),
            "pluto" => Ok(Planet::Pluto),
            "north_node" | "northnode" | "计" => Ok(Planet::NorthNode),
            "south_node" | "southnode" | "罗" => Ok(Planet::SouthNode),
            _ => Err(()),
        }
    }
}
