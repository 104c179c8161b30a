//! Ring radii for each wheel family, derived from a single image size.

use crate::chart::{ChartKind, GovernorRings};
use crate::layout::types::Ring;
use serde::{Deserialize, Serialize};

/// Absolute radii of the seven-governors wheel, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GovernorRadii {
    pub asc_house: f64,
    pub zodiac: f64,
    pub house: f64,
    pub native_planet: f64,
    pub xiu: f64,
    pub process_planet: f64,
    pub dong_wei: f64,
}

impl GovernorRadii {
    /// Radii are fractions of the half size.
    pub fn new(size: f64, fractions: &GovernorRings) -> Self {
        let cx = size / 2.0;
        Self {
            asc_house: cx * fractions.asc_house,
            zodiac: cx * fractions.zodiac,
            house: cx * fractions.house,
            native_planet: cx * fractions.native_planet,
            xiu: cx * fractions.xiu,
            process_planet: cx * fractions.process_planet,
            dong_wei: cx * fractions.dong_wei,
        }
    }

    pub fn rings(&self) -> Vec<Ring> {
        vec![
            Ring::new("asc_house", 0.0, self.asc_house),
            Ring::new("zodiac", self.asc_house, self.zodiac),
            Ring::new("house", self.zodiac, self.house),
            Ring::new("native_planet", self.house, self.native_planet),
            Ring::new("xiu", self.native_planet, self.xiu),
            Ring::new("process_planet", self.xiu, self.process_planet),
            Ring::new("dong_wei", self.process_planet, self.dong_wei),
        ]
    }
}

/// Bands of a western wheel as absolute radii.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WesternRadii {
    pub zodiac: Ring,
    /// Transit or comparison bodies, dual wheels only
    pub outer_planet: Option<Ring>,
    pub house: Ring,
    pub native_planet: Ring,
    pub cusp_inner: f64,
    pub cusp_outer: f64,
}

impl WesternRadii {
    /// Radii for `kind`, as fractions of `size / 2 - margin`.
    pub fn new(kind: ChartKind, size: f64, margin: f64) -> Self {
        let r = size / 2.0 - margin;
        let band = |name: &str, inner: f64, outer: f64| Ring::new(name, r * inner, r * outer);

        if kind.is_dual() {
            Self {
                zodiac: band("zodiac", 0.88, 1.0),
                outer_planet: Some(band("outer_planet", 0.70, 0.88)),
                house: band("house", 0.62, 0.70),
                native_planet: band("native_planet", 0.35, 0.62),
                cusp_inner: r * 0.35,
                cusp_outer: r * 0.70,
            }
        } else {
            Self {
                zodiac: band("zodiac", 0.85, 1.0),
                outer_planet: None,
                house: band("house", 0.75, 0.85),
                native_planet: band("native_planet", 0.45, 0.75),
                cusp_inner: r * 0.45,
                cusp_outer: r * 0.85,
            }
        }
    }

    pub fn rings(&self) -> Vec<Ring> {
        let mut rings = vec![self.native_planet.clone(), self.house.clone()];
        if let Some(outer) = &self.outer_planet {
            rings.push(outer.clone());
        }
        rings.push(self.zodiac.clone());
        rings
    }
}
