use crate::chart::data::ChartKind;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

lazy_static! {
    static ref HEX_COLOR: Regex = Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap();
}

#[derive(Error, Debug, PartialEq)]
pub enum SettingsError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("ring fractions must increase strictly inside (0, 1]: {0:?}")]
    RingOrder(Vec<f64>),
    #[error("{field} is not a #rrggbb color: {value}")]
    Color { field: &'static str, value: String },
}

/// Radii of the seven-governors wheel as fractions of the half size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernorRings {
    pub asc_house: f64,
    pub zodiac: f64,
    pub house: f64,
    pub native_planet: f64,
    pub xiu: f64,
    pub process_planet: f64,
    pub dong_wei: f64,
}

impl GovernorRings {
    pub fn as_array(&self) -> [f64; 7] {
        [
            self.asc_house,
            self.zodiac,
            self.house,
            self.native_planet,
            self.xiu,
            self.process_planet,
            self.dong_wei,
        ]
    }
}

impl Default for GovernorRings {
    fn default() -> Self {
        Self {
            asc_house: 0.1,
            zodiac: 0.2,
            house: 0.3,
            native_planet: 0.4,
            xiu: 0.5,
            process_planet: 0.6,
            dong_wei: 0.65,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    // De-confliction
    /// Minimum angular gap between two labels, in degrees
    pub label_gap: f64,

    // Band separators
    pub separator_outer_inset: f64,
    pub separator_inner_inset: f64,
    pub marker_overhang: f64,

    // Sizing
    pub viewport_margin: f64,
    pub font_size: f64,
    pub governors_size: f64,
    pub western_size: f64,
    /// Gap between the western drawing radius and the image edge
    pub western_margin: f64,
    pub aspect_cell: f64,

    // State colors
    pub color_default: String,
    pub color_retrograde: String,
    pub color_stationary: String,

    pub governor_rings: GovernorRings,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            label_gap: 12.0,

            separator_outer_inset: 6.0,
            separator_inner_inset: 4.0,
            marker_overhang: 4.0,

            viewport_margin: 10.0,
            font_size: 20.0,
            governors_size: 800.0,
            western_size: 700.0,
            western_margin: 20.0,
            aspect_cell: 30.0,

            color_default: "#28a745".to_string(),    // Green
            color_retrograde: "#dc3545".to_string(), // Red
            color_stationary: "#ffc107".to_string(), // Amber

            governor_rings: GovernorRings::default(),
        }
    }
}

impl ChartSettings {
    /// Image size before any viewport fitting.
    pub fn size_for(&self, kind: ChartKind) -> f64 {
        match kind {
            ChartKind::SevenGovernors => self.governors_size,
            _ => self.western_size,
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        for (field, value) in [
            ("label_gap", self.label_gap),
            ("font_size", self.font_size),
            ("governors_size", self.governors_size),
            ("western_size", self.western_size),
            ("aspect_cell", self.aspect_cell),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(SettingsError::NotPositive { field, value });
            }
        }

        let rings = self.governor_rings.as_array();
        let in_range = rings.iter().all(|r| *r > 0.0 && *r <= 1.0);
        let increasing = rings.windows(2).all(|w| w[0] < w[1]);
        if !in_range || !increasing {
            return Err(SettingsError::RingOrder(rings.to_vec()));
        }

        for (field, value) in [
            ("color_default", &self.color_default),
            ("color_retrograde", &self.color_retrograde),
            ("color_stationary", &self.color_stationary),
        ] {
            if !HEX_COLOR.is_match(value) {
                return Err(SettingsError::Color {
                    field,
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }
}
