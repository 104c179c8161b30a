use crate::qizheng::{Mansion, Palace};
use serde::{Deserialize, Serialize};

/// Which wheel to lay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Natal,
    Transit,
    SolarReturn,
    LunarReturn,
    Compare,
    SevenGovernors,
}

impl ChartKind {
    /// Western wheels with a second ring of bodies outside the natal one.
    pub fn is_dual(self) -> bool {
        matches!(self, ChartKind::Transit | ChartKind::Compare)
    }

    pub fn is_western(self) -> bool {
        !matches!(self, ChartKind::SevenGovernors)
    }
}

/// A plotted point: planet, angle or lunar node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub name: String,
    /// Ecliptic longitude in degrees
    #[serde(rename = "long")]
    pub longitude: f64,
    #[serde(rename = "lat", default)]
    pub latitude: f64,
    /// Degrees per day; negative when retrograde
    #[serde(default)]
    pub speed: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ra: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dec: Option<f64>,
    #[serde(default)]
    pub is_stationary: bool,
    /// Fast / average / slow label supplied by the calculation service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_state: Option<String>,
    #[serde(rename = "xiu", default, skip_serializing_if = "Option::is_none")]
    pub mansion: Option<Mansion>,
    #[serde(rename = "xiu_degree", default, skip_serializing_if = "Option::is_none")]
    pub mansion_degree: Option<f64>,
}

impl Body {
    pub fn new(name: impl Into<String>, longitude: f64) -> Self {
        Self {
            name: name.into(),
            longitude,
            latitude: 0.0,
            speed: 0.0,
            ra: None,
            dec: None,
            is_stationary: false,
            speed_state: None,
            mansion: None,
            mansion_degree: None,
        }
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn stationary(mut self) -> Self {
        self.is_stationary = true;
        self
    }

    pub fn in_mansion(mut self, mansion: Mansion, degree: f64) -> Self {
        self.mansion = Some(mansion);
        self.mansion_degree = Some(degree);
        self
    }
}

/// One of the twelve palaces of the seven-governors wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    pub name: Palace,
    /// Longitude of the palace's first degree
    pub long: f64,
    pub xiu: Mansion,
    pub xiu_degree: f64,
}

/// The life palace descriptor drawn at the center of the seven-governors wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AscHouse {
    pub asc_long: f64,
    pub xiu: Mansion,
    pub xiu_degree: f64,
}

/// Moving-toward (dong-wei) descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingToward {
    /// Longitude reached on each birthday, in retrograde order
    pub long_of_per_year: Vec<f64>,
    /// Longitude at the current process date
    pub long: f64,
    pub xiu: Mansion,
    pub xiu_degree: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    /// Exact aspect angle: 0, 60, 90, 120, 180
    pub aspect_value: f64,
    /// Applying when true, separating otherwise
    pub apply: bool,
    /// Orb in degrees
    pub d: f64,
    pub p0: String,
    pub p1: String,
}

/// Uniform input record for every chart kind.
///
/// Western kinds read `house_cusps`; the seven-governors wheel reads `houses`,
/// `asc`, `mansions` and `moving_toward`. `outer_bodies` carries transit,
/// comparison or process bodies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartInput {
    pub kind: ChartKind,
    #[serde(default)]
    pub bodies: Vec<Body>,
    #[serde(default)]
    pub outer_bodies: Vec<Body>,
    #[serde(default)]
    pub house_cusps: Vec<f64>,
    #[serde(default)]
    pub houses: Vec<House>,
    #[serde(default)]
    pub asc: Option<AscHouse>,
    #[serde(default)]
    pub mansions: Vec<crate::qizheng::MansionBoundary>,
    #[serde(default)]
    pub moving_toward: Option<MovingToward>,
    #[serde(default)]
    pub aspects: Vec<Aspect>,
}

impl ChartInput {
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            bodies: Vec::new(),
            outer_bodies: Vec::new(),
            house_cusps: Vec::new(),
            houses: Vec::new(),
            asc: None,
            mansions: Vec::new(),
            moving_toward: None,
            aspects: Vec::new(),
        }
    }
}
