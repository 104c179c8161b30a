//! Ecliptic longitude to zodiac sign mapping.

use crate::angle::normalize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of one sign in degrees.
pub const SIGN_WIDTH: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Sign names and glyphs, in zodiac order.
const SIGNS: [(Sign, &str, &str); 12] = [
    (Sign::Aries, "Aries", "♈"),
    (Sign::Taurus, "Taurus", "♉"),
    (Sign::Gemini, "Gemini", "♊"),
    (Sign::Cancer, "Cancer", "♋"),
    (Sign::Leo, "Leo", "♌"),
    (Sign::Virgo, "Virgo", "♍"),
    (Sign::Libra, "Libra", "♎"),
    (Sign::Scorpio, "Scorpio", "♏"),
    (Sign::Sagittarius, "Sagittarius", "♐"),
    (Sign::Capricorn, "Capricorn", "♑"),
    (Sign::Aquarius, "Aquarius", "♒"),
    (Sign::Pisces, "Pisces", "♓"),
];

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Sign for a table index; indices wrap modulo 12.
    pub fn from_index(index: usize) -> Sign {
        Self::ALL[index % 12]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        SIGNS[self.index()].1
    }

    pub fn glyph(self) -> &'static str {
        SIGNS[self.index()].2
    }

    pub fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Longitude where the sign begins.
    pub fn start_longitude(self) -> f64 {
        self.index() as f64 * SIGN_WIDTH
    }

    /// The sign six places away.
    pub fn opposite(self) -> Sign {
        Self::from_index(self.index() + 6)
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A longitude expressed relative to its sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZodiacLong {
    pub zodiac: Sign,
    /// Degrees into the sign, in [0, 30).
    pub long: f64,
}

/// Map an ecliptic longitude to its sign and sign-relative degree.
pub fn zodiac_long(longitude: f64) -> ZodiacLong {
    let lon = normalize(longitude);
    let index = (lon / SIGN_WIDTH).floor() as usize % 12;
    ZodiacLong {
        zodiac: Sign::from_index(index),
        long: lon % SIGN_WIDTH,
    }
}
