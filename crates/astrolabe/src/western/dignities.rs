//! Essential dignities for Western astrology.
//!
//! Static per-sign tables (rulership, exaltation, triplicity, term, face,
//! detriment, fall) and a service that reports every dignity a planet holds
//! at a given longitude.

use crate::angle::{circular_distance, normalize};
use crate::western::types::Planet;
use crate::western::zodiac::{zodiac_long, Element, Sign};
use serde::{Deserialize, Serialize};

use Planet::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DignityType {
    Rulership,
    Detriment,
    Exaltation,
    Fall,
    Triplicity,
    Term,
    Face,
    ExactExaltation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DignityResult {
    #[serde(rename = "type")]
    pub dignity_type: DignityType,
    pub sign: Sign,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExactExaltation {
    #[serde(rename = "planetId")]
    pub planet: Planet,
    pub position: f64, // Longitude in degrees
    pub orbit: f64,    // Orb in degrees (default 2)
}

/// Triplicity rulers: day, night, participating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triplicity {
    pub day: Planet,
    pub night: Planet,
    pub participating: Planet,
}

impl Triplicity {
    pub fn rulers(&self) -> [Planet; 3] {
        [self.day, self.night, self.participating]
    }
}

/// One Egyptian term: `ruler` holds the sign up to `end` degrees (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub ruler: Planet,
    pub end: f64,
}

const RULERSHIP: [Planet; 12] = [
    Mars, Venus, Mercury, Moon, Sun, Mercury, Venus, Mars, Jupiter, Saturn, Saturn, Jupiter,
];

const EXALTATION: [Option<Planet>; 12] = [
    Some(Sun),
    Some(Moon),
    Some(NorthNode),
    Some(Jupiter),
    None,
    Some(Mercury),
    Some(Saturn),
    None,
    Some(SouthNode),
    Some(Mars),
    None,
    Some(Venus),
];

const TERMS: [[(Planet, f64); 5]; 12] = [
    [(Jupiter, 6.0), (Venus, 12.0), (Mercury, 20.0), (Mars, 25.0), (Saturn, 30.0)],
    [(Venus, 8.0), (Mercury, 14.0), (Jupiter, 22.0), (Saturn, 27.0), (Mars, 30.0)],
    [(Mercury, 6.0), (Jupiter, 12.0), (Venus, 17.0), (Mars, 24.0), (Saturn, 30.0)],
    [(Mars, 7.0), (Venus, 13.0), (Mercury, 19.0), (Jupiter, 26.0), (Saturn, 30.0)],
    [(Jupiter, 6.0), (Venus, 11.0), (Saturn, 18.0), (Mercury, 24.0), (Mars, 30.0)],
    [(Mercury, 7.0), (Venus, 17.0), (Jupiter, 21.0), (Mars, 28.0), (Saturn, 30.0)],
    [(Saturn, 6.0), (Mercury, 14.0), (Jupiter, 21.0), (Venus, 28.0), (Mars, 30.0)],
    [(Mars, 7.0), (Venus, 11.0), (Mercury, 19.0), (Jupiter, 24.0), (Saturn, 30.0)],
    [(Jupiter, 12.0), (Venus, 17.0), (Mercury, 21.0), (Saturn, 26.0), (Mars, 30.0)],
    [(Mercury, 7.0), (Jupiter, 14.0), (Venus, 22.0), (Saturn, 26.0), (Mars, 30.0)],
    [(Mercury, 7.0), (Venus, 13.0), (Jupiter, 20.0), (Mars, 25.0), (Saturn, 30.0)],
    [(Venus, 12.0), (Jupiter, 16.0), (Mercury, 19.0), (Mars, 28.0), (Saturn, 30.0)],
];

// Chaldean decans, starting with Mars on the first face of Aries
const FACES: [[Planet; 3]; 12] = [
    [Mars, Sun, Venus],
    [Mercury, Moon, Saturn],
    [Jupiter, Mars, Sun],
    [Venus, Mercury, Moon],
    [Saturn, Jupiter, Mars],
    [Sun, Venus, Mercury],
    [Moon, Saturn, Jupiter],
    [Mars, Sun, Venus],
    [Mercury, Moon, Saturn],
    [Jupiter, Mars, Sun],
    [Venus, Mercury, Moon],
    [Saturn, Jupiter, Mars],
];

/// Domicile ruler of a sign.
pub fn rulership(sign: Sign) -> Planet {
    RULERSHIP[sign.index()]
}

/// The planet in detriment: the ruler of the opposite sign.
pub fn detriment(sign: Sign) -> Planet {
    RULERSHIP[sign.opposite().index()]
}

/// Exalted planet, if the sign has one.
pub fn exaltation(sign: Sign) -> Option<Planet> {
    EXALTATION[sign.index()]
}

/// The planet in fall: the one exalted in the opposite sign.
pub fn fall(sign: Sign) -> Option<Planet> {
    EXALTATION[sign.opposite().index()]
}

/// Dorothean triplicity rulers for the sign's element.
pub fn triplicity(sign: Sign) -> Triplicity {
    let (day, night, participating) = match sign.element() {
        Element::Fire => (Sun, Jupiter, Saturn),
        Element::Earth => (Venus, Moon, Mars),
        Element::Air => (Saturn, Mercury, Jupiter),
        Element::Water => (Venus, Mars, Moon),
    };
    Triplicity {
        day,
        night,
        participating,
    }
}

/// Egyptian terms of a sign, in ascending degree order.
pub fn terms(sign: Sign) -> [Term; 5] {
    TERMS[sign.index()].map(|(ruler, end)| Term { ruler, end })
}

/// Term ruler for a degree within a sign.
pub fn term_ruler(sign: Sign, degree_in_sign: f64) -> Planet {
    let table = &TERMS[sign.index()];
    table
        .iter()
        .find(|(_, end)| degree_in_sign < *end)
        .map(|(ruler, _)| *ruler)
        .unwrap_or(table[4].0)
}

/// The three face rulers of a sign.
pub fn faces(sign: Sign) -> [Planet; 3] {
    FACES[sign.index()]
}

/// Face ruler for a degree within a sign.
pub fn face_ruler(sign: Sign, degree_in_sign: f64) -> Planet {
    let face = ((degree_in_sign / 10.0).floor() as usize).min(2);
    FACES[sign.index()][face]
}

/// Check if planet has exact exaltation
fn has_exact_exaltation(planet_position: f64, exact_position: f64, orbit: f64) -> bool {
    circular_distance(planet_position, exact_position) <= orbit
}

pub struct DignitiesService;

impl DignitiesService {
    /// Get dignities for a planet based on its longitude
    pub fn get_dignities(
        &self,
        planet: Planet,
        longitude: f64,
        exact_exaltations: Option<&[ExactExaltation]>,
    ) -> Vec<DignityResult> {
        let position = zodiac_long(longitude);
        let sign = position.zodiac;
        let mut result = Vec::new();

        let mut push = |dignity_type: DignityType, degree: Option<f64>| {
            result.push(DignityResult {
                dignity_type,
                sign,
                degree,
            });
        };

        if rulership(sign) == planet {
            push(DignityType::Rulership, None);
        } else if detriment(sign) == planet {
            push(DignityType::Detriment, None);
        }
        if exaltation(sign) == Some(planet) {
            push(DignityType::Exaltation, None);
        } else if fall(sign) == Some(planet) {
            push(DignityType::Fall, None);
        }
        if triplicity(sign).rulers().contains(&planet) {
            push(DignityType::Triplicity, None);
        }
        if term_ruler(sign, position.long) == planet {
            push(DignityType::Term, None);
        }
        if face_ruler(sign, position.long) == planet {
            push(DignityType::Face, None);
        }

        if let Some(exact_exaltations) = exact_exaltations {
            let normalized_position = normalize(longitude);
            for exact in exact_exaltations.iter().filter(|e| e.planet == planet) {
                if has_exact_exaltation(normalized_position, exact.position, exact.orbit) {
                    push(DignityType::ExactExaltation, Some(exact.position));
                }
            }
        }

        result
    }

    /// Default exact exaltation degrees
    pub fn get_default_exact_exaltations() -> Vec<ExactExaltation> {
        [
            (Sun, 19.0),
            (Moon, 33.0),
            (Mercury, 165.0),
            (Venus, 357.0),
            (Mars, 298.0),
            (Jupiter, 95.0),
            (Saturn, 201.0),
        ]
        .into_iter()
        .map(|(planet, position)| ExactExaltation {
            planet,
            position,
            orbit: 2.0,
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_total() {
        for sign in Sign::ALL {
            let _ = rulership(sign);
            let _ = detriment(sign);
            let _ = exaltation(sign);
            let _ = fall(sign);
            let _ = triplicity(sign);
            let _ = faces(sign);
            let t = terms(sign);
            assert_eq!(t[4].end, 30.0);
            assert!(t.windows(2).all(|w| w[0].end < w[1].end));
        }
    }

    #[test]
    fn test_rulership_and_detriment() {
        assert_eq!(rulership(Sign::Leo), Sun);
        assert_eq!(detriment(Sign::Aquarius), Sun);
        assert_eq!(rulership(Sign::Scorpio), Mars);
        assert_eq!(detriment(Sign::Taurus), Mars);
    }

    #[test]
    fn test_exaltation_and_fall() {
        assert_eq!(exaltation(Sign::Aries), Some(Sun));
        assert_eq!(fall(Sign::Libra), Some(Sun));
        assert_eq!(exaltation(Sign::Leo), None);
        assert_eq!(fall(Sign::Aquarius), None);
    }

    #[test]
    fn test_term_and_face_rulers() {
        assert_eq!(term_ruler(Sign::Aries, 0.0), Jupiter);
        assert_eq!(term_ruler(Sign::Aries, 6.0), Venus);
        assert_eq!(term_ruler(Sign::Aries, 29.9), Saturn);
        assert_eq!(face_ruler(Sign::Aries, 5.0), Mars);
        assert_eq!(face_ruler(Sign::Aries, 25.0), Venus);
        assert_eq!(face_ruler(Sign::Pisces, 29.999), Mars);
    }

    #[test]
    fn test_get_dignities_sun_in_leo() {
        let dignities = DignitiesService.get_dignities(Sun, 135.0, None);
        assert!(dignities.iter().any(|d| d.dignity_type == DignityType::Rulership));
        assert!(dignities.iter().any(|d| d.dignity_type == DignityType::Triplicity));
    }

    #[test]
    fn test_get_dignities_exact_exaltation() {
        let exact = DignitiesService::get_default_exact_exaltations();
        let dignities = DignitiesService.get_dignities(Sun, 19.0, Some(&exact));
        assert!(dignities.iter().any(|d| d.dignity_type == DignityType::Exaltation));
        assert!(dignities.iter().any(|d| d.dignity_type == DignityType::ExactExaltation));
    }

    #[test]
    fn test_exact_exaltation_across_zero() {
        let exact = DignitiesService::get_default_exact_exaltations();
        // Venus exact at 357°, 1° Aries is 4° away
        let dignities = DignitiesService.get_dignities(Venus, 1.0, Some(&exact));
        assert!(!dignities.iter().any(|d| d.dignity_type == DignityType::ExactExaltation));
        let dignities = DignitiesService.get_dignities(Venus, 358.5, Some(&exact));
        assert!(dignities.iter().any(|d| d.dignity_type == DignityType::ExactExaltation));
    }
}
