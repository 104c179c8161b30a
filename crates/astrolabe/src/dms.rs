//! Degree-minute-second formatting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A degree value split into whole degrees, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dms {
    pub d: i32,
    pub m: u32,
    pub s: u32,
}

impl Dms {
    /// Reassemble the decimal degree value (truncation error < 1/3600°).
    pub fn to_degrees(self) -> f64 {
        self.d as f64 + self.m as f64 / 60.0 + self.s as f64 / 3600.0
    }

    /// `DD°MM'SS"` with two-digit padding on every field.
    pub fn padded(self) -> String {
        format!("{:02}°{:02}'{:02}\"", self.d, self.m, self.s)
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°{}'{}\"", self.d, self.m, self.s)
    }
}

/// Split a degree value into degrees, minutes and seconds.
///
/// Each field is truncated, never rounded, so seconds stay within 0..=59 and
/// nothing carries into the minute or degree field.
pub fn degree_to_dms(deg: f64) -> Dms {
    let d = deg.floor();
    let minutes = (deg - d) * 60.0;
    let m = minutes.floor();
    let s = ((minutes - m) * 60.0).floor();

    Dms {
        d: d as i32,
        m: (m as u32).min(59),
        s: (s as u32).min(59),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_round_trip(deg: f64) {
        let dms = degree_to_dms(deg);
        let back = dms.to_degrees();
        assert!(back <= deg + 1e-9, "{} reassembled above input: {}", deg, back);
        assert!(deg - back < 1.0 / 3600.0, "{} -> {:?}", deg, dms);
    }

    #[test]
    fn test_degree_to_dms_zero() {
        assert_eq!(degree_to_dms(0.0), Dms { d: 0, m: 0, s: 0 });
    }

    #[test]
    fn test_degree_to_dms_whole_values() {
        assert_eq!(degree_to_dms(15.0), Dms { d: 15, m: 0, s: 0 });
        assert_eq!(degree_to_dms(10.5), Dms { d: 10, m: 30, s: 0 });
        assert_eq!(degree_to_dms(12.25), Dms { d: 12, m: 15, s: 0 });
    }

    #[test]
    fn test_degree_to_dms_truncates_without_carry() {
        let dms = degree_to_dms(359.9999);
        assert_eq!(dms.d, 359);
        assert_eq!(dms.m, 59);
        assert_eq!(dms.s, 59);
    }

    #[test]
    fn test_round_trip_representative_values() {
        for deg in [0.0, 0.1, 1.0 / 3.0, 29.99, 123.456789, 200.0, 359.9999] {
            assert_round_trip(deg);
        }
    }

    #[test]
    fn test_formatting() {
        let dms = Dms { d: 5, m: 7, s: 9 };
        assert_eq!(dms.to_string(), "5°7'9\"");
        assert_eq!(dms.padded(), "05°07'09\"");
    }
}
