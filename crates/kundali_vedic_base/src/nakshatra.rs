//! Nakshatra (lunar mansion) and pada lookup.
//!
//! 27 equal nakshatras of 13°20′ from Ashwini at 0°, each split into four
//! padas of 3°20′.

use serde::{Deserialize, Serialize};

use kundali_frames::normalize_deg;

/// Span of one nakshatra: 360/27 degrees.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Span of one pada: a quarter nakshatra.
pub const PADA_SPAN_DEG: f64 = NAKSHATRA_SPAN_DEG / 4.0;

const NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishtha",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

/// Name of nakshatra `index` (0 = Ashwini), wrapping modulo 27.
pub const fn nakshatra_name(index: u8) -> &'static str {
    NAMES[(index % 27) as usize]
}

/// Nakshatra placement of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NakshatraInfo {
    /// 0-based index (Ashwini = 0 .. Revati = 26).
    pub nakshatra_index: u8,
    /// Pada 1..=4.
    pub pada: u8,
    /// Degrees elapsed within the nakshatra [0, 13.333…).
    pub degrees_in_nakshatra: f64,
}

impl NakshatraInfo {
    pub fn name(&self) -> &'static str {
        nakshatra_name(self.nakshatra_index)
    }
}

/// Nakshatra, pada and in-nakshatra degree of a sidereal longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_deg(sidereal_lon_deg);
    let idx = ((lon / NAKSHATRA_SPAN_DEG).floor() as u8).min(26);
    let within = (lon - idx as f64 * NAKSHATRA_SPAN_DEG).max(0.0);
    let pada = ((within / PADA_SPAN_DEG).floor() as u8).min(3) + 1;
    NakshatraInfo {
        nakshatra_index: idx,
        pada,
        degrees_in_nakshatra: within,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_of_zodiac() {
        let n = nakshatra_from_longitude(0.0);
        assert_eq!(n.nakshatra_index, 0);
        assert_eq!(n.pada, 1);
        assert_eq!(n.name(), "Ashwini");
    }

    #[test]
    fn end_of_zodiac() {
        let n = nakshatra_from_longitude(359.99);
        assert_eq!(n.nakshatra_index, 26);
        assert_eq!(n.pada, 4);
        assert_eq!(n.name(), "Revati");
    }

    #[test]
    fn padas_progress() {
        // Rohini spans 40°00′ .. 53°20′.
        let base = 40.0;
        for p in 0..4 {
            let n = nakshatra_from_longitude(base + p as f64 * PADA_SPAN_DEG + 0.1);
            assert_eq!(n.nakshatra_index, 3);
            assert_eq!(n.pada, p + 1);
        }
    }

    #[test]
    fn every_index_reachable() {
        for i in 0..27u8 {
            let lon = (i as f64 + 0.5) * NAKSHATRA_SPAN_DEG;
            assert_eq!(nakshatra_from_longitude(lon).nakshatra_index, i);
        }
    }
}
