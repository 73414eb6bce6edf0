//! Rashi (sign) lookup: twelve 30° signs from Mesha (Aries) at 0°.

use serde::{Deserialize, Serialize};

use kundali_frames::normalize_deg;

/// Width of one sign in degrees.
pub const RASHI_SPAN_DEG: f64 = 30.0;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in zodiacal order.
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

const SANSKRIT: [&str; 12] = [
    "Mesha", "Vrishabha", "Mithuna", "Karka", "Simha", "Kanya", "Tula", "Vrischika", "Dhanu",
    "Makara", "Kumbha", "Meena",
];

const ENGLISH: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

impl Rashi {
    /// 0-based index (Mesha = 0 .. Meena = 11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi for an index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }

    pub const fn name(self) -> &'static str {
        SANSKRIT[self as usize]
    }

    pub const fn english_name(self) -> &'static str {
        ENGLISH[self as usize]
    }

    /// Longitude of the start of this sign.
    pub fn start_deg(self) -> f64 {
        self.index() as f64 * RASHI_SPAN_DEG
    }

    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// Position of a longitude within its sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// 0-based sign index (0 = Mesha).
    pub rashi_index: u8,
    /// Decimal degrees within the sign [0, 30).
    pub degrees_in_rashi: f64,
}

/// Sign index 0..=11 of a longitude.
pub fn rashi_index(lon_deg: f64) -> u8 {
    ((normalize_deg(lon_deg) / RASHI_SPAN_DEG).floor() as u8).min(11)
}

/// Sign and in-sign degree of a (sidereal or tropical) longitude.
pub fn rashi_from_longitude(lon_deg: f64) -> RashiInfo {
    let lon = normalize_deg(lon_deg);
    let idx = rashi_index(lon);
    RashiInfo {
        rashi: Rashi::from_index(idx),
        rashi_index: idx,
        degrees_in_rashi: lon - idx as f64 * RASHI_SPAN_DEG,
    }
}
