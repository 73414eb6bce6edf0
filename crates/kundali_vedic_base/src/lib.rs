//! Vedic chart primitives on top of tropical ecliptic longitudes.
//!
//! This crate provides:
//! - Ayanamsha for Lahiri, Raman, KP and Fagan-Bradley
//! - Rashi (sign) and nakshatra/pada lookup
//! - Lagna (Ascendant), MC and local sidereal time
//! - Bhava (house) cusps for Whole Sign, Equal, Placidus and Koch
//!
//! All longitudes are degrees. Houses are computed tropically and shifted
//! into the sidereal zodiac with [`BhavaResult::to_sidereal`].

pub mod ayanamsha;
pub mod bhava;
pub mod bhava_types;
pub mod error;
pub mod geo;
pub mod lagna;
pub mod nakshatra;
pub mod rashi;

pub use ayanamsha::{ALL_AYANAMSHA_SYSTEMS, AyanamshaSystem, ayanamsha_deg, to_sidereal_deg};
pub use bhava::{
    MAX_LATITUDE_DEG, equal_cusps, house_cusps, house_cusps_with, planet_house_number,
    whole_sign_cusps,
};
pub use bhava_types::{ALL_BHAVA_SYSTEMS, Bhava, BhavaResult, BhavaSystem, CuspSolver};
pub use error::VedicError;
pub use geo::GeoLocation;
pub use lagna::{ChartAngles, ascendant_deg, local_sidereal_time_at, midheaven_deg};
pub use nakshatra::{
    NAKSHATRA_SPAN_DEG, NakshatraInfo, PADA_SPAN_DEG, nakshatra_from_longitude, nakshatra_name,
};
pub use rashi::{ALL_RASHIS, RASHI_SPAN_DEG, Rashi, RashiInfo, rashi_from_longitude, rashi_index};
