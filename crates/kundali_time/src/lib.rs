//! Civil time, Julian Day and sidereal time for chart computation.
//!
//! This crate provides:
//! - Gregorian calendar ↔ Julian Day conversion (proleptic Gregorian throughout)
//! - Julian centuries since J2000.0
//! - `CivilTime`, a local wall-clock timestamp carrying an explicit UTC offset
//! - Greenwich and local sidereal time
//!
//! Julian Day (UT) is the only time representation handed to downstream
//! crates. Nothing after this crate re-derives calendar fields.

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{CivilTime, days_in_month, is_leap_year};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, calendar_to_jd, centuries_to_jd, jd_to_calendar, jd_to_centuries,
    to_julian_day,
};
pub use sidereal::{
    equation_of_equinoxes_deg, gast_deg, gmst_deg, local_sidereal_time_deg,
};
