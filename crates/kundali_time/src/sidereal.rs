//! Greenwich and local sidereal time.
//!
//! GMST polynomial: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 12.4,
//! evaluated directly from a UT Julian Day. Apparent sidereal time adds the
//! equation of the equinoxes, `Δψ·cos ε`.
//!
//! All results are degrees in [0, 360).

use kundali_frames::normalize_deg;

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

/// Greenwich Mean Sidereal Time in degrees for a UT Julian Day.
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let d = jd_ut - J2000_JD;
    let t = d / DAYS_PER_CENTURY;
    let theta = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_deg(theta)
}

/// Equation of the equinoxes in degrees.
///
/// `dpsi_arcsec` is the nutation in longitude; `true_obliquity_deg` the
/// obliquity of the ecliptic including nutation.
pub fn equation_of_equinoxes_deg(dpsi_arcsec: f64, true_obliquity_deg: f64) -> f64 {
    dpsi_arcsec * true_obliquity_deg.to_radians().cos() / 3600.0
}

/// Greenwich Apparent Sidereal Time in degrees.
pub fn gast_deg(jd_ut: f64, dpsi_arcsec: f64, true_obliquity_deg: f64) -> f64 {
    normalize_deg(gmst_deg(jd_ut) + equation_of_equinoxes_deg(dpsi_arcsec, true_obliquity_deg))
}

/// Local sidereal time from a Greenwich sidereal time and east longitude.
pub fn local_sidereal_time_deg(greenwich_deg: f64, longitude_east_deg: f64) -> f64 {
    normalize_deg(greenwich_deg + longitude_east_deg)
}
