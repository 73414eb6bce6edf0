//! Apparent geocentric longitude and distance of the Sun.
//!
//! Low-accuracy solar theory of Meeus, "Astronomical Algorithms" (2nd ed),
//! Chapter 25: mean longitude and anomaly as quadratics in T, a three-term
//! equation of the centre, then nutation and the constant of aberration
//! (20.4898″). Accuracy is about 0.01°.

use kundali_frames::normalize_deg;

/// Aberration constant in arcseconds.
const ABERRATION_ARCSEC: f64 = 20.4898;

/// Apparent Sun at one epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Apparent ecliptic longitude of date, degrees [0, 360).
    pub longitude_deg: f64,
    /// Earth–Sun distance in AU.
    pub radius_au: f64,
}

/// `(apparent longitude°, radius AU)` of the Sun.
///
/// `t` is Julian centuries since J2000.0, `dpsi_arcsec` the nutation in
/// longitude at the same epoch.
pub fn sun_position(t: f64, dpsi_arcsec: f64) -> (f64, f64) {
    let s = sun_at(t, dpsi_arcsec);
    (s.longitude_deg, s.radius_au)
}

/// Same as [`sun_position`], as a struct.
pub fn sun_at(t: f64, dpsi_arcsec: f64) -> SunPosition {
    let t2 = t * t;
    let l0 = normalize_deg(280.46646 + 36000.76983 * t + 0.0003032 * t2);
    let m = normalize_deg(357.52911 + 35999.05029 * t - 0.0001537 * t2);
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t2;

    let m_rad = m.to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t2) * m_rad.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m_rad).sin()
        + 0.000289 * (3.0 * m_rad).sin();

    let true_lon = l0 + c;
    let v = (m + c).to_radians();
    let radius_au = 1.000001018 * (1.0 - e * e) / (1.0 + e * v.cos());

    SunPosition {
        longitude_deg: normalize_deg(true_lon + (dpsi_arcsec - ABERRATION_ARCSEC) / 3600.0),
        radius_au,
    }
}
