//! Low-precision nutation and obliquity of the ecliptic.
//!
//! Four-term nutation series in longitude (Δψ) and obliquity (Δε), driven by
//! the longitude of the Moon's mean ascending node Ω, the Sun's mean
//! longitude L and the Moon's mean longitude L′. Accuracy is about 0.5″ in
//! Δψ and 0.1″ in Δε, which is ample for sign/house level work.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 22
//! (eq. 22.2 for the mean obliquity).

use serde::{Deserialize, Serialize};

use crate::angle::normalize_deg;

/// Nutation and obliquity at a single epoch.
///
/// Invariant: `true_obliquity_deg == mean_obliquity_deg + deps_arcsec / 3600`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticFrame {
    /// Nutation in longitude, arcseconds.
    pub dpsi_arcsec: f64,
    /// Nutation in obliquity, arcseconds.
    pub deps_arcsec: f64,
    /// Mean obliquity ε₀, degrees.
    pub mean_obliquity_deg: f64,
    /// True obliquity ε = ε₀ + Δε, degrees.
    pub true_obliquity_deg: f64,
}

impl EclipticFrame {
    /// Frame at `t` Julian centuries since J2000.0.
    pub fn at(t: f64) -> Self {
        let (dpsi_arcsec, deps_arcsec) = nutation_arcsec(t);
        let mean_obliquity_deg = mean_obliquity_deg(t);
        Self {
            dpsi_arcsec,
            deps_arcsec,
            mean_obliquity_deg,
            true_obliquity_deg: mean_obliquity_deg + deps_arcsec / 3600.0,
        }
    }

    /// Nutation in longitude expressed in degrees.
    pub fn dpsi_deg(&self) -> f64 {
        self.dpsi_arcsec / 3600.0
    }
}

/// Mean obliquity of the ecliptic ε₀ in degrees (Meeus 22.2).
///
/// `23°26′21.448″ − 46.8150″T − 0.00059″T² + 0.001813″T³`
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    23.0 + 26.0 / 60.0 + 21.448 / 3600.0 - (46.8150 * t + 0.00059 * t2 - 0.001813 * t3) / 3600.0
}

/// `(Δψ″, Δε″, true obliquity°)` at `t` Julian centuries since J2000.0.
pub fn nutation_obliquity(t: f64) -> (f64, f64, f64) {
    let frame = EclipticFrame::at(t);
    (frame.dpsi_arcsec, frame.deps_arcsec, frame.true_obliquity_deg)
}

fn nutation_arcsec(t: f64) -> (f64, f64) {
    // Moon's mean node, Sun's and Moon's mean longitudes (degrees).
    let om = normalize_deg(125.04452 - 1934.136261 * t + 0.0020708 * t * t).to_radians();
    let l_sun = normalize_deg(280.4664567 + 36000.76982779 * t).to_radians();
    let l_moon = normalize_deg(218.3165085 + 481267.8813398 * t).to_radians();

    let dpsi = (-17.20 - 0.1742 * t) * om.sin() - 1.32 * (2.0 * l_sun).sin()
        - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * om).sin();

    let deps = (9.20 + 0.0897 * t) * om.cos()
        + 0.57 * (2.0 * l_sun).cos()
        + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * om).cos();

    (dpsi, deps)
}
