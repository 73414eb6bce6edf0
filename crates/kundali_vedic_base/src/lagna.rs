//! Lagna (Ascendant), MC (Midheaven) and local sidereal time.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapters 12–14;
//! standard spherical astronomy (Montenbruck & Pfleger).
//!
//! The Ascendant is the ecliptic point rising on the eastern horizon. With
//! θ the local sidereal time, ε the obliquity and φ the latitude:
//!
//! `y = −cos θ`, `x = sin ε tan φ + cos ε sin θ`, `λ = atan(y/x)`, plus 180°
//! when `x > 0`. A vanishing `x` resolves to 90° (y < 0) or 270°. Unlike a
//! plain `atan2(y, x)`, which lands on the descending point, this always
//! selects the eastern intersection.

use serde::{Deserialize, Serialize};

use kundali_frames::{EclipticFrame, normalize_deg};
use kundali_time::{gast_deg, local_sidereal_time_deg};

use crate::geo::GeoLocation;

const X_EPSILON: f64 = 1e-12;

/// Local apparent sidereal time in degrees [0, 360).
pub fn local_sidereal_time_at(jd_ut: f64, location: &GeoLocation, frame: &EclipticFrame) -> f64 {
    let gast = gast_deg(jd_ut, frame.dpsi_arcsec, frame.true_obliquity_deg);
    local_sidereal_time_deg(gast, location.longitude_deg)
}

/// Ecliptic longitude of the Ascendant in degrees [0, 360).
///
/// Total for every latitude; at the poles `tan φ` is huge but finite and
/// the result stays normalized.
pub fn ascendant_deg(lst_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> f64 {
    let theta = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();

    let y = -theta.cos();
    let x = eps.sin() * phi.tan() + eps.cos() * theta.sin();

    if x.abs() < X_EPSILON {
        return if y < 0.0 { 90.0 } else { 270.0 };
    }

    let base = (y / x).atan().to_degrees();
    normalize_deg(if x > 0.0 { base + 180.0 } else { base })
}

/// Ecliptic longitude of the Midheaven in degrees [0, 360).
pub fn midheaven_deg(lst_deg: f64, obliquity_deg: f64) -> f64 {
    let theta = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    normalize_deg(theta.sin().atan2(theta.cos() * eps.cos()).to_degrees())
}

/// The chart angles at one instant and place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartAngles {
    /// Local apparent sidereal time (= RAMC), degrees.
    pub lst_deg: f64,
    /// Tropical Ascendant, degrees.
    pub ascendant_deg: f64,
    /// Tropical Midheaven, degrees.
    pub midheaven_deg: f64,
}

impl ChartAngles {
    pub fn compute(jd_ut: f64, location: &GeoLocation, frame: &EclipticFrame) -> Self {
        let lst_deg = local_sidereal_time_at(jd_ut, location, frame);
        Self::from_lst(lst_deg, location.latitude_deg, frame.true_obliquity_deg)
    }

    pub fn from_lst(lst_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> Self {
        Self {
            lst_deg,
            ascendant_deg: ascendant_deg(lst_deg, latitude_deg, obliquity_deg),
            midheaven_deg: midheaven_deg(lst_deg, obliquity_deg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_frames::forward_arc_deg;

    const EPS: f64 = 23.4392911;

    #[test]
    fn equator_lst_zero_rises_cancer() {
        // Vernal point culminating: 0° Cancer rises.
        let asc = ascendant_deg(0.0, 0.0, EPS);
        assert!((asc - 90.0).abs() < 1e-9, "asc = {asc}");
        assert!(midheaven_deg(0.0, EPS).abs() < 1e-9);
    }

    #[test]
    fn equator_cardinal_points() {
        assert!((ascendant_deg(90.0, 0.0, EPS) - 180.0).abs() < 1e-9);
        assert!((ascendant_deg(180.0, 0.0, EPS) - 270.0).abs() < 1e-9);
        let a270 = ascendant_deg(270.0, 0.0, EPS);
        assert!(kundali_frames::angular_separation_deg(a270, 0.0) < 1e-9, "asc = {a270}");
        assert!((midheaven_deg(90.0, EPS) - 90.0).abs() < 1e-9);
        assert!((midheaven_deg(180.0, EPS) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn ascendant_leads_midheaven_by_less_than_180() {
        // Outside the polar circles the Ascendant lies 0..180° east of the MC.
        for lat in [-60.0, -30.0, 0.0, 28.6, 51.5, 65.0] {
            for i in 0..72 {
                let lst = i as f64 * 5.0;
                let a = ChartAngles::from_lst(lst, lat, EPS);
                let arc = forward_arc_deg(a.midheaven_deg, a.ascendant_deg);
                assert!(arc > 0.0 && arc < 180.0, "lat={lat} lst={lst}: arc={arc}");
            }
        }
    }

    #[test]
    fn ascendant_increases_with_lst() {
        let mut prev = ascendant_deg(0.0, 28.6, EPS);
        for i in 1..=360 {
            let asc = ascendant_deg(i as f64, 28.6, EPS);
            let step = forward_arc_deg(prev, asc);
            assert!(step > 0.0 && step < 5.0, "lst={i}: step={step}");
            prev = asc;
        }
    }

    #[test]
    fn never_fails_at_extreme_latitudes() {
        for lat in [-90.0, -89.9, -66.6, 66.6, 80.0, 90.0] {
            for i in 0..36 {
                let asc = ascendant_deg(i as f64 * 10.0, lat, EPS);
                assert!((0.0..360.0).contains(&asc), "lat={lat}: {asc}");
            }
        }
    }

    #[test]
    fn greenwich_sidereal_time_meeus_12b() {
        // Mean sidereal time 128.7378734°; the equation of the equinoxes is ~-0.001°.
        let frame = EclipticFrame::at(kundali_time::jd_to_centuries(2_446_896.30625));
        let lst = local_sidereal_time_at(2_446_896.30625, &GeoLocation::new(0.0, 0.0), &frame);
        assert!((lst - 128.7378734).abs() < 0.002, "lst = {lst}");
    }
}
