//! Ecliptic spherical ↔ rectangular conversion.

use serde::{Deserialize, Serialize};

use crate::angle::normalize_deg;

/// Ecliptic coordinates: longitude, latitude, distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticCoords {
    /// Ecliptic longitude in degrees, range [0, 360).
    pub lon_deg: f64,
    /// Ecliptic latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
    /// Distance from origin in AU.
    pub distance_au: f64,
}

/// Convert rectangular ecliptic `[x, y, z]` (AU) to spherical coordinates.
///
/// Longitude is measured in the x-y plane from +x toward +y and latitude is
/// `atan2(z, √(x² + y²))`, so neither needs a nonzero radius.
pub fn rectangular_to_ecliptic(xyz: &[f64; 3]) -> EclipticCoords {
    let [x, y, z] = *xyz;
    let rxy = x.hypot(y);
    let r = rxy.hypot(z);

    if r == 0.0 {
        return EclipticCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance_au: 0.0,
        };
    }

    EclipticCoords {
        lon_deg: normalize_deg(y.atan2(x).to_degrees()),
        lat_deg: z.atan2(rxy).to_degrees(),
        distance_au: r,
    }
}

/// Convert ecliptic spherical coordinates back to `[x, y, z]` (AU).
pub fn ecliptic_to_rectangular(c: &EclipticCoords) -> [f64; 3] {
    let (sin_lon, cos_lon) = c.lon_deg.to_radians().sin_cos();
    let (sin_lat, cos_lat) = c.lat_deg.to_radians().sin_cos();
    [
        c.distance_au * cos_lat * cos_lon,
        c.distance_au * cos_lat * sin_lon,
        c.distance_au * sin_lat,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn along_axes() {
        let s = rectangular_to_ecliptic(&[2.0, 0.0, 0.0]);
        assert!(s.lon_deg.abs() < EPS && s.lat_deg.abs() < EPS);
        assert!((s.distance_au - 2.0).abs() < EPS);

        let s = rectangular_to_ecliptic(&[0.0, 1.0, 0.0]);
        assert!((s.lon_deg - 90.0).abs() < EPS);

        let s = rectangular_to_ecliptic(&[-1.0, 0.0, 0.0]);
        assert!((s.lon_deg - 180.0).abs() < EPS);

        let s = rectangular_to_ecliptic(&[0.0, 0.0, -3.0]);
        assert!((s.lat_deg + 90.0).abs() < EPS);
    }

    #[test]
    fn third_quadrant_longitude_positive() {
        let s = rectangular_to_ecliptic(&[-1.0, -1.0, 0.0]);
        assert!((s.lon_deg - 225.0).abs() < EPS, "lon = {}", s.lon_deg);
    }

    #[test]
    fn roundtrip() {
        let xyz = [1.234, -5.678, 0.3456];
        let back = ecliptic_to_rectangular(&rectangular_to_ecliptic(&xyz));
        for i in 0..3 {
            assert!(
                (xyz[i] - back[i]).abs() < EPS * 10.0,
                "axis {i}: {:.12} != {:.12}",
                xyz[i],
                back[i]
            );
        }
    }

    #[test]
    fn zero_vector() {
        let s = rectangular_to_ecliptic(&[0.0, 0.0, 0.0]);
        assert_eq!(s.distance_au, 0.0);
        assert_eq!(s.lon_deg, 0.0);
    }
}
