//! Geocentric ecliptic positions of Mercury through Saturn.
//!
//! Pipeline per planet (Meeus, "Astronomical Algorithms" 2nd ed, Ch. 30–33):
//! mean elements → Kepler's equation → true anomaly and radius →
//! heliocentric rectangular ecliptic coordinates → subtract the Earth
//! (taken as the Sun's geocentric position reversed) → geocentric
//! longitude/latitude. Jupiter and Saturn then receive the largest terms of
//! their mutual perturbation.
//!
//! No light-time or aberration correction is applied to the planet; errors
//! are a few hundredths of a degree for the inner planets and up to a few
//! tenths for the outer ones over 1800–2100.

use kundali_frames::{EclipticCoords, normalize_deg, rectangular_to_ecliptic};

use crate::body::Planet;
use crate::kepler::{KeplerSolution, KeplerSolver, true_anomaly_rad};
use crate::orbital_elements::{OrbitalElements, elements_at};

/// Geocentric planet position with the Kepler diagnostics behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetPosition {
    pub planet: Planet,
    /// Geocentric ecliptic longitude of date, degrees [0, 360).
    pub longitude_deg: f64,
    /// Geocentric ecliptic latitude, degrees.
    pub latitude_deg: f64,
    /// Geocentric distance, AU.
    pub distance_au: f64,
    /// Heliocentric distance, AU.
    pub heliocentric_distance_au: f64,
    pub kepler: KeplerSolution,
}

/// `(longitude°, latitude°, distance AU)` with the default Kepler solver.
///
/// `sun_lon_deg` and `sun_radius_au` are the Sun's geocentric apparent
/// longitude and distance at the same `t`.
pub fn planet_position(planet: Planet, t: f64, sun_lon_deg: f64, sun_radius_au: f64) -> (f64, f64, f64) {
    let p = planet_position_with(planet, t, sun_lon_deg, sun_radius_au, &KeplerSolver::default());
    (p.longitude_deg, p.latitude_deg, p.distance_au)
}

/// Full computation with an explicit Kepler solver.
pub fn planet_position_with(
    planet: Planet,
    t: f64,
    sun_lon_deg: f64,
    sun_radius_au: f64,
    solver: &KeplerSolver,
) -> PlanetPosition {
    let el = elements_at(planet, t);
    let m_deg = el.mean_anomaly_deg();
    let kepler = solver.solve(m_deg.to_radians(), el.e);

    let helio = heliocentric_rectangular(&el, kepler.eccentric_anomaly_rad);
    let helio_r = (helio[0] * helio[0] + helio[1] * helio[1] + helio[2] * helio[2]).sqrt();

    let earth_lon = (sun_lon_deg + 180.0).to_radians();
    let geo = [
        helio[0] - sun_radius_au * earth_lon.cos(),
        helio[1] - sun_radius_au * earth_lon.sin(),
        helio[2],
    ];
    let EclipticCoords {
        lon_deg,
        lat_deg,
        distance_au,
    } = rectangular_to_ecliptic(&geo);

    let (dlon, dlat) = perturbation(planet, t, m_deg);

    PlanetPosition {
        planet,
        longitude_deg: normalize_deg(lon_deg + dlon),
        latitude_deg: lat_deg + dlat,
        distance_au,
        heliocentric_distance_au: helio_r,
        kepler,
    }
}

/// Heliocentric ecliptic `[x, y, z]` (AU) from elements and eccentric anomaly.
fn heliocentric_rectangular(el: &OrbitalElements, ecc_anomaly: f64) -> [f64; 3] {
    let v = true_anomaly_rad(ecc_anomaly, el.e);
    let r = el.a_au * (1.0 - el.e * ecc_anomaly.cos());

    let u = v + el.arg_perihelion_deg().to_radians();
    let (sin_u, cos_u) = u.sin_cos();
    let (sin_om, cos_om) = el.node_deg.to_radians().sin_cos();
    let (sin_i, cos_i) = el.i_deg.to_radians().sin_cos();

    [
        r * (cos_om * cos_u - sin_om * sin_u * cos_i),
        r * (sin_om * cos_u + cos_om * sin_u * cos_i),
        r * sin_u * sin_i,
    ]
}

/// Jupiter–Saturn mutual perturbation `(Δλ°, Δβ°)`.
///
/// `own_m_deg` is the perturbed planet's own mean anomaly. The partner's
/// mean anomaly comes from a fixed linear approximation.
fn perturbation(planet: Planet, t: f64, own_m_deg: f64) -> (f64, f64) {
    let r = f64::to_radians;
    match planet {
        Planet::Jupiter => {
            let mj = r(own_m_deg);
            let ms = r(normalize_deg(316.967 + 1221.5515 * t));
            let dlon = -0.332 * (2.0 * mj - 5.0 * ms - r(67.6)).cos()
                - 0.056 * (2.0 * mj - 2.0 * ms + r(21.0)).cos()
                + 0.042 * (3.0 * mj - 5.0 * ms + r(21.0)).cos()
                - 0.036 * (mj - 2.0 * ms).cos()
                + 0.022 * r(197.2 + 152.0 * t).cos()
                + 0.023 * (2.0 * mj - 3.0 * ms + r(52.0)).cos()
                - 0.016 * (2.0 * mj - 5.0 * ms - r(69.9)).cos();
            (dlon, 0.0)
        }
        Planet::Saturn => {
            let mj = r(normalize_deg(19.9 + 3034.906 * t));
            let ms = r(own_m_deg);
            let dlon = 0.812 * (2.0 * mj - 5.0 * ms - r(67.6)).sin()
                - 0.229 * (2.0 * mj - 4.0 * ms - r(2.0)).cos()
                + 0.119 * (mj - 2.0 * ms - r(3.0)).sin()
                + 0.046 * (2.0 * mj - 6.0 * ms - r(69.0)).sin()
                + 0.014 * (mj - 3.0 * ms + r(32.0)).sin();
            let dlat = -0.020 * (2.0 * mj - 4.0 * ms - r(2.0)).cos()
                + 0.018 * (2.0 * mj - 6.0 * ms - r(49.0)).sin();
            (dlon, dlat)
        }
        Planet::Mercury | Planet::Venus | Planet::Mars => (0.0, 0.0),
    }
}
