//! All nine body positions at one instant.

use serde::{Deserialize, Serialize};

use kundali_frames::EclipticFrame;
use kundali_time::jd_to_centuries;

use crate::body::{ALL_BODIES, Body, Planet};
use crate::kepler::KeplerSolver;
use crate::lunar_nodes::{NodeMode, ketu_from_rahu, rahu_deg};
use crate::moon::moon_position;
use crate::planets::planet_position_with;
use crate::retrograde::planet_is_retrograde;
use crate::sun::{SunPosition, sun_at};

/// Apparent geocentric ecliptic position of one body, mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub body: Body,
    /// Tropical longitude, degrees [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude, degrees (0 for the Sun and the nodes).
    pub latitude_deg: f64,
    /// Geocentric distance in AU where the theory provides one.
    pub distance_au: Option<f64>,
    pub is_retrograde: bool,
}

/// Positions of all nine bodies plus the frame they were computed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSnapshot {
    /// Julian Day (UT).
    pub jd: f64,
    /// Julian centuries since J2000.0.
    pub t: f64,
    pub frame: EclipticFrame,
    /// Indexed by [`Body::index`].
    pub bodies: [BodyPosition; 9],
}

impl PositionSnapshot {
    pub fn get(&self, body: Body) -> &BodyPosition {
        &self.bodies[body.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyPosition> {
        self.bodies.iter()
    }
}

/// Compute every body at `jd` (UT) with the default Kepler solver.
pub fn compute_positions(jd: f64, node_mode: NodeMode) -> PositionSnapshot {
    compute_positions_with(jd, node_mode, &KeplerSolver::default())
}

/// Compute every body at `jd` (UT).
///
/// Time is treated as uniform: no ΔT is applied between UT and dynamical
/// time, which is below the precision of the series used.
pub fn compute_positions_with(jd: f64, node_mode: NodeMode, solver: &KeplerSolver) -> PositionSnapshot {
    let t = jd_to_centuries(jd);
    let frame = EclipticFrame::at(t);
    let sun = sun_at(t, frame.dpsi_arcsec);

    let (moon_lon, moon_lat) = moon_position(t);
    let rahu = rahu_deg(t, node_mode);

    let bodies = ALL_BODIES.map(|body| match body {
        Body::Sun => BodyPosition {
            body,
            longitude_deg: sun.longitude_deg,
            latitude_deg: 0.0,
            distance_au: Some(sun.radius_au),
            is_retrograde: false,
        },
        Body::Moon => BodyPosition {
            body,
            longitude_deg: moon_lon,
            latitude_deg: moon_lat,
            distance_au: None,
            is_retrograde: false,
        },
        Body::Rahu | Body::Ketu => BodyPosition {
            body,
            longitude_deg: if body == Body::Rahu { rahu } else { ketu_from_rahu(rahu) },
            latitude_deg: 0.0,
            distance_au: None,
            is_retrograde: true,
        },
        Body::Mercury => planet_entry(Planet::Mercury, jd, t, &sun, solver),
        Body::Venus => planet_entry(Planet::Venus, jd, t, &sun, solver),
        Body::Mars => planet_entry(Planet::Mars, jd, t, &sun, solver),
        Body::Jupiter => planet_entry(Planet::Jupiter, jd, t, &sun, solver),
        Body::Saturn => planet_entry(Planet::Saturn, jd, t, &sun, solver),
    });

    PositionSnapshot {
        jd,
        t,
        frame,
        bodies,
    }
}

fn planet_entry(planet: Planet, jd: f64, t: f64, sun: &SunPosition, solver: &KeplerSolver) -> BodyPosition {
    let p = planet_position_with(planet, t, sun.longitude_deg, sun.radius_au, solver);
    BodyPosition {
        body: planet.body(),
        longitude_deg: p.longitude_deg,
        latitude_deg: p.latitude_deg,
        distance_au: Some(p.distance_au),
        is_retrograde: planet_is_retrograde(planet, jd, sun, solver),
    }
}
