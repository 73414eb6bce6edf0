//! Retrograde detection by forward differencing of geocentric longitude.

use kundali_frames::{EclipticFrame, forward_arc_deg};
use kundali_time::jd_to_centuries;

use crate::body::{Body, Planet};
use crate::kepler::KeplerSolver;
use crate::planets::planet_position_with;
use crate::sun::{SunPosition, sun_at};

/// Time step between the two longitude samples, in days.
pub const RETROGRADE_STEP_DAYS: f64 = 0.5;

/// Whether `body` is moving backwards in longitude at `jd`.
///
/// `sun` is the apparent Sun already computed at `jd`. The Sun and Moon are
/// never retrograde; Rahu and Ketu always are. A planet is retrograde when
/// its longitude advance over [`RETROGRADE_STEP_DAYS`], taken mod 360, is
/// strictly greater than 180°; an exact 180° counts as direct.
pub fn is_retrograde(body: Body, jd: f64, sun: &SunPosition) -> bool {
    let planet = |p| planet_is_retrograde(p, jd, sun, &KeplerSolver::default());
    match body {
        Body::Sun | Body::Moon => false,
        Body::Rahu | Body::Ketu => true,
        Body::Mercury => planet(Planet::Mercury),
        Body::Venus => planet(Planet::Venus),
        Body::Mars => planet(Planet::Mars),
        Body::Jupiter => planet(Planet::Jupiter),
        Body::Saturn => planet(Planet::Saturn),
    }
}

/// Planet-only form with an explicit Kepler solver.
pub fn planet_is_retrograde(planet: Planet, jd: f64, sun: &SunPosition, solver: &KeplerSolver) -> bool {
    let t0 = jd_to_centuries(jd);
    let l0 = planet_position_with(planet, t0, sun.longitude_deg, sun.radius_au, solver).longitude_deg;

    let t1 = jd_to_centuries(jd + RETROGRADE_STEP_DAYS);
    let frame1 = EclipticFrame::at(t1);
    let sun1 = sun_at(t1, frame1.dpsi_arcsec);
    let l1 = planet_position_with(planet, t1, sun1.longitude_deg, sun1.radius_au, solver).longitude_deg;

    motion_is_retrograde(l0, l1)
}

/// `true` iff the forward arc from `l0` to `l1` exceeds 180°.
pub fn motion_is_retrograde(l0: f64, l1: f64) -> bool {
    forward_arc_deg(l0, l1) > 180.0
}
