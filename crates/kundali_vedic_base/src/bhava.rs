//! House cusp computation and house membership.
//!
//! Whole Sign and Equal are exact 30° divisions. Placidus trisects the
//! diurnal and nocturnal semi-arcs in time (Meeus ch. 16 notation; Koch &
//! Knappich 1971). Koch is simplified to a linear trisection of each
//! quadrant between the angles.
//!
//! Latitude-dependent systems fall back to Equal houses, and record the
//! fallback, when |lat| ≥ 66.5°, when an iteration does not converge, when
//! a value is non-finite, or when the cusps do not walk forward around the
//! circle.

use std::f64::consts::PI;

use tracing::warn;

use kundali_frames::{forward_arc_deg, normalize_deg};

use crate::bhava_types::{BhavaResult, BhavaSystem, CuspSolver};
use crate::lagna::{ascendant_deg, midheaven_deg};
use crate::rashi::RASHI_SPAN_DEG;

/// Latitude limit for Placidus and Koch.
pub const MAX_LATITUDE_DEG: f64 = 66.5;

/// House cusps with the default [`CuspSolver`].
///
/// `lst_deg` is the local sidereal time (RAMC), `obliquity_deg` the true
/// obliquity. Cusps and angles are tropical.
pub fn house_cusps(
    system: BhavaSystem,
    lst_deg: f64,
    latitude_deg: f64,
    obliquity_deg: f64,
) -> BhavaResult {
    house_cusps_with(
        system,
        lst_deg,
        latitude_deg,
        obliquity_deg,
        &CuspSolver::default(),
    )
}

/// House cusps with an explicit solver.
pub fn house_cusps_with(
    system: BhavaSystem,
    lst_deg: f64,
    latitude_deg: f64,
    obliquity_deg: f64,
    solver: &CuspSolver,
) -> BhavaResult {
    let asc = ascendant_deg(lst_deg, latitude_deg, obliquity_deg);
    let mc = midheaven_deg(lst_deg, obliquity_deg);

    let result = |system_used, cusps| BhavaResult {
        requested_system: system,
        system_used,
        cusps,
        lagna_deg: asc,
        mc_deg: mc,
    };

    if system.latitude_dependent() && latitude_deg.abs() >= MAX_LATITUDE_DEG {
        warn!(
            system = system.name(),
            latitude_deg, "latitude beyond house system limit, using equal houses"
        );
        return result(BhavaSystem::Equal, equal_cusps(asc));
    }

    let computed = match system {
        BhavaSystem::WholeSign => Ok(whole_sign_cusps(asc)),
        BhavaSystem::Equal => Ok(equal_cusps(asc)),
        BhavaSystem::Placidus => placidus_cusps(asc, mc, lst_deg, latitude_deg, obliquity_deg, solver),
        BhavaSystem::Koch => Ok(quadrant_trisection_cusps(asc, mc)),
    };

    match computed.and_then(check_forward_walk) {
        Ok(cusps) => result(system, cusps),
        Err(reason) => {
            warn!(
                system = system.name(),
                lst_deg,
                latitude_deg,
                reason,
                "house cusps rejected, using equal houses"
            );
            result(BhavaSystem::Equal, equal_cusps(asc))
        }
    }
}

/// Whole sign: cusp 1 is the start of the sign containing `asc_deg`.
pub fn whole_sign_cusps(asc_deg: f64) -> [f64; 12] {
    let start = (normalize_deg(asc_deg) / RASHI_SPAN_DEG).floor() * RASHI_SPAN_DEG;
    equal_cusps(start)
}

/// Equal division: `cusp[i] = start + 30·i`.
pub fn equal_cusps(start_deg: f64) -> [f64; 12] {
    std::array::from_fn(|i| normalize_deg(start_deg + i as f64 * 30.0))
}

/// Trisect the four quadrant arcs between Asc/IC/Desc/MC.
///
/// Cusp 1 = Asc, 4 = IC, 7 = Desc, 10 = MC.
fn quadrant_trisection_cusps(asc_deg: f64, mc_deg: f64) -> [f64; 12] {
    let angles = [
        asc_deg,
        normalize_deg(mc_deg + 180.0),
        normalize_deg(asc_deg + 180.0),
        mc_deg,
    ];
    let mut cusps = [0.0; 12];
    for (q, &from) in angles.iter().enumerate() {
        let to = angles[(q + 1) % 4];
        let arc = forward_arc_deg(from, to);
        cusps[3 * q] = from;
        cusps[3 * q + 1] = normalize_deg(from + arc / 3.0);
        cusps[3 * q + 2] = normalize_deg(from + 2.0 * arc / 3.0);
    }
    cusps
}

fn placidus_cusps(
    asc_deg: f64,
    mc_deg: f64,
    lst_deg: f64,
    latitude_deg: f64,
    obliquity_deg: f64,
    solver: &CuspSolver,
) -> Result<[f64; 12], &'static str> {
    let ramc = lst_deg.to_radians();
    let geo = SemiArcGeometry {
        tan_lat: latitude_deg.to_radians().tan(),
        eps: obliquity_deg.to_radians(),
    };

    // (house index, initial offset from RAMC, semi-arc fraction, diurnal)
    let specs: [(usize, f64, f64, bool); 4] = [
        (10, 30.0, 1.0 / 3.0, true),
        (11, 60.0, 2.0 / 3.0, true),
        (1, 120.0, 2.0 / 3.0, false),
        (2, 150.0, 1.0 / 3.0, false),
    ];

    let mut cusps = [0.0; 12];
    cusps[0] = asc_deg;
    cusps[3] = normalize_deg(mc_deg + 180.0);
    cusps[6] = normalize_deg(asc_deg + 180.0);
    cusps[9] = mc_deg;

    for (idx, offset_deg, fraction, diurnal) in specs {
        let ra = geo.solve(ramc, ramc + offset_deg.to_radians(), fraction, diurnal, solver)?;
        cusps[idx] = geo.ecliptic_longitude_deg(ra);
    }

    cusps[4] = normalize_deg(cusps[10] + 180.0);
    cusps[5] = normalize_deg(cusps[11] + 180.0);
    cusps[7] = normalize_deg(cusps[1] + 180.0);
    cusps[8] = normalize_deg(cusps[2] + 180.0);

    Ok(cusps)
}

struct SemiArcGeometry {
    tan_lat: f64,
    eps: f64,
}

impl SemiArcGeometry {
    /// Declination of the ecliptic point with right ascension `ra`.
    fn declination(&self, ra: f64) -> f64 {
        (self.eps.tan() * ra.sin()).atan()
    }

    /// Ecliptic longitude of the ecliptic point with right ascension `ra`.
    fn ecliptic_longitude_deg(&self, ra: f64) -> f64 {
        normalize_deg(ra.sin().atan2(ra.cos() * self.eps.cos()).to_degrees())
    }

    /// Solve `α = RAMC + f·DSA(δ(α))` (diurnal) or
    /// `α = RAMC + π − f·NSA(δ(α))` (nocturnal) for α.
    ///
    /// Newton steps on the fixed-point residual; both forms share the
    /// derivative `1 − f·dDSA/dα`.
    fn solve(
        &self,
        ramc: f64,
        initial: f64,
        fraction: f64,
        diurnal: bool,
        solver: &CuspSolver,
    ) -> Result<f64, &'static str> {
        let tan_eps = self.eps.tan();
        let mut ra = initial;
        for _ in 0..solver.max_iterations {
            let dec = self.declination(ra);
            let u = -self.tan_lat * dec.tan();
            let dsa = u.clamp(-1.0, 1.0).acos();
            let target = if diurnal {
                ramc + fraction * dsa
            } else {
                ramc + PI - fraction * (PI - dsa)
            };

            let one_minus_u2 = 1.0 - u * u;
            let d_dsa_d_dec = if one_minus_u2 > 1e-15 {
                self.tan_lat / (dec.cos().powi(2) * one_minus_u2.sqrt())
            } else {
                0.0
            };
            let sin_ra = ra.sin();
            let d_dec_d_ra = tan_eps * ra.cos() / (1.0 + tan_eps * tan_eps * sin_ra * sin_ra);
            let slope = 1.0 - fraction * d_dsa_d_dec * d_dec_d_ra;

            let step = (ra - target) / slope;
            if !step.is_finite() {
                return Err("non-finite placidus iterate");
            }
            ra -= step;
            if step.abs() < solver.tolerance_rad {
                return Ok(ra);
            }
        }
        Err("placidus cusp did not converge")
    }
}

/// Cusps must walk forward once around the circle.
fn check_forward_walk(cusps: [f64; 12]) -> Result<[f64; 12], &'static str> {
    if cusps.iter().any(|c| !c.is_finite()) {
        return Err("non-finite cusp");
    }
    let mut total = 0.0;
    for i in 0..12 {
        let arc = forward_arc_deg(cusps[i], cusps[(i + 1) % 12]);
        if arc <= 0.0 {
            return Err("coincident cusps");
        }
        total += arc;
    }
    if (total - 360.0).abs() > 1e-6 {
        return Err("cusps not monotonic");
    }
    Ok(cusps)
}

/// House number 1..=12 containing `lon_deg`.
///
/// Houses are closed-open intervals `[cusp_i, cusp_{i+1})` walked forward
/// with wraparound. Cusp sets that are whole-sign shaped (30° apart, cusp 1
/// on a sign boundary) use sign arithmetic, which gives the same answer.
/// If no interval matches (degenerate cusps), the house whose cusp is the
/// nearest behind `lon_deg` is returned.
pub fn planet_house_number(lon_deg: f64, cusps: &[f64; 12]) -> u8 {
    let lon = normalize_deg(lon_deg);

    if is_whole_sign_shaped(cusps) {
        let sign = (lon / RASHI_SPAN_DEG).floor() as i32;
        let first = (cusps[0] / RASHI_SPAN_DEG).round() as i32;
        return ((sign - first).rem_euclid(12) + 1) as u8;
    }

    for i in 0..12 {
        let width = forward_arc_deg(cusps[i], cusps[(i + 1) % 12]);
        if forward_arc_deg(cusps[i], lon) < width {
            return i as u8 + 1;
        }
    }

    let mut best = 0;
    let mut best_offset = f64::INFINITY;
    for (i, &c) in cusps.iter().enumerate() {
        let offset = forward_arc_deg(c, lon);
        if offset < best_offset {
            best_offset = offset;
            best = i;
        }
    }
    best as u8 + 1
}

fn is_whole_sign_shaped(cusps: &[f64; 12]) -> bool {
    let on_boundary = {
        let k = cusps[0] / RASHI_SPAN_DEG;
        (k - k.round()).abs() < 1e-9
    };
    on_boundary
        && (0..12).all(|i| (forward_arc_deg(cusps[i], cusps[(i + 1) % 12]) - 30.0).abs() < 1e-9)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 23.44;

    fn assert_spacing(r: &BhavaResult, spacing: f64) {
        for i in 0..12 {
            let arc = forward_arc_deg(r.cusps[i], r.cusps[(i + 1) % 12]);
            assert!((arc - spacing).abs() < 1e-9, "house {}: {arc}", i + 1);
        }
    }

    #[test]
    fn whole_sign_starts_on_sign_boundary() {
        let r = house_cusps(BhavaSystem::WholeSign, 100.0, 28.6, EPS);
        assert_spacing(&r, 30.0);
        assert_eq!(r.cusps[0] % 30.0, 0.0);
        assert!(forward_arc_deg(r.cusps[0], r.lagna_deg) < 30.0);
    }

    #[test]
    fn equal_starts_at_lagna() {
        let r = house_cusps(BhavaSystem::Equal, 100.0, 28.6, EPS);
        assert_spacing(&r, 30.0);
        assert_eq!(r.cusps[0], r.lagna_deg);
    }

    #[test]
    fn placidus_angles_and_opposites() {
        let r = house_cusps(BhavaSystem::Placidus, 100.0, 51.5, EPS);
        assert_eq!(r.system_used, BhavaSystem::Placidus);
        assert_eq!(r.cusps[0], r.lagna_deg);
        assert_eq!(r.cusps[9], r.mc_deg);
        for (a, b) in [(4, 10), (5, 11), (7, 1), (8, 2)] {
            let d = forward_arc_deg(r.cusps[b], r.cusps[a]);
            assert!((d - 180.0).abs() < 1e-9, "cusps {} / {}", a + 1, b + 1);
        }
    }

    #[test]
    fn semi_arc_declination_is_for_right_ascension() {
        // The ecliptic point at right ascension α has sin δ = sin ε sin λ.
        let eps = EPS.to_radians();
        let geo = SemiArcGeometry { tan_lat: 0.0, eps };
        for i in 0..36 {
            let ra = (i as f64 * 10.0 + 5.0).to_radians();
            let lon = geo.ecliptic_longitude_deg(ra).to_radians();
            let expected = (eps.sin() * lon.sin()).asin();
            let dec = geo.declination(ra);
            assert!((dec - expected).abs() < 1e-12, "α={}: {dec} vs {expected}", i * 10 + 5);
        }
    }

    #[test]
    fn placidus_london_reference() {
        // RAMC 100°, φ 51.5°, ε 23.44°
        let r = house_cusps(BhavaSystem::Placidus, 100.0, 51.5, EPS);
        let expected = [187.0524, 211.7550, 242.6187, 279.1895];
        for (i, e) in expected.iter().enumerate() {
            assert!((r.cusps[i] - e).abs() < 1e-3, "cusp {}: {}", i + 1, r.cusps[i]);
        }
        assert!((r.cusps[10] - 134.7748).abs() < 1e-3);
        assert!((r.cusps[11] - 164.0428).abs() < 1e-3);
    }

    #[test]
    fn placidus_equator_at_lst_zero() {
        let r = house_cusps(BhavaSystem::Placidus, 0.0, 0.0, EPS);
        assert!((r.cusps[1] - 117.9104).abs() < 1e-3, "{}", r.cusps[1]);
        assert!((r.cusps[10] - 32.1814).abs() < 1e-3, "{}", r.cusps[10]);
    }

    #[test]
    fn placidus_converges_below_polar_circle() {
        for lat in [-66.4, -45.0, 0.0, 28.6, 51.5, 60.0, 66.4] {
            for i in 0..72 {
                let r = house_cusps(BhavaSystem::Placidus, i as f64 * 5.0, lat, EPS);
                assert!(!r.fell_back(), "lat={lat} lst={}", i * 5);
            }
        }
    }

    #[test]
    fn high_latitude_falls_back_to_equal() {
        for system in [BhavaSystem::Placidus, BhavaSystem::Koch] {
            let r = house_cusps(system, 45.0, 70.0, EPS);
            assert_eq!(r.requested_system, system);
            assert_eq!(r.system_used, BhavaSystem::Equal);
            assert!(r.fell_back());
            assert_spacing(&r, 30.0);
        }
        let r = house_cusps(BhavaSystem::Placidus, 45.0, -66.5, EPS);
        assert!(r.fell_back());
    }

    #[test]
    fn starved_solver_falls_back() {
        let solver = CuspSolver {
            max_iterations: 1,
            tolerance_rad: 1e-10,
        };
        let r = house_cusps_with(BhavaSystem::Placidus, 100.0, 51.5, EPS, &solver);
        assert_eq!(r.system_used, BhavaSystem::Equal);
    }

    #[test]
    fn koch_trisects_quadrants() {
        let r = house_cusps(BhavaSystem::Koch, 100.0, 40.0, EPS);
        assert_eq!(r.system_used, BhavaSystem::Koch);
        let q1 = forward_arc_deg(r.cusps[0], r.cusps[3]);
        assert!((forward_arc_deg(r.cusps[0], r.cusps[1]) - q1 / 3.0).abs() < 1e-9);
        assert!((forward_arc_deg(r.cusps[1], r.cusps[2]) - q1 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn house_number_closed_open() {
        let cusps = equal_cusps(10.0);
        assert_eq!(planet_house_number(10.0, &cusps), 1);
        assert_eq!(planet_house_number(39.999, &cusps), 1);
        assert_eq!(planet_house_number(40.0, &cusps), 2);
        assert_eq!(planet_house_number(9.999, &cusps), 12);
        assert_eq!(planet_house_number(355.0, &cusps), 12);
    }

    #[test]
    fn house_number_whole_sign_fast_path() {
        let cusps = equal_cusps(300.0);
        assert_eq!(planet_house_number(300.0, &cusps), 1);
        assert_eq!(planet_house_number(359.9, &cusps), 2);
        assert_eq!(planet_house_number(0.0, &cusps), 3);
        assert_eq!(planet_house_number(299.9, &cusps), 12);
    }

    #[test]
    fn fast_path_agrees_with_interval_scan() {
        let cusps = equal_cusps(120.0);
        for i in 0..720 {
            let lon = i as f64 * 0.5 + 0.25;
            let fast = planet_house_number(lon, &cusps);
            let scan = (0..12)
                .find(|&k| {
                    forward_arc_deg(cusps[k], lon) < forward_arc_deg(cusps[k], cusps[(k + 1) % 12])
                })
                .map(|k| k as u8 + 1);
            assert_eq!(Some(fast), scan, "lon={lon}");
        }
    }

    #[test]
    fn placidus_house_numbers_cover_all() {
        let r = house_cusps(BhavaSystem::Placidus, 200.0, 35.0, EPS);
        let mut seen = [false; 12];
        for i in 0..360 {
            let h = planet_house_number(i as f64 + 0.5, &r.cusps);
            seen[(h - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn degenerate_cusps_use_nearest_behind() {
        let cusps = [50.0; 12];
        assert_eq!(planet_house_number(60.0, &cusps), 1);
    }
}
