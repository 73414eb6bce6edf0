//! Geocentric ecliptic position of the Moon.
//!
//! Truncated ELP-2000/82 theory as tabulated in Meeus, "Astronomical
//! Algorithms" (2nd ed), Chapter 47: 59 periodic terms in longitude
//! (Table 47.A), the 30 largest terms in latitude (Table 47.B) and the
//! additive corrections for the action of Venus (A1), Jupiter (A2) and the
//! flattening of the Earth (A3). Accuracy is about 10″ in longitude.
//!
//! The result is referred to the mean equinox of date; nutation is not
//! applied.

use kundali_frames::normalize_deg;

/// One periodic term: integer multipliers of D, M, M′, F and an amplitude
/// in units of 1e-6 degree.
///
/// Terms containing the Sun's mean anomaly M are scaled by `E^|m|` to
/// account for the decreasing eccentricity of the Earth's orbit.
#[derive(Debug, Clone, Copy)]
struct MoonTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    amplitude: i32,
}

impl MoonTerm {
    const fn new(d: i8, m: i8, mp: i8, f: i8, amplitude: i32) -> Self {
        Self {
            d,
            m,
            mp,
            f,
            amplitude,
        }
    }

    fn eval(&self, args: &FundamentalArgs) -> f64 {
        let arg = self.d as f64 * args.d
            + self.m as f64 * args.m
            + self.mp as f64 * args.mp
            + self.f as f64 * args.f;
        let scale = match self.m.unsigned_abs() {
            0 => 1.0,
            1 => args.e,
            _ => args.e * args.e,
        };
        self.amplitude as f64 * scale * arg.to_radians().sin()
    }
}

#[rustfmt::skip]
static LONGITUDE_TERMS: [MoonTerm; 59] = [
    // D   M   M′   F         Σ (1e-6°)
    MoonTerm::new(  0,   0,   1,   0,   6288774),
    MoonTerm::new(  2,   0,  -1,   0,   1274027),
    MoonTerm::new(  2,   0,   0,   0,    658314),
    MoonTerm::new(  0,   0,   2,   0,    213618),
    MoonTerm::new(  0,   1,   0,   0,   -185116),
    MoonTerm::new(  0,   0,   0,   2,   -114332),
    MoonTerm::new(  2,   0,  -2,   0,     58793),
    MoonTerm::new(  2,  -1,  -1,   0,     57066),
    MoonTerm::new(  2,   0,   1,   0,     53322),
    MoonTerm::new(  2,  -1,   0,   0,     45758),
    MoonTerm::new(  0,   1,  -1,   0,    -40923),
    MoonTerm::new(  1,   0,   0,   0,    -34720),
    MoonTerm::new(  0,   1,   1,   0,    -30383),
    MoonTerm::new(  2,   0,   0,  -2,     15327),
    MoonTerm::new(  0,   0,   1,   2,    -12528),
    MoonTerm::new(  0,   0,   1,  -2,     10980),
    MoonTerm::new(  4,   0,  -1,   0,     10675),
    MoonTerm::new(  0,   0,   3,   0,     10034),
    MoonTerm::new(  4,   0,  -2,   0,      8548),
    MoonTerm::new(  2,   1,  -1,   0,     -7888),
    MoonTerm::new(  2,   1,   0,   0,     -6766),
    MoonTerm::new(  1,   0,  -1,   0,     -5163),
    MoonTerm::new(  1,   1,   0,   0,      4987),
    MoonTerm::new(  2,  -1,   1,   0,      4036),
    MoonTerm::new(  2,   0,   2,   0,      3994),
    MoonTerm::new(  4,   0,   0,   0,      3861),
    MoonTerm::new(  2,   0,  -3,   0,      3665),
    MoonTerm::new(  0,   1,  -2,   0,     -2689),
    MoonTerm::new(  2,   0,  -1,   2,     -2602),
    MoonTerm::new(  2,  -1,  -2,   0,      2390),
    MoonTerm::new(  1,   0,   1,   0,     -2348),
    MoonTerm::new(  2,  -2,   0,   0,      2236),
    MoonTerm::new(  0,   1,   2,   0,     -2120),
    MoonTerm::new(  0,   2,   0,   0,     -2069),
    MoonTerm::new(  2,  -2,  -1,   0,      2048),
    MoonTerm::new(  2,   0,   1,  -2,     -1773),
    MoonTerm::new(  2,   0,   0,   2,     -1595),
    MoonTerm::new(  4,  -1,  -1,   0,      1215),
    MoonTerm::new(  0,   0,   2,   2,     -1110),
    MoonTerm::new(  3,   0,  -1,   0,      -892),
    MoonTerm::new(  2,   1,   1,   0,      -810),
    MoonTerm::new(  4,  -1,  -2,   0,       759),
    MoonTerm::new(  0,   2,  -1,   0,      -713),
    MoonTerm::new(  2,   2,  -1,   0,      -700),
    MoonTerm::new(  2,   1,  -2,   0,       691),
    MoonTerm::new(  2,  -1,   0,  -2,       596),
    MoonTerm::new(  4,   0,   1,   0,       549),
    MoonTerm::new(  0,   0,   4,   0,       537),
    MoonTerm::new(  4,  -1,   0,   0,       520),
    MoonTerm::new(  1,   0,  -2,   0,      -487),
    MoonTerm::new(  2,   1,   0,  -2,      -399),
    MoonTerm::new(  0,   0,   2,  -2,      -381),
    MoonTerm::new(  1,   1,   1,   0,       351),
    MoonTerm::new(  3,   0,  -2,   0,      -340),
    MoonTerm::new(  4,   0,  -3,   0,       330),
    MoonTerm::new(  2,  -1,   2,   0,       327),
    MoonTerm::new(  0,   2,   1,   0,      -323),
    MoonTerm::new(  1,   1,  -1,   0,       299),
    MoonTerm::new(  2,   0,   3,   0,       294),
];

#[rustfmt::skip]
static LATITUDE_TERMS: [MoonTerm; 30] = [
    // D   M   M′   F         Σ (1e-6°)
    MoonTerm::new(  0,   0,   0,   1,   5128122),
    MoonTerm::new(  0,   0,   1,   1,    280602),
    MoonTerm::new(  0,   0,   1,  -1,    277693),
    MoonTerm::new(  2,   0,   0,  -1,    173237),
    MoonTerm::new(  2,   0,  -1,   1,     55413),
    MoonTerm::new(  2,   0,  -1,  -1,     46271),
    MoonTerm::new(  2,   0,   0,   1,     32573),
    MoonTerm::new(  0,   0,   2,   1,     17198),
    MoonTerm::new(  2,   0,   1,  -1,      9266),
    MoonTerm::new(  0,   0,   2,  -1,      8822),
    MoonTerm::new(  2,  -1,   0,  -1,      8216),
    MoonTerm::new(  2,   0,  -2,  -1,      4324),
    MoonTerm::new(  2,   0,   1,   1,      4200),
    MoonTerm::new(  2,   1,   0,  -1,     -3359),
    MoonTerm::new(  2,  -1,  -1,   1,      2463),
    MoonTerm::new(  2,  -1,   0,   1,      2211),
    MoonTerm::new(  2,  -1,  -1,  -1,      2065),
    MoonTerm::new(  0,   1,  -1,  -1,     -1870),
    MoonTerm::new(  4,   0,  -1,  -1,      1828),
    MoonTerm::new(  0,   1,   0,   1,     -1794),
    MoonTerm::new(  0,   0,   0,   3,     -1749),
    MoonTerm::new(  0,   1,  -1,   1,     -1565),
    MoonTerm::new(  1,   0,   0,   1,     -1491),
    MoonTerm::new(  0,   1,   1,   1,     -1475),
    MoonTerm::new(  0,   1,   1,  -1,     -1410),
    MoonTerm::new(  0,   1,   0,  -1,     -1344),
    MoonTerm::new(  1,   0,   0,  -1,     -1335),
    MoonTerm::new(  0,   0,   3,   1,      1107),
    MoonTerm::new(  4,   0,   0,  -1,      1021),
    MoonTerm::new(  4,   0,  -1,   1,       833),
];

/// Fundamental arguments of the lunar theory, degrees (except `e`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundamentalArgs {
    /// Moon's mean longitude L′.
    pub lp: f64,
    /// Mean elongation of the Moon D.
    pub d: f64,
    /// Sun's mean anomaly M.
    pub m: f64,
    /// Moon's mean anomaly M′.
    pub mp: f64,
    /// Moon's argument of latitude F.
    pub f: f64,
    /// Eccentricity factor E of the Earth's orbit.
    pub e: f64,
}

impl FundamentalArgs {
    /// Meeus 47.1 – 47.6 at `t` Julian centuries since J2000.0.
    pub fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Self {
            lp: normalize_deg(
                218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0
                    - t4 / 65_194_000.0,
            ),
            d: normalize_deg(
                297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0
                    - t4 / 113_065_000.0,
            ),
            m: normalize_deg(357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0),
            mp: normalize_deg(
                134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0
                    - t4 / 14_712_000.0,
            ),
            f: normalize_deg(
                93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0
                    + t4 / 863_310_000.0,
            ),
            e: 1.0 - 0.002516 * t - 0.0000074 * t2,
        }
    }
}

/// `(longitude°, latitude°)` of the Moon at `t` Julian centuries since J2000.0.
///
/// Longitude is in [0, 360); latitude is within ±5.3°.
pub fn moon_position(t: f64) -> (f64, f64) {
    let args = FundamentalArgs::at(t);

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479264.290 * t).to_radians();
    let a3 = (313.45 + 481266.484 * t).to_radians();
    let lp = args.lp.to_radians();
    let mp = args.mp.to_radians();
    let f = args.f.to_radians();

    let mut sum_l: f64 = LONGITUDE_TERMS.iter().map(|term| term.eval(&args)).sum();
    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).sin() + 318.0 * a2.sin();

    let mut sum_b: f64 = LATITUDE_TERMS.iter().map(|term| term.eval(&args)).sum();
    sum_b += -2235.0 * lp.sin() + 382.0 * a3.sin() + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (lp - mp).sin()
        - 115.0 * (lp + mp).sin();

    (
        normalize_deg(args.lp + sum_l / 1_000_000.0),
        sum_b / 1_000_000.0,
    )
}
