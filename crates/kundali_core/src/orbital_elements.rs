//! Mean orbital elements of the five visible planets.
//!
//! Referred to the mean ecliptic and equinox of date. Coefficients from
//! Meeus, "Astronomical Algorithms" (2nd ed), Table 31.A, truncated at T².

use kundali_frames::normalize_deg;

use crate::body::Planet;

/// Quadratic `c0 + c1·T + c2·T²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poly2(pub f64, pub f64, pub f64);

impl Poly2 {
    pub fn eval(&self, t: f64) -> f64 {
        self.0 + t * (self.1 + t * self.2)
    }
}

/// Element polynomials for one planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementTable {
    /// Semi-major axis, AU (constant).
    pub a_au: f64,
    /// Eccentricity.
    pub e: Poly2,
    /// Inclination, degrees.
    pub i: Poly2,
    /// Longitude of the ascending node Ω, degrees.
    pub node: Poly2,
    /// Longitude of perihelion ϖ, degrees.
    pub perihelion: Poly2,
    /// Mean longitude L, degrees.
    pub mean_longitude: Poly2,
}

/// Elements evaluated at one epoch. Angles in degrees, angles normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub a_au: f64,
    pub e: f64,
    pub i_deg: f64,
    pub node_deg: f64,
    pub perihelion_deg: f64,
    pub mean_longitude_deg: f64,
}

impl OrbitalElements {
    /// Mean anomaly M = L − ϖ, degrees [0, 360).
    pub fn mean_anomaly_deg(&self) -> f64 {
        normalize_deg(self.mean_longitude_deg - self.perihelion_deg)
    }

    /// Argument of perihelion ω = ϖ − Ω, degrees [0, 360).
    pub fn arg_perihelion_deg(&self) -> f64 {
        normalize_deg(self.perihelion_deg - self.node_deg)
    }
}

#[rustfmt::skip]
const MERCURY: ElementTable = ElementTable {
    a_au: 0.387098310,
    e: Poly2(0.20563175, 0.000020407, -0.0000000283),
    i: Poly2(7.004986, -0.0059516, 0.0),
    node: Poly2(48.330893, 1.1861883, 0.00017542),
    perihelion: Poly2(77.456119, 1.5564776, 0.00029544),
    mean_longitude: Poly2(252.250906, 149474.0722491, 0.00030350),
};

#[rustfmt::skip]
const VENUS: ElementTable = ElementTable {
    a_au: 0.723329820,
    e: Poly2(0.00677323, -0.000047515, 0.0000000914),
    i: Poly2(3.394662, -0.0008568, 0.0),
    node: Poly2(76.679920, 0.9011206, 0.00040618),
    perihelion: Poly2(131.563703, 1.4022288, -0.00107618),
    mean_longitude: Poly2(181.979801, 58517.8156760, 0.00000165),
};

#[rustfmt::skip]
const MARS: ElementTable = ElementTable {
    a_au: 1.523679342,
    e: Poly2(0.09341233, -0.000092064, -0.000000077),
    i: Poly2(1.849726, -0.0006011, 0.00001276),
    node: Poly2(49.558093, 0.7720959, 0.00001557),
    perihelion: Poly2(336.060234, 1.8410449, 0.00013477),
    mean_longitude: Poly2(355.433275, 19140.2993313, 0.00000261),
};

#[rustfmt::skip]
const JUPITER: ElementTable = ElementTable {
    a_au: 5.202603209,
    e: Poly2(0.04849485, 0.000163244, -0.0000004719),
    i: Poly2(1.303270, -0.0019872, 0.00003318),
    node: Poly2(100.464407, 1.0209774, 0.00040315),
    perihelion: Poly2(14.331207, 1.6126352, 0.00103042),
    mean_longitude: Poly2(34.351519, 3034.9056606, -0.00008501),
};

#[rustfmt::skip]
const SATURN: ElementTable = ElementTable {
    a_au: 9.554909192,
    e: Poly2(0.05554814, -0.000346641, -0.0000006436),
    i: Poly2(2.488879, -0.0037362, -0.00001519),
    node: Poly2(113.665503, 0.8770880, -0.00012176),
    perihelion: Poly2(93.057237, 1.9637613, 0.00083753),
    mean_longitude: Poly2(50.077444, 1222.1138488, 0.00021004),
};

/// Element polynomials for `planet`.
pub const fn element_table(planet: Planet) -> &'static ElementTable {
    match planet {
        Planet::Mercury => &MERCURY,
        Planet::Venus => &VENUS,
        Planet::Mars => &MARS,
        Planet::Jupiter => &JUPITER,
        Planet::Saturn => &SATURN,
    }
}

/// Mean elements of `planet` at `t` Julian centuries since J2000.0.
pub fn elements_at(planet: Planet, t: f64) -> OrbitalElements {
    let tab = element_table(planet);
    OrbitalElements {
        a_au: tab.a_au,
        e: tab.e.eval(t),
        i_deg: tab.i.eval(t),
        node_deg: normalize_deg(tab.node.eval(t)),
        perihelion_deg: normalize_deg(tab.perihelion.eval(t)),
        mean_longitude_deg: normalize_deg(tab.mean_longitude.eval(t)),
    }
}
