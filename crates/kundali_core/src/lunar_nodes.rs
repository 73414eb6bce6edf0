//! Lunar node (Rahu/Ketu) longitude computation.
//!
//! Mean node: Meeus, "Astronomical Algorithms" (2nd ed), eq. 47.7.
//!
//! True node: mean node plus five short-period terms in 2Ω, the Sun's mean
//! anomaly and twice the Moon's argument of latitude. The argument
//! polynomials here are the fixed low-order ones used for chart work and are
//! kept exactly as tabulated.
//!
//! Ketu is never computed on its own: it is always Rahu + 180°.

use serde::{Deserialize, Serialize};

use kundali_frames::normalize_deg;

/// Mean or true (perturbed) node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeMode {
    /// Smooth polynomial motion only.
    Mean,
    /// Mean node plus short-period corrections.
    #[default]
    True,
}

/// All node modes.
pub const ALL_NODE_MODES: [NodeMode; 2] = [NodeMode::Mean, NodeMode::True];

impl NodeMode {
    pub const fn all() -> &'static [NodeMode; 2] {
        &ALL_NODE_MODES
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::True => "true",
        }
    }
}

/// Mean Rahu (ascending node) longitude in degrees [0, 360).
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_rahu_deg(t: f64) -> f64 {
    normalize_deg(mean_node_raw(t))
}

fn mean_node_raw(t: f64) -> f64 {
    let t2 = t * t;
    125.04452 - 1934.136261 * t + 0.0020708 * t2 + t2 * t / 450_000.0
}

/// True Rahu longitude in degrees [0, 360).
pub fn true_rahu_deg(t: f64) -> f64 {
    let om = mean_node_raw(t);
    let m = normalize_deg(357.5291 + 35999.050 * t).to_radians();
    let mp = normalize_deg(93.2720 + 477198.868 * t).to_radians();
    let two_om = (2.0 * om).to_radians();

    normalize_deg(
        om - 1.4979 * two_om.sin() - 0.1500 * m.sin() - 0.1226 * (2.0 * mp).sin()
            + 0.1176 * two_om.sin()
            - 0.0801 * (m + 2.0 * mp).sin(),
    )
}

/// Rahu longitude for the given mode.
pub fn rahu_deg(t: f64, mode: NodeMode) -> f64 {
    match mode {
        NodeMode::Mean => mean_rahu_deg(t),
        NodeMode::True => true_rahu_deg(t),
    }
}

/// Ketu longitude: Rahu + 180°, normalized.
pub fn ketu_from_rahu(rahu_deg: f64) -> f64 {
    normalize_deg(rahu_deg + 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_node_at_j2000() {
        assert!((mean_rahu_deg(0.0) - 125.04452).abs() < 1e-12);
    }

    #[test]
    fn mean_node_regresses() {
        // One Julian year: about -19.34°.
        let a = mean_rahu_deg(0.0);
        let b = mean_rahu_deg(0.01);
        let d = normalize_deg(b - a) - 360.0;
        assert!((d + 19.34).abs() < 0.01, "yearly motion {d}");
    }

    #[test]
    fn true_node_within_two_degrees_of_mean() {
        for i in 0..400 {
            let t = -2.0 + i as f64 * 0.01;
            let mean = mean_rahu_deg(t);
            let tru = true_rahu_deg(t);
            let mut d = (tru - mean).abs();
            if d > 180.0 {
                d = 360.0 - d;
            }
            assert!(d < 2.0, "t={t}: mean={mean} true={tru}");
        }
    }

    #[test]
    fn ketu_opposite_rahu() {
        for &r in &[0.0, 10.0, 179.999, 180.0, 359.5] {
            let k = ketu_from_rahu(r);
            assert!((0.0..360.0).contains(&k));
            let d = normalize_deg(k - r);
            assert!((d - 180.0).abs() < 1e-9, "rahu={r} ketu={k}");
        }
    }

    #[test]
    fn default_mode_is_true() {
        assert_eq!(NodeMode::default(), NodeMode::True);
        assert_eq!(rahu_deg(0.3, NodeMode::default()), true_rahu_deg(0.3));
    }
}
