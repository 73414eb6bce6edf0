//! Angle normalization on the 360° circle.

/// Normalize an angle to [0, 360) degrees.
///
/// Tiny negative inputs whose remainder rounds up to 360.0 are folded to 0.
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 { 0.0 } else { r }
}

/// Arc from `from` to `to` walking forward (increasing longitude), in [0, 360).
pub fn forward_arc_deg(from: f64, to: f64) -> f64 {
    normalize_deg(to - from)
}

/// Shortest signed difference `to - from`, in (-180, 180].
pub fn signed_delta_deg(from: f64, to: f64) -> f64 {
    let d = forward_arc_deg(from, to);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Unsigned angular distance between two longitudes, in [0, 180].
pub fn angular_separation_deg(a: f64, b: f64) -> f64 {
    signed_delta_deg(a, b).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_basic() {
        assert!((normalize_deg(45.0) - 45.0).abs() < 1e-15);
        assert!((normalize_deg(360.0) - 0.0).abs() < 1e-15);
        assert!((normalize_deg(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_deg(1085.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_tiny_negative_stays_in_range() {
        let n = normalize_deg(-1e-15);
        assert!((0.0..360.0).contains(&n), "got {n}");
    }

    #[test]
    fn forward_arc_wraps() {
        assert!((forward_arc_deg(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((forward_arc_deg(10.0, 350.0) - 340.0).abs() < 1e-12);
        assert_eq!(forward_arc_deg(42.0, 42.0), 0.0);
    }

    #[test]
    fn signed_delta_half_open() {
        assert!((signed_delta_deg(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((signed_delta_deg(10.0, 350.0) + 20.0).abs() < 1e-12);
        assert!((signed_delta_deg(0.0, 180.0) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn separation_symmetric() {
        assert!((angular_separation_deg(5.0, 355.0) - 10.0).abs() < 1e-12);
        assert!((angular_separation_deg(355.0, 5.0) - 10.0).abs() < 1e-12);
    }
}
