//! Newton–Raphson solution of Kepler's equation `E − e sin E = M`.

use std::f64::consts::TAU;

use tracing::trace;

/// Iteration parameters for [`KeplerSolver::solve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolver {
    /// Stop when the Newton correction falls below this (radians, default 1e-9).
    pub tolerance_rad: f64,
    /// Upper bound on Newton steps (default 50).
    pub max_iterations: u32,
}

impl Default for KeplerSolver {
    fn default() -> Self {
        Self {
            tolerance_rad: 1e-9,
            max_iterations: 50,
        }
    }
}

/// Eccentric anomaly with solver diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly E in radians.
    pub eccentric_anomaly_rad: f64,
    /// Newton steps taken.
    pub iterations: u32,
    /// Whether the last correction was below the tolerance.
    pub converged: bool,
    /// `|E − e sin E − M|` at the returned E, radians.
    pub residual_rad: f64,
}

impl KeplerSolver {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tolerance_rad.is_finite() || self.tolerance_rad <= 0.0 {
            return Err("tolerance_rad must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        Ok(())
    }

    /// Solve for E given mean anomaly `m_rad` and eccentricity `e` (0 ≤ e < 1).
    ///
    /// Starts from the second-order estimate `M + e sin M (1 + e cos M)`.
    /// Never fails: if the cap is reached the last iterate is returned with
    /// `converged = false`.
    pub fn solve(&self, m_rad: f64, e: f64) -> KeplerSolution {
        let m = m_rad.rem_euclid(TAU);
        let (sin_m, cos_m) = m.sin_cos();
        let mut ecc = m + e * sin_m * (1.0 + e * cos_m);

        let mut iterations = 0;
        let mut converged = false;
        while iterations < self.max_iterations {
            let (sin_e, cos_e) = ecc.sin_cos();
            let delta = (m - ecc + e * sin_e) / (1.0 - e * cos_e);
            ecc += delta;
            iterations += 1;
            if delta.abs() < self.tolerance_rad {
                converged = true;
                break;
            }
        }

        let residual_rad = (ecc - e * ecc.sin() - m).abs();
        if !converged {
            trace!(m_rad, e, iterations, residual_rad, "kepler solver hit iteration cap");
        }

        KeplerSolution {
            eccentric_anomaly_rad: ecc,
            iterations,
            converged,
            residual_rad,
        }
    }
}

/// True anomaly (radians) from eccentric anomaly by the half-angle formula.
pub fn true_anomaly_rad(eccentric_anomaly_rad: f64, e: f64) -> f64 {
    let half = eccentric_anomaly_rad / 2.0;
    2.0 * ((1.0 + e).sqrt() * half.sin()).atan2((1.0 - e).sqrt() * half.cos())
}
