//! Types for bhava (house) system computation.

use serde::{Deserialize, Serialize};

use kundali_frames::{forward_arc_deg, normalize_deg};

use crate::error::VedicError;
use crate::rashi::RASHI_SPAN_DEG;

/// The supported house division systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum BhavaSystem {
    /// Whole sign: house 1 is the whole sign containing the Lagna.
    #[default]
    WholeSign,
    /// Equal houses of 30° starting at the Lagna.
    Equal,
    /// Placidus: time-based semi-arc trisection.
    Placidus,
    /// Koch, simplified to a linear trisection of each quadrant.
    Koch,
}

/// All 4 bhava systems in enum order.
pub const ALL_BHAVA_SYSTEMS: [BhavaSystem; 4] = [
    BhavaSystem::WholeSign,
    BhavaSystem::Equal,
    BhavaSystem::Placidus,
    BhavaSystem::Koch,
];

impl BhavaSystem {
    pub const fn all() -> &'static [BhavaSystem; 4] {
        &ALL_BHAVA_SYSTEMS
    }

    /// Configuration name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::WholeSign => "whole_sign",
            Self::Equal => "equal",
            Self::Placidus => "placidus",
            Self::Koch => "koch",
        }
    }

    /// Whether this system depends on geographic latitude.
    ///
    /// Latitude-dependent systems fall back to Equal for |lat| ≥ 66.5°.
    pub const fn latitude_dependent(self) -> bool {
        matches!(self, Self::Placidus | Self::Koch)
    }

    /// Parse a configuration name, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, VedicError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "whole_sign" => Ok(Self::WholeSign),
            "equal" => Ok(Self::Equal),
            "placidus" => Ok(Self::Placidus),
            "koch" => Ok(Self::Koch),
            _ => Err(VedicError::UnknownHouseSystem(name.to_string())),
        }
    }
}

impl TryFrom<String> for BhavaSystem {
    type Error = VedicError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::from_name(&name)
    }
}

impl From<BhavaSystem> for &'static str {
    fn from(system: BhavaSystem) -> Self {
        system.name()
    }
}

impl std::fmt::Display for BhavaSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Iteration parameters for the Placidus cusp solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuspSolver {
    /// Upper bound on iterations per cusp (default 20).
    pub max_iterations: u32,
    /// Convergence threshold on right ascension, radians (default 1e-10).
    pub tolerance_rad: f64,
}

impl Default for CuspSolver {
    fn default() -> Self {
        Self {
            max_iterations: 20,
            tolerance_rad: 1e-10,
        }
    }
}

impl CuspSolver {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.tolerance_rad.is_finite() || self.tolerance_rad <= 0.0 {
            return Err("tolerance_rad must be positive");
        }
        Ok(())
    }
}

/// A single bhava (house) span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bhava {
    /// House number, 1-12.
    pub number: u8,
    /// Cusp (start) longitude in degrees, [0, 360).
    pub start_deg: f64,
    /// End longitude in degrees, [0, 360). Equals the next bhava's start.
    pub end_deg: f64,
}

impl Bhava {
    /// Forward width of the house in degrees.
    pub fn width_deg(&self) -> f64 {
        forward_arc_deg(self.start_deg, self.end_deg)
    }
}

/// Full result of a house computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BhavaResult {
    /// System asked for.
    pub requested_system: BhavaSystem,
    /// System actually used. Differs from `requested_system` only on fallback.
    pub system_used: BhavaSystem,
    /// Cusp longitudes, `cusps[0]` = house 1. Degrees [0, 360).
    pub cusps: [f64; 12],
    /// Ecliptic longitude of the Lagna (Ascendant), degrees [0, 360).
    pub lagna_deg: f64,
    /// Ecliptic longitude of the MC, degrees [0, 360).
    pub mc_deg: f64,
}

impl BhavaResult {
    /// Whether the requested system was replaced by Equal houses.
    pub fn fell_back(&self) -> bool {
        self.requested_system != self.system_used
    }

    /// The 12 houses with start/end longitudes.
    pub fn bhavas(&self) -> [Bhava; 12] {
        std::array::from_fn(|i| Bhava {
            number: i as u8 + 1,
            start_deg: self.cusps[i],
            end_deg: self.cusps[(i + 1) % 12],
        })
    }

    /// Shift every longitude by `-ayanamsha_deg` into the sidereal zodiac.
    ///
    /// Whole sign cusps are re-anchored on the sidereal sign of the sidereal
    /// Lagna, so house 1 is always the sign the Lagna occupies.
    pub fn to_sidereal(&self, ayanamsha_deg: f64) -> Self {
        let lagna_deg = normalize_deg(self.lagna_deg - ayanamsha_deg);
        let cusps = if self.system_used == BhavaSystem::WholeSign {
            let start = (lagna_deg / RASHI_SPAN_DEG).floor() * RASHI_SPAN_DEG;
            std::array::from_fn(|i| normalize_deg(start + i as f64 * RASHI_SPAN_DEG))
        } else {
            self.cusps.map(|c| normalize_deg(c - ayanamsha_deg))
        };
        Self {
            cusps,
            lagna_deg,
            mc_deg: normalize_deg(self.mc_deg - ayanamsha_deg),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for &sys in BhavaSystem::all() {
            assert_eq!(BhavaSystem::from_name(sys.name()), Ok(sys));
        }
        assert_eq!(BhavaSystem::from_name("PLACIDUS"), Ok(BhavaSystem::Placidus));
    }

    #[test]
    fn unknown_name_rejected() {
        assert_eq!(
            BhavaSystem::from_name("porphyry"),
            Err(VedicError::UnknownHouseSystem("porphyry".to_string()))
        );
    }

    #[test]
    fn default_solver() {
        let s = CuspSolver::default();
        assert_eq!(s.max_iterations, 20);
        assert!(s.validate().is_ok());
        assert!(CuspSolver { max_iterations: 0, ..s }.validate().is_err());
    }

    #[test]
    fn latitude_dependent_systems() {
        assert!(BhavaSystem::Placidus.latitude_dependent());
        assert!(BhavaSystem::Koch.latitude_dependent());
        assert!(!BhavaSystem::Equal.latitude_dependent());
        assert!(!BhavaSystem::WholeSign.latitude_dependent());
    }

    #[test]
    fn whole_sign_reanchors_on_sidereal_lagna() {
        // Tropical Lagna 5° Taurus, sidereal ~11° Aries.
        let r = BhavaResult {
            requested_system: BhavaSystem::WholeSign,
            system_used: BhavaSystem::WholeSign,
            cusps: std::array::from_fn(|i| normalize_deg(30.0 + i as f64 * 30.0)),
            lagna_deg: 35.0,
            mc_deg: 300.0,
        };
        let s = r.to_sidereal(24.0);
        assert!((s.lagna_deg - 11.0).abs() < 1e-12);
        assert_eq!(s.cusps[0], 0.0);
        assert_eq!(s.cusps[11], 330.0);
        assert!((s.mc_deg - 276.0).abs() < 1e-12);
    }

    #[test]
    fn equal_cusps_shift_rigidly() {
        let r = BhavaResult {
            requested_system: BhavaSystem::Placidus,
            system_used: BhavaSystem::Equal,
            cusps: std::array::from_fn(|i| normalize_deg(10.0 + i as f64 * 30.0)),
            lagna_deg: 10.0,
            mc_deg: 280.0,
        };
        assert!(r.fell_back());
        let s = r.to_sidereal(20.0);
        assert!((s.cusps[0] - 350.0).abs() < 1e-12);
        assert!((s.cusps[1] - 20.0).abs() < 1e-12);
        for b in s.bhavas() {
            assert!((b.width_deg() - 30.0).abs() < 1e-9, "house {}", b.number);
        }
    }
}
