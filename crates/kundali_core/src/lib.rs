//! Geocentric positions of the nine chart bodies from analytic series.
//!
//! - Sun: Meeus ch. 25 low-accuracy theory
//! - Moon: truncated ELP-2000/82 (Meeus ch. 47)
//! - Rahu/Ketu: mean node polynomial plus short-period terms
//! - Mercury..Saturn: mean orbital elements, Kepler's equation, and the
//!   main Jupiter–Saturn perturbations
//!
//! Every function is total and pure. Inputs are Julian Day (UT) or Julian
//! centuries since J2000.0; outputs are ecliptic-of-date degrees in [0, 360).

pub mod body;
pub mod kepler;
pub mod lunar_nodes;
pub mod moon;
pub mod orbital_elements;
pub mod planets;
pub mod position;
pub mod retrograde;
pub mod sun;

pub use body::{ALL_BODIES, ALL_PLANETS, Body, Planet};
pub use kepler::{KeplerSolution, KeplerSolver, true_anomaly_rad};
pub use lunar_nodes::{
    ALL_NODE_MODES, NodeMode, ketu_from_rahu, mean_rahu_deg, rahu_deg, true_rahu_deg,
};
pub use moon::{FundamentalArgs, moon_position};
pub use orbital_elements::{ElementTable, OrbitalElements, Poly2, element_table, elements_at};
pub use planets::{PlanetPosition, planet_position, planet_position_with};
pub use position::{BodyPosition, PositionSnapshot, compute_positions, compute_positions_with};
pub use retrograde::{
    RETROGRADE_STEP_DAYS, is_retrograde, motion_is_retrograde, planet_is_retrograde,
};
pub use sun::{SunPosition, sun_at, sun_position};
