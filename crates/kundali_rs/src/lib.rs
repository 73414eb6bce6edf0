//! Vedic birth chart (Kundali) computation.
//!
//! Ties the workspace together: a [`BirthData`] record and a
//! [`ChartConfig`] go in, a [`Chart`] with sidereal placements of the nine
//! grahas, the Lagna and the twelve bhavas comes out.
//!
//! # Quick start
//!
//! ```rust
//! use kundali_rs::*;
//!
//! let birth = BirthData::new(
//!     CivilTime::new(1990, 6, 15, 10, 30, 0.0, 5.5),
//!     GeoLocation::new(28.6139, 77.209),
//! );
//! let config = ChartConfig::new(BhavaSystem::Placidus, AyanamshaSystem::Lahiri);
//! let chart = compute_chart(&birth, &config).unwrap();
//!
//! let moon = chart.placement(Body::Moon);
//! println!("Moon in {:?}, house {}", moon.rashi, moon.house);
//! ```

pub mod birth;
pub mod chart;
pub mod config;
pub mod error;

pub use birth::BirthData;
pub use chart::{
    AnglePlacement, Chart, Placement, compute_chart, compute_chart_unknown_time,
    compute_chart_with,
};
pub use config::ChartConfig;
pub use error::KundaliError;

// Re-export the input and output vocabulary so callers need only this crate.
pub use kundali_core::{ALL_BODIES, Body, KeplerSolver, NodeMode};
pub use kundali_frames::EclipticFrame;
pub use kundali_time::{CivilTime, TimeError};
pub use kundali_vedic_base::{
    AyanamshaSystem, Bhava, BhavaSystem, CuspSolver, GeoLocation, Rashi, VedicError,
    nakshatra_name,
};
