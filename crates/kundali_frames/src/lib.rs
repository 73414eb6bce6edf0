//! Ecliptic frame helpers for chart computation.
//!
//! Provides the low-precision nutation/obliquity model that defines the
//! "ecliptic of date" frame, angle normalization, and ecliptic
//! spherical ↔ rectangular conversion (AU).

pub mod angle;
pub mod nutation;
pub mod spherical;

pub use angle::{angular_separation_deg, forward_arc_deg, normalize_deg, signed_delta_deg};
pub use nutation::{EclipticFrame, mean_obliquity_deg, nutation_obliquity};
pub use spherical::{EclipticCoords, ecliptic_to_rectangular, rectangular_to_ecliptic};
