//! Error types for Vedic chart primitives.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// House system name not recognised.
    UnknownHouseSystem(String),
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownHouseSystem(name) => write!(
                f,
                "unknown house system: {name:?} (expected whole_sign, equal, placidus or koch)"
            ),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
        }
    }
}

impl Error for VedicError {}
