//! Error type for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use kundali_time::TimeError;
use kundali_vedic_base::VedicError;

/// Errors from validating chart input.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum KundaliError {
    /// Invalid civil date, time or UTC offset.
    Time(TimeError),
    /// Invalid location or house system name.
    Vedic(VedicError),
    /// A solver configuration failed its own validation.
    InvalidConfig(&'static str),
}

impl Display for KundaliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Vedic(e) => write!(f, "vedic error: {e}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for KundaliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Vedic(e) => Some(e),
            Self::InvalidConfig(_) => None,
        }
    }
}

impl From<TimeError> for KundaliError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<VedicError> for KundaliError {
    fn from(e: VedicError) -> Self {
        Self::Vedic(e)
    }
}
