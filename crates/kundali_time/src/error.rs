//! Error types for civil time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from validating civil date/time input.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Month outside 1..=12.
    InvalidMonth(u32),
    /// Day does not exist in the given month.
    InvalidDay { year: i32, month: u32, day: u32 },
    /// Hour, minute or second outside its range.
    InvalidTimeOfDay(&'static str),
    /// UTC offset is non-finite or beyond ±14 hours.
    InvalidUtcOffset(f64),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(m) => write!(f, "invalid month: {m}"),
            Self::InvalidDay { year, month, day } => {
                write!(f, "invalid day: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidTimeOfDay(msg) => write!(f, "invalid time of day: {msg}"),
            Self::InvalidUtcOffset(h) => write!(f, "invalid UTC offset: {h} h"),
        }
    }
}

impl Error for TimeError {}
