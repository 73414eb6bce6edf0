//! Local civil timestamp with an explicit UTC offset.
//!
//! `CivilTime` is what a birth record carries: wall-clock fields plus the
//! zone offset in effect at that moment. Conversion to Julian Day (UT)
//! subtracts the offset from the hour fraction, so day/month/year rollover
//! falls out of the continuous day count.

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{jd_to_calendar, to_julian_day};

/// Largest UTC offset in use anywhere (Line Islands, UTC+14).
const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`; 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Local calendar date and wall-clock time with a UTC offset in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    /// Hours ahead of UTC (5.5 for IST, -5.0 for EST).
    pub utc_offset_hours: f64,
}

impl CivilTime {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        utc_offset_hours: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
        }
    }

    /// Check that every field is within its civil range.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidMonth(self.month));
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::InvalidDay {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidTimeOfDay("hour must be 0..=23"));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidTimeOfDay("minute must be 0..=59"));
        }
        if !self.second.is_finite() || !(0.0..=60.0).contains(&self.second) {
            return Err(TimeError::InvalidTimeOfDay("second must be in [0, 60]"));
        }
        if !self.utc_offset_hours.is_finite()
            || self.utc_offset_hours.abs() > MAX_UTC_OFFSET_HOURS
        {
            return Err(TimeError::InvalidUtcOffset(self.utc_offset_hours));
        }
        Ok(())
    }

    /// Local time of day in decimal hours.
    pub fn hour_fraction(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0
    }

    /// Julian Day (UT) of this instant.
    pub fn to_jd_ut(&self) -> f64 {
        to_julian_day(
            self.year,
            self.month,
            self.day,
            self.hour_fraction() - self.utc_offset_hours,
        )
    }

    /// Local civil time for a Julian Day (UT) at the given UTC offset.
    pub fn from_jd(jd_ut: f64, utc_offset_hours: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd_ut + utc_offset_hours / 24.0);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * 86_400.0;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
        }
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.utc_offset_hours < 0.0 { '-' } else { '+' };
        let offset_min = (self.utc_offset_hours.abs() * 60.0).round() as u32;
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}{:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second.floor() as u32,
            sign,
            offset_min / 60,
            offset_min % 60
        )
    }
}
