//! Julian Day ↔ Gregorian calendar conversion.
//!
//! Meeus, "Astronomical Algorithms" (2nd ed), Chapter 7. Every date is
//! treated as proleptic Gregorian: the century correction is applied in both
//! directions, so the round trip is exact for all civil dates.

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in one Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Day for a Gregorian calendar date with fractional day.
///
/// January and February count as months 13 and 14 of the previous year.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = y as f64;
    let m = m as f64;

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Julian Day for a calendar date plus an hour-of-day fraction (0.0..24.0).
///
/// `to_julian_day(2000, 1, 1, 12.0)` is exactly `J2000_JD`.
pub fn to_julian_day(year: i32, month: u32, day: u32, hour_fraction: f64) -> f64 {
    calendar_to_jd(year, month, day as f64) + hour_fraction / 24.0
}

/// Gregorian calendar date for a Julian Day.
///
/// Returns `(year, month, day_with_fraction)`; the fractional part of the day
/// counts from midnight.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Julian Day for a count of Julian centuries since J2000.0.
pub fn centuries_to_jd(t: f64) -> f64 {
    t * DAYS_PER_CENTURY + J2000_JD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch_exact() {
        assert_eq!(to_julian_day(2000, 1, 1, 12.0), J2000_JD);
    }

    #[test]
    fn j2000_epoch_inverse_exact() {
        let (y, m, d) = jd_to_calendar(J2000_JD);
        assert_eq!((y, m), (2000, 1));
        assert_eq!(d, 1.5);
    }

    #[test]
    fn meeus_example_7a() {
        // 1957 October 4.81 = JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn january_uses_previous_year() {
        // 1999-12-31 0h and 2000-01-01 0h are one day apart
        let dec = calendar_to_jd(1999, 12, 31.0);
        let jan = calendar_to_jd(2000, 1, 1.0);
        assert_eq!(jan - dec, 1.0);
    }

    #[test]
    fn leap_day_2000() {
        let feb29 = calendar_to_jd(2000, 2, 29.0);
        let mar1 = calendar_to_jd(2000, 3, 1.0);
        assert_eq!(mar1 - feb29, 1.0);
    }

    #[test]
    fn century_1900_not_leap() {
        let feb28 = calendar_to_jd(1900, 2, 28.0);
        let mar1 = calendar_to_jd(1900, 3, 1.0);
        assert_eq!(mar1 - feb28, 1.0);
    }

    #[test]
    fn half_integer_jd_is_midnight() {
        let (y, m, d) = jd_to_calendar(2_460_000.5);
        assert_eq!((y, m), (2023, 2));
        assert_eq!(d, 25.0);
    }

    #[test]
    fn centuries_roundtrip() {
        let jd = 2_460_000.5;
        let t = jd_to_centuries(jd);
        assert!((centuries_to_jd(t) - jd).abs() < 1e-9);
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
    }
}
