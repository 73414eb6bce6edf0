//! Calendar ↔ Julian Day round trips across the supported civil range.

use kundali_time::{
    CivilTime, J2000_JD, days_in_month, jd_to_calendar, jd_to_centuries, to_julian_day,
};

#[test]
fn roundtrip_1800_to_2100_sub_minute() {
    let hours = [0.0, 0.25, 5.5, 11.999, 12.0, 17.75, 23.9833];
    for year in (1800..=2100).step_by(7) {
        for month in 1..=12u32 {
            for &day in &[1u32, 15, days_in_month(year, month)] {
                for &h in &hours {
                    let jd = to_julian_day(year, month, day, h);
                    let (y, m, d) = jd_to_calendar(jd);
                    assert_eq!((y, m), (year, month), "{year}-{month}-{day} {h}h");
                    assert_eq!(d.floor() as u32, day, "{year}-{month}-{day} {h}h");
                    let err_min = (d.fract() * 24.0 - h).abs() * 60.0;
                    assert!(
                        err_min < 1.0 / 60.0,
                        "{year}-{month}-{day} {h}h: error {err_min} min"
                    );
                }
            }
        }
    }
}

#[test]
fn jd_is_monotonic_across_month_and_year_boundaries() {
    let mut prev = to_julian_day(1799, 12, 31, 23.0);
    for year in 1800..=1805 {
        for month in 1..=12u32 {
            for day in 1..=days_in_month(year, month) {
                let jd = to_julian_day(year, month, day, 0.0);
                assert!(jd > prev, "{year}-{month}-{day}");
                prev = jd;
            }
        }
    }
}

#[test]
fn j2000_defining_epoch() {
    assert_eq!(to_julian_day(2000, 1, 1, 12.0), J2000_JD);
    assert_eq!(jd_to_centuries(to_julian_day(2000, 1, 1, 12.0)), 0.0);
    let (y, m, d) = jd_to_calendar(J2000_JD);
    assert_eq!((y, m, d), (2000, 1, 1.5));
}

#[test]
fn civil_time_with_offsets_matches_utc() {
    // Same instant written in three zones.
    let utc = CivilTime::new(1985, 1, 22, 13, 45, 0.0, 0.0);
    let est = CivilTime::new(1985, 1, 22, 8, 45, 0.0, -5.0);
    let ist = CivilTime::new(1985, 1, 22, 19, 15, 0.0, 5.5);
    assert!((utc.to_jd_ut() - est.to_jd_ut()).abs() < 1e-9);
    assert!((utc.to_jd_ut() - ist.to_jd_ut()).abs() < 1e-9);
}
