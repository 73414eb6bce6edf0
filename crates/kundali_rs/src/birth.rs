//! Birth record: local civil time plus place.

use serde::{Deserialize, Serialize};

use kundali_time::CivilTime;
use kundali_vedic_base::GeoLocation;

use crate::error::KundaliError;

/// When and where a chart is cast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    pub time: CivilTime,
    pub location: GeoLocation,
}

impl BirthData {
    pub fn new(time: CivilTime, location: GeoLocation) -> Self {
        Self { time, location }
    }

    /// Validate both the civil time and the location.
    pub fn validate(&self) -> Result<(), KundaliError> {
        self.time.validate()?;
        self.location.validate()?;
        Ok(())
    }

    /// Julian Day (UT) of the birth instant.
    pub fn jd_ut(&self) -> f64 {
        self.time.to_jd_ut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_time::TimeError;
    use kundali_vedic_base::VedicError;

    #[test]
    fn rejects_bad_latitude() {
        let b = BirthData::new(
            CivilTime::new(2000, 1, 1, 12, 0, 0.0, 0.0),
            GeoLocation::new(91.0, 0.0),
        );
        assert!(matches!(
            b.validate(),
            Err(KundaliError::Vedic(VedicError::InvalidLocation(_)))
        ));
    }

    #[test]
    fn rejects_bad_date() {
        let b = BirthData::new(
            CivilTime::new(2023, 2, 29, 12, 0, 0.0, 0.0),
            GeoLocation::new(0.0, 0.0),
        );
        assert!(matches!(
            b.validate(),
            Err(KundaliError::Time(TimeError::InvalidDay { .. }))
        ));
    }

    #[test]
    fn jd_follows_offset() {
        let b = BirthData::new(
            CivilTime::new(2000, 1, 1, 17, 30, 0.0, 5.5),
            GeoLocation::new(28.6, 77.2),
        );
        assert!((b.jd_ut() - 2_451_545.0).abs() < 1e-9);
    }
}
