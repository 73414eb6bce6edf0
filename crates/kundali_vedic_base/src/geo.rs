//! Observer location on the Earth's surface.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;

/// Geographic location (geodetic, degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Reject non-finite or out-of-range coordinates.
    pub fn validate(&self) -> Result<(), VedicError> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err(VedicError::InvalidLocation("latitude must be within [-90, 90]"));
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err(VedicError::InvalidLocation("longitude must be within [-180, 180]"));
        }
        Ok(())
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delhi_is_valid() {
        assert!(GeoLocation::new(28.6139, 77.209).validate().is_ok());
    }

    #[test]
    fn poles_and_antimeridian_are_valid() {
        assert!(GeoLocation::new(90.0, 180.0).validate().is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).validate().is_ok());
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(matches!(
            GeoLocation::new(91.0, 0.0).validate(),
            Err(VedicError::InvalidLocation(_))
        ));
        assert!(GeoLocation::new(0.0, -180.5).validate().is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0).validate().is_err());
    }
}
