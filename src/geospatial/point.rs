use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A latitude/longitude pair in degrees.
///
/// Construction through [`GeoPoint::new`] is unchecked; use
/// [`GeoPoint::validated`] or [`GeoPoint::validate`] at API boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn validated(latitude: f64, longitude: f64) -> Result<Self> {
        let point = Self::new(latitude, longitude);
        point.validate()?;
        Ok(point)
    }

    pub fn validate(&self) -> Result<()> {
        // NaN fails both range checks
        if !(MIN_LAT..=MAX_LAT).contains(&self.latitude) {
            return Err(Error::InvalidLatitude(self.latitude));
        }
        if !(MIN_LON..=MAX_LON).contains(&self.longitude) {
            return Err(Error::InvalidLongitude(self.longitude));
        }
        Ok(())
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
