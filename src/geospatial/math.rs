//! Numeric helpers shared by the precision, bounds and query modules.

use super::point::GeoPoint;
use std::f64::consts::PI;

/// Equatorial radius of the WGS84 ellipsoid, meters
pub const EARTH_EQ_RADIUS: f64 = 6_378_137.0;
/// First eccentricity squared of the WGS84 ellipsoid
pub const E2: f64 = 0.00669447819799;
/// Mean Earth radius used for haversine distances, meters
pub const EARTH_MEAN_RADIUS: f64 = 6_371_008.8;
pub const EPSILON: f64 = 1e-12;

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

#[inline]
pub fn log2(x: f64) -> f64 {
    x.ln() / std::f64::consts::LN_2
}

/// Degrees of longitude spanned by `distance` meters along the parallel at `latitude`.
///
/// Capped at 360. Where a degree of longitude collapses to (almost) nothing,
/// as it does at the poles, any positive distance spans the whole parallel.
pub fn meters_to_longitude_degrees(distance: f64, latitude: f64) -> f64 {
    let radians = degrees_to_radians(latitude);
    let num = radians.cos() * EARTH_EQ_RADIUS * PI / 180.0;
    let denom = 1.0 / (1.0 - E2 * radians.sin() * radians.sin()).sqrt();
    let delta_deg = num * denom;

    if delta_deg < EPSILON {
        if distance > 0.0 {
            360.0
        } else {
            0.0
        }
    } else {
        (distance / delta_deg).min(360.0)
    }
}

/// Maps a longitude into `[-180, 180]`, wrapping through the antimeridian.
pub fn wrap_longitude(longitude: f64) -> f64 {
    if (-180.0..=180.0).contains(&longitude) {
        return longitude;
    }

    let adjusted = longitude + 180.0;
    if adjusted > 0.0 {
        (adjusted % 360.0) - 180.0
    } else {
        180.0 - (-adjusted % 360.0)
    }
}

/// Great-circle distance between two points in meters (haversine).
pub fn distance_meters(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = degrees_to_radians(a.latitude);
    let lat2 = degrees_to_radians(b.latitude);
    let dlat = degrees_to_radians(b.latitude - a.latitude);
    let dlon = degrees_to_radians(b.longitude - a.longitude);

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().min(1.0).asin();

    EARTH_MEAN_RADIUS * c
}
