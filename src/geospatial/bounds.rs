//! Bounding box of a circular query: how many geohash bits to use for it and
//! which points to sample from it.

use super::math::{meters_to_longitude_degrees, wrap_longitude};
use super::point::{GeoPoint, MAX_LAT, MIN_LAT};
use super::precision::{
    latitude_bits_for_resolution, longitude_bits_for_resolution, MAX_BITS_PRECISION,
};

/// Length of one degree of latitude, meters
pub const METERS_PER_DEGREE_LATITUDE: f64 = 110_574.0;

/// Number of points produced by [`bounding_box_points`].
pub const SAMPLE_POINTS: usize = 9;

/// North and south edges of the box around `center`, clamped to the poles.
#[inline]
fn latitude_edges(center: &GeoPoint, radius: f64) -> (f64, f64) {
    let lat_delta = radius / METERS_PER_DEGREE_LATITUDE;
    let north = (center.latitude + lat_delta).min(MAX_LAT);
    let south = (center.latitude - lat_delta).max(MIN_LAT);
    (north, south)
}

/// Bit precision whose cells are at least as large as the box around the circle.
///
/// Takes the coarsest of the latitude estimate and the longitude estimates at both
/// box edges, so the result holds anywhere in the box. May be zero or negative for
/// radii larger than half the planet; callers clamp to at least one bit.
pub fn bounding_box_bits(center: &GeoPoint, radius: f64) -> i64 {
    let (north, south) = latitude_edges(center, radius);

    let bits_lat = latitude_bits_for_resolution(radius).floor() * 2.0;
    let bits_long_north = longitude_bits_for_resolution(radius, north).floor() * 2.0 - 1.0;
    let bits_long_south = longitude_bits_for_resolution(radius, south).floor() * 2.0 - 1.0;

    bits_lat
        .min(bits_long_north)
        .min(bits_long_south)
        .min(MAX_BITS_PRECISION as f64) as i64
}

/// Nine sample points of the box around the circle.
///
/// Order: center, center row west and east, north row (center, west, east),
/// south row (center, west, east). Longitudes wrap through the antimeridian.
pub fn bounding_box_points(center: &GeoPoint, radius: f64) -> [GeoPoint; SAMPLE_POINTS] {
    let (north, south) = latitude_edges(center, radius);

    let long_degs_north = meters_to_longitude_degrees(radius, north);
    let long_degs_south = meters_to_longitude_degrees(radius, south);
    let long_degs = long_degs_north.max(long_degs_south);

    let lon = center.longitude;
    let west = wrap_longitude(lon - long_degs);
    let east = wrap_longitude(lon + long_degs);

    [
        GeoPoint::new(center.latitude, lon),
        GeoPoint::new(center.latitude, west),
        GeoPoint::new(center.latitude, east),
        GeoPoint::new(north, lon),
        GeoPoint::new(north, west),
        GeoPoint::new(north, east),
        GeoPoint::new(south, lon),
        GeoPoint::new(south, west),
        GeoPoint::new(south, east),
    ]
}
