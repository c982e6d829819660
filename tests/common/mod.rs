#![allow(dead_code)]

use geo_ranges::geospatial::math::EARTH_MEAN_RADIUS;
use geo_ranges::{encode_geohash, GeoPoint, KeyRange};

/// Point reached by travelling `distance` meters from `origin` on `bearing` degrees
/// (spherical model).
pub fn destination(origin: &GeoPoint, distance: f64, bearing: f64) -> GeoPoint {
    let delta = distance / EARTH_MEAN_RADIUS;
    let theta = bearing.to_radians();
    let lat1 = origin.latitude.to_radians();
    let lon1 = origin.longitude.to_radians();

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos()).asin();
    let lon2 = lon1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    let mut lon = lon2.to_degrees();
    if lon > 180.0 {
        lon -= 360.0;
    } else if lon < -180.0 {
        lon += 360.0;
    }
    GeoPoint::new(lat2.to_degrees().clamp(-90.0, 90.0), lon.clamp(-180.0, 180.0))
}

pub fn covered(ranges: &[KeyRange], point: &GeoPoint, precision: usize) -> bool {
    let hash = encode_geohash(point, precision).expect("valid point");
    ranges.iter().any(|range| range.contains(hash.as_str()))
}
