use super::math::{log2, meters_to_longitude_degrees};

/// Meridional circumference of the Earth, meters
pub const EARTH_MERI_CIRCUMFERENCE: f64 = 40_007_860.0;
pub const BITS_PER_CHAR: u32 = 5;
pub const MAX_PRECISION_CHARS: usize = 22;
pub const MAX_BITS_PRECISION: u32 = MAX_PRECISION_CHARS as u32 * BITS_PER_CHAR;

/// Latitude bits needed so one cell is no smaller than `resolution` meters tall.
pub fn latitude_bits_for_resolution(resolution: f64) -> f64 {
    log2(EARTH_MERI_CIRCUMFERENCE / 2.0 / resolution).min(MAX_BITS_PRECISION as f64)
}

/// Longitude bits needed at `latitude` so one cell is no narrower than `resolution` meters.
pub fn longitude_bits_for_resolution(resolution: f64, latitude: f64) -> f64 {
    let degs = meters_to_longitude_degrees(resolution, latitude);
    if degs.abs() > 0.000001 {
        log2(360.0 / degs).max(1.0)
    } else {
        1.0
    }
}
