use super::point::{GeoPoint, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use super::precision::{BITS_PER_CHAR, MAX_PRECISION_CHARS};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Geohash alphabet. Index order matches byte order, so string ranges over
/// geohashes are ranges over their bits.
pub const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Geohash length used when none is given
pub const DEFAULT_PRECISION: usize = 10;

/// Stack buffer for one geohash; 22 characters is the deepest precision.
type HashBuf = SmallVec<[u8; MAX_PRECISION_CHARS]>;

/// Working range of one axis during encode/decode.
#[derive(Debug, Clone, Copy)]
struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    #[inline]
    fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Halves the interval toward `value`; returns the bit for the chosen half.
    #[inline]
    fn bisect(&mut self, value: f64) -> bool {
        let mid = (self.min + self.max) / 2.0;
        if value > mid {
            self.min = mid;
            true
        } else {
            self.max = mid;
            false
        }
    }

    /// Halves the interval toward the side named by `bit`.
    #[inline]
    fn narrow(&mut self, bit: bool) {
        let mid = (self.min + self.max) / 2.0;
        if bit {
            self.min = mid;
        } else {
            self.max = mid;
        }
    }
}

/// Alphabet index of a geohash character.
#[inline]
pub fn char_index(c: u8) -> Option<usize> {
    BASE32.iter().position(|&x| x == c)
}

/// Encodes a point without validation. `precision` characters are produced;
/// a precision of zero yields an empty string.
pub(crate) fn encode_unchecked(point: &GeoPoint, precision: usize) -> String {
    let mut lat_range = Interval::new(MIN_LAT, MAX_LAT);
    let mut lon_range = Interval::new(MIN_LON, MAX_LON);

    let mut hash = HashBuf::new();
    let mut value = 0usize;
    let mut bits = 0u32;
    let mut even = true;

    while hash.len() < precision {
        let bit = if even {
            lon_range.bisect(point.longitude)
        } else {
            lat_range.bisect(point.latitude)
        };
        value = (value << 1) | bit as usize;
        even = !even;

        bits += 1;
        if bits == BITS_PER_CHAR {
            hash.push(BASE32[value]);
            value = 0;
            bits = 0;
        }
    }

    // Every byte comes from BASE32
    hash.iter().map(|&b| b as char).collect()
}

/// Encodes `point` as a geohash of exactly `precision` characters.
pub fn encode_geohash(point: &GeoPoint, precision: usize) -> Result<String> {
    validate_precision(precision)?;
    point.validate()?;
    Ok(encode_unchecked(point, precision))
}

/// Geohash of `point` at [`DEFAULT_PRECISION`].
pub fn geohash_for_location(point: &GeoPoint) -> Result<String> {
    encode_geohash(point, DEFAULT_PRECISION)
}

pub fn validate_precision(precision: usize) -> Result<()> {
    if precision == 0 || precision > MAX_PRECISION_CHARS {
        return Err(Error::InvalidPrecision(precision));
    }
    Ok(())
}

pub fn validate_geohash(hash: &str) -> Result<()> {
    if hash.is_empty() || !hash.bytes().all(|b| char_index(b).is_some()) {
        return Err(Error::InvalidGeohash(hash.to_string()));
    }
    Ok(())
}

/// The rectangle covered by a geohash.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeohashCell {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl GeohashCell {
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Whether `point` encodes into this cell. Lower edges are exclusive
    /// except at -90/-180, matching the encoder's strict comparison.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        let lat_ok = (point.latitude > self.min_lat
            || (self.min_lat == MIN_LAT && point.latitude == MIN_LAT))
            && point.latitude <= self.max_lat;
        let lon_ok = (point.longitude > self.min_lon
            || (self.min_lon == MIN_LON && point.longitude == MIN_LON))
            && point.longitude <= self.max_lon;
        lat_ok && lon_ok
    }
}

pub fn decode_geohash(hash: &str) -> Result<GeohashCell> {
    validate_geohash(hash)?;

    let mut lat_range = Interval::new(MIN_LAT, MAX_LAT);
    let mut lon_range = Interval::new(MIN_LON, MAX_LON);
    let mut is_lon = true;

    for c in hash.bytes() {
        let idx = char_index(c).ok_or_else(|| Error::InvalidGeohash(hash.to_string()))?;

        for i in (0..BITS_PER_CHAR).rev() {
            let bit = (idx >> i) & 1 == 1;
            if is_lon {
                lon_range.narrow(bit);
            } else {
                lat_range.narrow(bit);
            }
            is_lon = !is_lon;
        }
    }

    Ok(GeohashCell {
        min_lat: lat_range.min,
        max_lat: lat_range.max,
        min_lon: lon_range.min,
        max_lon: lon_range.max,
    })
}
