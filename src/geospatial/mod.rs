pub mod bounds;
pub mod geohash;
pub mod math;
pub mod point;
pub mod precision;
pub mod query;
pub mod range;

pub use bounds::{bounding_box_bits, bounding_box_points, METERS_PER_DEGREE_LATITUDE};
pub use geohash::{
    decode_geohash, encode_geohash, geohash_for_location, GeohashCell, BASE32, DEFAULT_PRECISION,
};
pub use math::{distance_meters, meters_to_longitude_degrees, wrap_longitude};
pub use point::GeoPoint;
pub use precision::{
    latitude_bits_for_resolution, longitude_bits_for_resolution, BITS_PER_CHAR,
    MAX_BITS_PRECISION, MAX_PRECISION_CHARS,
};
pub use query::{compute_query_ranges, plan_query, QueryPlan};
pub use range::{geohash_range, precision_for_bits};
