//! Geohash range decomposition for radius queries.
//!
//! Given a circle (center and radius in meters), [`compute_query_ranges`] returns a
//! small set of string key ranges. Scanning a geohash-sorted field over those
//! ranges finds every record inside the circle, along with some outside it
//! that the caller filters by exact distance.
//!
//! - [`geospatial`]: encoding, precision selection, bounding-box sampling and range building
//! - [`key`]: the [`KeyRange`] type handed to stores
//! - [`store`]: the [`RangeScan`] capability and an in-memory index
//! - [`config`] / [`logging`]: ambient setup for embedding callers and the CLI

pub mod config;
pub mod error;
pub mod geospatial;
pub mod key;
pub mod logging;
pub mod store;

pub use config::GeoRangesConfig;
pub use error::{Error, Result};
pub use geospatial::{
    compute_query_ranges, decode_geohash, distance_meters, encode_geohash,
    geohash_for_location, geohash_range, plan_query, GeoPoint, GeohashCell, QueryPlan,
};
pub use key::{KeyRange, RANGE_SENTINEL};
pub use store::{scan_radius, scan_ranges, GeoRecord, MemoryGeoIndex, RangeScan};
