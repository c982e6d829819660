//! Circle query to key ranges.
//!
//! ```
//! use geo_ranges::{compute_query_ranges, GeoPoint};
//!
//! let ranges = compute_query_ranges(&GeoPoint::new(37.7749, -122.4194), 1000.0).unwrap();
//! assert!(!ranges.is_empty());
//! ```

use super::bounds::{bounding_box_bits, bounding_box_points, SAMPLE_POINTS};
use super::geohash::encode_unchecked;
use super::point::GeoPoint;
use super::range::{precision_for_bits, range_unchecked};
use crate::error::{Error, Result};
use crate::key::{dedup_ranges, KeyRange};
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

/// Every intermediate of one radius query, for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct QueryPlan {
    pub center: GeoPoint,
    pub radius: f64,
    /// Geohash bit precision shared by all ranges
    pub bits: u32,
    /// Characters each sample point is encoded to
    pub precision: usize,
    pub samples: [GeoPoint; SAMPLE_POINTS],
    /// Range for each sample, in sample order, before deduplication
    pub candidates: Vec<KeyRange>,
    pub ranges: Vec<KeyRange>,
}

fn validate_radius(radius: f64) -> Result<()> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(Error::InvalidRadius(radius));
    }
    Ok(())
}

/// Builds the full plan for a query without validating its inputs.
pub(crate) fn plan_unchecked(center: &GeoPoint, radius: f64) -> QueryPlan {
    let bits = bounding_box_bits(center, radius).max(1) as u32;
    let precision = precision_for_bits(bits);
    let samples = bounding_box_points(center, radius);

    let candidates: Vec<KeyRange> = samples
        .iter()
        .map(|point| range_unchecked(&encode_unchecked(point, precision), bits))
        .collect();
    let ranges = dedup_ranges(candidates.iter().cloned());

    QueryPlan {
        center: *center,
        radius,
        bits,
        precision,
        samples,
        candidates,
        ranges,
    }
}

/// Validates the inputs and returns the complete plan for the query.
pub fn plan_query(center: &GeoPoint, radius: f64) -> Result<QueryPlan> {
    center.validate()?;
    validate_radius(radius)?;

    let started = Instant::now();
    let plan = plan_unchecked(center, radius);

    debug!(
        latitude = center.latitude,
        longitude = center.longitude,
        radius,
        bits = plan.bits,
        precision = plan.precision,
        candidates = plan.candidates.len(),
        ranges = plan.ranges.len(),
        "Planned geohash query"
    );
    crate::log_query!(center, radius, plan.ranges.len(), started.elapsed());

    Ok(plan)
}

/// Key ranges whose union covers every geohash within `radius` meters of `center`.
///
/// Ranges are half-open, distinct, and ordered by the sample they came from
/// (center first). Scanning them yields a superset of the circle; callers
/// filter by exact distance.
pub fn compute_query_ranges(center: &GeoPoint, radius: f64) -> Result<Vec<KeyRange>> {
    Ok(plan_query(center, radius)?.ranges)
}
