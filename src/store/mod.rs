//! Ordered range-scan backends.
//!
//! Query planning never touches storage. Anything that can scan a
//! lexicographically sorted string field implements [`RangeScan`] and is handed
//! the ranges from [`compute_query_ranges`](crate::compute_query_ranges).

pub mod memory;

pub use memory::{GeoRecord, MemoryGeoIndex};

use crate::error::Result;
use crate::geospatial::point::GeoPoint;
use crate::geospatial::query::compute_query_ranges;
use crate::key::KeyRange;
use std::collections::BTreeMap;
use tracing::debug;

/// Ordered scan over one string field of a store.
pub trait RangeScan {
    type Value;

    /// Records whose `field` value lies in `[range.start, range.end)`, keyed by record key.
    fn scan(&self, field: &str, range: &KeyRange) -> Result<BTreeMap<String, Self::Value>>;
}

/// Union of one-shot scans over `ranges`. A record key seen in more than one
/// range keeps the value from the last scan.
pub fn scan_ranges<S>(store: &S, field: &str, ranges: &[KeyRange]) -> Result<BTreeMap<String, S::Value>>
where
    S: RangeScan + ?Sized,
{
    let mut merged = BTreeMap::new();
    for range in ranges {
        let hits = store.scan(field, range)?;
        crate::log_scan!(field, range, hits.len());
        merged.extend(hits);
    }
    debug!(field, ranges = ranges.len(), records = merged.len(), "Merged range scans");
    Ok(merged)
}

/// Every record of `store` that may lie within `radius` meters of `center`.
///
/// The result is a superset of the circle; records outside it are not removed.
pub fn scan_radius<S>(
    store: &S,
    field: &str,
    center: &GeoPoint,
    radius: f64,
) -> Result<BTreeMap<String, S::Value>>
where
    S: RangeScan + ?Sized,
{
    let ranges = compute_query_ranges(center, radius)?;
    scan_ranges(store, field, &ranges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use parking_lot::Mutex;

    /// Backend over a fixed sorted list that records every scan it serves.
    struct SortedKeys {
        keys: Vec<(&'static str, &'static str)>,
        scans: Mutex<Vec<KeyRange>>,
    }

    impl RangeScan for SortedKeys {
        type Value = &'static str;

        fn scan(&self, field: &str, range: &KeyRange) -> Result<BTreeMap<String, Self::Value>> {
            if field != "g" {
                return Err(Error::Store(format!("no index on {}", field)));
            }
            self.scans.lock().push(range.clone());
            Ok(self
                .keys
                .iter()
                .filter(|(hash, _)| range.contains(*hash))
                .map(|(hash, value)| (value.to_string(), *hash))
                .collect())
        }
    }

    fn backend() -> SortedKeys {
        SortedKeys {
            keys: vec![("9q8yy", "a"), ("9q8yz", "b"), ("9q9", "c"), ("u4pru", "d")],
            scans: Mutex::new(Vec::new()),
        }
    }

    #[test]
    fn test_scan_ranges_unions_results() {
        let store = backend();
        let ranges = vec![KeyRange::new("9q8yy", "9q8yz"), KeyRange::prefix("u4")];
        let merged = scan_ranges(&store, "g", &ranges).unwrap();

        assert_eq!(merged.keys().collect::<Vec<_>>(), vec!["a", "d"]);
        assert_eq!(store.scans.lock().len(), 2);
    }

    #[test]
    fn test_scan_ranges_propagates_errors() {
        let store = backend();
        let result = scan_ranges(&store, "h", &[KeyRange::prefix("9")]);
        assert!(matches!(result, Err(Error::Store(_))));
    }

    #[test]
    fn test_scan_radius_issues_one_scan_per_range() {
        let store = backend();
        let center = GeoPoint::new(37.7749, -122.4194);
        let ranges = compute_query_ranges(&center, 1000.0).unwrap();
        scan_radius(&store, "g", &center, 1000.0).unwrap();
        assert_eq!(*store.scans.lock(), ranges);
    }
}
