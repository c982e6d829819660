use super::RangeScan;
use crate::error::{Error, Result};
use crate::geospatial::geohash::{encode_geohash, validate_precision, DEFAULT_PRECISION};
use crate::geospatial::point::GeoPoint;
use crate::geospatial::query::compute_query_ranges;
use crate::key::KeyRange;
use crossbeam_skiplist::SkipMap;
use dashmap::DashMap;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Bound;

/// A stored record and the location it is indexed under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoRecord<V> {
    pub location: GeoPoint,
    pub geohash: String,
    pub value: V,
}

/// Sort key of the index: geohash first, record key to break ties.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct IndexKey {
    geohash: String,
    key: String,
}

impl IndexKey {
    fn lower_bound(geohash: &str) -> Self {
        Self {
            geohash: geohash.to_string(),
            key: String::new(),
        }
    }
}

/// In-memory geohash index over a single field.
///
/// Records are held in a skip list ordered by `(geohash, key)` so a key range
/// maps onto one contiguous slice. Stored geohashes should be at least as long
/// as the ranges scanned against them.
pub struct MemoryGeoIndex<V> {
    field: String,
    key_precision: usize,
    entries: SkipMap<IndexKey, GeoRecord<V>>,
    locations: DashMap<String, String>,
    // insert/remove touch both maps
    write_lock: Mutex<()>,
}

impl<V> MemoryGeoIndex<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            key_precision: DEFAULT_PRECISION,
            entries: SkipMap::new(),
            locations: DashMap::new(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn with_key_precision(mut self, precision: usize) -> Result<Self> {
        validate_precision(precision)?;
        self.key_precision = precision;
        Ok(self)
    }

    pub fn from_config(config: &crate::config::GeoRangesConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.geohash_field.clone()).with_key_precision(config.key_precision)
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn key_precision(&self) -> usize {
        self.key_precision
    }

    /// Store `value` at `location`, replacing any earlier record for `key`.
    pub fn insert(&self, key: impl Into<String>, location: GeoPoint, value: V) -> Result<()> {
        let key = key.into();
        let geohash = encode_geohash(&location, self.key_precision)?;

        let _guard = self.write_lock.lock();
        if let Some(previous) = self.locations.insert(key.clone(), geohash.clone()) {
            self.entries.remove(&IndexKey {
                geohash: previous,
                key: key.clone(),
            });
        }
        self.entries.insert(
            IndexKey {
                geohash: geohash.clone(),
                key,
            },
            GeoRecord {
                location,
                geohash,
                value,
            },
        );
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Option<GeoRecord<V>> {
        let _guard = self.write_lock.lock();
        let (key, geohash) = self.locations.remove(key)?;
        self.entries
            .remove(&IndexKey { geohash, key })
            .map(|entry| entry.value().clone())
    }

    pub fn get(&self, key: &str) -> Option<GeoRecord<V>> {
        let geohash = self.locations.get(key)?.value().clone();
        self.entries
            .get(&IndexKey {
                geohash,
                key: key.to_string(),
            })
            .map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records that may lie within `radius` meters of `center`, unfiltered.
    pub fn query_radius(&self, center: &GeoPoint, radius: f64) -> Result<BTreeMap<String, GeoRecord<V>>> {
        let ranges = compute_query_ranges(center, radius)?;
        super::scan_ranges(self, &self.field, &ranges)
    }
}

impl<V> RangeScan for MemoryGeoIndex<V>
where
    V: Clone + Send + Sync + 'static,
{
    type Value = GeoRecord<V>;

    fn scan(&self, field: &str, range: &KeyRange) -> Result<BTreeMap<String, Self::Value>> {
        if field != self.field {
            return Err(Error::Store(format!(
                "field '{}' is not indexed (index covers '{}')",
                field, self.field
            )));
        }

        let lower = IndexKey::lower_bound(&range.start);
        let upper = IndexKey::lower_bound(&range.end);
        Ok(self
            .entries
            .range((Bound::Included(lower), Bound::Excluded(upper)))
            .map(|entry| (entry.key().key.clone(), entry.value().clone()))
            .collect())
    }
}
