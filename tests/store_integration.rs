mod common;

use common::destination;
use geo_ranges::{
    compute_query_ranges, distance_meters, scan_ranges, GeoPoint, GeoRangesConfig,
    MemoryGeoIndex, RangeScan,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use std::sync::Arc;
use std::thread;
use tempfile::NamedTempFile;

fn populated(center: &GeoPoint, count: usize, spread: f64, seed: u64) -> MemoryGeoIndex<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let index = MemoryGeoIndex::new("g");
    for i in 0..count {
        let distance = rng.random_range(0.0..spread);
        let bearing = rng.random_range(0.0..360.0);
        index
            .insert(format!("rec_{}", i), destination(center, distance, bearing), i)
            .unwrap();
    }
    index
}

#[test]
fn test_radius_query_finds_every_record_inside() {
    let center = GeoPoint::new(40.7128, -74.0060);
    let index = populated(&center, 2000, 20_000.0, 7);

    for radius in [250.0, 1_000.0, 5_000.0] {
        let hits = index.query_radius(&center, radius).unwrap();

        let mut inside = 0;
        for i in 0..2000 {
            let key = format!("rec_{}", i);
            let record = index.get(&key).unwrap();
            if distance_meters(&center, &record.location) <= radius * 0.95 {
                inside += 1;
                assert!(hits.contains_key(&key), "{} missing at radius {}", key, radius);
            }
        }
        assert!(inside > 0, "no records inside {} m", radius);
        // Ranges over-select, but not wildly
        assert!(hits.len() < 2000);
    }
}

#[test]
fn test_caller_filters_false_positives() {
    let center = GeoPoint::new(48.8566, 2.3522);
    let index = populated(&center, 500, 10_000.0, 11);

    let hits = index.query_radius(&center, 2_000.0).unwrap();
    let exact: Vec<_> = hits
        .iter()
        .filter(|(_, record)| distance_meters(&center, &record.location) <= 2_000.0)
        .collect();

    assert!(exact.len() <= hits.len());
    assert!(exact
        .iter()
        .all(|(_, record)| distance_meters(&center, &record.location) <= 2_000.0));
}

#[test]
fn test_scan_ranges_matches_query_radius() {
    let center = GeoPoint::new(-33.8688, 151.2093);
    let index = populated(&center, 300, 8_000.0, 3);

    let ranges = compute_query_ranges(&center, 3_000.0).unwrap();
    let via_scans = scan_ranges(&index, index.field(), &ranges).unwrap();
    let via_index = index.query_radius(&center, 3_000.0).unwrap();
    assert_eq!(via_scans, via_index);

    let mut total = 0;
    for range in &ranges {
        total += index.scan("g", range).unwrap().len();
    }
    // Distinct ranges over a sorted index never return a record twice
    assert_eq!(total, via_scans.len());
}

#[test]
fn test_concurrent_writers_and_queries() {
    let center = GeoPoint::new(35.6762, 139.6503);
    let index = Arc::new(MemoryGeoIndex::new("g"));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                for i in 0..250 {
                    let p = destination(&center, (i * 10) as f64, (t * 90) as f64);
                    index.insert(format!("t{}_{}", t, i), p, i).unwrap();
                    index.query_radius(&center, 500.0).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(index.len(), 1000);

    let hits = index.query_radius(&center, 100.0).unwrap();
    for t in 0..4 {
        for i in 0..10 {
            assert!(hits.contains_key(&format!("t{}_{}", t, i)));
        }
    }
}

#[test]
fn test_index_from_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"geohash_field": "position", "key_precision": 9}}"#).unwrap();

    let config = GeoRangesConfig::from_file(file.path()).unwrap();
    let index: MemoryGeoIndex<&str> = MemoryGeoIndex::from_config(&config).unwrap();
    index.insert("here", GeoPoint::new(1.0, 2.0), "x").unwrap();

    assert_eq!(index.get("here").unwrap().geohash.len(), 9);
    let hits = index.query_radius(&GeoPoint::new(1.0, 2.0), 10.0).unwrap();
    assert!(hits.contains_key("here"));
    assert!(index.scan("g", &geo_ranges::KeyRange::prefix("s")).is_err());
}

#[test]
fn test_missing_config_file() {
    let err = GeoRangesConfig::from_file("/nonexistent/geo_ranges.json").unwrap_err();
    assert!(matches!(err, geo_ranges::Error::Io(_)));
}
