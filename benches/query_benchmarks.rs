use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use geo_ranges::{compute_query_ranges, encode_geohash, geohash_range, GeoPoint, MemoryGeoIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

fn random_points(count: usize, seed: u64) -> Vec<GeoPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| GeoPoint::new(rng.random_range(-80.0..80.0), rng.random_range(-180.0..180.0)))
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let points = random_points(1000, 1);
    group.throughput(Throughput::Elements(points.len() as u64));

    for precision in [5usize, 10, 22] {
        group.bench_with_input(BenchmarkId::new("encode_geohash", precision), &precision, |b, &precision| {
            b.iter(|| {
                for p in &points {
                    black_box(encode_geohash(black_box(p), precision).unwrap());
                }
            });
        });
    }

    group.bench_function("geohash_range", |b| {
        b.iter(|| black_box(geohash_range(black_box("9q8yyk8yuv"), black_box(27)).unwrap()));
    });

    group.finish();
}

fn bench_query_ranges(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_ranges");
    let centers = random_points(100, 2);
    group.throughput(Throughput::Elements(centers.len() as u64));

    for radius in [100.0f64, 1_000.0, 10_000.0, 100_000.0] {
        group.bench_with_input(BenchmarkId::new("compute_query_ranges", radius as u64), &radius, |b, &radius| {
            b.iter(|| {
                for center in &centers {
                    black_box(compute_query_ranges(black_box(center), radius).unwrap());
                }
            });
        });
    }

    group.finish();
}

fn bench_memory_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory_index");
    let center = GeoPoint::new(37.7749, -122.4194);

    for size in [1_000usize, 10_000] {
        let index = MemoryGeoIndex::new("g");
        let mut rng = StdRng::seed_from_u64(size as u64);
        for i in 0..size {
            let p = GeoPoint::new(
                center.latitude + rng.random_range(-0.5..0.5),
                center.longitude + rng.random_range(-0.5..0.5),
            );
            index.insert(format!("key_{}", i), p, i).unwrap();
        }

        group.bench_with_input(BenchmarkId::new("query_radius_1km", size), &size, |b, _| {
            b.iter(|| black_box(index.query_radius(black_box(&center), 1_000.0).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_query_ranges, bench_memory_index);
criterion_main!(benches);
