use criterion::{Criterion, criterion_group, criterion_main};
use las_validate::crs::{CrsContext, GeoKeys};
use las_validate::{Checker, Header, Point, Report};
use std::hint::black_box;

fn points(n: i32) -> Vec<Point> {
    (0..n)
        .map(|i| Point {
            x: i,
            y: -i,
            z: i % 100,
            return_number: (i % 3 + 1) as u8,
            number_of_returns: 3,
            gps_time: Some(f64::from(i) * 0.001),
            ..Default::default()
        })
        .collect()
}

fn header() -> Header {
    Header {
        point_data_format_id: 1,
        point_data_record_length: 28,
        geokeys: Some(GeoKeys::new([(1024, 1), (3072, 26915), (3076, 9001)])),
        ..Default::default()
    }
}

fn accumulate(c: &mut Criterion) {
    let header = header();
    let points = points(10000);
    c.bench_function("accumulate 10000 points", |b| {
        b.iter(|| {
            let mut checker = Checker::new(&header, Default::default());
            for point in &points {
                checker.add(black_box(point));
            }
            black_box(checker.counters().outside_bounding_box)
        })
    });
}

fn check(c: &mut Criterion) {
    let header = header();
    let mut checker = Checker::new(&header, Default::default());
    for point in &points(100) {
        checker.add(point);
    }
    c.bench_function("check header", |b| {
        b.iter(|| {
            let mut report = Report::default();
            let description = checker.check(black_box(&header), &mut report);
            black_box((report, description))
        })
    });
}

fn resolve(c: &mut Criterion) {
    let geokeys = GeoKeys::new([(1024, 1), (3072, 26741)]);
    c.bench_function("resolve state plane geokeys", |b| {
        b.iter(|| {
            let mut context = CrsContext::new();
            black_box(context.apply_geokeys(black_box(&geokeys)))
        })
    });
}

criterion_group!(benches, accumulate, check, resolve);
criterion_main!(benches);
