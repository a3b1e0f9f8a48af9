use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use hexfield::{
    Boundary, Config, DistanceFieldEngine, FieldBuilder, HexIndex, NearestStrategy,
    OccupancyBuilder, Point, RegionConfig, RegionSelector,
};

fn boulder_box() -> Boundary {
    Boundary::from_ring(&[
        Point::new(-105.7, 39.9),
        Point::new(-105.0, 39.9),
        Point::new(-105.0, 40.3),
        Point::new(-105.7, 40.3),
    ])
}

fn photo_points(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let lat = 39.95 + (i % 97) as f64 * 0.0013;
            let lon = -105.35 + (i % 89) as f64 * 0.0017;
            Point::from_lat_lon(lat, lon)
        })
        .collect()
}

fn benchmark_occupancy(c: &mut Criterion) {
    let mut group = c.benchmark_group("occupancy");
    let index = HexIndex::default();

    for size in [1_000, 10_000, 50_000] {
        let points = photo_points(size);
        group.bench_with_input(BenchmarkId::new("build", size), &points, |b, points| {
            let builder = OccupancyBuilder::new(&index, 11, 8).unwrap();
            b.iter(|| builder.build(black_box(points)).unwrap())
        });
    }

    group.finish();
}

fn benchmark_region(c: &mut Criterion) {
    let mut group = c.benchmark_group("region");
    let index = HexIndex::default();
    let boundary = boulder_box();
    let selector = RegionSelector::new(&index, &boundary);
    let center = Point::from_lat_lon(40.0150, -105.2705);

    for radius in [2.0, 5.0, 10.0] {
        let region = RegionConfig::new(center, radius, 9, 6);
        group.bench_with_input(
            BenchmarkId::new("select_region", radius),
            &region,
            |b, region| b.iter(|| selector.select_region(black_box(region)).unwrap()),
        );
    }

    group.finish();
}

fn benchmark_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("field");
    let index = HexIndex::default();
    let boundary = boulder_box();
    let center = Point::from_lat_lon(40.0150, -105.2705);
    let points = photo_points(5_000);

    let occupancy = OccupancyBuilder::new(&index, 11, 8)
        .unwrap()
        .build(&points)
        .unwrap();
    let candidates = RegionSelector::new(&index, &boundary)
        .select_region(&RegionConfig::new(center, 10.0, 9, 6))
        .unwrap();

    for strategy in [NearestStrategy::BruteForce, NearestStrategy::RTree] {
        let engine = DistanceFieldEngine::new(&index).with_strategy(strategy);
        group.bench_function(format!("compute_{:?}", strategy), |b| {
            b.iter(|| {
                engine
                    .compute(black_box(&candidates), &occupancy, 9)
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn benchmark_pipeline(c: &mut Criterion) {
    let center = Point::from_lat_lon(40.0150, -105.2705);
    let points = photo_points(10_000);
    let pipeline = FieldBuilder::new()
        .config(Config::default())
        .region(RegionConfig::new(center, 6.0, 9, 6))
        .boundary(boulder_box())
        .build()
        .unwrap();

    c.bench_function("pipeline_run", |b| {
        b.iter(|| pipeline.run(black_box(&points)).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_occupancy,
    benchmark_region,
    benchmark_field,
    benchmark_pipeline
);

criterion_main!(benches);
