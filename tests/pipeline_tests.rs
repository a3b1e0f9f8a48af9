use hexfield::{
    Boundary, Cell, Config, DistanceFieldEngine, FieldBuilder, HexFieldError, HexIndex,
    NearestStrategy, OccupancyBuilder, Point, RegionConfig, RegionSelector, color_of,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn everywhere() -> Boundary {
    Boundary::from_ring(&[
        Point::new(-180.0, -90.0),
        Point::new(180.0, -90.0),
        Point::new(180.0, 90.0),
        Point::new(-180.0, 90.0),
    ])
}

fn boulder_box() -> Boundary {
    Boundary::from_ring(&[
        Point::new(-105.7, 39.9),
        Point::new(-105.0, 39.9),
        Point::new(-105.0, 40.3),
        Point::new(-105.7, 40.3),
    ])
}

fn photo_points() -> Vec<Point> {
    (0..300)
        .map(|i| {
            let t = i as f64;
            Point::from_lat_lon(
                40.02 + (t * 0.91).sin() * 0.04,
                -105.27 + (t * 0.37).cos() * 0.05,
            )
        })
        .collect()
}

/// Three points in three different level-8 cells under one level-6 cell.
#[test]
fn test_three_points_across_ancestor_boundaries() {
    init_logging();
    let index = HexIndex::default();
    let root = index
        .cell_of(&Point::from_lat_lon(40.0150, -105.2705), 6)
        .unwrap();
    let level8 = index.children(root, 8).unwrap();
    let occupied: Vec<Cell> = vec![level8[3], level8[20], level8[41]];
    let points: Vec<Point> = occupied.iter().map(|c| c.center()).collect();

    let occupancy = OccupancyBuilder::new(&index, 10, 5)
        .unwrap()
        .build(&points)
        .unwrap();

    // Three distinct leaves and three distinct level-8 ancestors, one shared root.
    assert_eq!(occupancy.occupied_cells(10).len(), 3);
    let mut expected = occupied.clone();
    expected.sort();
    assert_eq!(occupancy.occupied_cells(8), expected);
    for cell in &occupied {
        assert_eq!(occupancy.points_in(*cell).len(), 1);
    }
    assert_eq!(occupancy.occupied_cells(6), vec![root]);
    assert_eq!(occupancy.points_in(root).len(), 3);

    let boundary = everywhere();
    let candidates = RegionSelector::new(&index, &boundary)
        .select(8, root, &root.center(), 100.0)
        .unwrap();
    assert_eq!(candidates.len(), 49);
    for cell in &occupied {
        assert!(candidates.contains(cell));
    }

    let field = DistanceFieldEngine::new(&index)
        .compute(&candidates, &occupancy, 8)
        .unwrap();
    for cell in &occupied {
        assert_eq!(field.score(*cell), Some(1.0));
    }
    let unoccupied_below_one = field
        .iter()
        .filter(|e| !occupied.contains(&e.cell))
        .all(|e| e.score < 1.0);
    assert!(unoccupied_below_one);
}

#[test]
fn test_pipeline_end_to_end() {
    init_logging();
    let center = Point::from_lat_lon(40.0150, -105.2705);
    let pipeline = FieldBuilder::new()
        .region(RegionConfig::new(center, 6.0, 9, 6))
        .boundary(boulder_box())
        .build()
        .unwrap();

    let points = photo_points();
    let output = pipeline.run(&points).unwrap();

    for r in output.occupancy.resolutions() {
        assert_eq!(output.occupancy.total_points(r), points.len());
    }

    assert!(!output.candidates.is_empty());
    assert_eq!(output.field.len(), output.candidates.len());
    assert_eq!(output.field.resolution(), 9);
    for entry in output.field.iter() {
        assert!((0.0..=1.0).contains(&entry.score));
        assert!(entry.distance <= 6.0 * 2.0);
    }

    let render = output.render_cells();
    assert_eq!(render.len(), output.field.len());
    for cell in &render {
        assert_eq!(cell.color, color_of(cell.score));
        assert_eq!(cell.ring.first(), cell.ring.last());
    }
}

#[test]
fn test_pipeline_is_deterministic() {
    let center = Point::from_lat_lon(40.0150, -105.2705);
    let pipeline = FieldBuilder::new()
        .region(RegionConfig::new(center, 4.0, 9, 6))
        .boundary(boulder_box())
        .build()
        .unwrap();

    let a = pipeline.run(&photo_points()).unwrap();
    let b = pipeline.run(&photo_points()).unwrap();

    assert_eq!(a.candidates, b.candidates);
    assert_eq!(a.field.entries(), b.field.entries());
}

#[test]
fn test_exponent_reshapes_linear_proximity() {
    let center = Point::from_lat_lon(40.0150, -105.2705);
    let region = RegionConfig::new(center, 5.0, 9, 6);
    let build = |exponent: f64| {
        FieldBuilder::new()
            .config(Config::default().with_exponent(exponent))
            .region(region)
            .boundary(boulder_box())
            .build()
            .unwrap()
    };

    let points = photo_points();
    let linear = build(1.0).run(&points).unwrap().field;
    let sqrt = build(0.5).run(&points).unwrap().field;

    for (l, s) in linear.iter().zip(sqrt.iter()) {
        assert_eq!(l.cell, s.cell);
        assert!((s.score - l.score.sqrt()).abs() < 1e-12);
        assert!(s.score >= l.score);
    }
}

#[test]
fn test_brute_force_and_rtree_pipelines_agree() {
    let center = Point::from_lat_lon(40.0150, -105.2705);
    let region = RegionConfig::new(center, 8.0, 9, 5);
    let run = |strategy: NearestStrategy| {
        FieldBuilder::new()
            .config(Config::default().with_nearest(strategy))
            .region(region)
            .boundary(boulder_box())
            .build()
            .unwrap()
            .run(&photo_points())
            .unwrap()
            .field
    };

    let brute = run(NearestStrategy::BruteForce);
    let tree = run(NearestStrategy::RTree);
    assert_eq!(brute.len(), tree.len());
    for (a, b) in brute.iter().zip(tree.iter()) {
        assert_eq!(a.cell, b.cell);
        assert!((a.distance - b.distance).abs() < 1e-9);
    }
}

#[test]
fn test_boundary_clips_candidates() {
    let center = Point::from_lat_lon(40.0150, -105.2705);
    let region = RegionConfig::new(center, 10.0, 8, 5);
    // Only the part of the region west of the center.
    let west = Boundary::from_ring(&[
        Point::new(-106.0, 39.5),
        Point::new(center.lon(), 39.5),
        Point::new(center.lon(), 40.5),
        Point::new(-106.0, 40.5),
    ]);

    let clipped = FieldBuilder::new()
        .region(region)
        .boundary(west)
        .build()
        .unwrap()
        .select_candidates()
        .unwrap();
    let full = FieldBuilder::new()
        .region(region)
        .boundary(everywhere())
        .build()
        .unwrap()
        .select_candidates()
        .unwrap();

    assert!(clipped.len() < full.len());
    assert!(clipped.iter().all(|c| full.contains(c)));
    assert!(clipped.iter().all(|c| c.center().lon() <= center.lon()));
}

#[test]
fn test_all_sentinel_points_is_empty_occupied_set() {
    let center = Point::from_lat_lon(40.0150, -105.2705);
    let pipeline = FieldBuilder::new()
        .region(RegionConfig::new(center, 3.0, 9, 6))
        .boundary(boulder_box())
        .build()
        .unwrap();

    let sentinels = vec![Point::from_lat_lon(-999.0, -999.0); 5];
    let result = pipeline.run(&sentinels);
    assert!(matches!(
        result,
        Err(HexFieldError::EmptyOccupiedSet { resolution: 9 })
    ));
}

#[test]
fn test_run_from_text_source() {
    use hexfield::ingest::TextPointSource;

    let center = Point::from_lat_lon(40.0150, -105.2705);
    let pipeline = FieldBuilder::new()
        .region(RegionConfig::new(center, 3.0, 9, 6))
        .boundary(boulder_box())
        .build()
        .unwrap();

    let source = TextPointSource::new(
        "latitude,longitude\n40.0150,-105.2705\nbad,row\n-999.0,-999.0\n40.0200,-105.2600\n",
        true,
    );
    let output = pipeline.run_source(&source).unwrap();
    assert_eq!(output.occupancy.point_count(), 2);
}
