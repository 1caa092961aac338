use geo::{Area, Contains, Point};
use geojson::{JsonValue, Value};
use insta::assert_compact_debug_snapshot;
use track_coverage::geodesy::meters_per_degree;
use track_coverage::{Surface, SurfaceOptions, Track, TrackPoint, read_track_file};

fn fixture() -> Track {
    read_track_file("tests/fixtures/kiel_fjord.json", &mut Vec::new())
        .expect("Failed to read fixture file")
}

fn eastbound() -> Track {
    Track::new(vec![
        TrackPoint::new(0.0, 0.0, 0.0, 90.0),
        TrackPoint::new(2000.0, 0.0, 0.001, 90.0),
    ])
    .unwrap()
}

fn line_coordinates(value: &Value) -> &Vec<Vec<f64>> {
    match value {
        Value::LineString(coordinates) => coordinates,
        other => panic!("expected a LineString, found {other:?}"),
    }
}

#[test]
fn eastbound_offsets_lie_due_east() {
    let track = eastbound();
    let coverage = Surface::new(&track)
        .compute()
        .expect("Failed to compute coverage")
        .expect("Expected coverage");

    let track_line = coverage.track_line.geometry.expect("track line geometry");
    let offset_line = coverage.offset_line.geometry.expect("offset line geometry");
    let track_line = line_coordinates(&track_line.value);
    let offset_line = line_coordinates(&offset_line.value);

    // Samples at 0, 1000 and 2000 ms
    assert_compact_debug_snapshot!(track_line, @"[[0.0, 0.0], [0.0005, 0.0], [0.001, 0.0]]");

    let displacement = 65.0 / meters_per_degree(0.0);
    assert_eq!(offset_line.len(), 3);
    for (sample, offset) in track_line.iter().zip(offset_line) {
        assert!((offset[0] - sample[0] - displacement).abs() < 1e-12);
        assert!((offset[1] - sample[1]).abs() < 1e-12);
    }

    assert_eq!(coverage.track_line.properties, Some(Default::default()));
    assert_eq!(coverage.offset_line.properties, Some(Default::default()));
    let properties = coverage.polygon.properties.expect("polygon properties");
    assert_eq!(properties["fill"], JsonValue::from("#0000ff"));
    assert!(matches!(
        coverage.polygon.geometry.map(|geometry| geometry.value),
        Some(Value::Polygon(_))
    ));
}

#[test]
fn sample_counts_match() {
    let track = fixture();
    let geometry = Surface::new(&track)
        .compute_geometry()
        .expect("Failed to compute coverage")
        .expect("Expected coverage");

    // 10 seconds at 1 Hz, both ends included
    assert_eq!(geometry.track_line.0.len(), 11);
    assert_eq!(geometry.offset_line.0.len(), 11);
}

#[test]
fn offsets_follow_heading_across_north() {
    let track = fixture();
    let geometry = Surface::new(&track)
        .compute_geometry()
        .unwrap()
        .unwrap();

    // Headings between 340° and 20° all point north of the track
    for (sample, offset) in geometry.track_line.coords().zip(geometry.offset_line.coords()) {
        assert!(offset.y > sample.y, "{offset:?} is not north of {sample:?}");
    }

    // The first sample looks north-west, the last one north-east
    let first = (geometry.track_line.0[0], geometry.offset_line.0[0]);
    assert!(first.1.x < first.0.x);
    let last = (geometry.track_line.0[10], geometry.offset_line.0[10]);
    assert!(last.1.x > last.0.x);
}

#[test]
fn polygon_covers_offset_line() {
    let track = fixture();
    let geometry = Surface::new(&track)
        .compute_geometry()
        .unwrap()
        .unwrap();

    assert!(geometry.polygon.unsigned_area() > 0.0);
    for coord in geometry.offset_line.coords() {
        assert!(geometry.polygon.contains(&Point::from(*coord)));
    }
}

#[test]
fn smaller_buffer_coefficient_shrinks_polygon() {
    let track = fixture();
    let area = |buffer_coefficient: f64| {
        Surface::new(&track)
            .with_options(SurfaceOptions {
                buffer_coefficient,
                ..SurfaceOptions::default()
            })
            .compute_geometry()
            .unwrap()
            .unwrap()
            .polygon
            .unsigned_area()
    };

    assert!(area(0.4) < area(0.8));
}

#[test]
fn single_point_has_no_coverage() {
    let track = Track::new(vec![TrackPoint::new(0.0, 54.33, 10.15, 0.0)]).unwrap();
    let coverage = Surface::new(&track).compute().unwrap();
    assert!(coverage.is_none());
}

#[test]
fn short_track_has_no_coverage() {
    let track = eastbound();
    let coverage = Surface::new(&track)
        .with_options(SurfaceOptions {
            frame_rate: 0.25,
            ..SurfaceOptions::default()
        })
        .compute()
        .unwrap();
    assert!(coverage.is_none());
}

#[test]
fn feature_collection_order() {
    let track = fixture();
    let collection = Surface::new(&track)
        .compute()
        .unwrap()
        .unwrap()
        .into_feature_collection();

    let types: Vec<_> = collection
        .features
        .iter()
        .map(|feature| match feature.geometry.as_ref().map(|geometry| &geometry.value) {
            Some(Value::LineString(_)) => "LineString",
            Some(Value::Polygon(_)) => "Polygon",
            Some(Value::MultiPolygon(_)) => "MultiPolygon",
            _ => "other",
        })
        .collect();
    assert_eq!(types[..2], ["LineString", "LineString"]);
    assert_ne!(types[2], "LineString");
    assert_ne!(types[2], "other");

    let json = collection.to_string();
    assert!(json.contains(r##""fill":"#0000ff""##));
}
