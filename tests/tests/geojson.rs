use canvas_geojson::path::{CanvasPath, GeoJsonContext, Geometry, RectMode};
use canvas_geojson_tests::*;
use serde_json::json;
use std::f64::consts::PI;

#[test]
fn polygon_json() {
    let context = record("M0 0 L1 0 L1 1 Z", 1.0).unwrap();

    assert_eq!(
        to_json(&context),
        json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
        })
    );
}

#[test]
fn empty_context_is_null() {
    let context = GeoJsonContext::new();

    assert_eq!(to_json(&context), serde_json::Value::Null);
    assert_eq!(record("   ", 1.0).map(|c| to_json(&c)), Ok(serde_json::Value::Null));
}

#[test]
fn point_json() {
    let mut context = GeoJsonContext::new();
    context.move_to(3.0, 4.0).unwrap();
    context.arc(3.0, 4.0, 4.5, 0.0, 2.0 * PI, false).unwrap();
    context.move_to(-1.0, 2.5).unwrap();
    context.arc(-1.0, 2.5, 4.5, 0.0, 2.0 * PI, false).unwrap();

    assert_eq!(
        to_json(&context),
        json!({
            "type": "MultiPoint",
            "coordinates": [[3.0, 4.0], [-1.0, 2.5]]
        })
    );
}

#[test]
fn mixed_json() {
    let context = record(MIXED, 1.0).unwrap();
    let value = to_json(&context);

    assert_eq!(value["type"], "GeometryCollection");
    let geometries = value["geometries"].as_array().unwrap();
    let types: Vec<&str> = geometries
        .iter()
        .map(|g| g["type"].as_str().unwrap())
        .collect();
    assert_eq!(types, vec!["Polygon", "LineString", "LineString"]);
    assert_eq!(
        geometries[1],
        json!({ "type": "LineString", "coordinates": [[20.0, 0.0], [30.0, 0.0]] })
    );
}

#[test]
fn closed_rects_json() {
    let mut context = GeoJsonContext::new().with_rect_mode(RectMode::Closed);
    context.rect(0.0, 0.0, 2.0, 1.0).unwrap();
    context.rect(5.0, 5.0, 1.0, 1.0).unwrap();

    assert_eq!(
        to_json(&context),
        json!({
            "type": "MultiPolygon",
            "coordinates": [
                [[[0.0, 0.0], [2.0, 0.0], [2.0, 1.0], [0.0, 1.0], [0.0, 0.0]]],
                [[[5.0, 5.0], [6.0, 5.0], [6.0, 6.0], [5.0, 6.0], [5.0, 5.0]]]
            ]
        })
    );
}

#[test]
fn json_round_trip() {
    let context = record(BADGE, 2.0).unwrap();
    let geometry = context.result().unwrap();

    let text = serde_json::to_string(&geometry).unwrap();
    let parsed: Geometry = serde_json::from_str(&text).unwrap();

    assert_eq!(parsed, geometry);
}

#[test]
fn rings_are_closed() {
    for &scale in &SCALES {
        let context = record(BADGE, scale).unwrap();
        match context.result() {
            Some(Geometry::Polygon { coordinates }) => {
                let ring = &coordinates[0];
                assert!(ring.len() > 8);
                assert_eq!(ring.first(), ring.last());
            }
            other => panic!("{:?}", other),
        }
    }
}

#[test]
fn point_count_grows_with_scale() {
    // Below the recursion limit, finer scales only ever split more.
    let mut previous = 0;
    for &scale in &SCALES[..7] {
        let context = record(BADGE, scale).unwrap();
        let count = context.result().map(|g| g.num_positions()).unwrap_or(0);
        assert!(count >= previous, "scale {}: {} < {}", scale, count, previous);
        previous = count;
    }
}

#[test]
fn parser_and_direct_calls_agree() {
    let parsed = record("M 10 10 C 20 0 30 20 40 10 Q 50 0 60 10 L 60 30 Z", 3.0).unwrap();

    let mut direct = GeoJsonContext::with_scale(3.0).unwrap();
    direct.move_to(10.0, 10.0).unwrap();
    direct
        .bezier_curve_to(20.0, 0.0, 30.0, 20.0, 40.0, 10.0)
        .unwrap();
    direct.quadratic_curve_to(50.0, 0.0, 60.0, 10.0).unwrap();
    direct.line_to(60.0, 30.0).unwrap();
    direct.close_path().unwrap();

    assert_eq!(parsed.result(), direct.result());
}
