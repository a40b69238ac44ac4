use canvas_geojson::geom::{CurveFlattener, Point};
use canvas_geojson_tests::*;

// With distance-only flattening every interior point is the midpoint of a sub-curve,
// so it lies on the curve at t = k / 2^(recursion_limit + 1).
const STEPS: u32 = 512;

fn distance_to_samples<F: Fn(f64) -> Point<f64>>(p: Point<f64>, sample: F) -> f64 {
    (0..=STEPS)
        .map(|k| (sample(k as f64 / STEPS as f64) - p).length())
        .fold(f64::INFINITY, f64::min)
}

#[test]
fn cubic_points_lie_on_the_curve() {
    let flattener = CurveFlattener::default();
    for curve in generate_bezier_curves().iter().take(50) {
        let points = curve.flattened(&flattener, 1.0).unwrap();
        assert_eq!(points.first(), Some(&curve.from));
        assert_eq!(points.last(), Some(&curve.to));

        for p in &points {
            let d = distance_to_samples(*p, |t| curve.sample(t));
            assert!(d < 1e-9, "{:?} is {} away from {:?}", p, d, curve);
        }
    }
}

#[test]
fn quadratic_points_lie_on_the_curve() {
    let flattener = CurveFlattener::default();
    for curve in generate_quadratic_curves().iter().take(50) {
        let points = curve.flattened(&flattener, 4.0).unwrap();
        assert_eq!(points.first(), Some(&curve.from));
        assert_eq!(points.last(), Some(&curve.to));

        for p in &points {
            let d = distance_to_samples(*p, |t| curve.sample(t));
            assert!(d < 1e-9, "{:?} is {} away from {:?}", p, d, curve);
        }
    }
}

#[test]
fn flattened_matches_the_interior_callback() {
    let flattener = CurveFlattener::default();
    for curve in generate_bezier_curves().iter().take(20) {
        let mut interior = Vec::new();
        flattener
            .for_each_interior_cubic(curve, 2.0, &mut |p| interior.push(p))
            .unwrap();

        let points = curve.flattened(&flattener, 2.0).unwrap();
        assert_eq!(points.len(), interior.len() + 2);
        assert_eq!(&points[1..points.len() - 1], &interior[..]);
    }
}
