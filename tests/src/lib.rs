use canvas_geojson::extra::parser::{ParseError, PathParser};
use canvas_geojson::geom::{point, CubicBezierSegment, Point, QuadraticBezierSegment};
use canvas_geojson::path::GeoJsonContext;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub static SCALES: [f64; 8] = [0.1, 0.25, 0.5, 1.0, 2.0, 4.0, 10.0, 100.0];

/// An outline made of lines and curves of every supported kind.
pub const BADGE: &str = "M 10 80 C 40 10 65 10 95 80 S 150 150 180 80 \
                         Q 200 40 220 80 T 260 80 L 260 140 H 10 Z";

/// Two shapes and a dangling open path.
pub const MIXED: &str = "M 0 0 L 10 0 L 10 10 Z M 20 0 L 30 0 M 40 0 Q 45 10 50 0";

/// Parses SVG path data into a context with the provided scale.
pub fn record(src: &str, scale: f64) -> Result<GeoJsonContext, ParseError> {
    let mut context = GeoJsonContext::with_scale(scale)?;
    PathParser::new().parse_str(src, &mut context)?;

    Ok(context)
}

/// Serializes the result of a context as a JSON value.
pub fn to_json(context: &GeoJsonContext) -> serde_json::Value {
    serde_json::to_value(context.result()).unwrap_or(serde_json::Value::Null)
}

fn random_point(rng: &mut StdRng, size: f64) -> Point<f64> {
    point(rng.gen::<f64>() * size, rng.gen::<f64>() * size)
}

/// A reproducible set of cubic bézier curves spanning a 500x500 area.
pub fn generate_bezier_curves() -> Vec<CubicBezierSegment<f64>> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..500)
        .map(|_| CubicBezierSegment {
            from: random_point(&mut rng, 500.0),
            ctrl1: random_point(&mut rng, 500.0),
            ctrl2: random_point(&mut rng, 500.0),
            to: random_point(&mut rng, 500.0),
        })
        .collect()
}

/// A reproducible set of quadratic bézier curves spanning a 500x500 area.
pub fn generate_quadratic_curves() -> Vec<QuadraticBezierSegment<f64>> {
    let mut rng = StdRng::seed_from_u64(0xfeed);
    (0..500)
        .map(|_| QuadraticBezierSegment {
            from: random_point(&mut rng, 500.0),
            ctrl: random_point(&mut rng, 500.0),
            to: random_point(&mut rng, 500.0),
        })
        .collect()
}
