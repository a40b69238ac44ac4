extern crate canvas_geojson;
extern crate canvas_geojson_tests;
#[macro_use]
extern crate criterion;

use canvas_geojson::geom::{CubicBezierSegment, CurveFlattener, FlatteningOptions, QuadraticBezierSegment};
use canvas_geojson_tests::*;
use criterion::{BenchmarkId, Criterion};

fn bench_flatten(flattener: &CurveFlattener<f64>, curves: &[CubicBezierSegment<f64>], scale: f64) {
    let mut points = Vec::new();
    for curve in curves {
        points.clear();
        flattener.flatten_cubic_into(curve, scale, &mut points).unwrap();
        std::hint::black_box(&points);
    }
}

fn bench_flatten_quad(
    flattener: &CurveFlattener<f64>,
    curves: &[QuadraticBezierSegment<f64>],
    scale: f64,
) {
    let mut points = Vec::new();
    for curve in curves {
        points.clear();
        flattener.flatten_quadratic_into(curve, scale, &mut points).unwrap();
        std::hint::black_box(&points);
    }
}

fn cubic_flatten(c: &mut Criterion) {
    let curves = generate_bezier_curves();
    let distance = CurveFlattener::default();
    let angle = FlatteningOptions::DEFAULT
        .with_angle_tolerance(0.1)
        .with_cusp_limit(0.2);
    let angle = CurveFlattener::new(angle).unwrap();

    let mut g = c.benchmark_group("cubic");
    for scale in &SCALES {
        g.bench_with_input(BenchmarkId::new("distance", scale), scale, |b, scale| {
            b.iter(|| bench_flatten(&distance, &curves, *scale))
        });
        g.bench_with_input(BenchmarkId::new("angle", scale), scale, |b, scale| {
            b.iter(|| bench_flatten(&angle, &curves, *scale))
        });
    }
}

fn quad_flatten(c: &mut Criterion) {
    let curves = generate_quadratic_curves();
    let distance = CurveFlattener::default();

    let mut g = c.benchmark_group("quadratic");
    for scale in &SCALES {
        g.bench_with_input(BenchmarkId::new("distance", scale), scale, |b, scale| {
            b.iter(|| bench_flatten_quad(&distance, &curves, *scale))
        });
    }
}

fn context(c: &mut Criterion) {
    c.bench_function("record badge", |b| {
        b.iter(|| {
            let context = record(BADGE, 4.0).unwrap();
            std::hint::black_box(context.result());
        })
    });
}

criterion_group!(flatten, cubic_flatten, quad_flatten, context);

criterion_main!(flatten);
