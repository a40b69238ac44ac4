//! Adaptive subdivision of bézier curves into polylines.
//!
//! Both algorithms split the control polygon at `t = 0.5` and recurse on each half
//! until the half is flat enough with respect to the distance tolerance (and, if
//! enabled, the angle tolerance). The first level is always subdivided.
//!
//! The recursion depth never exceeds `FlatteningOptions::recursion_limit`, so a call
//! emits at most `2^recursion_limit` interior points when the angle refinement is
//! disabled. Branches that hit the ceiling stop without emitting anything, which is
//! reported through `Flattening::truncated`.
//!
//! Based on the curve subdivision of the Anti-Grain Geometry library (agg_curves.cpp).

use crate::error::OptionsError;
use crate::scalar::Scalar;
use crate::{CubicBezierSegment, Point, QuadraticBezierSegment};

/// Parameters of the curve flattener.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct FlatteningOptions<S> {
    /// Maximum subdivision depth.
    ///
    /// Default value: `FlatteningOptions::DEFAULT_RECURSION_LIMIT`.
    pub recursion_limit: u32,

    /// Below this value, a control point is considered to lie on the chord.
    ///
    /// Default value: `FlatteningOptions::DEFAULT_EPSILON`.
    pub epsilon: S,

    /// Maximum distance between the curve and its approximation, at scale 1.
    ///
    /// Default value: `FlatteningOptions::DEFAULT_PATH_EPSILON`.
    pub path_epsilon: S,

    /// Angle tolerances smaller than this disable the angle refinement.
    ///
    /// Default value: `FlatteningOptions::DEFAULT_ANGLE_EPSILON`.
    pub angle_epsilon: S,

    /// Maximum tangent angle deviation (in radians) tolerated before stopping the
    /// subdivision. Zero disables the angle refinement.
    ///
    /// Default value: `0`.
    pub angle_tolerance: S,

    /// Angle (in radians) beyond which the nearby control point is emitted as a cusp
    /// instead of the subdivision point. Zero disables cusp detection.
    ///
    /// Default value: `0`.
    pub cusp_limit: S,
}

impl<S: Scalar> FlatteningOptions<S> {
    /// Default maximum subdivision depth.
    pub const DEFAULT_RECURSION_LIMIT: u32 = 8;
    /// Default collinearity threshold.
    pub const DEFAULT_EPSILON: S = S::FLT_EPSILON;
    /// Default distance tolerance at scale 1.
    pub const DEFAULT_PATH_EPSILON: S = S::ONE;
    /// Default angle epsilon.
    pub const DEFAULT_ANGLE_EPSILON: S = S::CENTI;

    pub const DEFAULT: Self = FlatteningOptions {
        recursion_limit: Self::DEFAULT_RECURSION_LIMIT,
        epsilon: Self::DEFAULT_EPSILON,
        path_epsilon: Self::DEFAULT_PATH_EPSILON,
        angle_epsilon: Self::DEFAULT_ANGLE_EPSILON,
        angle_tolerance: S::ZERO,
        cusp_limit: S::ZERO,
    };

    #[inline]
    pub fn path_epsilon(path_epsilon: S) -> Self {
        Self::DEFAULT.with_path_epsilon(path_epsilon)
    }

    #[inline]
    pub fn with_recursion_limit(mut self, recursion_limit: u32) -> Self {
        self.recursion_limit = recursion_limit;
        self
    }

    #[inline]
    pub fn with_epsilon(mut self, epsilon: S) -> Self {
        self.epsilon = epsilon;
        self
    }

    #[inline]
    pub fn with_path_epsilon(mut self, path_epsilon: S) -> Self {
        self.path_epsilon = path_epsilon;
        self
    }

    #[inline]
    pub fn with_angle_epsilon(mut self, angle_epsilon: S) -> Self {
        self.angle_epsilon = angle_epsilon;
        self
    }

    #[inline]
    pub fn with_angle_tolerance(mut self, angle_tolerance: S) -> Self {
        self.angle_tolerance = angle_tolerance;
        self
    }

    #[inline]
    pub fn with_cusp_limit(mut self, cusp_limit: S) -> Self {
        self.cusp_limit = cusp_limit;
        self
    }

    /// Whether the angle refinement participates in the flatness test.
    #[inline]
    pub fn uses_angle_refinement(&self) -> bool {
        self.angle_tolerance >= self.angle_epsilon
    }

    /// Checks that every parameter is usable.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(self.path_epsilon > S::ZERO && self.path_epsilon.is_finite()) {
            return Err(OptionsError::PathEpsilon(self.path_epsilon.to_f64_lossy()));
        }

        let non_negative = [
            (self.epsilon, OptionsError::Epsilon as fn(f64) -> OptionsError),
            (self.angle_epsilon, OptionsError::AngleEpsilon),
            (self.angle_tolerance, OptionsError::AngleTolerance),
            (self.cusp_limit, OptionsError::CuspLimit),
        ];
        for (value, error) in non_negative {
            // Also rejects NaN.
            if !(value >= S::ZERO) {
                return Err(error(value.to_f64_lossy()));
            }
        }

        Ok(())
    }
}

impl<S: Scalar> Default for FlatteningOptions<S> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Checks that a scale factor is positive and finite.
pub fn check_scale<S: Scalar>(scale: S) -> Result<S, OptionsError> {
    if scale > S::ZERO && scale.is_finite() {
        Ok(scale)
    } else {
        Err(OptionsError::Scale(scale.to_f64_lossy()))
    }
}

/// What a flattening call produced.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Flattening {
    /// Number of points appended to the output, end points included.
    pub emitted: usize,
    /// Whether at least one branch of the subdivision stopped at the recursion
    /// limit before reaching the requested tolerance.
    pub truncated: bool,
}

/// Approximates quadratic and cubic bézier curves with polylines.
///
/// The flattener holds no state besides its options and can be shared freely.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CurveFlattener<S> {
    options: FlatteningOptions<S>,
}

impl<S: Scalar> CurveFlattener<S> {
    /// Creates a flattener after validating the options.
    pub fn new(options: FlatteningOptions<S>) -> Result<Self, OptionsError> {
        options.validate()?;

        Ok(CurveFlattener { options })
    }

    #[inline]
    pub fn options(&self) -> &FlatteningOptions<S> {
        &self.options
    }

    /// The squared distance threshold used at a given scale.
    #[inline]
    pub fn distance_tolerance(&self, scale: S) -> S {
        let tolerance = self.options.path_epsilon / scale;

        tolerance * tolerance
    }

    /// Returns the polyline approximating a cubic bézier curve, end points included.
    ///
    /// Fails if `scale` is not positive and finite.
    pub fn flatten_cubic(
        &self,
        curve: &CubicBezierSegment<S>,
        scale: S,
    ) -> Result<Vec<Point<S>>, OptionsError> {
        let mut points = Vec::new();
        self.flatten_cubic_into(curve, scale, &mut points)?;

        Ok(points)
    }

    /// Returns the polyline approximating a quadratic bézier curve, end points included.
    ///
    /// Fails if `scale` is not positive and finite.
    pub fn flatten_quadratic(
        &self,
        curve: &QuadraticBezierSegment<S>,
        scale: S,
    ) -> Result<Vec<Point<S>>, OptionsError> {
        let mut points = Vec::new();
        self.flatten_quadratic_into(curve, scale, &mut points)?;

        Ok(points)
    }

    /// Appends the start point, the interior points and the end point of a cubic
    /// bézier curve to `output`.
    ///
    /// Nothing is appended if `scale` is invalid.
    pub fn flatten_cubic_into(
        &self,
        curve: &CubicBezierSegment<S>,
        scale: S,
        output: &mut Vec<Point<S>>,
    ) -> Result<Flattening, OptionsError> {
        check_scale(scale)?;

        let initial_len = output.len();
        output.push(curve.from);
        let truncated = self.for_each_interior_cubic(curve, scale, &mut |p| output.push(p))?;
        output.push(curve.to);

        Ok(Flattening {
            emitted: output.len() - initial_len,
            truncated,
        })
    }

    /// Appends the start point, the interior points and the end point of a quadratic
    /// bézier curve to `output`.
    ///
    /// Nothing is appended if `scale` is invalid.
    pub fn flatten_quadratic_into(
        &self,
        curve: &QuadraticBezierSegment<S>,
        scale: S,
        output: &mut Vec<Point<S>>,
    ) -> Result<Flattening, OptionsError> {
        check_scale(scale)?;

        let initial_len = output.len();
        output.push(curve.from);
        let truncated = self.for_each_interior_quadratic(curve, scale, &mut |p| output.push(p))?;
        output.push(curve.to);

        Ok(Flattening {
            emitted: output.len() - initial_len,
            truncated,
        })
    }

    /// Invokes the callback with each interior point of the approximation of a cubic
    /// bézier curve, in curve order. The end points are not emitted.
    ///
    /// Returns whether the recursion limit was hit, or an error if `scale` is not
    /// positive and finite.
    pub fn for_each_interior_cubic<F>(
        &self,
        curve: &CubicBezierSegment<S>,
        scale: S,
        callback: &mut F,
    ) -> Result<bool, OptionsError>
    where
        F: FnMut(Point<S>),
    {
        let tolerance = self.distance_tolerance(check_scale(scale)?);
        let mut subdivision = Subdivision::new(&self.options, tolerance, callback);
        subdivision.cubic(curve, 0);

        Ok(subdivision.truncated)
    }

    /// Invokes the callback with each interior point of the approximation of a
    /// quadratic bézier curve, in curve order. The end points are not emitted.
    ///
    /// Returns whether the recursion limit was hit, or an error if `scale` is not
    /// positive and finite.
    pub fn for_each_interior_quadratic<F>(
        &self,
        curve: &QuadraticBezierSegment<S>,
        scale: S,
        callback: &mut F,
    ) -> Result<bool, OptionsError>
    where
        F: FnMut(Point<S>),
    {
        let tolerance = self.distance_tolerance(check_scale(scale)?);
        let mut subdivision = Subdivision::new(&self.options, tolerance, callback);
        subdivision.quadratic(curve, 0);

        Ok(subdivision.truncated)
    }
}

impl<S: Scalar> Default for CurveFlattener<S> {
    fn default() -> Self {
        CurveFlattener {
            options: FlatteningOptions::DEFAULT,
        }
    }
}

struct Subdivision<'l, S, F> {
    options: &'l FlatteningOptions<S>,
    distance_tolerance: S,
    callback: &'l mut F,
    truncated: bool,
}

impl<'l, S: Scalar, F: FnMut(Point<S>)> Subdivision<'l, S, F> {
    fn new(options: &'l FlatteningOptions<S>, distance_tolerance: S, callback: &'l mut F) -> Self {
        Subdivision {
            options,
            distance_tolerance,
            callback,
            truncated: false,
        }
    }

    #[inline]
    fn emit(&mut self, p: Point<S>) {
        (self.callback)(p)
    }

    fn cubic(&mut self, curve: &CubicBezierSegment<S>, level: u32) {
        if level > self.options.recursion_limit {
            self.truncated = true;
            return;
        }

        let (first, second) = curve.split(S::HALF);

        // The first level is always subdivided.
        if level > 0 && self.cubic_is_flat(curve, second.from) {
            return;
        }

        self.cubic(&first, level + 1);
        self.cubic(&second, level + 1);
    }

    // Emits the approximation of the segment and returns true if it is flat enough.
    fn cubic_is_flat(&mut self, curve: &CubicBezierSegment<S>, p1234: Point<S>) -> bool {
        let options = *self.options;
        let tolerance = self.distance_tolerance;
        let (p1, p4) = curve.baseline();
        let (p2, p3) = (curve.ctrl1, curve.ctrl2);
        let chord = p4 - p1;
        let chord_sq = chord.square_length();

        let d2 = ((p2.x - p4.x) * chord.y - (p2.y - p4.y) * chord.x).abs();
        let d3 = ((p3.x - p4.x) * chord.y - (p3.y - p4.y) * chord.x).abs();

        if d2 > options.epsilon && d3 > options.epsilon {
            if (d2 + d3) * (d2 + d3) <= tolerance * chord_sq {
                if !options.uses_angle_refinement() {
                    self.emit(p1234);
                    return true;
                }

                let a23 = direction(p2, p3);
                let da1 = normalized_angle((a23 - direction(p1, p2)).abs());
                let da2 = normalized_angle((direction(p3, p4) - a23).abs());

                if da1 + da2 < options.angle_tolerance {
                    self.emit(p1234);
                    return true;
                }

                if options.cusp_limit != S::ZERO {
                    if da1 > options.cusp_limit {
                        self.emit(p2);
                        return true;
                    }

                    if da2 > options.cusp_limit {
                        self.emit(p3);
                        return true;
                    }
                }
            }
        } else if d2 > options.epsilon {
            // p1, p3 and p4 are collinear.
            if d2 * d2 <= tolerance * chord_sq {
                if !options.uses_angle_refinement() {
                    self.emit(p1234);
                    return true;
                }

                let da1 = normalized_angle((direction(p2, p3) - direction(p1, p2)).abs());

                if da1 < options.angle_tolerance {
                    self.emit(p2);
                    self.emit(p3);
                    return true;
                }

                if options.cusp_limit != S::ZERO && da1 > options.cusp_limit {
                    self.emit(p2);
                    return true;
                }
            }
        } else if d3 > options.epsilon {
            // p1, p2 and p4 are collinear.
            if d3 * d3 <= tolerance * chord_sq {
                if !options.uses_angle_refinement() {
                    self.emit(p1234);
                    return true;
                }

                let da1 = normalized_angle((direction(p3, p4) - direction(p2, p3)).abs());

                if da1 < options.angle_tolerance {
                    self.emit(p2);
                    self.emit(p3);
                    return true;
                }

                if options.cusp_limit != S::ZERO && da1 > options.cusp_limit {
                    self.emit(p3);
                    return true;
                }
            }
        } else {
            // All control points are on the chord.
            if (p1234 - mid(p1, p4)).square_length() <= tolerance {
                self.emit(p1234);
                return true;
            }
        }

        false
    }

    fn quadratic(&mut self, curve: &QuadraticBezierSegment<S>, level: u32) {
        if level > self.options.recursion_limit {
            self.truncated = true;
            return;
        }

        let (first, second) = curve.split(S::HALF);

        if level > 0 && self.quadratic_is_flat(curve, second.from) {
            return;
        }

        self.quadratic(&first, level + 1);
        self.quadratic(&second, level + 1);
    }

    fn quadratic_is_flat(&mut self, curve: &QuadraticBezierSegment<S>, p123: Point<S>) -> bool {
        let options = *self.options;
        let tolerance = self.distance_tolerance;
        let (p1, p3) = curve.baseline();
        let p2 = curve.ctrl;
        let chord = p3 - p1;

        let d = ((p2.x - p3.x) * chord.y - (p2.y - p3.y) * chord.x).abs();

        if d > options.epsilon {
            if d * d <= tolerance * chord.square_length() {
                if !options.uses_angle_refinement() {
                    self.emit(p123);
                    return true;
                }

                let da = normalized_angle((direction(p2, p3) - direction(p1, p2)).abs());

                if da < options.angle_tolerance {
                    self.emit(p123);
                    return true;
                }

                if options.cusp_limit != S::ZERO && da > options.cusp_limit {
                    self.emit(p2);
                    return true;
                }
            }
        } else if (p123 - mid(p1, p3)).square_length() <= tolerance {
            // The control point is on the chord.
            self.emit(p123);
            return true;
        }

        false
    }
}

#[inline]
fn mid<S: Scalar>(a: Point<S>, b: Point<S>) -> Point<S> {
    Point::new((a.x + b.x) * S::HALF, (a.y + b.y) * S::HALF)
}

#[inline]
fn direction<S: Scalar>(from: Point<S>, to: Point<S>) -> S {
    (to.y - from.y).atan2(to.x - from.x)
}

// Maps an absolute angle difference into [0, π].
#[inline]
fn normalized_angle<S: Scalar>(da: S) -> S {
    if da >= S::PI() {
        S::TWO * S::PI() - da
    } else {
        da
    }
}

#[cfg(test)]
use crate::point;

#[cfg(test)]
fn wavy_cubic() -> CubicBezierSegment<f64> {
    CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(500.0, 900.0),
        ctrl2: point(-400.0, 700.0),
        to: point(100.0, -300.0),
    }
}

#[test]
fn default_options() {
    let options = FlatteningOptions::<f64>::default();
    assert_eq!(options.recursion_limit, 8);
    assert_eq!(options.epsilon, 1.19209290e-7);
    assert_eq!(options.path_epsilon, 1.0);
    assert_eq!(options.angle_epsilon, 0.01);
    assert_eq!(options.angle_tolerance, 0.0);
    assert_eq!(options.cusp_limit, 0.0);
    assert!(!options.uses_angle_refinement());
    assert!(options.validate().is_ok());
}

#[test]
fn invalid_options() {
    let check = |options: FlatteningOptions<f64>| CurveFlattener::new(options).err();

    assert_eq!(
        check(FlatteningOptions::path_epsilon(0.0)),
        Some(OptionsError::PathEpsilon(0.0))
    );
    assert_eq!(
        check(FlatteningOptions::path_epsilon(-1.0)),
        Some(OptionsError::PathEpsilon(-1.0))
    );
    assert!(matches!(
        check(FlatteningOptions::path_epsilon(f64::NAN)),
        Some(OptionsError::PathEpsilon(_))
    ));
    assert_eq!(
        check(FlatteningOptions::DEFAULT.with_epsilon(-1e-3)),
        Some(OptionsError::Epsilon(-1e-3))
    );
    assert_eq!(
        check(FlatteningOptions::DEFAULT.with_angle_tolerance(-0.5)),
        Some(OptionsError::AngleTolerance(-0.5))
    );
    assert_eq!(
        check(FlatteningOptions::DEFAULT.with_cusp_limit(-2.0)),
        Some(OptionsError::CuspLimit(-2.0))
    );
    assert!(matches!(
        check(FlatteningOptions::DEFAULT.with_angle_epsilon(f64::NAN)),
        Some(OptionsError::AngleEpsilon(_))
    ));
}

#[test]
fn scale_check() {
    assert_eq!(check_scale(2.0), Ok(2.0));
    assert_eq!(check_scale(0.0), Err(OptionsError::Scale(0.0)));
    assert_eq!(check_scale(-3.0), Err(OptionsError::Scale(-3.0)));
    assert!(check_scale(f64::INFINITY).is_err());
    assert!(check_scale(f64::NAN).is_err());
}

#[test]
fn distance_tolerance_is_squared_and_scaled() {
    let flattener = CurveFlattener::<f64>::new(FlatteningOptions::path_epsilon(2.0)).unwrap();
    assert_eq!(flattener.distance_tolerance(1.0), 4.0);
    assert_eq!(flattener.distance_tolerance(4.0), 0.25);
}

#[test]
fn simple_quadratic() {
    let flattener = CurveFlattener::default();
    let curve = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(1.0, 1.0),
        to: point(2.0, 0.0),
    };

    assert_eq!(
        flattener.flatten_quadratic(&curve, 1.0).unwrap(),
        vec![
            point(0.0, 0.0),
            point(0.5, 0.375),
            point(1.5, 0.375),
            point(2.0, 0.0),
        ]
    );
}

#[test]
fn collinear_cubic() {
    let flattener = CurveFlattener::default();
    let curve = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(1.0, 0.0),
        ctrl2: point(2.0, 0.0),
        to: point(3.0, 0.0),
    };

    let points = flattener.flatten_cubic(&curve, 1.0).unwrap();
    assert_eq!(
        points,
        vec![
            point(0.0, 0.0),
            point(0.75, 0.0),
            point(2.25, 0.0),
            point(3.0, 0.0),
        ]
    );
}

#[test]
fn collinear_quadratic() {
    let flattener = CurveFlattener::default();
    let curve = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(1.0, 0.0),
        to: point(2.0, 0.0),
    };

    let points = flattener.flatten_quadratic(&curve, 1.0).unwrap();
    assert_eq!(
        points,
        vec![
            point(0.0, 0.0),
            point(0.5, 0.0),
            point(1.5, 0.0),
            point(2.0, 0.0),
        ]
    );
}

#[test]
fn recursion_limit_bounds_the_output() {
    for limit in 0..10 {
        let flattener =
            CurveFlattener::new(FlatteningOptions::DEFAULT.with_recursion_limit(limit)).unwrap();
        let points = flattener.flatten_cubic(&wavy_cubic(), 1e6).unwrap();
        let interior = points.len() - 2;
        assert!(interior <= 1 << limit, "limit {}: {} points", limit, interior);

        let quadratic = QuadraticBezierSegment {
            from: point(0.0, 0.0),
            ctrl: point(1000.0, 2000.0),
            to: point(2000.0, 0.0),
        };
        let points = flattener.flatten_quadratic(&quadratic, 1e6).unwrap();
        assert!(points.len() - 2 <= 1 << limit);
    }
}

#[test]
fn truncation_is_reported() {
    let options = FlatteningOptions::DEFAULT.with_recursion_limit(3);
    let flattener = CurveFlattener::new(options).unwrap();

    let mut points = Vec::new();
    let report = flattener.flatten_cubic_into(&wavy_cubic(), 1e6, &mut points).unwrap();
    assert!(report.truncated);
    assert_eq!(report.emitted, points.len());

    let mut points = Vec::new();
    let report = CurveFlattener::default()
        .flatten_cubic_into(&wavy_cubic(), 0.01, &mut points)
        .unwrap();
    assert!(!report.truncated);
}

#[test]
fn finer_scale_produces_more_points() {
    let flattener = CurveFlattener::default();
    let curve = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(0.0, 100.0),
        ctrl2: point(100.0, 100.0),
        to: point(100.0, 0.0),
    };

    let coarse = flattener.flatten_cubic(&curve, 1.0).unwrap();
    let fine = flattener.flatten_cubic(&curve, 10.0).unwrap();
    assert!(fine.len() > coarse.len());
}

#[test]
fn flattening_is_deterministic() {
    let flattener = CurveFlattener::default();
    let curve = wavy_cubic();

    assert_eq!(
        flattener.flatten_cubic(&curve, 3.0).unwrap(),
        flattener.flatten_cubic(&curve, 3.0).unwrap()
    );
}

#[test]
fn output_buffer_is_appended_to() {
    let flattener = CurveFlattener::default();
    let curve = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(1.0, 1.0),
        to: point(2.0, 0.0),
    };

    let mut points = vec![point(-1.0, -1.0)];
    let report = flattener.flatten_quadratic_into(&curve, 1.0, &mut points).unwrap();

    assert_eq!(report.emitted, 4);
    assert_eq!(points.len(), 5);
    assert_eq!(points[0], point(-1.0, -1.0));
    assert_eq!(points[1], curve.from);
    assert_eq!(points[4], curve.to);
}

#[test]
fn interior_points_exclude_end_points() {
    let flattener = CurveFlattener::default();
    let curve = wavy_cubic();

    let mut interior = Vec::new();
    flattener.for_each_interior_cubic(&curve, 1.0, &mut |p| interior.push(p)).unwrap();

    let all = flattener.flatten_cubic(&curve, 1.0).unwrap();
    assert_eq!(&all[1..all.len() - 1], &interior[..]);
}

#[test]
fn nan_propagates() {
    let flattener = CurveFlattener::default();
    let curve = CubicBezierSegment {
        from: point(f64::NAN, 0.0),
        ctrl1: point(1.0, 1.0),
        ctrl2: point(2.0, 1.0),
        to: point(3.0, 0.0),
    };

    let mut points = Vec::new();
    let report = flattener.flatten_cubic_into(&curve, 1.0, &mut points).unwrap();
    assert!(points[0].x.is_nan());
    assert_eq!(points.last(), Some(&curve.to));
    assert!(report.truncated);
}

#[test]
fn single_precision() {
    let flattener = CurveFlattener::<f32>::default();
    let curve = QuadraticBezierSegment {
        from: point(0.0f32, 0.0),
        ctrl: point(1.0, 1.0),
        to: point(2.0, 0.0),
    };

    assert_eq!(flattener.flatten_quadratic(&curve, 1.0).unwrap().len(), 4);
}

#[test]
fn invalid_scale_is_rejected() {
    let flattener = CurveFlattener::default();
    let curve = wavy_cubic();

    assert_eq!(
        flattener.flatten_cubic(&curve, 0.0),
        Err(OptionsError::Scale(0.0))
    );
    assert_eq!(
        flattener.for_each_interior_cubic(&curve, -1.0, &mut |_| {}),
        Err(OptionsError::Scale(-1.0))
    );
    assert!(flattener.flatten_cubic(&curve, f64::NAN).is_err());

    let quadratic = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(1.0, 1.0),
        to: point(2.0, 0.0),
    };
    let mut points = vec![point(5.0, 5.0)];
    assert_eq!(
        flattener.flatten_quadratic_into(&quadratic, f64::INFINITY, &mut points),
        Err(OptionsError::Scale(f64::INFINITY))
    );
    // Nothing was appended.
    assert_eq!(points, vec![point(5.0, 5.0)]);
}

#[cfg(test)]
fn coarse_angle_flattener(angle_tolerance: f64, cusp_limit: f64) -> CurveFlattener<f64> {
    // The distance test always passes so that the angle test decides.
    let options = FlatteningOptions::path_epsilon(100.0)
        .with_angle_tolerance(angle_tolerance)
        .with_cusp_limit(cusp_limit);

    CurveFlattener::new(options).unwrap()
}

#[test]
fn quadratic_cusp_emits_the_control_point() {
    let curve = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(1.0, 1.0),
        to: point(2.0, 0.0),
    };

    // Each half turns by 45°, above the cusp limit.
    let cusps = coarse_angle_flattener(0.01, 0.1).flatten_quadratic(&curve, 1.0).unwrap();
    assert_eq!(
        cusps,
        vec![
            point(0.0, 0.0),
            point(0.5, 0.5),
            point(1.5, 0.5),
            point(2.0, 0.0),
        ]
    );

    let distance_only = CurveFlattener::new(FlatteningOptions::path_epsilon(100.0))
        .unwrap()
        .flatten_quadratic(&curve, 1.0)
        .unwrap();
    assert_eq!(
        distance_only,
        vec![
            point(0.0, 0.0),
            point(0.5, 0.375),
            point(1.5, 0.375),
            point(2.0, 0.0),
        ]
    );

    // Without a cusp limit the angle test keeps subdividing.
    let angle_only = coarse_angle_flattener(0.01, 0.0).flatten_quadratic(&curve, 1.0).unwrap();
    assert!(angle_only.len() > distance_only.len());
}

#[test]
fn cubic_cusp_emits_the_control_point() {
    let curve = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(0.0, 2.0),
        ctrl2: point(2.0, 2.0),
        to: point(2.0, 0.0),
    };

    let points = coarse_angle_flattener(0.01, 0.1).flatten_cubic(&curve, 1.0).unwrap();
    assert_eq!(
        points,
        vec![
            point(0.0, 0.0),
            point(0.0, 1.0),
            point(1.5, 1.5),
            point(2.0, 0.0),
        ]
    );
}

#[test]
fn collinear_control_point_emits_both_control_points() {
    // ctrl2 == to, so the second half of the curve has its last control point on the
    // chord.
    let curve = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(1.0, 1.0),
        ctrl2: point(2.0, 0.0),
        to: point(2.0, 0.0),
    };

    let angle = coarse_angle_flattener(1.2, 0.0).flatten_cubic(&curve, 1.0).unwrap();
    assert_eq!(
        angle,
        vec![
            point(0.0, 0.0),
            point(0.734375, 0.421875),
            point(1.75, 0.25),
            point(2.0, 0.0),
            point(2.0, 0.0),
        ]
    );

    let distance_only = CurveFlattener::new(FlatteningOptions::path_epsilon(100.0))
        .unwrap()
        .flatten_cubic(&curve, 1.0)
        .unwrap();
    assert_eq!(
        distance_only,
        vec![
            point(0.0, 0.0),
            point(0.734375, 0.421875),
            point(1.828125, 0.140625),
            point(2.0, 0.0),
        ]
    );
}
