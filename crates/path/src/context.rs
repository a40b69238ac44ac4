//! The GeoJSON path context.
//!
//! ## Sub-paths and kinds
//!
//! Each `move_to` (or `rect`) starts a new sub-path. Every sub-path has a kind that
//! decides how it is exported:
//!
//! - a new sub-path is a `LineString`,
//! - `close_path` appends the start point and upgrades it to a `Polygon`,
//! - a full circle `arc` right after a bare `move_to` turns it into a `Point` located
//!   at the circle's center. This is how a drawing driver marks point features.
//!
//! Closing a sub-path does not end it: later calls keep appending to it until the next
//! `move_to`.
//!
//! ## Curves
//!
//! Curves are flattened when they are recorded, with the context's scale at the time
//! of the call. Changing the scale afterwards does not affect recorded sub-paths.
//!
//! ## Example
//!
//! ```
//! use canvas_geojson_path::{CanvasPath, GeoJsonContext, Geometry};
//! use std::f64::consts::PI;
//!
//! let mut context = GeoJsonContext::new();
//! context.move_to(5.0, 5.0)?;
//! context.arc(5.0, 5.0, 3.0, 0.0, 2.0 * PI, false)?;
//!
//! assert_eq!(context.result(), Some(Geometry::Point { coordinates: [5.0, 5.0] }));
//! # Ok::<(), canvas_geojson_path::ContextError>(())
//! ```

use crate::canvas::CanvasPath;
use crate::error::ContextError;
use crate::geom::flatten::check_scale;
use crate::geom::{CubicBezierSegment, CurveFlattener, FlatteningOptions, QuadraticBezierSegment};
use crate::geometry::{position, positions, Geometry};
use crate::kind::{SubPathKind, Uniformity};
use crate::math::{point, Point};

use std::f64::consts::PI;

// Angular spans above this are considered complete turns.
const FULL_TURN: f64 = 2.0 * PI - 1e-6;

/// How `rect` records its outline.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RectMode {
    /// Four corners, no closing point. The sub-path is a line string.
    Open,
    /// Four corners followed by the first one. The sub-path is a polygon.
    Closed,
}

impl Default for RectMode {
    fn default() -> Self {
        RectMode::Open
    }
}

/// Records drawing-surface path calls and exports them as GeoJSON geometry.
///
/// A context is meant to be owned by a single drawing session. It is not
/// synchronized; wrap it in a mutex to share it between threads.
#[derive(Clone, Debug)]
pub struct GeoJsonContext {
    subpaths: Vec<Vec<Point>>,
    // Parallel to `subpaths`.
    kinds: Vec<SubPathKind>,
    current: Option<usize>,
    first_position: Point,
    current_position: Point,
    scale: f64,
    flattener: CurveFlattener<f64>,
    rect_mode: RectMode,
}

impl GeoJsonContext {
    /// Creates a context with a scale of 1 and the default flattening options.
    pub fn new() -> Self {
        GeoJsonContext {
            subpaths: Vec::new(),
            kinds: Vec::new(),
            current: None,
            first_position: point(0.0, 0.0),
            current_position: point(0.0, 0.0),
            scale: 1.0,
            flattener: CurveFlattener::default(),
            rect_mode: RectMode::Open,
        }
    }

    /// Creates a context with the provided scale.
    ///
    /// The scale divides the distance tolerance of the curve flattening. It usually
    /// corresponds to the zoom level or pixel ratio of the drawing surface.
    pub fn with_scale(scale: f64) -> Result<Self, ContextError> {
        let mut context = Self::new();
        context.set_scale(scale)?;

        Ok(context)
    }

    /// Creates a context with the provided scale and flattening options.
    pub fn with_options(scale: f64, options: FlatteningOptions<f64>) -> Result<Self, ContextError> {
        let mut context = Self::with_scale(scale)?;
        context.flattener = CurveFlattener::new(options)?;

        Ok(context)
    }

    /// Sets how `rect` records its outline.
    pub fn with_rect_mode(mut self, mode: RectMode) -> Self {
        self.rect_mode = mode;
        self
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the scale used by subsequent curves.
    pub fn set_scale(&mut self, scale: f64) -> Result<(), ContextError> {
        self.scale = check_scale(scale)?;

        Ok(())
    }

    #[inline]
    pub fn flattening_options(&self) -> &FlatteningOptions<f64> {
        self.flattener.options()
    }

    #[inline]
    pub fn rect_mode(&self) -> RectMode {
        self.rect_mode
    }

    #[inline]
    pub fn subpath_count(&self) -> usize {
        self.subpaths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    /// The current position, or `None` before the first sub-path.
    pub fn current_position(&self) -> Option<Point> {
        self.current.map(|_| self.current_position)
    }

    /// The recorded points of each sub-path.
    pub fn subpaths(&self) -> impl Iterator<Item = &[Point]> + '_ {
        self.subpaths.iter().map(Vec::as_slice)
    }

    /// The kind of each sub-path, in sub-path order.
    #[inline]
    pub fn kinds(&self) -> &[SubPathKind] {
        &self.kinds
    }

    /// Whether all sub-paths share the same kind. `None` if the context is empty.
    pub fn uniformity(&self) -> Option<Uniformity> {
        Uniformity::of(&self.kinds)
    }

    /// Removes all sub-paths, keeping the configuration.
    pub fn clear(&mut self) {
        self.subpaths.clear();
        self.kinds.clear();
        self.current = None;
        self.first_position = point(0.0, 0.0);
        self.current_position = point(0.0, 0.0);
    }

    /// Exports the recorded sub-paths.
    ///
    /// Returns `None` if nothing was recorded. A single sub-path is exported as a
    /// `Point`, `LineString` or `Polygon` according to its kind. Several sub-paths of
    /// the same kind are exported as the corresponding multi-geometry, and sub-paths
    /// of different kinds as a `GeometryCollection`.
    ///
    /// The returned value does not borrow from the context.
    pub fn result(&self) -> Option<Geometry> {
        let geometry = match self.uniformity()? {
            _ if self.subpaths.len() == 1 => self.subpath_geometry(0),
            Uniformity::Uniform(SubPathKind::Point) => Geometry::MultiPoint {
                coordinates: self.subpaths.iter().map(|p| position(&p[0])).collect(),
            },
            Uniformity::Uniform(SubPathKind::LineString) => Geometry::MultiLineString {
                coordinates: self.subpaths.iter().map(|p| positions(p)).collect(),
            },
            Uniformity::Uniform(SubPathKind::Polygon) => Geometry::MultiPolygon {
                coordinates: self
                    .subpaths
                    .iter()
                    .map(|p| vec![positions(p)])
                    .collect(),
            },
            Uniformity::Mixed => Geometry::GeometryCollection {
                geometries: (0..self.subpaths.len())
                    .map(|i| self.subpath_geometry(i))
                    .collect(),
            },
        };

        log::trace!(
            "exporting {} sub-paths as {}",
            self.subpaths.len(),
            geometry.type_name()
        );

        Some(geometry)
    }

    fn subpath_geometry(&self, index: usize) -> Geometry {
        let points = &self.subpaths[index];
        match self.kinds[index] {
            SubPathKind::Point => Geometry::Point {
                coordinates: position(&points[0]),
            },
            SubPathKind::LineString => Geometry::LineString {
                coordinates: positions(points),
            },
            SubPathKind::Polygon => Geometry::Polygon {
                coordinates: vec![positions(points)],
            },
        }
    }

    fn begin_subpath(&mut self, at: Point, kind: SubPathKind) -> usize {
        self.subpaths.push(vec![at]);
        self.kinds.push(kind);
        self.first_position = at;
        self.current_position = at;

        let index = self.subpaths.len() - 1;
        self.current = Some(index);

        index
    }

    fn current_subpath(&self, operation: &'static str) -> Result<usize, ContextError> {
        self.current
            .ok_or(ContextError::InvalidState { operation })
    }

    fn report_flattening(&self, operation: &'static str, truncated: bool) {
        if truncated {
            log::debug!(
                "{}: recursion limit of {} reached before the tolerance at scale {}",
                operation,
                self.flattener.options().recursion_limit,
                self.scale,
            );
        }
    }
}

impl Default for GeoJsonContext {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasPath for GeoJsonContext {
    fn move_to(&mut self, x: f64, y: f64) -> Result<(), ContextError> {
        let at = finite_point("move_to", x, y)?;
        self.begin_subpath(at, SubPathKind::LineString);

        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> Result<(), ContextError> {
        let index = self.current_subpath("line_to")?;
        let to = finite_point("line_to", x, y)?;

        self.subpaths[index].push(to);
        self.current_position = to;

        Ok(())
    }

    fn quadratic_curve_to(
        &mut self,
        cpx: f64,
        cpy: f64,
        x: f64,
        y: f64,
    ) -> Result<(), ContextError> {
        let index = self.current_subpath("quadratic_curve_to")?;
        let curve = QuadraticBezierSegment {
            from: self.current_position,
            ctrl: finite_point("quadratic_curve_to", cpx, cpy)?,
            to: finite_point("quadratic_curve_to", x, y)?,
        };

        // The current position is already the last point of the sub-path.
        let subpath = &mut self.subpaths[index];
        let truncated = self.flattener.for_each_interior_quadratic(
            &curve,
            self.scale,
            &mut |p| subpath.push(p),
        )?;
        subpath.push(curve.to);
        self.current_position = curve.to;

        self.report_flattening("quadratic_curve_to", truncated);

        Ok(())
    }

    fn bezier_curve_to(
        &mut self,
        cp1x: f64,
        cp1y: f64,
        cp2x: f64,
        cp2y: f64,
        x: f64,
        y: f64,
    ) -> Result<(), ContextError> {
        let index = self.current_subpath("bezier_curve_to")?;
        let curve = CubicBezierSegment {
            from: self.current_position,
            ctrl1: finite_point("bezier_curve_to", cp1x, cp1y)?,
            ctrl2: finite_point("bezier_curve_to", cp2x, cp2y)?,
            to: finite_point("bezier_curve_to", x, y)?,
        };

        let subpath = &mut self.subpaths[index];
        let truncated =
            self.flattener
                .for_each_interior_cubic(&curve, self.scale, &mut |p| subpath.push(p))?;
        subpath.push(curve.to);
        self.current_position = curve.to;

        self.report_flattening("bezier_curve_to", truncated);

        Ok(())
    }

    fn close_path(&mut self) -> Result<(), ContextError> {
        let index = match self.current {
            Some(index) => index,
            None => return Ok(()),
        };

        self.kinds[index] = SubPathKind::Polygon;
        self.subpaths[index].push(self.first_position);
        self.current_position = self.first_position;

        Ok(())
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), ContextError> {
        let origin = finite_point("rect", x, y)?;
        let corner = finite_point("rect", x + w, y + h)?;

        let index = self.begin_subpath(origin, SubPathKind::LineString);
        let subpath = &mut self.subpaths[index];
        subpath.push(point(corner.x, origin.y));
        subpath.push(corner);
        subpath.push(point(origin.x, corner.y));
        self.current_position = point(origin.x, corner.y);

        if self.rect_mode == RectMode::Closed {
            self.close_path()?;
        }

        Ok(())
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    ) -> Result<(), ContextError> {
        let index = self.current_subpath("arc")?;
        let center = finite_point("arc", x, y)?;

        let sweep = if counterclockwise {
            start_angle - end_angle
        } else {
            end_angle - start_angle
        };

        if sweep > FULL_TURN && self.subpaths[index].len() == 1 {
            self.subpaths[index][0] = center;
            self.kinds[index] = SubPathKind::Point;
            self.first_position = center;
            self.current_position = center;
        } else {
            log::debug!(
                "arc: ignoring arc of radius {} sweeping {} radians",
                radius,
                sweep
            );
        }

        Ok(())
    }
}

fn finite_point(operation: &'static str, x: f64, y: f64) -> Result<Point, ContextError> {
    if x.is_finite() && y.is_finite() {
        Ok(point(x, y))
    } else {
        Err(ContextError::NonFiniteCoordinate { operation, x, y })
    }
}

#[cfg(test)]
fn line_string(coordinates: &[[f64; 2]]) -> Geometry {
    Geometry::LineString {
        coordinates: coordinates.to_vec(),
    }
}

#[test]
fn empty_result() {
    let context = GeoJsonContext::new();
    assert!(context.is_empty());
    assert_eq!(context.result(), None);
    assert_eq!(context.uniformity(), None);
    assert_eq!(context.current_position(), None);
}

#[test]
fn simple_line_string() {
    let mut context = GeoJsonContext::new();
    context.move_to(0.0, 0.0).unwrap();
    context.line_to(1.0, 0.0).unwrap();
    context.line_to(1.0, 1.0).unwrap();

    assert_eq!(
        context.result(),
        Some(line_string(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]))
    );
    assert_eq!(context.current_position(), Some(point(1.0, 1.0)));
}

#[test]
fn simple_polygon() {
    let mut context = GeoJsonContext::new();
    context.move_to(0.0, 0.0).unwrap();
    context.line_to(1.0, 0.0).unwrap();
    context.line_to(1.0, 1.0).unwrap();
    context.close_path().unwrap();

    assert_eq!(
        context.result(),
        Some(Geometry::Polygon {
            coordinates: vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
        })
    );
    assert_eq!(context.current_position(), Some(point(0.0, 0.0)));
}

#[test]
fn close_does_not_end_the_subpath() {
    let mut context = GeoJsonContext::new();
    context.move_to(0.0, 0.0).unwrap();
    context.line_to(2.0, 0.0).unwrap();
    context.close_path().unwrap();
    context.line_to(0.0, 2.0).unwrap();

    assert_eq!(context.subpath_count(), 1);
    assert_eq!(
        context.result(),
        Some(Geometry::Polygon {
            coordinates: vec![vec![[0.0, 0.0], [2.0, 0.0], [0.0, 0.0], [0.0, 2.0]]],
        })
    );
}

#[test]
fn multi_polygon() {
    let mut context = GeoJsonContext::new();
    context.move_to(0.0, 0.0).unwrap();
    context.line_to(1.0, 0.0).unwrap();
    context.line_to(1.0, 1.0).unwrap();
    context.close_path().unwrap();
    context.move_to(5.0, 5.0).unwrap();
    context.line_to(6.0, 5.0).unwrap();
    context.line_to(6.0, 6.0).unwrap();
    context.close_path().unwrap();

    assert_eq!(
        context.result(),
        Some(Geometry::MultiPolygon {
            coordinates: vec![
                vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
                vec![vec![[5.0, 5.0], [6.0, 5.0], [6.0, 6.0], [5.0, 5.0]]],
            ],
        })
    );
}

#[test]
fn multi_line_string() {
    let mut context = GeoJsonContext::new();
    context.move_to(0.0, 0.0).unwrap();
    context.line_to(1.0, 0.0).unwrap();
    context.move_to(0.0, 1.0).unwrap();
    context.line_to(1.0, 1.0).unwrap();

    assert_eq!(
        context.result(),
        Some(Geometry::MultiLineString {
            coordinates: vec![
                vec![[0.0, 0.0], [1.0, 0.0]],
                vec![[0.0, 1.0], [1.0, 1.0]],
            ],
        })
    );
}

#[test]
fn multi_point() {
    let mut context = GeoJsonContext::new();
    for &(x, y) in &[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)] {
        context.move_to(x, y).unwrap();
        context.arc(x, y, 4.5, 0.0, 2.0 * PI, false).unwrap();
    }

    assert_eq!(
        context.result(),
        Some(Geometry::MultiPoint {
            coordinates: vec![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]],
        })
    );
}

#[test]
fn geometry_collection() {
    let mut context = GeoJsonContext::new();
    context.move_to(0.0, 0.0).unwrap();
    context.line_to(1.0, 0.0).unwrap();
    context.move_to(5.0, 5.0).unwrap();
    context.line_to(6.0, 5.0).unwrap();
    context.line_to(6.0, 6.0).unwrap();
    context.close_path().unwrap();

    assert_eq!(context.uniformity(), Some(Uniformity::Mixed));
    assert_eq!(
        context.result(),
        Some(Geometry::GeometryCollection {
            geometries: vec![
                line_string(&[[0.0, 0.0], [1.0, 0.0]]),
                Geometry::Polygon {
                    coordinates: vec![vec![[5.0, 5.0], [6.0, 5.0], [6.0, 6.0], [5.0, 5.0]]],
                },
            ],
        })
    );
}

#[test]
fn full_circle_marks_a_point() {
    let mut context = GeoJsonContext::new();
    context.move_to(8.0, 5.0).unwrap();
    context.arc(5.0, 5.0, 3.0, 0.0, 2.0 * PI, false).unwrap();

    assert_eq!(
        context.result(),
        Some(Geometry::Point {
            coordinates: [5.0, 5.0],
        })
    );
    assert_eq!(context.kinds(), &[SubPathKind::Point]);
    assert_eq!(context.current_position(), Some(point(5.0, 5.0)));

    // Counter-clockwise full turn.
    let mut context = GeoJsonContext::new();
    context.move_to(1.0, 1.0).unwrap();
    context.arc(1.0, 1.0, 1.0, 2.0 * PI, 0.0, true).unwrap();
    assert_eq!(context.kinds(), &[SubPathKind::Point]);
}

#[test]
fn partial_arcs_are_ignored() {
    let mut context = GeoJsonContext::new();
    context.move_to(0.0, 0.0).unwrap();
    context.arc(0.0, 0.0, 1.0, 0.0, PI, false).unwrap();
    // Wrong direction.
    context.arc(0.0, 0.0, 1.0, 0.0, 2.0 * PI, true).unwrap();

    assert_eq!(context.result(), Some(line_string(&[[0.0, 0.0]])));

    // Not right after a move_to.
    let mut context = GeoJsonContext::new();
    context.move_to(0.0, 0.0).unwrap();
    context.line_to(1.0, 0.0).unwrap();
    context.arc(0.0, 0.0, 1.0, 0.0, 2.0 * PI, false).unwrap();

    assert_eq!(context.kinds(), &[SubPathKind::LineString]);
    assert_eq!(context.subpaths().next().map(|p| p.len()), Some(2));
}

#[test]
fn quadratic_curve_shares_its_start_point() {
    let mut context = GeoJsonContext::new();
    context.move_to(0.0, 0.0).unwrap();
    context.quadratic_curve_to(1.0, 1.0, 2.0, 0.0).unwrap();

    assert_eq!(
        context.result(),
        Some(line_string(&[
            [0.0, 0.0],
            [0.5, 0.375],
            [1.5, 0.375],
            [2.0, 0.0]
        ]))
    );
    assert_eq!(context.current_position(), Some(point(2.0, 0.0)));
}

#[test]
fn cubic_curve_shares_its_start_point() {
    let mut context = GeoJsonContext::new();
    context.move_to(0.0, 0.0).unwrap();
    context.line_to(10.0, 0.0).unwrap();
    context
        .bezier_curve_to(20.0, 0.0, 20.0, 10.0, 10.0, 10.0)
        .unwrap();

    let points: Vec<Point> = context.subpaths().next().unwrap().to_vec();
    assert_eq!(points[0], point(0.0, 0.0));
    assert_eq!(points[1], point(10.0, 0.0));
    assert_ne!(points[2], point(10.0, 0.0));
    assert_eq!(*points.last().unwrap(), point(10.0, 10.0));
    assert_eq!(context.current_position(), Some(point(10.0, 10.0)));
}

#[test]
fn scale_is_not_retroactive() {
    let curve = |context: &mut GeoJsonContext| {
        context.move_to(0.0, 0.0).unwrap();
        context
            .bezier_curve_to(0.0, 100.0, 100.0, 100.0, 100.0, 0.0)
            .unwrap();
    };

    let mut context = GeoJsonContext::new();
    curve(&mut context);
    context.set_scale(10.0).unwrap();
    curve(&mut context);

    let lengths: Vec<usize> = context.subpaths().map(|p| p.len()).collect();
    assert_eq!(context.scale(), 10.0);
    assert!(lengths[1] > lengths[0]);

    let mut coarse = GeoJsonContext::new();
    curve(&mut coarse);
    assert_eq!(coarse.subpaths().next().unwrap().len(), lengths[0]);
}

#[test]
fn open_and_closed_rect() {
    let mut context = GeoJsonContext::new();
    context.rect(1.0, 2.0, 3.0, 4.0).unwrap();

    assert_eq!(
        context.result(),
        Some(line_string(&[[1.0, 2.0], [4.0, 2.0], [4.0, 6.0], [1.0, 6.0]]))
    );
    assert_eq!(context.current_position(), Some(point(1.0, 6.0)));

    let mut context = GeoJsonContext::new().with_rect_mode(RectMode::Closed);
    context.rect(1.0, 2.0, 3.0, 4.0).unwrap();

    assert_eq!(
        context.result(),
        Some(Geometry::Polygon {
            coordinates: vec![vec![
                [1.0, 2.0],
                [4.0, 2.0],
                [4.0, 6.0],
                [1.0, 6.0],
                [1.0, 2.0]
            ]],
        })
    );
    assert_eq!(context.current_position(), Some(point(1.0, 2.0)));
}

#[test]
fn rect_starts_a_new_subpath() {
    let mut context = GeoJsonContext::new();
    context.move_to(-1.0, -1.0).unwrap();
    context.line_to(-2.0, -1.0).unwrap();
    context.rect(0.0, 0.0, 1.0, 1.0).unwrap();
    context.line_to(0.0, 0.0).unwrap();

    let subpaths: Vec<&[Point]> = context.subpaths().collect();
    assert_eq!(subpaths.len(), 2);
    assert_eq!(subpaths[0].len(), 2);
    assert_eq!(subpaths[1].len(), 5);
    assert_eq!(context.uniformity(), Some(Uniformity::Uniform(SubPathKind::LineString)));
}

#[test]
fn operations_require_a_subpath() {
    let mut context = GeoJsonContext::new();

    assert_eq!(
        context.line_to(1.0, 1.0),
        Err(ContextError::InvalidState {
            operation: "line_to"
        })
    );
    assert_eq!(
        context.quadratic_curve_to(1.0, 1.0, 2.0, 2.0),
        Err(ContextError::InvalidState {
            operation: "quadratic_curve_to"
        })
    );
    assert_eq!(
        context.bezier_curve_to(1.0, 1.0, 2.0, 2.0, 3.0, 3.0),
        Err(ContextError::InvalidState {
            operation: "bezier_curve_to"
        })
    );
    assert_eq!(
        context.arc(0.0, 0.0, 1.0, 0.0, 2.0 * PI, false),
        Err(ContextError::InvalidState { operation: "arc" })
    );

    // Closing without a sub-path is a no-op.
    assert_eq!(context.close_path(), Ok(()));
    assert_eq!(context.result(), None);
}

#[test]
fn non_finite_coordinates_are_rejected() {
    let mut context = GeoJsonContext::new();
    assert!(matches!(
        context.move_to(f64::NAN, 0.0),
        Err(ContextError::NonFiniteCoordinate {
            operation: "move_to",
            ..
        })
    ));
    assert!(context.is_empty());

    context.move_to(0.0, 0.0).unwrap();
    assert!(matches!(
        context.line_to(0.0, f64::INFINITY),
        Err(ContextError::NonFiniteCoordinate { .. })
    ));
    assert!(matches!(
        context.bezier_curve_to(1.0, f64::NAN, 2.0, 2.0, 3.0, 3.0),
        Err(ContextError::NonFiniteCoordinate { .. })
    ));
    assert!(matches!(
        context.rect(0.0, 0.0, f64::INFINITY, 1.0),
        Err(ContextError::NonFiniteCoordinate {
            operation: "rect",
            ..
        })
    ));

    // Rejected calls leave the context untouched.
    assert_eq!(context.result(), Some(line_string(&[[0.0, 0.0]])));
}

#[test]
fn invalid_configuration() {
    use crate::geom::OptionsError;

    assert_eq!(
        GeoJsonContext::with_scale(0.0).err(),
        Some(ContextError::Options(OptionsError::Scale(0.0)))
    );
    assert_eq!(
        GeoJsonContext::with_scale(-2.0).err(),
        Some(ContextError::Options(OptionsError::Scale(-2.0)))
    );
    assert_eq!(
        GeoJsonContext::with_options(1.0, FlatteningOptions::path_epsilon(0.0)).err(),
        Some(ContextError::Options(OptionsError::PathEpsilon(0.0)))
    );

    let mut context = GeoJsonContext::with_scale(2.0).unwrap();
    assert!(context.set_scale(f64::NAN).is_err());
    assert_eq!(context.scale(), 2.0);
}

#[test]
fn clear_keeps_the_configuration() {
    let options = FlatteningOptions::DEFAULT.with_recursion_limit(4);
    let mut context = GeoJsonContext::with_options(3.0, options)
        .unwrap()
        .with_rect_mode(RectMode::Closed);
    context.rect(0.0, 0.0, 1.0, 1.0).unwrap();
    context.clear();

    assert_eq!(context.result(), None);
    assert_eq!(context.scale(), 3.0);
    assert_eq!(context.rect_mode(), RectMode::Closed);
    assert_eq!(context.flattening_options().recursion_limit, 4);
    assert_eq!(
        context.line_to(1.0, 1.0),
        Err(ContextError::InvalidState {
            operation: "line_to"
        })
    );
}

#[test]
fn result_does_not_alias_the_context() {
    let mut context = GeoJsonContext::new();
    context.move_to(0.0, 0.0).unwrap();
    context.line_to(1.0, 0.0).unwrap();

    let before = context.result();
    context.line_to(2.0, 0.0).unwrap();

    assert_eq!(before, Some(line_string(&[[0.0, 0.0], [1.0, 0.0]])));
    assert_eq!(context.result().map(|g| g.num_positions()), Some(3));
}

#[test]
fn add_polygon() {
    let mut context = GeoJsonContext::new();
    context
        .add_polygon(&[point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0)], true)
        .unwrap();
    context.add_polygon(&[], true).unwrap();

    assert_eq!(context.subpath_count(), 1);
    assert_eq!(context.kinds(), &[SubPathKind::Polygon]);
}
