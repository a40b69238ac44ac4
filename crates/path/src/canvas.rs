//! The drawing-surface interface.
//!
//! `CanvasPath` mirrors the path methods of an HTML canvas 2D context. Drivers (user
//! interfaces, the SVG path parser) issue calls in the order a canvas would receive
//! them; implementations decide what to record.

use crate::error::ContextError;
use crate::math::Point;

/// The path building methods of an imperative 2D drawing surface.
///
/// All coordinates are absolute.
pub trait CanvasPath {
    /// Starts a new sub-path at `(x, y)`.
    fn move_to(&mut self, x: f64, y: f64) -> Result<(), ContextError>;

    /// Adds a line segment to the current sub-path.
    ///
    /// A sub-path must be in progress when this method is called.
    fn line_to(&mut self, x: f64, y: f64) -> Result<(), ContextError>;

    /// Adds a quadratic bézier curve to the current sub-path.
    ///
    /// A sub-path must be in progress when this method is called.
    fn quadratic_curve_to(
        &mut self,
        cpx: f64,
        cpy: f64,
        x: f64,
        y: f64,
    ) -> Result<(), ContextError>;

    /// Adds a cubic bézier curve to the current sub-path.
    ///
    /// A sub-path must be in progress when this method is called.
    fn bezier_curve_to(
        &mut self,
        cp1x: f64,
        cp1y: f64,
        cp2x: f64,
        cp2y: f64,
        x: f64,
        y: f64,
    ) -> Result<(), ContextError>;

    /// Closes the current sub-path, if any.
    fn close_path(&mut self) -> Result<(), ContextError>;

    /// Adds a rectangle as a new sub-path.
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), ContextError>;

    /// Adds a circular arc centered at `(x, y)` to the current sub-path.
    ///
    /// Angles are in radians.
    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    ) -> Result<(), ContextError>;

    /// Adds a sub-path from a sequence of points, closing it if requested.
    ///
    /// Does nothing if `points` is empty.
    fn add_polygon(&mut self, points: &[Point], close: bool) -> Result<(), ContextError> {
        let (first, rest) = match points.split_first() {
            Some(split) => split,
            None => return Ok(()),
        };

        self.move_to(first.x, first.y)?;
        for p in rest {
            self.line_to(p.x, p.y)?;
        }

        if close {
            self.close_path()?;
        }

        Ok(())
    }
}
