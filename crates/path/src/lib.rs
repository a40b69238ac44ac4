#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! A path recorder with a drawing-surface interface that exports GeoJSON geometry.
//!
//! [GeoJsonContext](context/struct.GeoJsonContext.html) receives the same sequence of
//! calls a canvas-like path API would (`move_to`, `line_to`, curves, `close_path`,
//! `rect`, `arc`). Curves are flattened as they are recorded and each sub-path is
//! tagged as a point, a line string or a polygon. The accumulated sub-paths are turned
//! into a [Geometry](geometry/enum.Geometry.html) value on demand.
//!
//! This crate is reexported in `canvas_geojson`.
//!
//! # Examples
//!
//! ```
//! use canvas_geojson_path::{CanvasPath, GeoJsonContext, Geometry};
//!
//! let mut context = GeoJsonContext::new();
//! context.move_to(0.0, 0.0)?;
//! context.line_to(1.0, 0.0)?;
//! context.line_to(1.0, 1.0)?;
//! context.close_path()?;
//!
//! assert_eq!(
//!     context.result(),
//!     Some(Geometry::Polygon {
//!         coordinates: vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
//!     })
//! );
//! # Ok::<(), canvas_geojson_path::ContextError>(())
//! ```

pub use canvas_geojson_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod canvas;
pub mod context;
mod error;
pub mod geometry;
mod kind;

#[doc(inline)]
pub use crate::canvas::CanvasPath;
#[doc(inline)]
pub use crate::context::{GeoJsonContext, RectMode};
#[doc(inline)]
pub use crate::error::ContextError;
#[doc(inline)]
pub use crate::geometry::{Geometry, Position};
#[doc(inline)]
pub use crate::kind::{SubPathKind, Uniformity};

pub mod math {
    //! f64 versions of the geometric types used by the path context.

    use crate::geom::euclid;

    /// Alias for ```euclid::default::Point2D<f64>```.
    pub type Point = euclid::default::Point2D<f64>;

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }
}
