#![deny(bare_trait_objects)]

//! Record canvas-style path calls as GeoJSON geometry.
//!
//! This crate reexports the following crates:
//!
//! - [canvas_geojson_geom](https://docs.rs/canvas_geojson_geom/): bézier segments and the
//!   recursive curve flattener.
//! - [canvas_geojson_path](https://docs.rs/canvas_geojson_path/): the `CanvasPath` trait,
//!   the `GeoJsonContext` recorder and the `Geometry` output type.
//! - [canvas_geojson_extra](https://docs.rs/canvas_geojson_extra/) (with the `extra`
//!   feature): an SVG path data parser that drives any `CanvasPath`.
//!
//! # Flattening
//!
//! Curves are approximated with polylines by recursively splitting them in half until
//! both control points lie within a squared distance of `(path_epsilon / scale)²` of the
//! chord. The scale usually follows the zoom level of the drawing surface so that
//! flattening stays fine enough on screen while producing few points when zoomed out.
//!
//! # Examples
//!
//! ```
//! use canvas_geojson::path::{CanvasPath, GeoJsonContext, Geometry};
//!
//! let mut context = GeoJsonContext::with_scale(4.0)?;
//! context.move_to(0.0, 0.0)?;
//! context.bezier_curve_to(0.0, 10.0, 10.0, 10.0, 10.0, 0.0)?;
//! context.close_path()?;
//!
//! match context.result() {
//!     Some(Geometry::Polygon { coordinates }) => {
//!         let ring = &coordinates[0];
//!         assert_eq!(ring.first(), ring.last());
//!     }
//!     other => panic!("unexpected geometry {:?}", other),
//! }
//! # Ok::<(), canvas_geojson::path::ContextError>(())
//! ```

pub extern crate canvas_geojson_path;
#[cfg(feature = "extra")]
pub extern crate canvas_geojson_extra;

#[cfg(feature = "extra")]
pub use canvas_geojson_extra as extra;
pub use canvas_geojson_path as path;
pub use path::geom;

pub use path::math;
