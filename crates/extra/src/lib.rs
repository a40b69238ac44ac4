#![deny(bare_trait_objects)]

//! Drivers for the `canvas_geojson` path context.
//!
//! The [parser](parser/index.html) module replays SVG path data as
//! [CanvasPath](../canvas_geojson_path/canvas/trait.CanvasPath.html) calls.
//!
//! # Examples
//!
//! ```
//! use canvas_geojson_extra::parser::PathParser;
//! use canvas_geojson_path::{GeoJsonContext, Geometry};
//!
//! let mut context = GeoJsonContext::new();
//! PathParser::new().parse_str("M 0 0 L 1 0 L 1 1 Z", &mut context)?;
//!
//! assert_eq!(
//!     context.result(),
//!     Some(Geometry::Polygon {
//!         coordinates: vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
//!     })
//! );
//! # Ok::<(), canvas_geojson_extra::parser::ParseError>(())
//! ```

extern crate canvas_geojson_path as path;

pub use path::geom::euclid;
pub use path::math;

pub mod parser;
