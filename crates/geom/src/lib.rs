#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::many_single_char_names)]

//! Bézier segments and their conversion into polylines.
//!
//! This crate is reexported in `canvas_geojson`.
//!
//! # Flattening
//!
//! Flattening is the action of approximating a curve with a succession of line segments.
//!
//! The flattener in this crate works by recursive midpoint (de Casteljau) subdivision:
//! the control polygon is split in two halves at `t = 0.5` until each half is close
//! enough to its chord, or until a hard recursion ceiling is reached.
//!
//! The distance threshold is `path_epsilon / scale`, where `scale` is the zoom factor
//! of the drawing surface. The larger the scale, the more precise the approximation
//! and the more points are generated.
//!
//! ```
//! use canvas_geojson_geom::{point, CubicBezierSegment, CurveFlattener};
//!
//! let flattener = CurveFlattener::<f64>::default();
//! let curve = CubicBezierSegment {
//!     from: point(0.0, 0.0),
//!     ctrl1: point(10.0, 20.0),
//!     ctrl2: point(30.0, 20.0),
//!     to: point(40.0, 0.0),
//! };
//!
//! let points = flattener.flatten_cubic(&curve, 1.0)?;
//! assert_eq!(points.first(), Some(&curve.from));
//! assert_eq!(points.last(), Some(&curve.to));
//! # Ok::<(), canvas_geojson_geom::OptionsError>(())
//! ```

// Reexport dependencies.
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod cubic_bezier;
mod error;
pub mod flatten;
pub mod quadratic_bezier;

#[doc(inline)]
pub use crate::cubic_bezier::CubicBezierSegment;
#[doc(inline)]
pub use crate::error::OptionsError;
#[doc(inline)]
pub use crate::flatten::{CurveFlattener, Flattening, FlatteningOptions};
#[doc(inline)]
pub use crate::quadratic_bezier::QuadraticBezierSegment;

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use num_traits::{Float, FloatConst, NumCast};

    use core::fmt::{Debug, Display};
    use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    pub trait Scalar:
        Float
        + NumCast
        + FloatConst
        + Sized
        + Display
        + Debug
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
    {
        const HALF: Self;
        const ZERO: Self;
        const ONE: Self;
        const TWO: Self;

        /// The single precision machine epsilon, used as the collinearity threshold
        /// regardless of the precision of the scalar type.
        const FLT_EPSILON: Self;

        /// Angle tolerances below this value disable the angle refinement.
        const CENTI: Self;

        /// Lossy conversion used when reporting values in errors.
        fn to_f64_lossy(self) -> f64 {
            self.to_f64().unwrap_or(f64::NAN)
        }
    }

    impl Scalar for f32 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;

        const FLT_EPSILON: Self = 1.19209290e-7;
        const CENTI: Self = 0.01;
    }

    impl Scalar for f64 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;

        const FLT_EPSILON: Self = 1.19209290e-7;
        const CENTI: Self = 0.01;
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}
