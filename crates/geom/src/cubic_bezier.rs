use crate::error::OptionsError;
use crate::flatten::CurveFlattener;
use crate::scalar::Scalar;
use crate::{Point, QuadraticBezierSegment};

/// A 2d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl1: Point<S>,
    pub ctrl2: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> CubicBezierSegment<S> {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let three = S::ONE + S::TWO;
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from * one_t3
            + self.ctrl1.to_vector() * three * one_t2 * t
            + self.ctrl2.to_vector() * three * one_t * t2
            + self.to.to_vector() * t3
    }

    /// Split this curve into two sub-curves at t using de Casteljau's construction.
    pub fn split(&self, t: S) -> (CubicBezierSegment<S>, CubicBezierSegment<S>) {
        let ctrl1a = self.from + (self.ctrl1 - self.from) * t;
        let ctrl2a = self.ctrl1 + (self.ctrl2 - self.ctrl1) * t;
        let ctrl1aa = ctrl1a + (ctrl2a - ctrl1a) * t;
        let ctrl3a = self.ctrl2 + (self.to - self.ctrl2) * t;
        let ctrl2aa = ctrl2a + (ctrl3a - ctrl2a) * t;
        let ctrl1aaa = ctrl1aa + (ctrl2aa - ctrl1aa) * t;

        (
            CubicBezierSegment {
                from: self.from,
                ctrl1: ctrl1a,
                ctrl2: ctrl1aa,
                to: ctrl1aaa,
            },
            CubicBezierSegment {
                from: ctrl1aaa,
                ctrl1: ctrl2aa,
                ctrl2: ctrl3a,
                to: self.to,
            },
        )
    }

    /// Returns the end points of the segment.
    #[inline]
    pub fn baseline(&self) -> (Point<S>, Point<S>) {
        (self.from, self.to)
    }

    /// Elevates a quadratic curve to the equivalent cubic curve.
    pub fn from_quadratic(curve: &QuadraticBezierSegment<S>) -> Self {
        let two_thirds = S::TWO / (S::ONE + S::TWO);
        CubicBezierSegment {
            from: curve.from,
            ctrl1: curve.from.lerp(curve.ctrl, two_thirds),
            ctrl2: curve.to.lerp(curve.ctrl, two_thirds),
            to: curve.to,
        }
    }

    /// Approximates the curve with a polyline, allocating a new vector.
    ///
    /// Shorthand for `flattener.flatten_cubic(self, scale)`.
    pub fn flattened(
        &self,
        flattener: &CurveFlattener<S>,
        scale: S,
    ) -> Result<Vec<Point<S>>, OptionsError> {
        flattener.flatten_cubic(self, scale)
    }
}

#[test]
fn split_matches_sample() {
    use crate::point;

    let curve = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(0.0, 4.0),
        ctrl2: point(4.0, 4.0),
        to: point(4.0, 0.0),
    };

    let (a, b) = curve.split(0.5);
    assert_eq!(a.from, curve.from);
    assert_eq!(a.to, curve.sample(0.5));
    assert_eq!(b.from, curve.sample(0.5));
    assert_eq!(b.to, curve.to);
    assert_eq!(a.to, point(2.0, 3.0));
}

#[test]
fn elevated_quadratic_samples_the_same_curve() {
    use crate::point;

    let quadratic = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(3.0, 3.0),
        to: point(6.0, 0.0),
    };
    let cubic = CubicBezierSegment::from_quadratic(&quadratic);

    for i in 0..=10 {
        let t = i as f64 / 10.0;
        let a = quadratic.sample(t);
        let b = cubic.sample(t);
        assert!((a - b).length() < 1e-9, "{:?} != {:?} at t = {}", a, b, t);
    }
}
