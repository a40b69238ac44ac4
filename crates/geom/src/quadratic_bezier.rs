use crate::error::OptionsError;
use crate::flatten::CurveFlattener;
use crate::scalar::Scalar;
use crate::Point;

/// A 2d curve segment defined by three points: the beginning of the segment, a control
/// point and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * from + 2 * (1 - t) * t * ctrl + t² * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct QuadraticBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> QuadraticBezierSegment<S> {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let t2 = t * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;

        self.from * one_t2 + self.ctrl.to_vector() * S::TWO * one_t * t + self.to.to_vector() * t2
    }

    /// Split this curve into two sub-curves at t using de Casteljau's construction.
    pub fn split(&self, t: S) -> (QuadraticBezierSegment<S>, QuadraticBezierSegment<S>) {
        let ctrl_a = self.from.lerp(self.ctrl, t);
        let ctrl_b = self.ctrl.lerp(self.to, t);
        let split_point = ctrl_a.lerp(ctrl_b, t);

        (
            QuadraticBezierSegment {
                from: self.from,
                ctrl: ctrl_a,
                to: split_point,
            },
            QuadraticBezierSegment {
                from: split_point,
                ctrl: ctrl_b,
                to: self.to,
            },
        )
    }

    /// Returns the end points of the segment.
    #[inline]
    pub fn baseline(&self) -> (Point<S>, Point<S>) {
        (self.from, self.to)
    }

    /// Approximates the curve with a polyline, allocating a new vector.
    ///
    /// Shorthand for `flattener.flatten_quadratic(self, scale)`.
    pub fn flattened(
        &self,
        flattener: &CurveFlattener<S>,
        scale: S,
    ) -> Result<Vec<Point<S>>, OptionsError> {
        flattener.flatten_quadratic(self, scale)
    }
}

#[test]
fn split_at_half() {
    use crate::point;

    let curve = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(1.0, 1.0),
        to: point(2.0, 0.0),
    };

    let (a, b) = curve.split(0.5);
    assert_eq!(a.from, curve.from);
    assert_eq!(a.ctrl, point(0.5, 0.5));
    assert_eq!(a.to, point(1.0, 0.5));
    assert_eq!(a.to, curve.sample(0.5));
    assert_eq!(b.from, point(1.0, 0.5));
    assert_eq!(b.ctrl, point(1.5, 0.5));
    assert_eq!(b.to, curve.to);
}

#[test]
fn sample_end_points() {
    use crate::point;

    let curve = QuadraticBezierSegment {
        from: point(1.0f32, 2.0),
        ctrl: point(3.0, 7.0),
        to: point(5.0, 2.0),
    };

    assert_eq!(curve.sample(0.0), curve.from);
    assert_eq!(curve.sample(1.0), curve.to);
}
