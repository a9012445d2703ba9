use crate::bounding_box::BoundingBox;
use crate::scalar::Scalar;
use crate::segment::Segment;
use crate::utils::{abc_ratio, cubic_polynomial_roots, linear_bernstein_root, min_max, projection_ratio};
use crate::{vector, LineSegment, Point, Vector};
use arrayvec::ArrayVec;

use core::ops::Range;

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
    ///
    /// Values of t outside of the [0, 1] range extrapolate the curve.
    pub fn sample(&self, t: S) -> Point<S> {
        let t2 = t * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;

        self.from * one_t2 + self.ctrl.to_vector() * S::TWO * one_t * t + self.to.to_vector() * t2
    }

    /// Sample the x coordinate of the curve at t (expecting t between 0 and 1).
    pub fn x(&self, t: S) -> S {
        let t2 = t * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;

        self.from.x * one_t2 + self.ctrl.x * S::TWO * one_t * t + self.to.x * t2
    }

    /// Sample the y coordinate of the curve at t (expecting t between 0 and 1).
    pub fn y(&self, t: S) -> S {
        let t2 = t * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;

        self.from.y * one_t2 + self.ctrl.y * S::TWO * one_t * t + self.to.y * t2
    }

    #[inline]
    pub fn from(&self) -> Point<S> {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Point<S> {
        self.to
    }

    /// Sample the curve's derivative at t (expecting t between 0 and 1).
    pub fn derivative(&self, t: S) -> Vector<S> {
        ((self.ctrl - self.from) * (S::ONE - t) + (self.to - self.ctrl) * t) * S::TWO
    }

    /// Sample the x coordinate of the curve's derivative at t (expecting t between 0 and 1).
    pub fn dx(&self, t: S) -> S {
        self.derivative(t).x
    }

    /// Sample the y coordinate of the curve's derivative at t (expecting t between 0 and 1).
    pub fn dy(&self, t: S) -> S {
        self.derivative(t).y
    }

    /// Sample the curve's normal at t (expecting t between 0 and 1).
    ///
    /// The normal is the derivative rotated by 90° counter-clockwise and
    /// normalized. If the derivative is zero at t, the returned vector
    /// has NaN components.
    pub fn normal(&self, t: S) -> Vector<S> {
        let d = self.derivative(t);
        let len = d.length();

        vector(-d.y / len, d.x / len)
    }

    /// Return the sub-curve inside a given range of t.
    ///
    /// This is equivalent to splitting at the range's end points.
    pub fn split_range(&self, t_range: Range<S>) -> Self {
        let t0 = t_range.start;
        let t1 = t_range.end;

        let from = self.sample(t0);
        let to = self.sample(t1);
        let ctrl = from + (self.ctrl - self.from).lerp(self.to - self.ctrl, t0) * (t1 - t0);

        QuadraticBezierSegment { from, ctrl, to }
    }

    /// Split this curve into two sub-curves.
    pub fn split(&self, t: S) -> (QuadraticBezierSegment<S>, QuadraticBezierSegment<S>) {
        let split_point = self.sample(t);

        (
            QuadraticBezierSegment {
                from: self.from,
                ctrl: self.from.lerp(self.ctrl, t),
                to: split_point,
            },
            QuadraticBezierSegment {
                from: split_point,
                ctrl: self.ctrl.lerp(self.to, t),
                to: self.to,
            },
        )
    }

    /// Return the curve before the split point.
    pub fn before_split(&self, t: S) -> QuadraticBezierSegment<S> {
        QuadraticBezierSegment {
            from: self.from,
            ctrl: self.from.lerp(self.ctrl, t),
            to: self.sample(t),
        }
    }

    /// Return the curve after the split point.
    pub fn after_split(&self, t: S) -> QuadraticBezierSegment<S> {
        QuadraticBezierSegment {
            from: self.sample(t),
            ctrl: self.ctrl.lerp(self.to, t),
            to: self.to,
        }
    }

    #[inline]
    pub fn baseline(&self) -> LineSegment<S> {
        LineSegment {
            from: self.from,
            to: self.to,
        }
    }

    /// Parameters of the curve's local axis-aligned extrema, in increasing
    /// order.
    pub fn extrema(&self) -> ArrayVec<S, 2> {
        let mut result = ArrayVec::new();

        let d0 = self.ctrl - self.from;
        let d1 = self.to - self.ctrl;

        for root in [
            linear_bernstein_root(d0.x, d1.x),
            linear_bernstein_root(d0.y, d1.y),
        ] {
            if let Some(t) = root {
                if t >= S::ZERO && t <= S::ONE && !result.contains(&t) {
                    result.push(t);
                }
            }
        }

        if result.len() == 2 && result[0] > result[1] {
            result.swap(0, 1);
        }

        result
    }

    /// Returns a range of x values that contains the curve.
    pub fn bounding_range_x(&self) -> (S, S) {
        let (mut min, mut max) = min_max(self.from.x, self.to.x);

        if let Some(t) = linear_bernstein_root(self.ctrl.x - self.from.x, self.to.x - self.ctrl.x) {
            if t > S::ZERO && t < S::ONE {
                let x = self.x(t);
                min = S::min(min, x);
                max = S::max(max, x);
            }
        }

        (min, max)
    }

    /// Returns a range of y values that contains the curve.
    pub fn bounding_range_y(&self) -> (S, S) {
        let (mut min, mut max) = min_max(self.from.y, self.to.y);

        if let Some(t) = linear_bernstein_root(self.ctrl.y - self.from.y, self.to.y - self.ctrl.y) {
            if t > S::ZERO && t < S::ONE {
                let y = self.y(t);
                min = S::min(min, y);
                max = S::max(max, y);
            }
        }

        (min, max)
    }

    /// Returns the smallest bounding box containing the curve, computed
    /// from the curve extrema rather than the control polygon.
    pub fn bounding_box(&self) -> BoundingBox<S> {
        BoundingBox::new(self.bounding_range_x(), self.bounding_range_y())
    }

    /// Computes the length of this segment.
    #[inline]
    pub fn length(&self) -> S {
        crate::arc_length::segment_length(self)
    }

    /// Computes the intersections (if any) between this segment and a line
    /// segment.
    ///
    /// The result is provided in the form of the `t` parameters of each
    /// intersection point along this curve and along the line segment.
    pub fn line_segment_intersections_t(&self, segment: &LineSegment<S>) -> ArrayVec<(S, S), 2> {
        let mut result = ArrayVec::new();

        let v = segment.to_vector();
        if v.square_length() == S::ZERO {
            return result;
        }

        // Power basis coefficients of this curve.
        let e2 = self.from.to_vector() - self.ctrl.to_vector() * S::TWO + self.to.to_vector();
        let e1 = (self.ctrl - self.from) * S::TWO;
        let e0 = self.from - segment.from;

        let roots = cubic_polynomial_roots(S::ZERO, e2.cross(v), e1.cross(v), e0.cross(v));

        for t in roots {
            if t < S::ZERO || t > S::ONE {
                continue;
            }
            let t2 = (self.sample(t) - segment.from).dot(v) / v.square_length();
            if t2 >= S::ZERO && t2 <= S::ONE && !result.is_full() {
                result.push((t, t2));
            }
        }

        result
    }

    /// Computes a curve passing through `mid` at parameter `t`, starting at
    /// `from` and ending at `to`.
    pub fn from_points(from: Point<S>, mid: Point<S>, to: Point<S>, t: S) -> Self {
        let u = projection_ratio(t, 2);
        let c = from * u + to.to_vector() * (S::ONE - u);
        let ratio = abc_ratio(t, 2);
        let ctrl = mid + (mid - c) / ratio;

        QuadraticBezierSegment { from, ctrl, to }
    }
}

impl<S: Scalar> Segment for QuadraticBezierSegment<S> {
    impl_segment!(S);
}

#[cfg(test)]
use crate::point;
#[cfg(test)]
use euclid::approxeq::ApproxEq;

#[test]
fn sample_endpoints() {
    let curve = QuadraticBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl: point(1.0, 1.0),
        to: point(2.0, 0.0),
    };

    assert_eq!(curve.sample(0.0), curve.from);
    assert_eq!(curve.sample(1.0), curve.to);
    assert!(curve.sample(0.5).approx_eq(&point(1.0, 0.5)));
}

#[test]
fn split_matches_sample() {
    let curve = QuadraticBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl: point(1.0, 2.0),
        to: point(3.0, 1.0),
    };

    let t = 0.375;
    let (left, right) = curve.split(t);
    let split_point = curve.sample(t);

    assert!(left.to.approx_eq(&split_point));
    assert!(right.from.approx_eq(&split_point));
    assert!(left.sample(1.0).approx_eq(&right.sample(0.0)));
}

#[test]
fn extrema_and_bounding_box() {
    let curve = QuadraticBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl: point(1.0, 1.0),
        to: point(2.0, 0.0),
    };

    let extrema = curve.extrema();
    assert_eq!(extrema.len(), 1);
    assert!((extrema[0] - 0.5).abs() < 1e-12);

    let bbox = curve.bounding_box();
    assert_eq!(bbox.x.min, 0.0);
    assert_eq!(bbox.x.max, 2.0);
    assert_eq!(bbox.y.min, 0.0);
    assert_eq!(bbox.y.max, 0.5);
    assert_eq!(bbox.y.mid, 0.25);
}

#[test]
fn line_segment_intersections() {
    let curve = QuadraticBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl: point(1.0, 1.0),
        to: point(2.0, 0.0),
    };
    let segment = LineSegment {
        from: point(0.0f64, 0.25),
        to: point(2.0, 0.25),
    };

    let intersections = curve.line_segment_intersections_t(&segment);
    assert_eq!(intersections.len(), 2);
    for (t, _) in intersections {
        assert!((curve.y(t) - 0.25).abs() < 1e-9);
    }
}

#[test]
fn fit_through_points() {
    let curve =
        QuadraticBezierSegment::from_points(point(0.0f64, 0.0), point(1.5, 1.5), point(3.0, 0.0), 0.5);

    assert!(curve.sample(0.5).approx_eq(&point(1.5, 1.5)));
}
