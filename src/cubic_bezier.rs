use crate::bounding_box::BoundingBox;
use crate::scalar::Scalar;
use crate::segment::Segment;
use crate::utils::{
    abc_ratio, cubic_polynomial_roots, linear_bernstein_root, min_max, projection_ratio,
    quadratic_bernstein_roots,
};
use crate::{point, vector, LineSegment, Point, QuadraticBezierSegment, Vector};
use arrayvec::ArrayVec;
use num_traits::Float;

use core::ops::Range;

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
    ///
    /// Values of t outside of the [0, 1] range extrapolate the curve.
    pub fn sample(&self, t: S) -> Point<S> {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from * one_t3
            + self.ctrl1.to_vector() * S::THREE * one_t2 * t
            + self.ctrl2.to_vector() * S::THREE * one_t * t2
            + self.to.to_vector() * t3
    }

    /// Sample the x coordinate of the curve at t (expecting t between 0 and 1).
    pub fn x(&self, t: S) -> S {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from.x * one_t3
            + self.ctrl1.x * S::THREE * one_t2 * t
            + self.ctrl2.x * S::THREE * one_t * t2
            + self.to.x * t3
    }

    /// Sample the y coordinate of the curve at t (expecting t between 0 and 1).
    pub fn y(&self, t: S) -> S {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from.y * one_t3
            + self.ctrl1.y * S::THREE * one_t2 * t
            + self.ctrl2.y * S::THREE * one_t * t2
            + self.to.y * t3
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
        let one_t = S::ONE - t;

        ((self.ctrl1 - self.from) * one_t * one_t
            + (self.ctrl2 - self.ctrl1) * S::TWO * one_t * t
            + (self.to - self.ctrl2) * t * t)
            * S::THREE
    }

    /// Sample the x coordinate of the curve's derivative at t (expecting t between 0 and 1).
    pub fn dx(&self, t: S) -> S {
        self.derivative(t).x
    }

    /// Sample the y coordinate of the curve's derivative at t (expecting t between 0 and 1).
    pub fn dy(&self, t: S) -> S {
        self.derivative(t).y
    }

    /// Sample the curve's second derivative at t (expecting t between 0 and 1).
    pub fn second_derivative(&self, t: S) -> Vector<S> {
        let v0 = self.from.to_vector() - self.ctrl1.to_vector() * S::TWO + self.ctrl2.to_vector();
        let v1 = self.ctrl1.to_vector() - self.ctrl2.to_vector() * S::TWO + self.to.to_vector();

        v0.lerp(v1, t) * S::SIX
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
        let (t0, t1) = (t_range.start, t_range.end);
        let from = self.sample(t0);
        let to = self.sample(t1);

        // The control points of the derivative curve, scaled down by 3.
        let d = QuadraticBezierSegment {
            from: (self.ctrl1 - self.from).to_point(),
            ctrl: (self.ctrl2 - self.ctrl1).to_point(),
            to: (self.to - self.ctrl2).to_point(),
        };

        let dt = t1 - t0;
        let ctrl1 = from + d.sample(t0).to_vector() * dt;
        let ctrl2 = to - d.sample(t1).to_vector() * dt;

        CubicBezierSegment {
            from,
            ctrl1,
            ctrl2,
            to,
        }
    }

    /// Split this curve into two sub-curves.
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

    /// Return the curve before the split point.
    pub fn before_split(&self, t: S) -> CubicBezierSegment<S> {
        self.split(t).0
    }

    /// Return the curve after the split point.
    pub fn after_split(&self, t: S) -> CubicBezierSegment<S> {
        self.split(t).1
    }

    #[inline]
    pub fn baseline(&self) -> LineSegment<S> {
        LineSegment {
            from: self.from,
            to: self.to,
        }
    }

    /// Parameters of the curve's local extrema, in increasing order.
    ///
    /// Includes the roots of both derivatives, which is what subdividing
    /// into monotonic, well behaved arcs calls for.
    pub fn extrema(&self) -> ArrayVec<S, 6> {
        let mut result: ArrayVec<S, 6> = ArrayVec::new();

        let d0 = self.ctrl1 - self.from;
        let d1 = self.ctrl2 - self.ctrl1;
        let d2 = self.to - self.ctrl2;

        let push = |t: S, result: &mut ArrayVec<S, 6>| {
            if t >= S::ZERO && t <= S::ONE && !result.contains(&t) && !result.is_full() {
                result.push(t);
            }
        };

        for t in quadratic_bernstein_roots(d0.x, d1.x, d2.x) {
            push(t, &mut result);
        }
        for t in quadratic_bernstein_roots(d0.y, d1.y, d2.y) {
            push(t, &mut result);
        }
        if let Some(t) = linear_bernstein_root(d1.x - d0.x, d2.x - d1.x) {
            push(t, &mut result);
        }
        if let Some(t) = linear_bernstein_root(d1.y - d0.y, d2.y - d1.y) {
            push(t, &mut result);
        }

        result.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));

        result
    }

    /// Parameters of the curve's inflection points (where the curvature
    /// changes sign), in the order the underlying roots are found.
    pub fn inflections(&self) -> ArrayVec<S, 2> {
        let mut result = ArrayVec::new();

        // Align the curve on its baseline so that inflections only depend
        // on the y components.
        let angle = S::atan2(self.to.y - self.from.y, self.to.x - self.from.x);
        let (sin, cos) = Float::sin_cos(angle);
        let align = |p: Point<S>| -> Point<S> {
            let v = p - self.from;
            point(v.x * cos + v.y * sin, v.y * cos - v.x * sin)
        };

        let p1 = align(self.ctrl1);
        let p2 = align(self.ctrl2);
        let p3 = align(self.to);

        let a = p2.x * p1.y;
        let b = p3.x * p1.y;
        let c = p1.x * p2.y;
        let d = p3.x * p2.y;

        let c18 = S::value(18.0);
        let v1 = c18 * (-S::THREE * a + S::TWO * b + S::THREE * c - d);
        let v2 = c18 * (S::THREE * a - b - S::THREE * c);
        let v3 = c18 * (c - a);

        let push = |t: S, result: &mut ArrayVec<S, 2>| {
            if t >= S::ZERO && t <= S::ONE {
                result.push(t);
            }
        };

        if S::abs(v1) < S::EPSILON {
            if S::abs(v2) >= S::EPSILON {
                push(-v3 / v2, &mut result);
            }
            return result;
        }

        let delta = v2 * v2 - S::FOUR * v1 * v3;
        if delta < S::ZERO {
            return result;
        }

        let sq = S::sqrt(delta);
        push((sq - v2) / (S::TWO * v1), &mut result);
        push(-(v2 + sq) / (S::TWO * v1), &mut result);

        result
    }

    /// Returns a range of x values that contains the curve.
    pub fn bounding_range_x(&self) -> (S, S) {
        let (mut min, mut max) = min_max(self.from.x, self.to.x);

        let roots = quadratic_bernstein_roots(
            self.ctrl1.x - self.from.x,
            self.ctrl2.x - self.ctrl1.x,
            self.to.x - self.ctrl2.x,
        );
        for t in roots {
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

        let roots = quadratic_bernstein_roots(
            self.ctrl1.y - self.from.y,
            self.ctrl2.y - self.ctrl1.y,
            self.to.y - self.ctrl2.y,
        );
        for t in roots {
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
    pub fn line_segment_intersections_t(&self, segment: &LineSegment<S>) -> ArrayVec<(S, S), 3> {
        let mut result = ArrayVec::new();

        let v = segment.to_vector();
        if v.square_length() == S::ZERO {
            return result;
        }

        // Power basis coefficients of this curve.
        let e3 = self.to.to_vector() - self.ctrl2.to_vector() * S::THREE
            + self.ctrl1.to_vector() * S::THREE
            - self.from.to_vector();
        let e2 = (self.ctrl2.to_vector() - self.ctrl1.to_vector() * S::TWO
            + self.from.to_vector())
            * S::THREE;
        let e1 = (self.ctrl1 - self.from) * S::THREE;
        let e0 = self.from - segment.from;

        let roots = cubic_polynomial_roots(e3.cross(v), e2.cross(v), e1.cross(v), e0.cross(v));

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
    ///
    /// The remaining degree of freedom is fixed by deriving the tangent
    /// length at `mid` from the distance between `mid` and the baseline
    /// projection point.
    pub fn from_points(from: Point<S>, mid: Point<S>, to: Point<S>, t: S) -> Self {
        let u = projection_ratio(t, 3);
        let c = from * u + to.to_vector() * (S::ONE - u);
        let ratio = abc_ratio(t, 3);
        let a = mid + (mid - c) / ratio;

        let d1 = (mid - c).length();
        let d2 = d1 * (S::ONE - t) / t;

        let l = (to - from).normalize();
        let e1 = mid - l * d1;
        let e2 = mid + l * d2;

        let v1 = a + (e1 - a) / (S::ONE - t);
        let v2 = a + (e2 - a) / t;

        let ctrl1 = from + (v1 - from) / t;
        let ctrl2 = to + (v2 - to) / (S::ONE - t);

        CubicBezierSegment {
            from,
            ctrl1,
            ctrl2,
            to,
        }
    }
}

impl<S: Scalar> Segment for CubicBezierSegment<S> {
    impl_segment!(S);
}

#[cfg(test)]
use euclid::approxeq::ApproxEq;

#[cfg(test)]
fn arch() -> CubicBezierSegment<f64> {
    CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(0.0, 1.0),
        ctrl2: point(1.0, 1.0),
        to: point(1.0, 0.0),
    }
}

#[test]
fn sample_endpoints() {
    let curve = arch();

    assert_eq!(curve.sample(0.0), curve.from);
    assert_eq!(curve.sample(1.0), curve.to);
    assert!(curve.sample(0.5).approx_eq(&point(0.5, 0.75)));
}

#[test]
fn derivative_and_normal() {
    let curve = arch();

    assert!(curve.derivative(0.0).approx_eq(&vector(0.0, 3.0)));
    assert!(curve.derivative(0.5).approx_eq(&vector(1.5, 0.0)));
    assert!(curve.derivative(1.0).approx_eq(&vector(0.0, -3.0)));

    assert!(curve.normal(0.0).approx_eq(&vector(-1.0, 0.0)));
    assert!(curve.normal(0.5).approx_eq(&vector(0.0, 1.0)));
    assert!(curve.normal(1.0).approx_eq(&vector(1.0, 0.0)));
}

#[test]
fn bounding_box_from_extrema() {
    let curve = arch();
    let bbox = curve.bounding_box();

    assert_eq!(bbox.x.min, 0.0);
    assert_eq!(bbox.x.max, 1.0);
    assert_eq!(bbox.y.min, 0.0);
    assert!((bbox.y.max - 0.75).abs() < 1e-12);
}

#[test]
fn split_range_matches_split() {
    let curve = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(10.0, 20.0),
        ctrl2: point(25.0, -5.0),
        to: point(40.0, 15.0),
    };

    let t = 0.63;
    let (left, right) = curve.split(t);

    for i in 0..=10 {
        let u = i as f64 / 10.0;
        assert!(left
            .sample(u)
            .approx_eq(&curve.split_range(0.0..t).sample(u)));
        assert!(right
            .sample(u)
            .approx_eq(&curve.split_range(t..1.0).sample(u)));
    }
}

#[test]
fn inflection_points() {
    let curve = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(1.0, 0.25),
        ctrl2: point(0.0, 1.0),
        to: point(1.0, 0.0),
    };

    let inflections = curve.inflections();
    assert_eq!(inflections.len(), 2);
    assert!((inflections[0] - 0.8).abs() < 1e-9);
    assert!((inflections[1] - 0.5).abs() < 1e-9);

    // the arch has no inflection
    assert!(arch().inflections().is_empty());
}

#[test]
fn line_segment_intersections() {
    let curve = arch();
    let segment = LineSegment {
        from: point(-1.0f64, 0.5),
        to: point(2.0, 0.5),
    };

    let intersections = curve.line_segment_intersections_t(&segment);
    assert_eq!(intersections.len(), 2);

    // y(t) = 3t(1 - t) so the crossings are at t = (3 ± √3) / 6
    let sqrt3 = 3.0f64.sqrt();
    let mut roots: Vec<f64> = intersections.iter().map(|(t, _)| *t).collect();
    roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert!((roots[0] - (3.0 - sqrt3) / 6.0).abs() < 1e-9);
    assert!((roots[1] - (3.0 + sqrt3) / 6.0).abs() < 1e-9);
}

#[test]
fn fit_through_points() {
    let from = point(0.0f64, 0.0);
    let mid = point(200.0 / 3.0, 100.0 / 3.0);
    let to = point(100.0, 0.0);

    for t in [0.25, 0.5] {
        let curve = CubicBezierSegment::from_points(from, mid, to, t);
        assert!(curve.sample(t).approx_eq(&mid));
        assert_eq!(curve.from, from);
        assert_eq!(curve.to, to);
    }
}
