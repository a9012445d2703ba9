use crate::bounding_box::BoundingBox;
use crate::scalar::Scalar;
use crate::{CubicBezierSegment, LineSegment, Point, QuadraticBezierSegment, Vector};
use arrayvec::ArrayVec;
use thiserror::Error;

use core::fmt;
use core::ops::Range;

/// Error type of the fallible curve constructors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CurveError {
    #[error("expected 3 or 4 control points, got {0}")]
    InvalidPointCount(usize),
}

/// Either a quadratic or a cubic bézier segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum BezierSegment<S> {
    Quadratic(QuadraticBezierSegment<S>),
    Cubic(CubicBezierSegment<S>),
}

impl<S: Scalar> BezierSegment<S> {
    /// Builds a segment from a slice of 3 (quadratic) or 4 (cubic) control
    /// points.
    pub fn from_control_points(points: &[Point<S>]) -> Result<Self, CurveError> {
        match *points {
            [from, ctrl, to] => Ok(BezierSegment::Quadratic(QuadraticBezierSegment {
                from,
                ctrl,
                to,
            })),
            [from, ctrl1, ctrl2, to] => Ok(BezierSegment::Cubic(CubicBezierSegment {
                from,
                ctrl1,
                ctrl2,
                to,
            })),
            _ => Err(CurveError::InvalidPointCount(points.len())),
        }
    }

    /// The control points of the segment, in order.
    pub fn control_points(&self) -> ArrayVec<Point<S>, 4> {
        let mut points = ArrayVec::new();
        match self {
            BezierSegment::Quadratic(segment) => {
                points.push(segment.from);
                points.push(segment.ctrl);
                points.push(segment.to);
            }
            BezierSegment::Cubic(segment) => {
                points.push(segment.from);
                points.push(segment.ctrl1);
                points.push(segment.ctrl2);
                points.push(segment.to);
            }
        }

        points
    }

    #[inline]
    pub fn from(&self) -> Point<S> {
        match self {
            BezierSegment::Quadratic(segment) => segment.from,
            BezierSegment::Cubic(segment) => segment.from,
        }
    }

    #[inline]
    pub fn to(&self) -> Point<S> {
        match self {
            BezierSegment::Quadratic(segment) => segment.to,
            BezierSegment::Cubic(segment) => segment.to,
        }
    }

    /// Sample the curve at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        match self {
            BezierSegment::Quadratic(segment) => segment.sample(t),
            BezierSegment::Cubic(segment) => segment.sample(t),
        }
    }

    /// Sample the x coordinate of the curve at t (expecting t between 0 and 1).
    #[inline]
    pub fn x(&self, t: S) -> S {
        match self {
            BezierSegment::Quadratic(segment) => segment.x(t),
            BezierSegment::Cubic(segment) => segment.x(t),
        }
    }

    /// Sample the y coordinate of the curve at t (expecting t between 0 and 1).
    #[inline]
    pub fn y(&self, t: S) -> S {
        match self {
            BezierSegment::Quadratic(segment) => segment.y(t),
            BezierSegment::Cubic(segment) => segment.y(t),
        }
    }

    /// Sample the curve's derivative at t (expecting t between 0 and 1).
    #[inline]
    pub fn derivative(&self, t: S) -> Vector<S> {
        match self {
            BezierSegment::Quadratic(segment) => segment.derivative(t),
            BezierSegment::Cubic(segment) => segment.derivative(t),
        }
    }

    /// Sample the curve's normal at t (expecting t between 0 and 1).
    #[inline]
    pub fn normal(&self, t: S) -> Vector<S> {
        match self {
            BezierSegment::Quadratic(segment) => segment.normal(t),
            BezierSegment::Cubic(segment) => segment.normal(t),
        }
    }

    /// Split this curve into two sub-curves.
    pub fn split(&self, t: S) -> (BezierSegment<S>, BezierSegment<S>) {
        match self {
            BezierSegment::Quadratic(segment) => {
                let (a, b) = segment.split(t);
                (BezierSegment::Quadratic(a), BezierSegment::Quadratic(b))
            }
            BezierSegment::Cubic(segment) => {
                let (a, b) = segment.split(t);
                (BezierSegment::Cubic(a), BezierSegment::Cubic(b))
            }
        }
    }

    /// Return the curve before the split point.
    pub fn before_split(&self, t: S) -> BezierSegment<S> {
        match self {
            BezierSegment::Quadratic(segment) => BezierSegment::Quadratic(segment.before_split(t)),
            BezierSegment::Cubic(segment) => BezierSegment::Cubic(segment.before_split(t)),
        }
    }

    /// Return the curve after the split point.
    pub fn after_split(&self, t: S) -> BezierSegment<S> {
        match self {
            BezierSegment::Quadratic(segment) => BezierSegment::Quadratic(segment.after_split(t)),
            BezierSegment::Cubic(segment) => BezierSegment::Cubic(segment.after_split(t)),
        }
    }

    /// Return the curve inside a given range of t.
    pub fn split_range(&self, t_range: Range<S>) -> BezierSegment<S> {
        match self {
            BezierSegment::Quadratic(segment) => {
                BezierSegment::Quadratic(segment.split_range(t_range))
            }
            BezierSegment::Cubic(segment) => BezierSegment::Cubic(segment.split_range(t_range)),
        }
    }

    #[inline]
    pub fn baseline(&self) -> LineSegment<S> {
        match self {
            BezierSegment::Quadratic(segment) => segment.baseline(),
            BezierSegment::Cubic(segment) => segment.baseline(),
        }
    }

    /// Computes the length of this segment.
    #[inline]
    pub fn length(&self) -> S {
        match self {
            BezierSegment::Quadratic(segment) => segment.length(),
            BezierSegment::Cubic(segment) => segment.length(),
        }
    }

    /// Returns the smallest bounding box containing the curve, computed
    /// from the curve extrema rather than the control polygon.
    pub fn bounding_box(&self) -> BoundingBox<S> {
        match self {
            BezierSegment::Quadratic(segment) => segment.bounding_box(),
            BezierSegment::Cubic(segment) => segment.bounding_box(),
        }
    }

    /// Parameters of the curve's local extrema, in increasing order.
    pub fn extrema(&self) -> ArrayVec<S, 6> {
        match self {
            BezierSegment::Quadratic(segment) => segment.extrema().into_iter().collect(),
            BezierSegment::Cubic(segment) => segment.extrema(),
        }
    }

    /// Parameters of the curve's inflection points.
    ///
    /// Quadratic curves have no inflection.
    pub fn inflections(&self) -> ArrayVec<S, 2> {
        match self {
            BezierSegment::Quadratic(_) => ArrayVec::new(),
            BezierSegment::Cubic(segment) => segment.inflections(),
        }
    }

    /// Computes the intersections (if any) between this segment and a line
    /// segment.
    pub fn line_segment_intersections_t(&self, segment: &LineSegment<S>) -> ArrayVec<(S, S), 3> {
        match self {
            BezierSegment::Quadratic(curve) => curve
                .line_segment_intersections_t(segment)
                .into_iter()
                .collect(),
            BezierSegment::Cubic(curve) => curve.line_segment_intersections_t(segment),
        }
    }
}

impl<S> From<QuadraticBezierSegment<S>> for BezierSegment<S> {
    fn from(segment: QuadraticBezierSegment<S>) -> Self {
        BezierSegment::Quadratic(segment)
    }
}

impl<S> From<CubicBezierSegment<S>> for BezierSegment<S> {
    fn from(segment: CubicBezierSegment<S>) -> Self {
        BezierSegment::Cubic(segment)
    }
}

impl<S: Scalar> fmt::Display for BezierSegment<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut first = true;
        for p in self.control_points() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{}/{}", p.x, p.y)?;
        }

        f.write_str("]")
    }
}

#[cfg(test)]
use crate::point;

#[test]
fn from_control_points() {
    let quadratic =
        BezierSegment::from_control_points(&[point(0.0f64, 0.0), point(1.0, 1.0), point(2.0, 0.0)]);
    assert_eq!(
        quadratic,
        Ok(BezierSegment::Quadratic(QuadraticBezierSegment {
            from: point(0.0, 0.0),
            ctrl: point(1.0, 1.0),
            to: point(2.0, 0.0),
        }))
    );

    let too_few = BezierSegment::<f64>::from_control_points(&[point(0.0, 0.0), point(1.0, 1.0)]);
    assert_eq!(too_few, Err(CurveError::InvalidPointCount(2)));

    let too_many = BezierSegment::<f64>::from_control_points(&[point(0.0, 0.0); 5]);
    assert_eq!(too_many, Err(CurveError::InvalidPointCount(5)));
}

#[test]
fn display() {
    let curve = BezierSegment::Cubic(CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(0.0, 1.0),
        ctrl2: point(1.0, 1.0),
        to: point(1.0, 0.0),
    });

    assert_eq!(curve.to_string(), "[0/0, 0/1, 1/1, 1/0]");

    let curve = BezierSegment::Quadratic(QuadraticBezierSegment {
        from: point(0.5f32, 0.0),
        ctrl: point(1.0, 1.5),
        to: point(2.0, 0.0),
    });

    assert_eq!(curve.to_string(), "[0.5/0, 1/1.5, 2/0]");
}

#[test]
fn delegates_to_concrete_segments() {
    let cubic = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(0.0, 1.0),
        ctrl2: point(1.0, 1.0),
        to: point(1.0, 0.0),
    };
    let curve: BezierSegment<f64> = cubic.into();

    assert_eq!(curve.sample(0.3), cubic.sample(0.3));
    assert_eq!(curve.derivative(0.3), cubic.derivative(0.3));
    assert_eq!(curve.bounding_box(), cubic.bounding_box());
    assert_eq!(curve.length(), cubic.length());
    assert!(curve.inflections().is_empty());
}
