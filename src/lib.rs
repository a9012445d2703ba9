#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::many_single_char_names)]

//! 2D quadratic and cubic bézier curve math on top of euclid.
//!
//! # Overview
//!
//! This crate implements the maths to work with quadratic and cubic bézier
//! curve segments:
//!
//! - evaluation of positions, derivatives and normals,
//! - axis-aligned bounding boxes computed from the curve extrema,
//! - inflection points,
//! - arc length (Gauss-Legendre quadrature),
//! - reduction of a curve into simple sub-segments,
//! - curve/curve intersections by recursive bounding box subdivision.
//!
//! The two curve degrees are exposed both as the concrete
//! [`QuadraticBezierSegment`] and [`CubicBezierSegment`] types and as the
//! [`BezierSegment`] enum which unifies them behind a single API.
//!
//! # Intersections
//!
//! Curve/curve intersection works by first reducing both operands into
//! simple segments (see [`BezierSegment::reduce`]), then recursively
//! subdividing overlapping segment pairs until the pieces are small enough
//! to be resolved as straight chords. The tuning constants of the search
//! are exposed in [`IntersectionConfig`].

// Reexport dependencies.
pub use arrayvec;
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

#[macro_use]
mod segment;
pub mod arc_length;
mod bezier;
mod bounding_box;
pub mod cubic_bezier;
mod intersections;
mod line;
pub mod quadratic_bezier;
mod reduce;
pub mod utils;

#[doc(inline)]
pub use crate::bezier::{BezierSegment, CurveError};
#[doc(inline)]
pub use crate::bounding_box::{AxisBounds, BoundingBox};
#[doc(inline)]
pub use crate::cubic_bezier::CubicBezierSegment;
#[doc(inline)]
pub use crate::intersections::IntersectionConfig;
#[doc(inline)]
pub use crate::line::LineSegment;
#[doc(inline)]
pub use crate::quadratic_bezier::QuadraticBezierSegment;
#[doc(inline)]
pub use crate::reduce::SubCurve;
#[doc(inline)]
pub use crate::segment::Segment;

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use euclid::Trig;
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
        + Trig
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
    {
        const HALF: Self;
        const ZERO: Self;
        const ONE: Self;
        const TWO: Self;
        const THREE: Self;
        const FOUR: Self;
        const FIVE: Self;
        const SIX: Self;
        const SEVEN: Self;
        const EIGHT: Self;
        const NINE: Self;
        const TEN: Self;

        const MIN: Self;
        const MAX: Self;

        const EPSILON: Self;

        fn value(v: f32) -> Self;
        fn from_f64(v: f64) -> Self;
    }

    impl Scalar for f32 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const FOUR: Self = 4.0;
        const FIVE: Self = 5.0;
        const SIX: Self = 6.0;
        const SEVEN: Self = 7.0;
        const EIGHT: Self = 8.0;
        const NINE: Self = 9.0;
        const TEN: Self = 10.0;

        const MIN: Self = f32::MIN;
        const MAX: Self = f32::MAX;

        const EPSILON: Self = 1e-4;

        #[inline]
        fn value(v: f32) -> Self {
            v
        }

        #[inline]
        fn from_f64(v: f64) -> Self {
            v as f32
        }
    }

    impl Scalar for f64 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const FOUR: Self = 4.0;
        const FIVE: Self = 5.0;
        const SIX: Self = 6.0;
        const SEVEN: Self = 7.0;
        const EIGHT: Self = 8.0;
        const NINE: Self = 9.0;
        const TEN: Self = 10.0;

        const MIN: Self = f64::MIN;
        const MAX: Self = f64::MAX;

        const EPSILON: Self = 1e-8;

        #[inline]
        fn value(v: f32) -> Self {
            v as f64
        }

        #[inline]
        fn from_f64(v: f64) -> Self {
            v
        }
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Alias for `euclid::default::Vector2D`.
pub use euclid::default::Vector2D as Vector;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector<S>(x: S, y: S) -> Vector<S> {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}
