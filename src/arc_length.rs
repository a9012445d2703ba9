//! Arc length of curve segments, computed with fixed order Gauss-Legendre
//! quadrature over the speed function `|C'(t)|`.

use crate::scalar::Scalar;
use crate::segment::Segment;

/// Nodes and weights of the order 24 Gauss-Legendre rule on `[-1, 1]`.
///
/// 24 points integrate the speed of well behaved cubic curves to near
/// machine precision.
const GAUSS_LEGENDRE: [(f64, f64); 24] = [
    (0.9951872199970213, 0.012341229799987334),
    (0.9747285559713095, 0.028531388628933813),
    (0.9382745520027328, 0.044277438817419676),
    (0.8864155270044011, 0.05929858491543666),
    (0.820001985973903, 0.07334648141108027),
    (0.7401241915785544, 0.08619016153195322),
    (0.6480936519369755, 0.0976186521041139),
    (0.5454214713888396, 0.10744427011596562),
    (0.4337935076260451, 0.11550566805372561),
    (0.3150426796961634, 0.12167047292780335),
    (0.1911188674736163, 0.12583745634682839),
    (0.06405689286260563, 0.12793819534675224),
    (-0.06405689286260563, 0.12793819534675224),
    (-0.1911188674736163, 0.12583745634682839),
    (-0.3150426796961634, 0.12167047292780335),
    (-0.4337935076260451, 0.11550566805372561),
    (-0.5454214713888396, 0.10744427011596562),
    (-0.6480936519369755, 0.0976186521041139),
    (-0.7401241915785544, 0.08619016153195322),
    (-0.820001985973903, 0.07334648141108027),
    (-0.8864155270044011, 0.05929858491543666),
    (-0.9382745520027328, 0.044277438817419676),
    (-0.9747285559713095, 0.028531388628933813),
    (-0.9951872199970213, 0.012341229799987334),
];

/// Length of a curve segment over the full `[0, 1]` parameter range.
pub fn segment_length<S, T>(curve: &T) -> S
where
    S: Scalar,
    T: Segment<Scalar = S>,
{
    // Map the [-1, 1] quadrature domain onto [0, 1].
    let half = S::HALF;
    let mut sum = S::ZERO;
    for &(x, w) in &GAUSS_LEGENDRE {
        let t = half * S::from_f64(x) + half;
        sum += S::from_f64(w) * curve.derivative(t).length();
    }

    sum * half
}

#[cfg(test)]
use crate::{point, CubicBezierSegment, LineSegment};

#[test]
fn quadrature_weights() {
    // weights of a valid rule sum to the length of the domain
    let mut sum = 0.0f64;
    for &(_, w) in &GAUSS_LEGENDRE {
        sum += w;
    }
    assert!((sum - 2.0).abs() < 1e-12);
}

#[test]
fn straight_line_length() {
    let line = LineSegment {
        from: point(0.0f64, 0.0),
        to: point(75.0, 75.0),
    };
    let curve = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(25.0, 25.0),
        ctrl2: point(50.0, 50.0),
        to: point(75.0, 75.0),
    };

    let expected = line.length();
    assert!((segment_length::<f64, _>(&curve) - expected).abs() < 1e-9);
}

#[test]
fn arch_length() {
    // the speed of this curve is a polynomial in t, which the quadrature
    // integrates exactly
    let curve = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(0.0, 1.0),
        ctrl2: point(1.0, 1.0),
        to: point(1.0, 0.0),
    };

    assert!((curve.length() - 2.0).abs() < 1e-10);
}
