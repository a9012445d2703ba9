//! Reduction of a curve into "simple" segments.
//!
//! A segment is simple when its control points all sit on the same side of
//! the baseline and its end normals stay within 60° of each other. Simple
//! segments cannot self-overlap, which is what the intersection search
//! relies on.

use crate::bezier::BezierSegment;
use crate::scalar::Scalar;
use crate::utils::signed_angle;

/// Step of the greedy reduction pass, in the local parameter space of an
/// extrema-bounded piece.
const REDUCE_STEP: f32 = 0.01;

/// A sub-curve of a reduced segment: the re-parameterized control point
/// geometry together with the parameter range it covers on the original
/// curve.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SubCurve<S> {
    /// Parameter on the original curve at which this sub-curve starts.
    pub t0: S,
    /// Parameter on the original curve at which this sub-curve ends.
    pub t1: S,
    /// The sub-curve geometry, re-parameterized over [0, 1].
    pub curve: BezierSegment<S>,
}

impl<S: Scalar> SubCurve<S> {
    /// Maps a parameter local to this sub-curve back to the original
    /// curve's parameter space.
    #[inline]
    pub fn to_global(&self, t: S) -> S {
        self.t0 + (self.t1 - self.t0) * t
    }
}

impl<S: Scalar> BezierSegment<S> {
    /// Whether this curve is a "simple" segment.
    ///
    /// Both control points of a cubic must lie on the same side of the
    /// baseline, and the normals at the curve ends must not diverge by
    /// more than 60°. A degenerate curve with a zero derivative at either
    /// end is not simple.
    pub fn is_simple(&self) -> bool {
        if let BezierSegment::Cubic(curve) = self {
            let a1 = signed_angle(curve.from, curve.to, curve.ctrl1);
            let a2 = signed_angle(curve.from, curve.to, curve.ctrl2);
            if (a1 > S::ZERO && a2 < S::ZERO) || (a1 < S::ZERO && a2 > S::ZERO) {
                return false;
            }
        }

        let n1 = self.normal(S::ZERO);
        let n2 = self.normal(S::ONE);

        // NaN normals (zero derivative) clamp to -1 and are rejected.
        let cos = S::min(S::max(n1.dot(n2), -S::ONE), S::ONE);

        S::abs(S::acos(cos)) < S::FRAC_PI_3()
    }

    /// Splits the curve into an ordered sequence of simple segments
    /// covering the whole [0, 1] range.
    ///
    /// The curve is first cut at its extrema, then each piece is walked
    /// with a fixed-size parameter step, extending greedily as long as the
    /// candidate segment stays simple. When even the smallest step fails
    /// the simplicity test (for instance across an inflection located
    /// inside the step) the minimal segment is emitted as-is and the walk
    /// continues, so the result always partitions [0, 1]. Near-zero-width
    /// trailing ranges are merged into the previous segment of the same
    /// piece instead of being emitted as stubs.
    pub fn reduce(&self) -> Vec<SubCurve<S>> {
        let step = S::value(REDUCE_STEP);

        let mut cuts: Vec<S> = Vec::new();
        cuts.push(S::ZERO);
        for t in self.extrema() {
            if t > S::ZERO && t < S::ONE {
                cuts.push(t);
            }
        }
        cuts.push(S::ONE);

        let mut result = Vec::new();

        for i in 1..cuts.len() {
            let (g1, g2) = (cuts[i - 1], cuts[i]);
            let piece = self.split_range(g1..g2);
            let piece_start = result.len();

            // Walk the piece in its local parameter space.
            let mut t1 = S::ZERO;
            while t1 < S::ONE {
                let mut t2 = S::min(t1 + step, S::ONE);

                if piece.split_range(t1..t2).is_simple() {
                    while t2 < S::ONE {
                        let next = S::min(t2 + step, S::ONE);
                        if !piece.split_range(t1..next).is_simple() {
                            break;
                        }
                        t2 = next;
                    }
                }

                result.push(SubCurve {
                    t0: g1 + t1 * (g2 - g1),
                    t1: g1 + t2 * (g2 - g1),
                    curve: piece.split_range(t1..t2),
                });
                t1 = t2;
            }

            // Merge a near-zero trailing stub into the previous segment.
            if result.len() - piece_start > 1 {
                let last = result.len() - 1;
                if result[last].t1 - result[last].t0 < (g2 - g1) * step * S::HALF {
                    let t0 = result[last - 1].t0;
                    result.pop();
                    result[last - 1] = SubCurve {
                        t0,
                        t1: g2,
                        curve: self.split_range(t0..g2),
                    };
                }
            }
        }

        result
    }
}

#[cfg(test)]
use crate::{point, CubicBezierSegment, QuadraticBezierSegment};

#[cfg(test)]
fn difficult_curve() -> BezierSegment<f64> {
    BezierSegment::Cubic(CubicBezierSegment {
        from: point(20.294698715209961, 20.116849899291992),
        ctrl1: point(26.718513488769531, 28.516490936279297),
        ctrl2: point(33.345268249511719, 37.4105110168457),
        to: point(36.240531921386719, 37.736736297607422),
    })
}

#[test]
fn reduce_covers_the_whole_range() {
    let reduced = difficult_curve().reduce();

    assert_eq!(reduced[0].t0, 0.0);
    assert_eq!(reduced[reduced.len() - 1].t1, 1.0);
    for i in 1..reduced.len() {
        assert_eq!(reduced[i - 1].t1, reduced[i].t0);
    }
}

#[test]
fn reduce_difficult_curve() {
    let reduced = difficult_curve().reduce();

    assert_eq!(reduced.len(), 4);
    for segment in &reduced {
        assert!(segment.t1 > segment.t0);
    }
}

#[test]
fn sub_curves_map_back_to_the_original_parameter_space() {
    let curve = difficult_curve();

    for sub in curve.reduce() {
        for &local in &[0.0, 0.25, 0.5, 0.75, 1.0] {
            let global = sub.to_global(local);
            assert!(global >= sub.t0 && global <= sub.t1);

            let p = sub.curve.sample(local);
            let q = curve.sample(global);
            assert!((p - q).length() < 1e-6, "{:?} != {:?}", p, q);
        }
    }
}

#[test]
fn reduce_is_idempotent_on_simple_curves() {
    let cubic = BezierSegment::Cubic(CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(1.0, 0.4),
        ctrl2: point(2.0, 0.9),
        to: point(3.0, 1.5),
    });
    let reduced = cubic.reduce();
    assert_eq!(reduced.len(), 1);
    assert_eq!(reduced[0].t0, 0.0);
    assert_eq!(reduced[0].t1, 1.0);
    assert!(reduced[0].curve.is_simple());

    let quadratic = BezierSegment::Quadratic(QuadraticBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl: point(1.0, 0.5),
        to: point(2.0, 1.2),
    });
    let reduced = quadratic.reduce();
    assert_eq!(reduced.len(), 1);
    assert_eq!(reduced[0].t0, 0.0);
    assert_eq!(reduced[0].t1, 1.0);
}

#[test]
fn reduce_loop() {
    // a self-intersecting curve still partitions into simple segments
    let curve = BezierSegment::Cubic(CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(150.0, 50.0),
        ctrl2: point(-50.0, 50.0),
        to: point(100.0, 0.0),
    });

    let reduced = curve.reduce();
    assert_eq!(reduced.len(), 8);
}

#[test]
fn simple_segments() {
    let arch = BezierSegment::Cubic(CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(0.0, 1.0),
        ctrl2: point(1.0, 1.0),
        to: point(1.0, 0.0),
    });
    // end normals are 180° apart
    assert!(!arch.is_simple());

    let flat = BezierSegment::Cubic(CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(1.0, 0.1),
        ctrl2: point(2.0, 0.2),
        to: point(3.0, 0.4),
    });
    assert!(flat.is_simple());

    // control points on opposite sides of the baseline
    let twisted = BezierSegment::Cubic(CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(1.0, 1.0),
        ctrl2: point(2.0, -1.0),
        to: point(3.0, 0.0),
    });
    assert!(!twisted.is_simple());
}
