//! Curve/curve intersections by recursive bounding box subdivision.
//!
//! Both operands are first reduced into simple segments, then every pair of
//! segments is subdivided recursively: pairs with disjoint bounding boxes
//! are discarded, and pairs small enough to be treated as straight chords
//! are resolved with a line/line intersection.

use crate::bezier::BezierSegment;
use crate::reduce::SubCurve;
use crate::scalar::Scalar;
use crate::Point;

/// Tuning constants of the intersection search.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntersectionConfig<S> {
    /// Summed bounding box extent under which a segment is considered flat
    /// enough to be replaced by its chord.
    pub flatness: S,
    /// Maximum subdivision depth. When the bound is reached with still
    /// overlapping boxes, the range midpoints are accepted as an
    /// approximate hit.
    pub max_depth: u32,
    /// Hits whose parameters are both within this distance of an already
    /// recorded hit are dropped as duplicates.
    pub dedup_epsilon: S,
}

impl<S: Scalar> Default for IntersectionConfig<S> {
    fn default() -> Self {
        IntersectionConfig {
            flatness: S::HALF,
            max_depth: 20,
            dedup_epsilon: S::value(1e-3),
        }
    }
}

/// A candidate intersection reported by a subdivision leaf.
///
/// Hits from a solved chord crossing, from coincident chords or from the
/// depth bound are confirmed. A flat leaf whose chords do not cross only
/// produces a provisional hit: such near-misses corroborate a confirmed
/// hit found by a neighboring leaf, but on their own they are geometric
/// noise and get discarded.
struct RawHit<S> {
    t_a: S,
    t_b: S,
    confirmed: bool,
}

impl<S: Scalar> BezierSegment<S> {
    /// Computes the intersections between this curve and `other`, with the
    /// default [`IntersectionConfig`].
    ///
    /// The result is provided in the form of the `t` parameters of each
    /// intersection point along both curves, in the order the subdivision
    /// discovers them.
    pub fn intersections_t(&self, other: &Self) -> Vec<(S, S)> {
        self.intersections_t_with(other, &IntersectionConfig::default())
    }

    /// Computes the intersections between this curve and `other`.
    pub fn intersections_t_with(
        &self,
        other: &Self,
        config: &IntersectionConfig<S>,
    ) -> Vec<(S, S)> {
        let a_segments = self.reduce();
        let b_segments = other.reduce();
        let mut hits = Vec::new();

        for a in &a_segments {
            for b in &b_segments {
                recurse(a, b, 0, config, &mut hits);
            }
        }

        resolve(hits, config)
    }

    /// Computes the intersection points between this curve and `other`.
    pub fn intersections(&self, other: &Self) -> Vec<Point<S>> {
        self.intersections_t(other)
            .into_iter()
            .map(|(t, _)| self.sample(t))
            .collect()
    }

    /// Computes the parameters at which this curve intersects itself, with
    /// the default [`IntersectionConfig`].
    pub fn self_intersections_t(&self) -> Vec<(S, S)> {
        self.self_intersections_t_with(&IntersectionConfig::default())
    }

    /// Computes the parameters at which this curve intersects itself.
    ///
    /// The curve is reduced into simple segments and non-adjacent pairs
    /// are searched. Skipping adjacent segments avoids reporting the
    /// shared end point of every consecutive pair.
    pub fn self_intersections_t_with(&self, config: &IntersectionConfig<S>) -> Vec<(S, S)> {
        let reduced = self.reduce();
        let mut hits = Vec::new();

        for i in 0..reduced.len() {
            for j in (i + 2)..reduced.len() {
                recurse(&reduced[i], &reduced[j], 0, config, &mut hits);
            }
        }

        resolve(hits, config)
    }
}

fn recurse<S: Scalar>(
    a: &SubCurve<S>,
    b: &SubCurve<S>,
    depth: u32,
    config: &IntersectionConfig<S>,
    hits: &mut Vec<RawHit<S>>,
) {
    let a_box = a.curve.bounding_box();
    let b_box = b.curve.bounding_box();

    if !a_box.overlaps(&b_box) {
        return;
    }

    if a_box.size() < config.flatness && b_box.size() < config.flatness {
        let a_chord = a.curve.baseline();
        let b_chord = b.curve.baseline();

        match a_chord.intersection_t(&b_chord) {
            Some((t, u)) => hits.push(RawHit {
                t_a: a.to_global(t),
                t_b: b.to_global(u),
                confirmed: true,
            }),
            None => {
                // Coincident chords get a representative hit. Anything
                // else is a near-miss, recorded provisionally.
                let coincident = a_chord.to_vector().cross(b_chord.to_vector()) == S::ZERO
                    && a_chord.distance_to_point(b_chord.from) <= S::EPSILON;
                hits.push(RawHit {
                    t_a: a.to_global(S::HALF),
                    t_b: b.to_global(S::HALF),
                    confirmed: coincident,
                });
            }
        }
        return;
    }

    if depth >= config.max_depth {
        hits.push(RawHit {
            t_a: a.to_global(S::HALF),
            t_b: b.to_global(S::HALF),
            confirmed: true,
        });
        return;
    }

    let a_mid = a.to_global(S::HALF);
    let b_mid = b.to_global(S::HALF);
    let (a_left, a_right) = a.curve.split(S::HALF);
    let (b_left, b_right) = b.curve.split(S::HALF);

    let a_left = SubCurve {
        t0: a.t0,
        t1: a_mid,
        curve: a_left,
    };
    let a_right = SubCurve {
        t0: a_mid,
        t1: a.t1,
        curve: a_right,
    };
    let b_left = SubCurve {
        t0: b.t0,
        t1: b_mid,
        curve: b_left,
    };
    let b_right = SubCurve {
        t0: b_mid,
        t1: b.t1,
        curve: b_right,
    };

    recurse(&a_left, &b_left, depth + 1, config, hits);
    recurse(&a_left, &b_right, depth + 1, config, hits);
    recurse(&a_right, &b_left, depth + 1, config, hits);
    recurse(&a_right, &b_right, depth + 1, config, hits);
}

/// Keeps confirmed hits and the provisional hits corroborating one, then
/// drops hits that are within `dedup_epsilon` of an earlier hit on both
/// parameters. Adjacent subdivision leaves routinely report the same true
/// intersection, discovery order is preserved.
fn resolve<S: Scalar>(hits: Vec<RawHit<S>>, config: &IntersectionConfig<S>) -> Vec<(S, S)> {
    let near = config.dedup_epsilon * S::TEN;
    let confirmed: Vec<(S, S)> = hits
        .iter()
        .filter(|hit| hit.confirmed)
        .map(|hit| (hit.t_a, hit.t_b))
        .collect();

    let mut kept: Vec<(S, S)> = Vec::new();
    for hit in &hits {
        if !hit.confirmed
            && !confirmed
                .iter()
                .any(|c| S::abs(hit.t_a - c.0) <= near && S::abs(hit.t_b - c.1) <= near)
        {
            continue;
        }
        let duplicate = kept
            .iter()
            .any(|k| {
                S::abs(hit.t_a - k.0) <= config.dedup_epsilon
                    && S::abs(hit.t_b - k.1) <= config.dedup_epsilon
            });
        if !duplicate {
            kept.push((hit.t_a, hit.t_b));
        }
    }

    kept
}

#[cfg(test)]
use crate::{point, CubicBezierSegment, QuadraticBezierSegment};

#[cfg(test)]
fn difficult_pair() -> (BezierSegment<f64>, BezierSegment<f64>) {
    (
        BezierSegment::Cubic(CubicBezierSegment {
            from: point(20.294698715209961, 20.116849899291992),
            ctrl1: point(26.718513488769531, 28.516490936279297),
            ctrl2: point(33.345268249511719, 37.4105110168457),
            to: point(36.240531921386719, 37.736736297607422),
        }),
        BezierSegment::Cubic(CubicBezierSegment {
            from: point(43.967803955078125, 30.767040252685547),
            ctrl1: point(43.967803955078125, 31.771089553833008),
            ctrl2: point(35.013500213623047, 32.585041046142578),
            to: point(23.967803955078125, 32.585041046142578),
        }),
    )
}

#[test]
fn difficult_intersection() {
    let (c1, c2) = difficult_pair();

    let hits = c1.intersections_t(&c2);
    assert_eq!(hits.len(), 2);
    assert!((hits[0].0 - 0.52789239).abs() < 1e-6);
    assert!((hits[0].1 - 0.80771596).abs() < 1e-6);

    // both hits sample to nearly the same point on both curves
    for &(ta, tb) in &hits {
        let pa = c1.sample(ta);
        let pb = c2.sample(tb);
        assert!((pa - pb).length() < 0.2);
    }
}

#[test]
fn intersection_symmetry() {
    let (c1, c2) = difficult_pair();

    let forward = c1.intersections_t(&c2);
    let backward = c2.intersections_t(&c1);

    assert_eq!(forward.len(), backward.len());
    for (f, b) in forward.iter().zip(backward.iter()) {
        assert!((f.0 - b.1).abs() < 1e-9);
        assert!((f.1 - b.0).abs() < 1e-9);
    }
}

#[test]
fn crossing_quadratics() {
    let c1 = BezierSegment::Quadratic(QuadraticBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl: point(1.0, 2.0),
        to: point(2.0, 0.0),
    });
    let c2 = BezierSegment::Quadratic(QuadraticBezierSegment {
        from: point(0.0f64, 1.0),
        ctrl: point(1.0, -1.0),
        to: point(2.0, 1.0),
    });

    let hits = c1.intersections_t(&c2);
    assert_eq!(hits.len(), 2);
    for &(ta, tb) in &hits {
        let pa = c1.sample(ta);
        let pb = c2.sample(tb);
        assert!((pa - pb).length() < 0.05);
    }
}

#[test]
fn custom_config() {
    let (c1, c2) = difficult_pair();

    // a coarse clustering epsilon merges the adjacent-leaf duplicates
    let config = IntersectionConfig {
        dedup_epsilon: 0.1,
        ..IntersectionConfig::default()
    };
    let hits = c1.intersections_t_with(&c2, &config);
    assert_eq!(hits.len(), 1);
}

#[test]
fn no_intersection() {
    let c1 = BezierSegment::Quadratic(QuadraticBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl: point(1.0, 1.0),
        to: point(2.0, 0.0),
    });
    let c2 = BezierSegment::Quadratic(QuadraticBezierSegment {
        from: point(10.0f64, 10.0),
        ctrl: point(11.0, 11.0),
        to: point(12.0, 10.0),
    });

    assert!(c1.intersections_t(&c2).is_empty());
    assert!(c1.intersections(&c2).is_empty());
}

#[test]
fn close_disjoint_curves() {
    // diagonal quadratics a small offset apart: their bounding boxes keep
    // overlapping below the flatness bound, but they never touch
    let c1 = BezierSegment::Quadratic(QuadraticBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl: point(1.0, 1.0),
        to: point(2.0, 2.0),
    });
    let c2 = BezierSegment::Quadratic(QuadraticBezierSegment {
        from: point(0.0f64, 0.02),
        ctrl: point(1.0, 1.02),
        to: point(2.0, 2.02),
    });

    assert!(c1.intersections_t(&c2).is_empty());

    // same with bowed, non-parallel chords
    let c3 = BezierSegment::Quadratic(QuadraticBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl: point(1.0, 1.2),
        to: point(2.0, 2.0),
    });
    let c4 = BezierSegment::Quadratic(QuadraticBezierSegment {
        from: point(0.0f64, 0.1),
        ctrl: point(1.0, 1.3),
        to: point(2.0, 2.1),
    });

    assert!(c3.intersections_t(&c4).is_empty());
}

#[test]
fn coincident_curves() {
    let curve = BezierSegment::Quadratic(QuadraticBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl: point(1.0, 1.0),
        to: point(2.0, 2.0),
    });

    // representative hits rather than an infinite enumeration
    let hits = curve.intersections_t(&curve);
    assert!(!hits.is_empty());
}

#[test]
fn self_intersection() {
    let curve = BezierSegment::Cubic(CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(150.0, 50.0),
        ctrl2: point(-50.0, 50.0),
        to: point(100.0, 0.0),
    });

    let hits = curve.self_intersections_t();
    assert!(!hits.is_empty());
    for &(ta, tb) in &hits {
        // the crossing of this loop is near t = 0.1727 and t = 0.8273
        assert!((ta - 0.17267).abs() < 5e-3);
        assert!((tb - 0.82733).abs() < 5e-3);
        let pa = curve.sample(ta);
        let pb = curve.sample(tb);
        assert!((pa - pb).length() < 0.5);
    }

    // a simple arch does not intersect itself
    let arch = BezierSegment::Cubic(CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(0.0, 1.0),
        ctrl2: point(1.0, 1.0),
        to: point(1.0, 0.0),
    });
    assert!(arch.self_intersections_t().is_empty());
}
