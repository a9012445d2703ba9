//! Various math tools that are mostly useful for the rest of this crate.

use crate::scalar::Scalar;
use crate::Point;
use arrayvec::ArrayVec;
use num_traits::Float;

#[inline]
pub fn min_max<S: Scalar>(a: S, b: S) -> (S, S) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Signed angle at `origin` between the directions of `a` and `b`.
///
/// Positive when going from `a` to `b` is a counter-clockwise rotation
/// (assuming y points upwards), in the `]-PI, PI]` range.
#[inline]
pub fn signed_angle<S: Scalar>(origin: Point<S>, a: Point<S>, b: Point<S>) -> S {
    let v1 = a - origin;
    let v2 = b - origin;
    S::atan2(v1.cross(v2), v1.dot(v2))
}

/// Roots of a quadratic polynomial expressed by its Bernstein control
/// values `p0`, `p1`, `p2`.
///
/// When the polynomial degenerates to a linear function the single root
/// is returned.
pub fn quadratic_bernstein_roots<S: Scalar>(p0: S, p1: S, p2: S) -> ArrayVec<S, 2> {
    let mut result = ArrayVec::new();

    let d = p0 - S::TWO * p1 + p2;
    if d != S::ZERO {
        let delta = p1 * p1 - p0 * p2;
        if delta < S::ZERO {
            return result;
        }
        let sqrt_delta = S::sqrt(delta);
        let m = p0 - p1;
        result.push((m + sqrt_delta) / d);
        result.push((m - sqrt_delta) / d);
    } else if p1 != p2 {
        result.push((S::TWO * p1 - p2) / (S::TWO * (p1 - p2)));
    }

    result
}

/// Root of a linear function expressed by its Bernstein control values
/// `p0`, `p1`, or `None` if the function is constant.
#[inline]
pub fn linear_bernstein_root<S: Scalar>(p0: S, p1: S) -> Option<S> {
    if p0 == p1 {
        return None;
    }

    Some(p0 / (p0 - p1))
}

/// Real roots of the cubic polynomial `a*t³ + b*t² + c*t + d`.
///
/// Lower degree polynomials (small leading coefficients) are solved with
/// the corresponding lower degree formula.
pub fn cubic_polynomial_roots<S: Scalar>(a: S, b: S, c: S, d: S) -> ArrayVec<S, 3> {
    let mut result = ArrayVec::new();

    if S::abs(a) < S::value(1e-6) {
        if S::abs(b) < S::value(1e-6) {
            // linear equation
            if c != S::ZERO {
                result.push(-d / c);
            }
            return result;
        }
        // quadratic equation
        let delta = c * c - S::FOUR * b * d;
        if delta > S::ZERO {
            let sqrt_delta = S::sqrt(delta);
            result.push((-c - sqrt_delta) / (S::TWO * b));
            result.push((-c + sqrt_delta) / (S::TWO * b));
        } else if S::abs(delta) < S::value(1e-6) {
            result.push(-c / (S::TWO * b));
        }
        return result;
    }

    let frac_1_3 = S::value(1.0 / 3.0);

    let bn = b / a;
    let cn = c / a;
    let dn = d / a;

    let delta0 = (S::THREE * cn - bn * bn) / S::NINE;
    let delta1 = (S::NINE * bn * cn - S::value(27.0) * dn - S::TWO * bn * bn * bn) / S::value(54.0);
    let delta_01 = delta0 * delta0 * delta0 + delta1 * delta1;

    if delta_01 >= S::ZERO {
        let delta_p_sqrt = delta1 + S::sqrt(delta_01);
        let delta_m_sqrt = delta1 - S::sqrt(delta_01);

        let s = S::signum(delta_p_sqrt) * S::powf(S::abs(delta_p_sqrt), frac_1_3);
        let t = S::signum(delta_m_sqrt) * S::powf(S::abs(delta_m_sqrt), frac_1_3);

        result.push(-bn * frac_1_3 + (s + t));

        if S::abs(s - t) < S::value(1e-5) {
            result.push(-bn * frac_1_3 - (s + t) / S::TWO);
        }
    } else {
        let theta = S::acos(delta1 / S::sqrt(-delta0 * delta0 * delta0));
        let two_sqrt_delta0 = S::TWO * S::sqrt(-delta0);
        result.push(two_sqrt_delta0 * Float::cos(theta * frac_1_3) - bn * frac_1_3);
        result.push(two_sqrt_delta0 * Float::cos((theta + S::TWO * S::PI()) * frac_1_3) - bn * frac_1_3);
        result.push(two_sqrt_delta0 * Float::cos((theta + S::FOUR * S::PI()) * frac_1_3) - bn * frac_1_3);
    }

    result
}

/// Ratio of the chord-projected construction point used when fitting a
/// curve of order `n` through three points at parameter `t`.
pub fn projection_ratio<S: Scalar>(t: S, n: i32) -> S {
    let top = S::powi(S::ONE - t, n);
    top / (S::powi(t, n) + top)
}

/// Distance ratio between the on-curve point and the apex of the
/// construction triangle used when fitting a curve of order `n` through
/// three points at parameter `t`.
pub fn abc_ratio<S: Scalar>(t: S, n: i32) -> S {
    let sum = S::powi(t, n) + S::powi(S::ONE - t, n);
    S::abs((sum - S::ONE) / sum)
}

#[test]
fn cubic_polynomial() {
    fn assert_approx_eq(a: ArrayVec<f32, 3>, b: &[f32], epsilon: f32) {
        for i in 0..a.len() {
            assert!((a[i] - b[i]).abs() <= epsilon, "{:?} != {:?}", a, b);
        }
        assert_eq!(a.len(), b.len());
    }

    assert_approx_eq(cubic_polynomial_roots(2.0, -4.0, 2.0, 0.0), &[0.0, 1.0], 0.0000001);
    assert_approx_eq(cubic_polynomial_roots(-1.0, 1.0, -1.0, 1.0), &[1.0], 0.000001);
    assert_approx_eq(cubic_polynomial_roots(-2.0, 2.0, -1.0, 10.0), &[2.0], 0.00005);
    // degenerate quadratic and linear cases
    assert_approx_eq(cubic_polynomial_roots(0.0, 1.0, -3.0, 2.0), &[1.0, 2.0], 0.000001);
    assert_approx_eq(cubic_polynomial_roots(0.0, 0.0, 2.0, -1.0), &[0.5], 0.000001);
}

#[test]
fn bernstein_roots() {
    let r = quadratic_bernstein_roots(3.0f64, 0.0, -3.0);
    assert_eq!(r.len(), 1);
    assert!((r[0] - 0.5).abs() < 1e-12);

    let r = linear_bernstein_root(1.0f64, -1.0);
    assert_eq!(r, Some(0.5));
    assert_eq!(linear_bernstein_root(1.0f64, 1.0), None);
}
