use crate::scalar::Scalar;

/// The extent of a curve along one axis: its `min`/`max` values together
/// with the precomputed midpoint and size of the interval.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct AxisBounds<S> {
    pub min: S,
    pub mid: S,
    pub max: S,
    pub size: S,
}

impl<S: Scalar> AxisBounds<S> {
    #[inline]
    pub fn new(min: S, max: S) -> Self {
        AxisBounds {
            min,
            mid: (min + max) * S::HALF,
            max,
            size: max - min,
        }
    }

    /// Whether the two intervals overlap.
    ///
    /// The test compares the distance between midpoints with the summed
    /// half-extents, so touching intervals do not count as overlapping.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        S::abs(self.mid - other.mid) < (self.size + other.size) * S::HALF
    }
}

/// Axis-aligned bounding box of a curve, one [`AxisBounds`] per axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct BoundingBox<S> {
    pub x: AxisBounds<S>,
    pub y: AxisBounds<S>,
}

impl<S: Scalar> BoundingBox<S> {
    #[inline]
    pub fn new(x_range: (S, S), y_range: (S, S)) -> Self {
        BoundingBox {
            x: AxisBounds::new(x_range.0, x_range.1),
            y: AxisBounds::new(y_range.0, y_range.1),
        }
    }

    /// Whether the two boxes overlap on both axes.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x.overlaps(&other.x) && self.y.overlaps(&other.y)
    }

    /// Summed extents of both axes, a cheap measure of how big the box is.
    #[inline]
    pub fn size(&self) -> S {
        self.x.size + self.y.size
    }
}

#[test]
fn overlap_is_strict() {
    let a = BoundingBox::new((0.0f64, 1.0), (0.0, 1.0));
    let b = BoundingBox::new((1.0f64, 2.0), (0.0, 1.0));
    let c = BoundingBox::new((0.5f64, 1.5), (0.5, 1.5));

    // touching boxes do not overlap
    assert!(!a.overlaps(&b));
    assert!(a.overlaps(&c));
    assert!(c.overlaps(&b));
}

#[test]
fn degenerate_boxes() {
    // a point has an empty box which overlaps nothing, not even itself
    let p = BoundingBox::new((1.0f64, 1.0), (2.0, 2.0));
    assert!(!p.overlaps(&p));
}
