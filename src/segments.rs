use geo::{Coordinate, Line};
use slab::Slab;

use crate::{
    error::{Result, SweepError},
    events::{Event, SweepPoint},
    utils::Precision,
};

/// An input line segment.
///
/// Immutable once created: the end points are ordered (see
/// [`SweepPoint`]), and the slope and intercept of the supporting line
/// are computed up front. A vertical segment has an infinite slope and
/// no intercept. The `key` is the segment's identity in the storage
/// slab; two segments with equal geometry still have distinct keys.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    key: usize,
    left: SweepPoint,
    right: SweepPoint,
    slope: f64,
    intercept: Option<f64>,
}

impl Segment {
    /// Create and store a `Segment` for `line` in `storage`, returning
    /// its key.
    pub fn create_in_slab(storage: &mut Slab<Self>, line: Line<f64>) -> Result<usize> {
        let entry = storage.vacant_entry();
        let key = entry.key();
        let segment = Segment::new(key, line.start, line.end)?;
        entry.insert(segment);
        Ok(key)
    }

    /// Build a segment between two coordinates in either order.
    pub fn new(key: usize, start: Coordinate<f64>, end: Coordinate<f64>) -> Result<Self> {
        let finite = |c: Coordinate<f64>| c.x.is_finite() && c.y.is_finite();
        if !finite(start) || !finite(end) {
            return Err(SweepError::NonFinite { segment: key });
        }
        let start = SweepPoint::from(start);
        let end = SweepPoint::from(end);
        let (left, right) = if start < end {
            (start, end)
        } else if start > end {
            (end, start)
        } else {
            return Err(SweepError::ZeroLength { segment: key });
        };

        let (slope, intercept) = if left.x() == right.x() {
            (f64::INFINITY, None)
        } else {
            let slope = (right.y() - left.y()) / (right.x() - left.x());
            (slope, Some(left.y() - slope * left.x()))
        };
        Ok(Segment {
            key,
            left,
            right,
            slope,
            intercept,
        })
    }

    #[inline]
    pub fn key(&self) -> usize {
        self.key
    }

    #[inline]
    pub fn left(&self) -> SweepPoint {
        self.left
    }

    #[inline]
    pub fn right(&self) -> SweepPoint {
        self.right
    }

    #[inline]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// The y-intercept, `None` for a vertical segment.
    #[inline]
    pub fn intercept(&self) -> Option<f64> {
        self.intercept
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.intercept.is_none()
    }

    /// Get events for both the end-points of this segment.
    pub fn events(&self) -> [Event; 2] {
        [
            Event::start(self.left, self.key),
            Event::end(self.right, self.key),
        ]
    }

    pub fn line(&self) -> Line<f64> {
        Line::new(self.left.coord(), self.right.coord())
    }

    /// Whether `point` lies on the segment, up to one resolution of
    /// `precision` in each direction.
    pub fn contains(&self, point: SweepPoint, precision: Precision) -> bool {
        let r = precision.resolution();
        let spans = |v: f64, lo: f64, hi: f64| lo - r < v && v < hi + r;
        match self.intercept {
            None => {
                precision.close(point.x(), self.left.x())
                    && spans(point.y(), self.left.y(), self.right.y())
            }
            Some(c) => {
                spans(point.x(), self.left.x(), self.right.x())
                    && precision.close(point.y() - point.x() * self.slope - c, 0.)
            }
        }
    }
}

/// Equality based on key.
impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Segment {}

/// Intersect two segments.
///
/// Intersects the supporting lines and keeps the point if it lies in
/// the x-range of both segments (and the y-range of a vertical one).
/// Vertical pairs and pairs of equal slope never intersect, which
/// includes collinear overlaps.
///
/// A computed point within one resolution of an end point of either
/// segment is replaced by that end point, so segments meeting at a
/// shared end report it exactly.
///
/// The operands are evaluated in key order, so the returned point is
/// bit-identical for `(a, b)` and `(b, a)`.
pub fn intersect(a: &Segment, b: &Segment, precision: Precision) -> Option<SweepPoint> {
    let (a, b) = if a.key <= b.key { (a, b) } else { (b, a) };
    if a.is_vertical() && b.is_vertical() {
        return None;
    }
    if precision.equal(a.slope, b.slope) {
        return None;
    }

    let (x, y) = match (a.intercept, b.intercept) {
        (None, Some(c)) => {
            let x = a.left.x();
            (x, b.slope * x + c)
        }
        (Some(c), None) => {
            let x = b.left.x();
            (x, a.slope * x + c)
        }
        (Some(ca), Some(cb)) => {
            let x = (cb - ca) / (a.slope - b.slope);
            (x, a.slope * x + ca)
        }
        (None, None) => return None,
    };
    // Near-parallel lines far from the origin can overflow.
    if !x.is_finite() || !y.is_finite() {
        return None;
    }

    let point = [a.left, a.right, b.left, b.right]
        .iter()
        .find(|e| precision.close(e.x(), x) && precision.close(e.y(), y))
        .map(|e| e.coord())
        .unwrap_or(Coordinate { x, y });

    let in_range = |s: &Segment| {
        precision.within(point.x, s.left.x(), s.right.x())
            && (!s.is_vertical() || precision.within(point.y, s.left.y(), s.right.y()))
    };
    if in_range(a) && in_range(b) {
        Some(SweepPoint::from(point))
    } else {
        None
    }
}

/// Ordering of the sweep status: whether `a`, entering the status at
/// `key`, belongs above `b`.
///
/// Compares `key` against `b`'s line at `key.x`. A vertical `b` spans
/// its whole y-range there, so `key.y` is first clamped into it. A
/// value within one resolution of zero is a tie, and on a tie the
/// steeper segment is above, which is the order the two take just
/// right of the shared point.
pub fn above(key: SweepPoint, a: &Segment, b: &Segment, precision: Precision) -> bool {
    let value = match b.intercept {
        Some(c) => key.y() - key.x() * b.slope - c,
        None => key.y() - key.y().max(b.left.y()).min(b.right.y()),
    };
    if precision.close(value, 0.) {
        precision.round(a.slope) > precision.round(b.slope)
    } else {
        value > 0.
    }
}
