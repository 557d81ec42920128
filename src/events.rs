use std::cmp::Ordering;

use geo::Coordinate;

use crate::utils::Precision;

/// Wraps a [`Coordinate`] to support lexicographic ordering.
///
/// The ordering is by `x` and then by `y`, which is the order the
/// sweep line visits points in. Implements `Ord` and `Eq` even though
/// `Coordinate` doesn't; construction checks the components are
/// finite so the order is total.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SweepPoint(Coordinate<f64>);

impl SweepPoint {
    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn coord(&self) -> Coordinate<f64> {
        self.0
    }

    /// Both components rounded down at `precision`.
    pub fn rounded(&self, precision: Precision) -> Self {
        SweepPoint(Coordinate {
            x: precision.round(self.0.x),
            y: precision.round(self.0.y),
        })
    }

    /// Whether `self` comes strictly after `other` in sweep order once
    /// both are rounded at `precision`.
    ///
    /// For points on distinct x this is the "strictly right of the
    /// sweep line" test; on a common x the lower point comes first.
    pub fn is_after(&self, other: &SweepPoint, precision: Precision) -> bool {
        self.rounded(precision) > other.rounded(precision)
    }
}

/// Lexicographic ordering by `x` and then by `y`.
impl PartialOrd for SweepPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.0.x.partial_cmp(&other.0.x) {
            Some(Ordering::Equal) => self.0.y.partial_cmp(&other.0.y),
            o => o,
        }
    }
}

/// Derive `Ord` from `PartialOrd` and expect to not fail.
impl Ord for SweepPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap()
    }
}

impl Eq for SweepPoint {}

/// Create from `Coordinate` while checking the components are finite.
impl From<Coordinate<f64>> for SweepPoint {
    fn from(pt: Coordinate<f64>) -> Self {
        assert!(
            pt.x.is_finite(),
            "sweep point requires a finite x-coordinate"
        );
        assert!(
            pt.y.is_finite(),
            "sweep point requires a finite y-coordinate"
        );
        SweepPoint(pt)
    }
}

impl From<(f64, f64)> for SweepPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Coordinate { x, y }.into()
    }
}

/// What happens at an [`Event`].
///
/// Segments are referred to by their storage key. An intersection
/// remembers the pair in the order they were met by the sweep: `above`
/// is directly above `below` in the status until the crossing.
#[derive(Debug, Clone, Copy)]
pub enum EventKind {
    Start { segment: usize },
    End { segment: usize },
    Intersection { above: usize, below: usize },
}

impl EventKind {
    /// Processing order among events at the same point.
    ///
    /// Crossings are handled before a participant can leave. Segments
    /// arrive before others leave, so a segment ending where another
    /// starts is still in the status to meet it.
    fn rank(&self) -> u8 {
        match self {
            EventKind::Intersection { .. } => 0,
            EventKind::Start { .. } => 1,
            EventKind::End { .. } => 2,
        }
    }

    /// Identity beyond the point and rank. Intersections have none: two
    /// crossings at the same point are the same event whichever pair
    /// found them.
    fn identity(&self) -> Option<usize> {
        match self {
            EventKind::Start { segment } | EventKind::End { segment } => Some(*segment),
            EventKind::Intersection { .. } => None,
        }
    }

    pub fn is_intersection(&self) -> bool {
        matches!(self, EventKind::Intersection { .. })
    }
}

/// A sweep event.
#[derive(Debug, Clone, Copy)]
pub struct Event {
    pub point: SweepPoint,
    pub kind: EventKind,
}

impl Event {
    pub fn start(point: SweepPoint, segment: usize) -> Self {
        Event {
            point,
            kind: EventKind::Start { segment },
        }
    }

    pub fn end(point: SweepPoint, segment: usize) -> Self {
        Event {
            point,
            kind: EventKind::End { segment },
        }
    }

    pub fn intersection(point: SweepPoint, above: usize, below: usize) -> Self {
        Event {
            point,
            kind: EventKind::Intersection { above, below },
        }
    }
}

/// Equality consistent with `Ord`: ignores the pair of an
/// intersection.
impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Event {}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordering for use in an ordered set, smallest first.
impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        self.point
            .cmp(&other.point)
            .then_with(|| self.kind.rank().cmp(&other.kind.rank()))
            .then_with(|| self.kind.identity().cmp(&other.kind.identity()))
    }
}
