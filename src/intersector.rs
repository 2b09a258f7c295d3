//! Adapter around the robust segment intersection predicate.
//!
//! The numerics are entirely delegated to
//! [`line_intersection`](geo::line_intersection::line_intersection),
//! which is backed by `geo`'s robust orientation kernel. This module
//! only reshapes its result into what the topology code reads back:
//! the number of intersection points, the points themselves, whether
//! the intersection is proper, and the position of a point along a
//! segment.
use geo::{
    line_intersection::{line_intersection, LineIntersection},
    Coordinate, GeoFloat, Line,
};

/// Result of intersecting two line segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection<T: GeoFloat> {
    /// The segments meet in a single point. The intersection is
    /// `proper` if the point is interior to both segments.
    Point {
        point: Coordinate<T>,
        is_proper: bool,
    },
    /// The segments are collinear and overlap along a sub-segment.
    Collinear {
        start: Coordinate<T>,
        end: Coordinate<T>,
    },
}

/// Intersect the segments `p1-p2` and `q1-q2`.
///
/// Returns `None` if they do not intersect.
pub fn compute<T: GeoFloat>(
    p1: Coordinate<T>,
    p2: Coordinate<T>,
    q1: Coordinate<T>,
    q2: Coordinate<T>,
) -> Option<SegmentIntersection<T>> {
    line_intersection(Line::new(p1, p2), Line::new(q1, q2)).map(|isect| match isect {
        LineIntersection::SinglePoint {
            intersection,
            is_proper,
        } => SegmentIntersection::Point {
            point: intersection,
            is_proper,
        },
        LineIntersection::Collinear { intersection } => SegmentIntersection::Collinear {
            start: intersection.start,
            end: intersection.end,
        },
    })
}

impl<T: GeoFloat> SegmentIntersection<T> {
    /// Number of intersection points: 1 for a point, 2 for an overlap.
    #[inline]
    pub fn count(&self) -> usize {
        match self {
            SegmentIntersection::Point { .. } => 1,
            SegmentIntersection::Collinear { .. } => 2,
        }
    }

    /// The `idx`-th intersection point.
    ///
    /// Panics if `idx >= self.count()`.
    pub fn point(&self, idx: usize) -> Coordinate<T> {
        match (self, idx) {
            (SegmentIntersection::Point { point, .. }, 0) => *point,
            (SegmentIntersection::Collinear { start, .. }, 0) => *start,
            (SegmentIntersection::Collinear { end, .. }, 1) => *end,
            _ => panic!(
                "intersection point index {idx} out of range (count = {count})",
                count = self.count()
            ),
        }
    }

    pub fn points(&self) -> impl Iterator<Item = Coordinate<T>> + '_ {
        (0..self.count()).map(move |idx| self.point(idx))
    }

    /// Whether the intersection is a single point interior to both
    /// segments.
    #[inline]
    pub fn is_proper(&self) -> bool {
        matches!(self, SegmentIntersection::Point { is_proper: true, .. })
    }

    /// Distance of the `idx`-th intersection point along the segment
    /// `p0-p1`. See [`edge_distance`].
    pub fn edge_distance(&self, p0: Coordinate<T>, p1: Coordinate<T>, idx: usize) -> T {
        edge_distance(self.point(idx), p0, p1)
    }
}

/// Distance of `p` along the segment `p0-p1`, measured along the
/// dominant axis of the segment.
///
/// This is not a euclidean distance, but is monotone along the segment
/// and exact at the end points, which is all that is needed to order
/// several points lying on one segment. It is `0` only at `p0`.
pub fn edge_distance<T: GeoFloat>(p: Coordinate<T>, p0: Coordinate<T>, p1: Coordinate<T>) -> T {
    let dx = (p1.x - p0.x).abs();
    let dy = (p1.y - p0.y).abs();

    if p == p0 {
        T::zero()
    } else if p == p1 {
        dx.max(dy)
    } else {
        let pdx = (p.x - p0.x).abs();
        let pdy = (p.y - p0.y).abs();
        let dist = if dx > dy { pdx } else { pdy };
        // Guard against rounding making a non-start point look like
        // the start point.
        if dist == T::zero() {
            pdx.max(pdy)
        } else {
            dist
        }
    }
}
