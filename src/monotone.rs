//! Monotone chain decomposition of edges.
//!
//! A monotone chain is a maximal run of segments of an edge that all
//! point into the same [`Quadrant`]. Such a run is monotone in both
//! `x` and `y`, so the envelope of any sub-run is the envelope of its
//! two end points, and no two segments of one chain can cross. This
//! lets the chain pair intersection test prune with binary search.
use geo::{Coordinate, GeoFloat};

mod chains;
pub use chains::chain_start_indices;

mod edge;
pub use edge::{ChainScratch, IntersectionSink, MonotoneChainEdge};

/// Quadrant of a direction vector, numbered counter-clockwise from
/// the positive x-axis.
///
/// Directions on an axis are assigned so that the numbering is
/// consistent with increasing angle: the positive x-axis and positive
/// y-axis are in `NorthEast`, the negative x-axis in `NorthWest`, and
/// the negative y-axis in `SouthEast`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quadrant {
    NorthEast,
    NorthWest,
    SouthWest,
    SouthEast,
}

impl Quadrant {
    /// Quadrant of the direction `(dx, dy)`. The zero vector is
    /// reported as `NorthEast`; callers must skip zero-length
    /// directions where that matters.
    pub fn of_direction<T: GeoFloat>(dx: T, dy: T) -> Self {
        if dx >= T::zero() {
            if dy >= T::zero() {
                Quadrant::NorthEast
            } else {
                Quadrant::SouthEast
            }
        } else if dy >= T::zero() {
            Quadrant::NorthWest
        } else {
            Quadrant::SouthWest
        }
    }

    /// Quadrant of the segment direction `p0 -> p1`.
    #[inline]
    pub fn of_segment<T: GeoFloat>(p0: Coordinate<T>, p1: Coordinate<T>) -> Self {
        Quadrant::of_direction(p1.x - p0.x, p1.y - p0.y)
    }
}
